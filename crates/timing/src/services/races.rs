use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::clock::parse_time_of_day;
use crate::error::{Result, TimingError};
use crate::models::{Gender, StartWave};
use crate::state::AppState;

pub fn start_race(state: &mut AppState, race_id: Uuid, now: NaiveDateTime) -> Result<()> {
    let race = state.race_mut(race_id)?;
    race.start(now);
    tracing::info!(race = %race.name, "race started");
    Ok(())
}

pub fn stop_race(state: &mut AppState, race_id: Uuid) -> Result<()> {
    let race = state.race_mut(race_id)?;
    race.stop();
    tracing::info!(race = %race.name, results = race.results.len(), "race stopped");
    Ok(())
}

pub fn select_race(state: &mut AppState, race_id: Uuid) -> Result<()> {
    state.race(race_id)?;
    state.selected_race_id = Some(race_id);
    Ok(())
}

pub fn reset_all(state: &mut AppState) {
    *state = AppState::default();
    tracing::info!("state reset");
}

/// Appends a start wave to a running race. The wave starts at the given
/// time of day (anchored to the race's start date) or, without one, at
/// the current instant. Gender codes are normalized up front so a typo
/// is rejected before the wave exists.
pub fn create_wave(
    state: &mut AppState,
    race_id: Uuid,
    now: NaiveDateTime,
    time_of_day: Option<&str>,
    categories: Vec<String>,
    genders: Vec<String>,
) -> Result<StartWave> {
    let race = state.race_mut(race_id)?;
    let Some(general_start) = race.started_at else {
        return Err(TimingError::RaceNotStarted(race.name.clone()));
    };

    let mut normalized = Vec::with_capacity(genders.len());
    for code in &genders {
        normalized.push(Gender::normalize(code)?);
    }

    let started_at = match time_of_day {
        Some(input) => parse_time_of_day(general_start, input)?,
        None => now,
    };

    let wave = StartWave {
        wave_id: Uuid::new_v4(),
        started_at,
        categories,
        genders: normalized,
    };
    race.waves.push(wave.clone());
    tracing::info!(race = %race.name, wave = %wave.wave_id, "wave created");
    Ok(wave)
}
