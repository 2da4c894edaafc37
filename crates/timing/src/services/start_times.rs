use chrono::NaiveDateTime;

use crate::models::{Gender, Participant, Race, StartWave};

/// Resolves the start instant that applies to one competitor.
///
/// Waves are scanned in ascending order of their own start instant
/// (creation order is irrelevant); the first wave whose category set or
/// gender set matches wins. With no matching wave the race's general
/// start applies, and with no general start either the competitor has no
/// start at all - recording must then be refused, never defaulted to
/// the current time.
pub fn resolve_start(race: &Race, participant: &Participant) -> Option<NaiveDateTime> {
    let category = participant.team_category.trim();
    // An unparseable roster gender simply never matches a gender set;
    // the category sets still apply.
    let gender = Gender::normalize(&participant.team_gender).ok();

    let mut waves: Vec<&StartWave> = race.waves.iter().collect();
    waves.sort_by_key(|w| w.started_at);

    for wave in waves {
        if wave.matches(category, gender) {
            return Some(wave.started_at);
        }
    }

    race.started_at
}
