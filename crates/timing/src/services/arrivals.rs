use chrono::NaiveDateTime;
use uuid::Uuid;

use crate::clock::{elapsed_seconds, parse_time_of_day};
use crate::error::{Result, TimingError};
use crate::models::FinishRecord;
use crate::services::start_times::resolve_start;
use crate::state::AppState;

/// Records an arrival for a bib at `now`. The race is derived from the
/// competitor's roster entry, the applicable start from the wave
/// resolver. Every refusal happens before any mutation.
pub fn record_arrival(state: &mut AppState, bib: &str, now: NaiveDateTime) -> Result<FinishRecord> {
    let bib = bib.trim();
    let participant = state
        .participant_by_bib(bib)
        .ok_or_else(|| TimingError::UnknownBib(bib.to_string()))?
        .clone();

    let position = *state
        .race_positions_by_name()
        .get(participant.competition.as_str())
        .ok_or(TimingError::NotFound)?;

    let race = &state.races[position];
    if race.finished {
        return Err(TimingError::RaceFinished(race.name.clone()));
    }
    if race.has_arrival_for(bib) {
        return Err(TimingError::DuplicateArrival(bib.to_string()));
    }
    let start = resolve_start(race, &participant)
        .ok_or_else(|| TimingError::RaceNotStarted(race.name.clone()))?;

    let elapsed = elapsed_seconds(start, now);
    if elapsed < 0 {
        return Err(TimingError::NegativeElapsed);
    }

    let record = FinishRecord {
        record_id: Uuid::new_v4(),
        bib_number: bib.to_string(),
        elapsed_seconds: elapsed,
        arrival_at: now,
    };
    state.races[position].results.push(record.clone());
    Ok(record)
}

/// Reassigns a finish record to a (possibly different) bib and/or a new
/// arrival time of day on the record's current date. Same refusals as
/// recording, plus the recomputed elapsed time must stay non-negative.
pub fn edit_arrival(
    state: &mut AppState,
    race_id: Uuid,
    record_id: Uuid,
    new_bib: &str,
    new_time: Option<&str>,
) -> Result<FinishRecord> {
    let race_position = state
        .races
        .iter()
        .position(|r| r.race_id == race_id)
        .ok_or(TimingError::NotFound)?;
    let race = &state.races[race_position];

    let record_position = race
        .results
        .iter()
        .position(|r| r.record_id == record_id)
        .ok_or(TimingError::NotFound)?;
    let record = &race.results[record_position];

    let bib = new_bib.trim();
    let participant = state
        .participant_by_bib(bib)
        .ok_or_else(|| TimingError::UnknownBib(bib.to_string()))?;
    if participant.competition != race.name {
        return Err(TimingError::BibNotInRace {
            bib: bib.to_string(),
            expected: participant.competition.clone(),
            actual: race.name.clone(),
        });
    }
    if race
        .results
        .iter()
        .any(|r| r.bib_number == bib && r.record_id != record_id)
    {
        return Err(TimingError::DuplicateArrival(bib.to_string()));
    }

    let arrival_at = match new_time {
        Some(input) => parse_time_of_day(record.arrival_at, input)?,
        None => record.arrival_at,
    };

    let start = resolve_start(race, participant)
        .ok_or_else(|| TimingError::RaceNotStarted(race.name.clone()))?;
    let elapsed = elapsed_seconds(start, arrival_at);
    if elapsed < 0 {
        return Err(TimingError::NegativeElapsed);
    }

    let record = &mut state.races[race_position].results[record_position];
    record.bib_number = bib.to_string();
    record.arrival_at = arrival_at;
    record.elapsed_seconds = elapsed;
    Ok(record.clone())
}

pub fn delete_arrival(state: &mut AppState, race_id: Uuid, record_id: Uuid) -> Result<()> {
    let race = state.race_mut(race_id)?;
    let position = race
        .results
        .iter()
        .position(|r| r.record_id == record_id)
        .ok_or(TimingError::NotFound)?;
    race.results.remove(position);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Gender, Participant, Race, StartWave};
    use chrono::NaiveDate;

    fn instant(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 4)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn participant(bib: &str, category: &str, gender: &str) -> Participant {
        Participant {
            bib_number: bib.into(),
            competition: "6-9".into(),
            team_name: "Team".into(),
            team_full_name: "Team Full".into(),
            team_gender: gender.into(),
            team_category: category.into(),
            name_participant1: String::new(),
            gender_participant1: String::new(),
            birth_date_participant1: String::new(),
            club_participant1: String::new(),
            license_participant1: String::new(),
            name_participant2: String::new(),
            gender_participant2: String::new(),
            birth_date_participant2: String::new(),
            club_participant2: String::new(),
            license_participant2: String::new(),
        }
    }

    fn started_state() -> AppState {
        let mut race = Race::new("6-9");
        race.start(instant(10, 0, 0));
        AppState {
            races: vec![race],
            participants: vec![
                participant("1", "Senior", "F"),
                participant("2", "Minime", "H"),
            ],
            selected_race_id: None,
        }
    }

    #[test]
    fn test_record_arrival_uses_general_start() {
        let mut state = started_state();
        let record = record_arrival(&mut state, "1", instant(10, 5, 0)).unwrap();
        assert_eq!(record.elapsed_seconds, 300);
        assert_eq!(state.races[0].results.len(), 1);
    }

    #[test]
    fn test_record_arrival_uses_wave_start() {
        let mut state = started_state();
        state.races[0].waves.push(StartWave {
            wave_id: Uuid::new_v4(),
            started_at: instant(10, 5, 0),
            categories: vec!["Minime".into()],
            genders: vec![],
        });

        let record = record_arrival(&mut state, "2", instant(10, 6, 30)).unwrap();
        assert_eq!(record.elapsed_seconds, 90);
    }

    #[test]
    fn test_record_arrival_unknown_bib() {
        let mut state = started_state();
        let err = record_arrival(&mut state, "99", instant(10, 5, 0)).unwrap_err();
        assert!(matches!(err, TimingError::UnknownBib(_)));
        assert!(state.races[0].results.is_empty());
    }

    #[test]
    fn test_record_arrival_duplicate_keeps_first_record() {
        let mut state = started_state();
        let first = record_arrival(&mut state, "1", instant(10, 5, 0)).unwrap();

        let err = record_arrival(&mut state, "1", instant(10, 6, 0)).unwrap_err();
        assert!(matches!(err, TimingError::DuplicateArrival(_)));
        assert_eq!(state.races[0].results.len(), 1);
        assert_eq!(state.races[0].results[0].record_id, first.record_id);
        assert_eq!(state.races[0].results[0].elapsed_seconds, 300);
    }

    #[test]
    fn test_record_arrival_refused_when_finished() {
        let mut state = started_state();
        state.races[0].stop();
        let err = record_arrival(&mut state, "1", instant(10, 5, 0)).unwrap_err();
        assert!(matches!(err, TimingError::RaceFinished(_)));
    }

    #[test]
    fn test_record_arrival_refused_without_any_start() {
        let mut state = started_state();
        state.races[0].started_at = None;
        let err = record_arrival(&mut state, "1", instant(10, 5, 0)).unwrap_err();
        assert!(matches!(err, TimingError::RaceNotStarted(_)));
    }

    #[test]
    fn test_record_arrival_refused_before_wave_start() {
        let mut state = started_state();
        state.races[0].waves.push(StartWave {
            wave_id: Uuid::new_v4(),
            started_at: instant(10, 30, 0),
            categories: vec![],
            genders: vec![Gender::Male],
        });

        // Bib 2 belongs to the 10:30 wave; arriving at 10:10 would be
        // a negative elapsed time.
        let err = record_arrival(&mut state, "2", instant(10, 10, 0)).unwrap_err();
        assert!(matches!(err, TimingError::NegativeElapsed));
        assert!(state.races[0].results.is_empty());
    }

    #[test]
    fn test_edit_arrival_reassigns_bib() {
        let mut state = started_state();
        let record = record_arrival(&mut state, "1", instant(10, 5, 0)).unwrap();
        let race_id = state.races[0].race_id;

        let updated = edit_arrival(&mut state, race_id, record.record_id, "2", None).unwrap();
        assert_eq!(updated.bib_number, "2");
        assert_eq!(updated.elapsed_seconds, 300);
    }

    #[test]
    fn test_edit_arrival_new_time_recomputes_elapsed() {
        let mut state = started_state();
        let record = record_arrival(&mut state, "1", instant(10, 5, 0)).unwrap();
        let race_id = state.races[0].race_id;

        let updated =
            edit_arrival(&mut state, race_id, record.record_id, "1", Some("10:02:30")).unwrap();
        assert_eq!(updated.elapsed_seconds, 150);
        assert_eq!(updated.arrival_at, instant(10, 2, 30));
    }

    #[test]
    fn test_edit_arrival_rejects_negative_elapsed() {
        let mut state = started_state();
        let record = record_arrival(&mut state, "1", instant(10, 5, 0)).unwrap();
        let race_id = state.races[0].race_id;

        let err = edit_arrival(&mut state, race_id, record.record_id, "1", Some("09:59:00"))
            .unwrap_err();
        assert!(matches!(err, TimingError::NegativeElapsed));
        // Refusal is atomic: the record still holds its old values.
        assert_eq!(state.races[0].results[0].elapsed_seconds, 300);
    }

    #[test]
    fn test_edit_arrival_rejects_duplicate_bib() {
        let mut state = started_state();
        record_arrival(&mut state, "1", instant(10, 5, 0)).unwrap();
        let record = record_arrival(&mut state, "2", instant(10, 6, 0)).unwrap();
        let race_id = state.races[0].race_id;

        let err = edit_arrival(&mut state, race_id, record.record_id, "1", None).unwrap_err();
        assert!(matches!(err, TimingError::DuplicateArrival(_)));
    }

    #[test]
    fn test_edit_arrival_rejects_bib_of_other_race() {
        let mut state = started_state();
        let record = record_arrival(&mut state, "1", instant(10, 5, 0)).unwrap();
        let race_id = state.races[0].race_id;

        let mut other = participant("9", "Senior", "F");
        other.competition = "10-13".into();
        state.participants.push(other);

        let err = edit_arrival(&mut state, race_id, record.record_id, "9", None).unwrap_err();
        assert!(matches!(err, TimingError::BibNotInRace { .. }));
    }

    #[test]
    fn test_delete_arrival() {
        let mut state = started_state();
        let record = record_arrival(&mut state, "1", instant(10, 5, 0)).unwrap();
        let race_id = state.races[0].race_id;

        delete_arrival(&mut state, race_id, record.record_id).unwrap();
        assert!(state.races[0].results.is_empty());

        assert!(matches!(
            delete_arrival(&mut state, race_id, record.record_id),
            Err(TimingError::NotFound)
        ));
    }
}
