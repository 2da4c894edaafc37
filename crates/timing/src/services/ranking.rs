use std::collections::HashMap;

use crate::clock::format_duration;
use crate::dto::ranking::PodiumEntry;
use crate::error::Result;
use crate::models::{FinishRecord, Gender, Participant, Race};

/// The canonical general ranking: finish records in ascending elapsed
/// order. The sort is stable, so equal times keep their arrival order.
pub fn sorted_results(race: &Race) -> Vec<FinishRecord> {
    let mut results = race.results.clone();
    results.sort_by_key(|r| r.elapsed_seconds);
    results
}

/// 1-based general position per bib, precomputed once so podium entries
/// and exports never re-scan the ranking.
pub fn general_positions(race: &Race) -> HashMap<String, usize> {
    sorted_results(race)
        .into_iter()
        .enumerate()
        .map(|(index, record)| (record.bib_number, index + 1))
        .collect()
}

/// Top 3 of one category x gender sub-group. Category matches exactly
/// (case-sensitive); the gender filter and each candidate's roster
/// gender are normalized, and a code that fails to normalize is an
/// error rather than a silent exclusion - it means the roster data is
/// corrupt.
pub fn compute_podium(
    race: &Race,
    participants: &[Participant],
    category: &str,
    gender_code: &str,
) -> Result<Vec<PodiumEntry>> {
    let results = sorted_results(race);
    let positions = general_positions(race);

    let in_race: Vec<&Participant> = participants
        .iter()
        .filter(|p| p.competition == race.name)
        .collect();

    let target = Gender::normalize(gender_code)?;

    let mut podium = Vec::new();
    for record in &results {
        if podium.len() == 3 {
            break;
        }
        let Some(participant) = in_race.iter().find(|p| p.bib_number == record.bib_number) else {
            continue;
        };
        if participant.team_category != category {
            continue;
        }
        if participant.gender()? != target {
            continue;
        }

        podium.push(PodiumEntry {
            position: podium.len() + 1,
            general_position: positions.get(&record.bib_number).copied().unwrap_or(0),
            team: participant.team_full_name.clone(),
            time: format_duration(record.elapsed_seconds),
        });
    }

    Ok(podium)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};
    use uuid::Uuid;

    fn instant(h: u32, m: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 12, 4)
            .unwrap()
            .and_hms_opt(h, m, s)
            .unwrap()
    }

    fn record(bib: &str, elapsed: i64) -> FinishRecord {
        FinishRecord {
            record_id: Uuid::new_v4(),
            bib_number: bib.into(),
            elapsed_seconds: elapsed,
            arrival_at: instant(10, 10, 0),
        }
    }

    fn participant(bib: &str, team: &str, gender: &str, category: &str) -> Participant {
        Participant {
            bib_number: bib.into(),
            competition: "6-9".into(),
            team_name: String::new(),
            team_full_name: team.into(),
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

    fn race() -> Race {
        let mut race = Race::new("6-9");
        race.results = vec![record("1", 100), record("2", 120), record("3", 150)];
        race
    }

    fn roster() -> Vec<Participant> {
        vec![
            participant("1", "Equipe A", "F", "Cadet"),
            participant("2", "Equipe B", "M", "Cadet"),
            participant("3", "Equipe C", "F", "Senior"),
        ]
    }

    #[test]
    fn test_sorted_results_ascending() {
        let mut race = race();
        race.results.swap(0, 2);
        let bibs: Vec<String> = sorted_results(&race)
            .into_iter()
            .map(|r| r.bib_number)
            .collect();
        assert_eq!(bibs, ["1", "2", "3"]);
    }

    #[test]
    fn test_sorted_results_stable_on_ties() {
        let mut race = Race::new("6-9");
        race.results = vec![record("a", 100), record("b", 100), record("c", 90)];
        let bibs: Vec<String> = sorted_results(&race)
            .into_iter()
            .map(|r| r.bib_number)
            .collect();
        assert_eq!(bibs, ["c", "a", "b"]);
    }

    #[test]
    fn test_general_positions() {
        let positions = general_positions(&race());
        assert_eq!(positions["1"], 1);
        assert_eq!(positions["2"], 2);
        assert_eq!(positions["3"], 3);
    }

    #[test]
    fn test_podium_female_cadet() {
        let podium = compute_podium(&race(), &roster(), "Cadet", "F").unwrap();
        assert_eq!(podium.len(), 1);
        assert_eq!(podium[0].team, "Equipe A");
        assert_eq!(podium[0].position, 1);
        assert_eq!(podium[0].general_position, 1);
        assert_eq!(podium[0].time, "00:01:40");
    }

    #[test]
    fn test_podium_male_filter_normalizes_m() {
        let podium = compute_podium(&race(), &roster(), "Cadet", "M").unwrap();
        assert_eq!(podium.len(), 1);
        assert_eq!(podium[0].team, "Equipe B");
        assert_eq!(podium[0].position, 1);
        // Second overall, first of the sub-group.
        assert_eq!(podium[0].general_position, 2);
    }

    #[test]
    fn test_podium_no_match_is_empty() {
        let podium = compute_podium(&race(), &roster(), "Benjamin", "F").unwrap();
        assert!(podium.is_empty());
    }

    #[test]
    fn test_podium_caps_at_three() {
        let mut race = Race::new("6-9");
        race.results = (1..=5).map(|i| record(&i.to_string(), i * 10)).collect();
        let roster: Vec<Participant> = (1..=5)
            .map(|i| participant(&i.to_string(), &format!("Equipe {i}"), "F", "Cadet"))
            .collect();

        let podium = compute_podium(&race, &roster, "Cadet", "F").unwrap();
        assert_eq!(podium.len(), 3);
        assert_eq!(podium[2].position, 3);
        assert_eq!(podium[2].general_position, 3);
    }

    #[test]
    fn test_podium_invalid_filter_gender_errors() {
        assert!(compute_podium(&race(), &roster(), "Cadet", "nope").is_err());
    }

    #[test]
    fn test_podium_invalid_stored_gender_errors() {
        let mut roster = roster();
        roster[0].team_gender = "??".into();
        assert!(compute_podium(&race(), &roster, "Cadet", "F").is_err());
    }

    #[test]
    fn test_podium_ignores_other_competitions() {
        let mut roster = roster();
        roster[0].competition = "10-13".into();
        let podium = compute_podium(&race(), &roster, "Cadet", "F").unwrap();
        assert!(podium.is_empty());
    }
}
