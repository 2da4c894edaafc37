use crate::codec::roster::parse_roster;
use crate::dto::roster::ImportSummary;
use crate::error::Result;
use crate::models::Race;
use crate::state::AppState;

/// Imports a roster document, fully replacing the previous roster.
///
/// Races are rebuilt from the distinct competition names in order of
/// appearance; a race whose name already exists keeps its identity and
/// history (an operator re-importing a corrected roster mid-event must
/// not lose recorded arrivals), any other race is created unstarted.
/// A document that parses to zero usable rows leaves the state alone.
pub fn import_roster(state: &mut AppState, text: &str) -> Result<ImportSummary> {
    let participants = parse_roster(text)?;
    if participants.is_empty() {
        return Ok(ImportSummary {
            participants: 0,
            races: 0,
        });
    }

    let mut names: Vec<&str> = Vec::new();
    for p in &participants {
        if !names.contains(&p.competition.as_str()) {
            names.push(&p.competition);
        }
    }

    let positions = state.race_positions_by_name();
    let races: Vec<Race> = names
        .iter()
        .map(|name| match positions.get(name) {
            Some(&position) => state.races[position].clone(),
            None => Race::new(*name),
        })
        .collect();

    state.races = races;
    state.participants = participants;
    state.selected_race_id = state.races.first().map(|r| r.race_id);

    tracing::info!(
        participants = state.participants.len(),
        races = state.races.len(),
        "roster imported"
    );

    Ok(ImportSummary {
        participants: state.participants.len(),
        races: state.races.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FinishRecord;
    use chrono::NaiveDate;
    use uuid::Uuid;

    const HEADER: &str = "bib,competition,teamName,teamFullName,teamGender,teamCategory,\
nameParticipant1,genderParticipant1,birthDateParticipant1,clubParticipant1,licenseParticipant1,\
nameParticipant2,genderParticipant2,birthDateParticipant2,clubParticipant2,licenseParticipant2";

    fn row(bib: &str, competition: &str) -> String {
        format!("{bib},{competition},T,T Full,F,Cadet,,,,,,,,,,")
    }

    fn doc(rows: &[String]) -> String {
        let mut out = String::from(HEADER);
        for r in rows {
            out.push('\n');
            out.push_str(r);
        }
        out
    }

    #[test]
    fn test_import_creates_races_in_order_of_appearance() {
        let mut state = AppState::default();
        let text = doc(&[row("1", "6-9"), row("2", "10-13"), row("3", "6-9")]);

        let summary = import_roster(&mut state, &text).unwrap();

        assert_eq!(summary.participants, 3);
        assert_eq!(summary.races, 2);
        assert_eq!(state.races[0].name, "6-9");
        assert_eq!(state.races[1].name, "10-13");
        assert_eq!(state.selected_race_id, Some(state.races[0].race_id));
    }

    #[test]
    fn test_reimport_keeps_existing_race_history() {
        let mut state = AppState::default();
        import_roster(&mut state, &doc(&[row("1", "6-9")])).unwrap();

        let race_id = state.races[0].race_id;
        state.races[0].started_at = NaiveDate::from_ymd_opt(2025, 12, 4)
            .unwrap()
            .and_hms_opt(10, 0, 0);
        let arrival_at = state.races[0].started_at.unwrap();
        state.races[0].results.push(FinishRecord {
            record_id: Uuid::new_v4(),
            bib_number: "1".into(),
            elapsed_seconds: 90,
            arrival_at,
        });

        import_roster(&mut state, &doc(&[row("1", "6-9"), row("2", "10-13")])).unwrap();

        assert_eq!(state.races.len(), 2);
        assert_eq!(state.races[0].race_id, race_id);
        assert_eq!(state.races[0].results.len(), 1);
        assert!(state.races[1].started_at.is_none());
    }

    #[test]
    fn test_import_replaces_roster_wholesale() {
        let mut state = AppState::default();
        import_roster(&mut state, &doc(&[row("1", "6-9"), row("2", "6-9")])).unwrap();
        import_roster(&mut state, &doc(&[row("7", "6-9")])).unwrap();

        assert_eq!(state.participants.len(), 1);
        assert_eq!(state.participants[0].bib_number, "7");
    }

    #[test]
    fn test_empty_document_leaves_state_untouched() {
        let mut state = AppState::default();
        import_roster(&mut state, &doc(&[row("1", "6-9")])).unwrap();

        // Header only, every row filtered out.
        let summary = import_roster(&mut state, &doc(&[row("", "6-9")])).unwrap();

        assert_eq!(summary.participants, 0);
        assert_eq!(state.participants.len(), 1);
        assert_eq!(state.races.len(), 1);
    }
}
