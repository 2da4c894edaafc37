//! Roster import: delimited tabular text to [`Participant`] records.
//!
//! The dialect is deliberately simple - semicolon or comma sniffed from
//! the header line, no quoting - because that is what the timing
//! federations' spreadsheet exports produce.

use crate::error::{Result, TimingError};
use crate::models::Participant;

/// Header names the roster must carry, matched case-insensitively.
pub const REQUIRED_COLUMNS: [&str; 16] = [
    "bib",
    "competition",
    "teamname",
    "teamfullname",
    "teamgender",
    "teamcategory",
    "nameparticipant1",
    "genderparticipant1",
    "birthdateparticipant1",
    "clubparticipant1",
    "licenseparticipant1",
    "nameparticipant2",
    "genderparticipant2",
    "birthdateparticipant2",
    "clubparticipant2",
    "licenseparticipant2",
];

fn header_error() -> TimingError {
    TimingError::InvalidRosterHeader(REQUIRED_COLUMNS.join(", "))
}

/// Parses a roster document. Only the header can fail the parse: data
/// rows that are short or lack a bib/competition are skipped, because
/// partial rosters are an operational reality, not an error.
pub fn parse_roster(text: &str) -> Result<Vec<Participant>> {
    let lines: Vec<&str> = text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();
    if lines.len() < 2 {
        return Err(header_error());
    }

    let header = lines[0];
    let delimiter = if header.contains(';') { ';' } else { ',' };
    let columns: Vec<String> = header
        .split(delimiter)
        .map(|cell| cell.trim().to_lowercase())
        .collect();

    let mut index = [0usize; REQUIRED_COLUMNS.len()];
    for (slot, name) in REQUIRED_COLUMNS.iter().enumerate() {
        match columns.iter().position(|c| c == name) {
            Some(position) => index[slot] = position,
            None => return Err(header_error()),
        }
    }

    let mut participants = Vec::new();
    for row in &lines[1..] {
        let cells: Vec<&str> = row.split(delimiter).map(str::trim).collect();
        if cells.len() < columns.len() {
            continue;
        }
        let get = |slot: usize| cells.get(index[slot]).copied().unwrap_or("").to_string();

        let bib = get(0);
        let competition = get(1);
        if bib.is_empty() || competition.is_empty() {
            continue;
        }

        participants.push(Participant {
            bib_number: bib,
            competition,
            team_name: get(2),
            team_full_name: get(3),
            team_gender: get(4),
            team_category: get(5),
            name_participant1: get(6),
            gender_participant1: get(7),
            birth_date_participant1: get(8),
            club_participant1: get(9),
            license_participant1: get(10),
            name_participant2: get(11),
            gender_participant2: get(12),
            birth_date_participant2: get(13),
            club_participant2: get(14),
            license_participant2: get(15),
        });
    }

    Ok(participants)
}
