//! Results export: one row per finish record, roster data joined by
//! bib, ascending elapsed time.

use crate::clock::{format_duration, format_time_of_day};
use crate::models::{Participant, Race};
use crate::services::ranking::sorted_results;

const HEADER: &str = "bib,competition,teamName,teamFullName,teamGender,teamCategory,\
nameParticipant1,genderParticipant1,birthDateParticipant1,clubParticipant1,licenseParticipant1,\
nameParticipant2,genderParticipant2,birthDateParticipant2,clubParticipant2,licenseParticipant2,\
elapsed_time,arrival_time";

/// Embedded quotes are doubled; delimiter-containing fields are written
/// as-is (the export keeps the original tool's dialect, which downstream
/// spreadsheets already consume).
fn escape(value: &str) -> String {
    value.replace('"', "\"\"")
}

pub fn results_csv(race: &Race, participants: &[Participant]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');

    for record in sorted_results(race) {
        let elapsed = format_duration(record.elapsed_seconds);
        let arrival = format_time_of_day(Some(record.arrival_at));

        let fields: Vec<String> = match participants
            .iter()
            .find(|p| p.bib_number == record.bib_number)
        {
            Some(p) => vec![
                escape(&p.bib_number),
                escape(&p.competition),
                escape(&p.team_name),
                escape(&p.team_full_name),
                escape(&p.team_gender),
                escape(&p.team_category),
                escape(&p.name_participant1),
                escape(&p.gender_participant1),
                escape(&p.birth_date_participant1),
                escape(&p.club_participant1),
                escape(&p.license_participant1),
                escape(&p.name_participant2),
                escape(&p.gender_participant2),
                escape(&p.birth_date_participant2),
                escape(&p.club_participant2),
                escape(&p.license_participant2),
                elapsed,
                arrival,
            ],
            // A finish record whose bib never made it into the roster
            // still exports its times; only the roster data is blank.
            None => {
                let mut fields = vec![record.bib_number.clone()];
                fields.extend(std::iter::repeat_n(String::new(), 15));
                fields.push(elapsed);
                fields.push(arrival);
                fields
            }
        };

        out.push_str(&fields.join(","));
        out.push('\n');
    }

    out
}
