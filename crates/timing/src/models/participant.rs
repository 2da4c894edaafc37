use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::Result;
use crate::models::Gender;

/// One roster entry: a team of up to two runners sharing a bib.
///
/// `bib_number` + `competition` form the natural key; the individual
/// member fields are informational and never consulted by timing logic.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    pub bib_number: String,
    pub competition: String,
    pub team_name: String,
    pub team_full_name: String,
    pub team_gender: String,
    pub team_category: String,

    pub name_participant1: String,
    pub gender_participant1: String,
    pub birth_date_participant1: String,
    pub club_participant1: String,
    pub license_participant1: String,

    pub name_participant2: String,
    pub gender_participant2: String,
    pub birth_date_participant2: String,
    pub club_participant2: String,
    pub license_participant2: String,
}

impl Participant {
    /// The team gender as a normalized code.
    pub fn gender(&self) -> Result<Gender> {
        Gender::normalize(&self.team_gender)
    }
}
