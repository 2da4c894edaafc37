use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, TimingError};
use crate::models::{Participant, Race};

/// The whole application state: current roster snapshot, the races it
/// defines and the race the operator is focused on. Every core
/// operation takes this container explicitly; nothing closes over
/// ambient globals.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppState {
    pub races: Vec<Race>,
    pub participants: Vec<Participant>,
    pub selected_race_id: Option<Uuid>,
}

impl AppState {
    pub fn race(&self, race_id: Uuid) -> Result<&Race> {
        self.races
            .iter()
            .find(|r| r.race_id == race_id)
            .ok_or(TimingError::NotFound)
    }

    pub fn race_mut(&mut self, race_id: Uuid) -> Result<&mut Race> {
        self.races
            .iter_mut()
            .find(|r| r.race_id == race_id)
            .ok_or(TimingError::NotFound)
    }

    pub fn participant_by_bib(&self, bib: &str) -> Option<&Participant> {
        self.participants.iter().find(|p| p.bib_number == bib)
    }

    /// Index for the load-bearing `Participant.competition` == `Race.name`
    /// join, built once per state snapshot instead of re-scanning per
    /// lookup.
    pub fn race_positions_by_name(&self) -> HashMap<&str, usize> {
        self.races
            .iter()
            .enumerate()
            .map(|(position, race)| (race.name.as_str(), position))
            .collect()
    }
}
