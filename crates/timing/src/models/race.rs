use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{FinishRecord, StartWave};

/// One timed competition. The race name equals the `competition` value
/// of its roster entries; that string match is the only join between a
/// race and its participants.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Race {
    pub race_id: Uuid,
    pub name: String,
    /// General start used when no wave matches a competitor. `None`
    /// until the race is started.
    pub started_at: Option<NaiveDateTime>,
    pub finished: bool,
    pub waves: Vec<StartWave>,
    pub results: Vec<FinishRecord>,
}

impl Race {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            race_id: Uuid::new_v4(),
            name: name.into(),
            started_at: None,
            finished: false,
            waves: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Starting (or restarting) wipes history: finish records and waves
    /// belong to a single running of the race.
    pub fn start(&mut self, now: NaiveDateTime) {
        self.started_at = Some(now);
        self.finished = false;
        self.results.clear();
        self.waves.clear();
    }

    /// Stopping only freezes the race; history stays intact.
    pub fn stop(&mut self) {
        self.finished = true;
    }

    pub fn has_arrival_for(&self, bib: &str) -> bool {
        self.results.iter().any(|r| r.bib_number == bib)
    }
}
