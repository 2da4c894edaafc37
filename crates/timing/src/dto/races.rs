use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::{Race, StartWave};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateWaveRequest {
    /// Wave start as `hh:mm:ss` on the race's start date; defaults to
    /// the current instant.
    pub start_time: Option<String>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
    pub genders: Vec<String>,
}

impl CreateWaveRequest {
    pub fn validate(&self) -> Result<(), String> {
        if self.categories.is_empty() && self.genders.is_empty() {
            return Err("a wave needs at least one category or gender".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct WaveResponse {
    pub wave_id: Uuid,
    pub started_at: NaiveDateTime,
    pub categories: Vec<String>,
    pub genders: Vec<String>,
}

impl From<&StartWave> for WaveResponse {
    fn from(wave: &StartWave) -> Self {
        Self {
            wave_id: wave.wave_id,
            started_at: wave.started_at,
            categories: wave.categories.clone(),
            genders: wave.genders.iter().map(|g| g.as_code().to_string()).collect(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RaceResponse {
    pub race_id: Uuid,
    pub name: String,
    pub started_at: Option<NaiveDateTime>,
    pub finished: bool,
    pub wave_count: usize,
    pub result_count: usize,
    pub selected: bool,
}

impl RaceResponse {
    pub fn new(race: &Race, selected_race_id: Option<Uuid>) -> Self {
        Self {
            race_id: race.race_id,
            name: race.name.clone(),
            started_at: race.started_at,
            finished: race.finished,
            wave_count: race.waves.len(),
            result_count: race.results.len(),
            selected: selected_race_id == Some(race.race_id),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RaceDetailResponse {
    pub race_id: Uuid,
    pub name: String,
    pub started_at: Option<NaiveDateTime>,
    pub finished: bool,
    pub waves: Vec<WaveResponse>,
    pub result_count: usize,
}

impl From<&Race> for RaceDetailResponse {
    fn from(race: &Race) -> Self {
        Self {
            race_id: race.race_id,
            name: race.name.clone(),
            started_at: race.started_at,
            finished: race.finished,
            waves: race.waves.iter().map(WaveResponse::from).collect(),
            result_count: race.results.len(),
        }
    }
}
