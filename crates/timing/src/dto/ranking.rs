use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

/// One podium line: position within the category/gender sub-group plus
/// the position in the general ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct PodiumEntry {
    pub position: usize,
    pub general_position: usize,
    pub team: String,
    pub time: String,
}

#[derive(Debug, Deserialize, IntoParams)]
pub struct PodiumQuery {
    pub category: String,
    /// Gender code (M/H/F/X, case-insensitive).
    pub gender: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RankedResultResponse {
    pub position: usize,
    pub record_id: Uuid,
    pub bib_number: String,
    /// Team display name, when the bib matches the roster.
    pub team: Option<String>,
    pub elapsed_time: String,
    pub arrival_time: String,
}
