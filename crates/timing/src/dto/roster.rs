use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Serialize, ToSchema)]
pub struct ImportSummary {
    pub participants: usize,
    pub races: usize,
}
