use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// A recorded arrival: the bib that crossed the line, the whole-second
/// elapsed time against the competitor's resolved start, and the
/// absolute arrival instant.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct FinishRecord {
    pub record_id: Uuid,
    pub bib_number: String,
    pub elapsed_seconds: i64,
    pub arrival_at: NaiveDateTime,
}
