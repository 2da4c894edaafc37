use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::clock::{format_duration, format_time_of_day};
use crate::models::FinishRecord;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RecordArrivalRequest {
    #[validate(length(min = 1, message = "bib must not be empty"))]
    pub bib: String,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct EditArrivalRequest {
    #[validate(length(min = 1, message = "bib must not be empty"))]
    pub bib: String,
    /// New arrival time of day (`hh:mm:ss`) on the record's current
    /// date; omit to keep the recorded instant.
    pub arrival_time: Option<String>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct FinishRecordResponse {
    pub record_id: Uuid,
    pub bib_number: String,
    pub elapsed_seconds: i64,
    pub elapsed_time: String,
    pub arrival_time: String,
}

impl From<&FinishRecord> for FinishRecordResponse {
    fn from(record: &FinishRecord) -> Self {
        Self {
            record_id: record.record_id,
            bib_number: record.bib_number.clone(),
            elapsed_seconds: record.elapsed_seconds,
            elapsed_time: format_duration(record.elapsed_seconds),
            arrival_time: format_time_of_day(Some(record.arrival_at)),
        }
    }
}
