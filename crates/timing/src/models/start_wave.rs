use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::Gender;

/// A staggered start group within a race. A competitor qualifies when
/// their category is in `categories` or their normalized gender is in
/// `genders` (inclusive OR). Waves are append-only for the lifetime of
/// one running of a race.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StartWave {
    pub wave_id: Uuid,
    pub started_at: NaiveDateTime,
    pub categories: Vec<String>,
    pub genders: Vec<Gender>,
}

impl StartWave {
    pub fn matches(&self, category: &str, gender: Option<Gender>) -> bool {
        let match_category = !category.is_empty() && self.categories.iter().any(|c| c == category);
        let match_gender = gender.is_some_and(|g| self.genders.contains(&g));
        match_category || match_gender
    }
}
