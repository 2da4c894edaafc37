use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{Result, TimingError};

/// Closed gender code carried by waves, podium filters and roster rows.
///
/// Rosters arrive with one-letter codes; "H" (homme) and "M" are both
/// accepted for male so that French and English exports normalize to the
/// same value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Gender {
    #[serde(rename = "M", alias = "H")]
    Male,
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "X")]
    Mixed,
}

impl Gender {
    /// Normalizes a raw roster code, case-insensitively. Any value
    /// outside M/H/F/X is a validation error, not a silent skip: it
    /// means the roster data is corrupt upstream.
    pub fn normalize(raw: &str) -> Result<Self> {
        match raw.trim().to_uppercase().as_str() {
            "M" | "H" => Ok(Self::Male),
            "F" => Ok(Self::Female),
            "X" => Ok(Self::Mixed),
            _ => Err(TimingError::InvalidGender(raw.to_string())),
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Self::Male => "M",
            Self::Female => "F",
            Self::Mixed => "X",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_male_aliases() {
        assert_eq!(Gender::normalize("M").unwrap(), Gender::Male);
        assert_eq!(Gender::normalize("H").unwrap(), Gender::Male);
        assert_eq!(Gender::normalize("h").unwrap(), Gender::Male);
    }

    #[test]
    fn test_normalize_case_insensitive() {
        assert_eq!(Gender::normalize("f").unwrap(), Gender::Female);
        assert_eq!(Gender::normalize("x").unwrap(), Gender::Mixed);
        assert_eq!(Gender::normalize(" F ").unwrap(), Gender::Female);
    }

    #[test]
    fn test_normalize_rejects_unknown_codes() {
        assert!(Gender::normalize("").is_err());
        assert!(Gender::normalize("W").is_err());
        assert!(Gender::normalize("Male").is_err());
    }

    #[test]
    fn test_code_round_trip() {
        for g in [Gender::Male, Gender::Female, Gender::Mixed] {
            assert_eq!(Gender::normalize(g.as_code()).unwrap(), g);
        }
    }
}
