use thiserror::Error;

pub type Result<T> = std::result::Result<T, TimingError>;

#[derive(Debug, Error)]
pub enum TimingError {
    #[error("Invalid gender code: {0} - must be M/F/X")]
    InvalidGender(String),

    #[error("Invalid time of day: {0} - expected hh:mm:ss")]
    InvalidTimeOfDay(String),

    #[error("Invalid roster header. Required columns: {0}")]
    InvalidRosterHeader(String),

    #[error("Not found")]
    NotFound,

    #[error("Unknown bib number: {0}")]
    UnknownBib(String),

    #[error("Bib {bib} belongs to race \"{expected}\", not \"{actual}\"")]
    BibNotInRace {
        bib: String,
        expected: String,
        actual: String,
    },

    #[error("Race \"{0}\" has not started for this competitor")]
    RaceNotStarted(String),

    #[error("Race \"{0}\" is finished, no further arrivals accepted")]
    RaceFinished(String),

    #[error("Bib {0} already has a recorded arrival in this race")]
    DuplicateArrival(String),

    #[error("Arrival is earlier than the resolved start")]
    NegativeElapsed,

    #[error("Snapshot I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot encoding error: {0}")]
    Encoding(#[from] serde_json::Error),
}

impl TimingError {
    /// Business-rule refusals, as opposed to malformed-input validation
    /// errors. Callers phrase the two differently.
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            Self::UnknownBib(_)
                | Self::BibNotInRace { .. }
                | Self::RaceNotStarted(_)
                | Self::RaceFinished(_)
                | Self::DuplicateArrival(_)
                | Self::NegativeElapsed
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidGender(_) | Self::InvalidTimeOfDay(_) | Self::InvalidRosterHeader(_)
        )
    }
}
