use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::Result;
use crate::state::AppState;

/// Persists the whole [`AppState`] as a JSON file. Loading tolerates a
/// missing or corrupt file by starting from an empty state, because a
/// timing session must never be blocked by a bad snapshot.
pub struct SnapshotStore {
    path: PathBuf,
}

impl SnapshotStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> AppState {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return AppState::default(),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read snapshot, starting fresh");
                return AppState::default();
            }
        };

        match serde_json::from_str(&text) {
            Ok(state) => {
                tracing::info!(path = %self.path.display(), "snapshot loaded");
                state
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "snapshot corrupt, starting fresh");
                AppState::default()
            }
        }
    }

    pub fn save(&self, state: &AppState) -> Result<()> {
        let text = serde_json::to_string_pretty(state)?;
        fs::write(&self.path, text)?;
        Ok(())
    }
}
