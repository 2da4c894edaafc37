use std::sync::Arc;

use timing::AppState;
use timing::snapshot::SnapshotStore;
use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shared handle on the single authoritative in-memory state. Mutating
/// handlers hold the write lock for the whole operation, which is the
/// single-writer discipline the core's invariants assume.
#[derive(Clone)]
pub struct SharedState {
    inner: Arc<RwLock<AppState>>,
    store: Arc<SnapshotStore>,
}

impl SharedState {
    pub fn new(state: AppState, store: SnapshotStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(state)),
            store: Arc::new(store),
        }
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, AppState> {
        self.inner.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, AppState> {
        self.inner.write().await
    }

    /// Best-effort persistence after a committed mutation; a failed
    /// save must not fail the request that already succeeded.
    pub fn persist(&self, state: &AppState) {
        if let Err(e) = self.store.save(state) {
            tracing::warn!(error = %e, "failed to persist snapshot");
        }
    }
}
