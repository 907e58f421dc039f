use std::sync::Arc;

use crate::store::Snapshot;

/// Shared application state: the loaded snapshot plus query defaults.
///
/// The snapshot is immutable after startup, so handlers read it concurrently
/// without any locking.
#[derive(Clone)]
pub struct AppState {
    pub snapshot: Arc<Snapshot>,
    pub default_top_n: usize,
}

impl AppState {
    /// Creates application state around a loaded snapshot
    pub fn new(snapshot: Arc<Snapshot>, default_top_n: usize) -> Self {
        Self {
            snapshot,
            default_top_n,
        }
    }
}
