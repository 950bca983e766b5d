//! Shared application state

use parking_lot::Mutex;
use reviewlens_engine::ReviewAnalyzer;
use reviewlens_history::HistoryStore;
use std::sync::Arc;

/// Shared server state.
///
/// The analyzer is read-only after startup, so it is shared without locking;
/// only the history store serializes its appends behind a mutex.
#[derive(Clone)]
pub struct AppState {
    pub analyzer: Arc<ReviewAnalyzer>,
    pub history: Arc<Mutex<HistoryStore>>,
}

impl AppState {
    pub fn new(analyzer: ReviewAnalyzer, history: HistoryStore) -> Self {
        Self {
            analyzer: Arc::new(analyzer),
            history: Arc::new(Mutex::new(history)),
        }
    }
}
