//! ReviewLens History
//!
//! Append-only audit store for analyzed batches. One JSON-lines file, one
//! record per upload, with a versioned schema migrated once at open.
//!
//! Persistence failures are non-fatal to classification by design: callers
//! log and continue, and the batch report is still returned.

pub mod record;
pub mod store;

pub use record::{UploadRecord, SCHEMA_VERSION};
pub use store::{HistoryStore, DEFAULT_HISTORY_LIMIT};
