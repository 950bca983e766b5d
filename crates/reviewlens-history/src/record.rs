//! Versioned upload-history records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Current record schema version.
///
/// Bump when adding fields; older records deserialize through the serde
/// defaults and are upgraded by the startup migration pass.
pub const SCHEMA_VERSION: u32 = 2;

fn default_schema_version() -> u32 {
    // records written before versioning are schema 1
    1
}

/// One persisted audit record per analyzed batch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadRecord {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Record identity
    pub id: String,

    /// Name of the uploaded file
    pub filename: String,

    /// When the batch was analyzed
    pub uploaded_at: DateTime<Utc>,

    /// Usable reviews in the batch
    pub total_reviews: usize,

    pub positive_count: usize,
    pub negative_count: usize,
    pub neutral_count: usize,

    /// Serialized chart-ready series; absent on schema-1 records
    #[serde(default)]
    pub chart: Option<serde_json::Value>,
}

impl UploadRecord {
    /// Create a new record at the current schema version with a fresh id.
    pub fn new(
        filename: impl Into<String>,
        total_reviews: usize,
        positive_count: usize,
        negative_count: usize,
        neutral_count: usize,
        chart: Option<serde_json::Value>,
    ) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            id: uuid::Uuid::new_v4().to_string(),
            filename: filename.into(),
            uploaded_at: Utc::now(),
            total_reviews,
            positive_count,
            negative_count,
            neutral_count,
            chart,
        }
    }

    /// Upgrade an older record in place. Returns true if anything changed.
    pub fn migrate(&mut self) -> bool {
        if self.schema_version >= SCHEMA_VERSION {
            return false;
        }
        // schema 1 -> 2: chart column introduced; absent stays None
        self.schema_version = SCHEMA_VERSION;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_record_without_version_or_chart() {
        let legacy = r#"{
            "id": "abc",
            "filename": "reviews.csv",
            "uploaded_at": "2024-06-01T10:00:00Z",
            "total_reviews": 12,
            "positive_count": 7,
            "negative_count": 3,
            "neutral_count": 2
        }"#;
        let mut record: UploadRecord = serde_json::from_str(legacy).unwrap();
        assert_eq!(record.schema_version, 1);
        assert!(record.chart.is_none());

        assert!(record.migrate());
        assert_eq!(record.schema_version, SCHEMA_VERSION);
        assert!(!record.migrate());
    }

    #[test]
    fn test_round_trip() {
        let record = UploadRecord::new("reviews.csv", 10, 5, 3, 2, None);
        let json = serde_json::to_string(&record).unwrap();
        let restored: UploadRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.id, record.id);
        assert_eq!(restored.total_reviews, 10);
        assert_eq!(restored.schema_version, SCHEMA_VERSION);
    }
}
