//! Weighted-lexicon snapshot format
//!
//! The snapshot is the only persisted model artifact: three word-to-weight
//! maps plus provenance. It is produced by the offline trainer and consumed
//! once at process start; classification sessions never mutate it.

use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Word-to-weight mapping for one sentiment class.
///
/// Sorted map so serialized snapshots are byte-stable for identical weights.
pub type Lexicon = BTreeMap<String, f64>;

/// A flat, losslessly round-trippable lexicon snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexiconSnapshot {
    /// Positive-class lexicon
    pub positive: Lexicon,

    /// Negative-class lexicon
    pub negative: Lexicon,

    /// Neutral-class lexicon
    pub neutral: Lexicon,

    /// Number of reviews the trainer saw
    pub sample_count: usize,

    /// Source corpus identifiers (file names for CSV corpora)
    #[serde(default)]
    pub source_files: Vec<String>,

    /// When the trainer produced this snapshot; `None` for the built-in lexicon
    #[serde(default)]
    pub trained_at: Option<DateTime<Utc>>,
}

impl LexiconSnapshot {
    /// Validate snapshot invariants: every class lexicon is non-empty and
    /// every weight is strictly positive.
    ///
    /// A snapshot that fails here must abort startup — loading it would
    /// silently invalidate every subsequent classification.
    pub fn validate(&self) -> Result<()> {
        for (class, lexicon) in [
            ("positive", &self.positive),
            ("negative", &self.negative),
            ("neutral", &self.neutral),
        ] {
            if lexicon.is_empty() {
                return Err(Error::snapshot(format!("{class} lexicon is empty")));
            }
            for (word, weight) in lexicon {
                if !weight.is_finite() || *weight <= 0.0 {
                    return Err(Error::snapshot(format!(
                        "{class} lexicon word {word:?} has invalid weight {weight}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Total number of distinct entries across the three lexicons
    pub fn word_count(&self) -> usize {
        self.positive.len() + self.negative.len() + self.neutral.len()
    }
}
