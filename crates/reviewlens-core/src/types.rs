//! Common types for review rows, classified records, and sentiment labels

use serde::{Deserialize, Serialize};
use std::fmt;

/// The three sentiment classes.
///
/// Variant order doubles as the deterministic tie-break priority used by the
/// classifier: positive wins over negative, negative over neutral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    /// All classes in tie-break priority order
    pub const ALL: [Sentiment; 3] = [Self::Positive, Self::Negative, Self::Neutral];

    /// Lowercase label, matching the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Negative => "negative",
            Self::Neutral => "neutral",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One raw input row of a batch: review text plus an optional 1-5 rating.
///
/// A rating that was absent or unparseable in the source data arrives here as
/// `None` and resolves to a neutral rating sentiment downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRow {
    /// Original review text
    pub text: String,

    /// Numeric rating (1-5) when present
    pub rating: Option<f64>,
}

impl ReviewRow {
    pub fn new(text: impl Into<String>, rating: Option<f64>) -> Self {
        Self {
            text: text.into(),
            rating,
        }
    }
}

/// A fully classified review. Exists only for the duration of one batch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReviewRecord {
    /// Original review text
    pub text: String,

    /// Numeric rating (1-5) when present
    pub rating: Option<f64>,

    /// Normalized text the classifier actually scored (never empty)
    pub cleaned: String,

    /// Label derived from the text alone
    pub text_sentiment: Sentiment,

    /// Label derived from the rating, when a rating was present
    pub rating_sentiment: Option<Sentiment>,

    /// Final fused label
    pub sentiment: Sentiment,
}
