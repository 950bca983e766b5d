//! Batch report types

use chrono::{DateTime, Utc};
use reviewlens_core::Sentiment;
use serde::{Deserialize, Serialize};

/// One value per sentiment class.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerClass<T> {
    pub positive: T,
    pub negative: T,
    pub neutral: T,
}

impl<T> PerClass<T> {
    pub fn get(&self, class: Sentiment) -> &T {
        match class {
            Sentiment::Positive => &self.positive,
            Sentiment::Negative => &self.negative,
            Sentiment::Neutral => &self.neutral,
        }
    }

    pub fn get_mut(&mut self, class: Sentiment) -> &mut T {
        match class {
            Sentiment::Positive => &mut self.positive,
            Sentiment::Negative => &mut self.negative,
            Sentiment::Neutral => &mut self.neutral,
        }
    }
}

/// Chart-ready series: one entry per class, in the fixed class order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChartSeries {
    pub labels: Vec<String>,
    pub counts: Vec<usize>,
    pub percentages: Vec<f64>,
}

/// A keyword and how often it occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub word: String,
    pub count: usize,
}

/// Accuracy estimate against supplied ratings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyEstimate {
    /// Percentage of records whose label agrees with the rating, 0-100
    pub estimated_accuracy: f64,
    pub matches: usize,
    pub total_compared: usize,
}

/// A literal sample row echoed back to the caller.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SampleRow {
    pub text: String,
    pub sentiment: Sentiment,
}

/// Everything one batch run produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchReport {
    /// Usable reviews (non-empty after normalization)
    pub total_reviews: usize,

    /// Per-class counts
    pub counts: PerClass<usize>,

    /// Per-class percentages, rounded to 2 decimals
    pub percentages: PerClass<f64>,

    /// Chart-ready series derived from counts and percentages
    pub chart: ChartSeries,

    /// Per-class top keywords (no stopword filtering)
    pub keywords: PerClass<Vec<KeywordEntry>>,

    /// Global top keywords across all records, stopwords stripped
    pub word_frequency: Vec<KeywordEntry>,

    /// Qualitative summary line
    pub summary: String,

    /// Action recommendation matching the summary tier
    pub recommendation: String,

    /// Up to ten literal sample rows
    pub samples: Vec<SampleRow>,

    /// Whether any row in the batch carried a rating
    pub has_rating: bool,

    /// Accuracy estimate, present when ratings were supplied
    pub accuracy: Option<AccuracyEstimate>,

    /// When the batch was analyzed
    pub analyzed_at: DateTime<Utc>,
}
