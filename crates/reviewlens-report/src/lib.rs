//! ReviewLens Report
//!
//! Batch aggregation and reporting over classified reviews: per-class
//! breakdowns, keyword frequency views, rating-based accuracy estimation,
//! and the tiered summary/recommendation.
//!
//! Aggregation is pure and deterministic over the records of one batch.

pub mod aggregate;
pub mod keywords;
pub mod types;

pub use aggregate::{aggregate, MAX_SAMPLES, TOP_CLASS_KEYWORDS, TOP_GLOBAL_WORDS};
pub use types::{
    AccuracyEstimate, BatchReport, ChartSeries, KeywordEntry, PerClass, SampleRow,
};
