//! ReviewLens Engine
//!
//! The sentiment-scoring core: text normalization, the lexicon store, the
//! weighted-likelihood classifier, rating fusion, and the offline trainer.
//!
//! The model is built once at process start from a lexicon snapshot and is
//! read-only afterwards; classification is pure, synchronous, and CPU-bound,
//! so shared references can serve concurrent requests without locking.

pub mod analyzer;
pub mod fusion;
pub mod lexicon;
pub mod model;
pub mod normalize;
pub mod trainer;

pub use analyzer::ReviewAnalyzer;
pub use fusion::{combine, rating_to_sentiment};
pub use model::{SentimentModel, SMOOTHING, UNKNOWN_TOKEN_PENALTY};
pub use normalize::Normalizer;
pub use trainer::Trainer;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::analyzer::ReviewAnalyzer;
    pub use crate::fusion::{combine, rating_to_sentiment};
    pub use crate::model::SentimentModel;
    pub use crate::normalize::Normalizer;
    pub use crate::trainer::Trainer;
}
