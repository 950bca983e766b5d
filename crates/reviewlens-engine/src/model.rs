//! Weighted-likelihood sentiment classifier
//!
//! Lexicon weights become smoothed per-class conditional probabilities plus
//! class priors. Scoring is a bag-of-words naive likelihood product; the
//! accumulation runs in the log domain so long inputs cannot underflow, and
//! the decisions are identical to the direct product for short inputs.

use crate::normalize::Normalizer;
use reviewlens_core::{Lexicon, LexiconSnapshot, Result, Sentiment};
use std::collections::HashMap;

/// Additive smoothing applied to every known word's weight
pub const SMOOTHING: f64 = 0.1;

/// Multiplicative penalty for tokens absent from a class's table
pub const UNKNOWN_TOKEN_PENALTY: f64 = 0.001;

/// Probability table and prior for one class, stored as logarithms.
struct ClassTable {
    label: Sentiment,
    ln_prior: f64,
    ln_probs: HashMap<String, f64>,
}

impl ClassTable {
    fn build(label: Sentiment, lexicon: &Lexicon, grand_total: f64) -> Self {
        let total: f64 = lexicon.values().sum();
        let denominator = total + SMOOTHING * lexicon.len() as f64;
        let ln_probs = lexicon
            .iter()
            .map(|(word, weight)| (word.clone(), ((weight + SMOOTHING) / denominator).ln()))
            .collect();
        Self {
            label,
            ln_prior: (total / grand_total).ln(),
            ln_probs,
        }
    }
}

/// Read-only sentiment model, built once at process start and shared freely
/// across requests without locking.
pub struct SentimentModel {
    normalizer: Normalizer,
    classes: [ClassTable; 3],
}

impl SentimentModel {
    /// Build a model from a validated lexicon snapshot.
    pub fn from_snapshot(snapshot: &LexiconSnapshot) -> Result<Self> {
        snapshot.validate()?;

        let grand_total: f64 = [&snapshot.positive, &snapshot.negative, &snapshot.neutral]
            .iter()
            .map(|lexicon| lexicon.values().sum::<f64>())
            .sum();

        Ok(Self {
            normalizer: Normalizer::new()?,
            classes: [
                ClassTable::build(Sentiment::Positive, &snapshot.positive, grand_total),
                ClassTable::build(Sentiment::Negative, &snapshot.negative, grand_total),
                ClassTable::build(Sentiment::Neutral, &snapshot.neutral, grand_total),
            ],
        })
    }

    /// Build a model from the built-in lexicon.
    pub fn builtin() -> Result<Self> {
        Self::from_snapshot(&crate::lexicon::builtin())
    }

    pub fn normalizer(&self) -> &Normalizer {
        &self.normalizer
    }

    /// Classify raw review text. Empty-after-cleaning input is neutral.
    pub fn classify(&self, text: &str) -> Sentiment {
        let cleaned = self.normalizer.normalize(text);
        self.classify_cleaned(&cleaned)
    }

    /// Classify text that has already been normalized.
    pub fn classify_cleaned(&self, cleaned: &str) -> Sentiment {
        if cleaned.is_empty() {
            return Sentiment::Neutral;
        }
        let probabilities = self.score_cleaned(cleaned);

        // Strictly-highest wins; on exact ties the earlier class wins,
        // which is the fixed positive > negative > neutral priority.
        let mut winner = 0;
        for idx in 1..probabilities.len() {
            if probabilities[idx] > probabilities[winner] {
                winner = idx;
            }
        }
        self.classes[winner].label
    }

    /// Normalized probability triple (positive, negative, neutral) for
    /// already-normalized, non-empty text.
    pub fn score_cleaned(&self, cleaned: &str) -> [f64; 3] {
        let ln_penalty = UNKNOWN_TOKEN_PENALTY.ln();

        let mut ln_scores = [0.0f64; 3];
        for (idx, class) in self.classes.iter().enumerate() {
            let mut score = class.ln_prior;
            for token in cleaned.split_whitespace() {
                score += class.ln_probs.get(token).copied().unwrap_or(ln_penalty);
            }
            ln_scores[idx] = score;
        }

        // exp-normalize relative to the max; the sum is always >= 1
        let max = ln_scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mut scores = ln_scores.map(|s| (s - max).exp());
        let sum: f64 = scores.iter().sum();
        for score in &mut scores {
            *score /= sum;
        }
        scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model() -> SentimentModel {
        SentimentModel::builtin().unwrap()
    }

    #[test]
    fn test_classify_positive_review() {
        assert_eq!(model().classify("bagus sekali"), Sentiment::Positive);
    }

    #[test]
    fn test_classify_negative_review() {
        assert_eq!(model().classify("jelek dan rusak"), Sentiment::Negative);
    }

    #[test]
    fn test_classify_neutral_review() {
        assert_eq!(model().classify("biasa saja"), Sentiment::Neutral);
    }

    #[test]
    fn test_empty_after_cleaning_is_neutral() {
        let m = model();
        assert_eq!(m.classify(""), Sentiment::Neutral);
        assert_eq!(m.classify("!!! 123 :-)"), Sentiment::Neutral);
        assert_eq!(m.classify("http://toko.id/x"), Sentiment::Neutral);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let m = model();
        let text = "barang bagus tapi pengiriman lambat";
        let first = m.classify(text);
        for _ in 0..10 {
            assert_eq!(m.classify(text), first);
        }
    }

    #[test]
    fn test_scores_form_probability_triple() {
        let m = model();
        let scores = m.score_cleaned("bagus tapi mahal");
        let sum: f64 = scores.iter().sum();
        assert!((sum - 1.0).abs() < 1e-9, "scores should sum to 1, got {sum}");
        assert!(scores.iter().all(|s| (0.0..=1.0).contains(s)));
    }

    #[test]
    fn test_long_input_does_not_underflow() {
        let m = model();
        // A direct product of 0.001-per-token penalties would underflow to
        // zero well before 200 tokens; log-domain scoring must not.
        let long = "zzz ".repeat(500) + "bagus";
        let scores = m.score_cleaned(long.trim());
        assert!(scores.iter().all(|s| s.is_finite()));
        assert_eq!(m.classify_cleaned(long.trim()), Sentiment::Positive);
    }

    #[test]
    fn test_unknown_only_text_falls_back_to_priors() {
        // every token unknown: penalties cancel and priors decide, and the
        // positive class carries the largest total weight
        assert_eq!(model().classify("xyzzy plugh foobar"), Sentiment::Positive);
    }
}
