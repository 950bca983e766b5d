//! Offline lexicon trainer
//!
//! Recomputes the three lexicons from a raw review corpus: global token
//! frequencies, a common-word cut, then partitioning against two closed
//! keyword lists. Fully deterministic for a given corpus; no randomness and
//! no iterative optimization.

use crate::normalize::Normalizer;
use chrono::Utc;
use reviewlens_core::{Error, Lexicon, LexiconSnapshot, Result};
use std::collections::BTreeMap;

/// Minimum token length for lexicon membership
pub const MIN_WORD_LEN: usize = 3;

/// Minimum corpus frequency for a token to count as a common word
pub const MIN_COMMON_FREQ: u64 = 3;

/// Minimum corpus frequency for an unlisted common word to become neutral
pub const MIN_NEUTRAL_FREQ: u64 = 6;

/// Closed positive keyword list used to partition common words
const POSITIVE_KEYWORDS: &[&str] = &[
    "bagus", "baik", "suka", "puas", "mantap", "recommended", "cepat", "murah", "berkualitas",
    "sempurna", "original", "memuaskan", "top", "terbaik", "ramah", "aman", "rapih", "senang",
    "hebat", "luar", "biasa", "wow", "keren", "cocok", "pas", "sesuai", "lengkap", "enak",
    "nyaman", "lembut", "halus", "tepat", "amanah", "sukses", "salut", "jempol", "gemess", "lucu",
    "cantik", "imut", "gemes", "recomend",
];

/// Closed negative keyword list used to partition common words
const NEGATIVE_KEYWORDS: &[&str] = &[
    "buruk", "jelek", "kecewa", "lambat", "mahal", "rusak", "cacat", "mengecewakan", "palsu",
    "gagal", "error", "bermasalah", "reject", "komplain", "salah", "tipis", "kecil", "panas",
    "kasar", "kotor", "bau", "retak", "sobek", "lecet", "penyok", "bolong", "kurang", "tidak",
    "jangan", "kapok", "rugi", "bohong", "menipu", "tipu", "ngawur", "menyesal", "nyesel",
    "bangsat",
];

/// Offline trainer over a raw review corpus.
pub struct Trainer {
    normalizer: Normalizer,
}

impl Trainer {
    pub fn new() -> Result<Self> {
        Ok(Self {
            normalizer: Normalizer::new()?,
        })
    }

    /// Train a snapshot from raw review texts.
    ///
    /// `sources` is provenance only (e.g. the corpus file names); it does not
    /// influence the weights.
    pub fn train(&self, reviews: &[String], sources: Vec<String>) -> Result<LexiconSnapshot> {
        if reviews.is_empty() {
            return Err(Error::snapshot("training corpus is empty"));
        }

        // Global token frequency over the normalized corpus. Sorted map so
        // identical corpora produce byte-identical snapshots.
        let mut frequency: BTreeMap<String, u64> = BTreeMap::new();
        let mut usable = 0usize;
        for review in reviews {
            let cleaned = self.normalizer.normalize(review);
            if cleaned.is_empty() {
                continue;
            }
            usable += 1;
            for token in cleaned.split_whitespace() {
                *frequency.entry(token.to_string()).or_insert(0) += 1;
            }
        }
        if usable == 0 {
            return Err(Error::snapshot(
                "training corpus contained no usable reviews after normalization",
            ));
        }

        let mut positive = Lexicon::new();
        let mut negative = Lexicon::new();
        let mut neutral = Lexicon::new();

        for (word, freq) in &frequency {
            if word.chars().count() < MIN_WORD_LEN || *freq < MIN_COMMON_FREQ {
                continue;
            }
            let weight = *freq as f64;
            if POSITIVE_KEYWORDS.contains(&word.as_str()) {
                positive.insert(word.clone(), weight);
            } else if NEGATIVE_KEYWORDS.contains(&word.as_str()) {
                negative.insert(word.clone(), weight);
            } else if *freq >= MIN_NEUTRAL_FREQ {
                neutral.insert(word.clone(), weight);
            }
        }

        tracing::info!(
            reviews = reviews.len(),
            usable,
            vocabulary = frequency.len(),
            positive = positive.len(),
            negative = negative.len(),
            neutral = neutral.len(),
            "trained lexicon snapshot"
        );

        let snapshot = LexiconSnapshot {
            positive,
            negative,
            neutral,
            sample_count: reviews.len(),
            source_files: sources,
            trained_at: Some(Utc::now()),
        };
        snapshot.validate()?;
        Ok(snapshot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<String> {
        let mut reviews = Vec::new();
        // "bagus" and "jelek" each clear the common-word cut; "pengiriman"
        // is frequent enough to land in the neutral lexicon
        for _ in 0..4 {
            reviews.push("barang bagus pengiriman aman".to_string());
            reviews.push("kualitas jelek pengiriman lambat sekali".to_string());
        }
        reviews.push("pengiriman standar".to_string());
        reviews
    }

    fn train(reviews: &[String]) -> LexiconSnapshot {
        Trainer::new()
            .unwrap()
            .train(reviews, vec!["corpus.csv".to_string()])
            .unwrap()
    }

    #[test]
    fn test_partitions_by_keyword_lists() {
        let snapshot = train(&corpus());
        assert_eq!(snapshot.positive.get("bagus"), Some(&4.0));
        assert_eq!(snapshot.positive.get("aman"), Some(&4.0));
        assert_eq!(snapshot.negative.get("jelek"), Some(&4.0));
        assert_eq!(snapshot.negative.get("lambat"), Some(&4.0));
    }

    #[test]
    fn test_neutral_requires_higher_frequency() {
        let snapshot = train(&corpus());
        // 9 occurrences, unlisted: neutral with raw frequency as weight
        assert_eq!(snapshot.neutral.get("pengiriman"), Some(&9.0));
        // 4 occurrences, unlisted: clears the common cut but not the
        // neutral frequency threshold
        assert!(!snapshot.neutral.contains_key("barang"));
    }

    #[test]
    fn test_short_and_rare_words_excluded() {
        let snapshot = train(&corpus());
        // "standar" appears once: below the common-word cut
        assert!(!snapshot.neutral.contains_key("standar"));
        // "sekali" appears 4 times but below neutral threshold and unlisted
        assert!(!snapshot.neutral.contains_key("sekali"));
    }

    #[test]
    fn test_training_is_deterministic() {
        let reviews = corpus();
        let a = train(&reviews);
        let b = train(&reviews);
        assert_eq!(
            serde_json::to_string(&a.positive).unwrap(),
            serde_json::to_string(&b.positive).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&a.negative).unwrap(),
            serde_json::to_string(&b.negative).unwrap()
        );
        assert_eq!(
            serde_json::to_string(&a.neutral).unwrap(),
            serde_json::to_string(&b.neutral).unwrap()
        );
    }

    #[test]
    fn test_empty_corpus_is_an_error() {
        let trainer = Trainer::new().unwrap();
        assert!(trainer.train(&[], Vec::new()).is_err());
        let blank = vec!["!!!".to_string(), "123".to_string()];
        assert!(trainer.train(&blank, Vec::new()).is_err());
    }
}
