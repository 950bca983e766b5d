//! Batch review analysis: normalize, classify, fuse

use crate::fusion;
use crate::model::SentimentModel;
use reviewlens_core::{Error, Result, ReviewRecord, ReviewRow};

/// Runs the full per-row pipeline over review batches.
///
/// Wraps a read-only [`SentimentModel`]; an `Arc<ReviewAnalyzer>` can serve
/// concurrent requests without locking.
pub struct ReviewAnalyzer {
    model: SentimentModel,
}

impl ReviewAnalyzer {
    pub fn new(model: SentimentModel) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &SentimentModel {
        &self.model
    }

    /// Analyze one row. Returns `None` when the text normalizes to empty;
    /// such rows are dropped from batch statistics.
    pub fn analyze(&self, row: &ReviewRow) -> Option<ReviewRecord> {
        let cleaned = self.model.normalizer().normalize(&row.text);
        if cleaned.is_empty() {
            return None;
        }

        let text_sentiment = self.model.classify_cleaned(&cleaned);
        let rating_sentiment = row.rating.map(|r| fusion::rating_to_sentiment(Some(r)));
        let sentiment = match rating_sentiment {
            Some(from_rating) => fusion::combine(text_sentiment, from_rating),
            None => text_sentiment,
        };

        Some(ReviewRecord {
            text: row.text.clone(),
            rating: row.rating,
            cleaned,
            text_sentiment,
            rating_sentiment,
            sentiment,
        })
    }

    /// Analyze a whole batch, dropping rows that normalize to empty.
    ///
    /// A batch with no usable rows is rejected before any scoring happens.
    pub fn analyze_batch(&self, rows: &[ReviewRow]) -> Result<Vec<ReviewRecord>> {
        let records: Vec<ReviewRecord> = rows.iter().filter_map(|row| self.analyze(row)).collect();
        if records.is_empty() {
            return Err(Error::batch("no usable reviews after normalization"));
        }
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewlens_core::Sentiment;

    fn analyzer() -> ReviewAnalyzer {
        ReviewAnalyzer::new(SentimentModel::builtin().unwrap())
    }

    #[test]
    fn test_rating_overrides_toward_negative() {
        let record = analyzer()
            .analyze(&ReviewRow::new("barang bagus", Some(1.0)))
            .unwrap();
        assert_eq!(record.text_sentiment, Sentiment::Positive);
        assert_eq!(record.rating_sentiment, Some(Sentiment::Negative));
        assert_eq!(record.sentiment, Sentiment::Negative);
    }

    #[test]
    fn test_text_only_when_no_rating() {
        let record = analyzer()
            .analyze(&ReviewRow::new("barang bagus", None))
            .unwrap();
        assert_eq!(record.rating_sentiment, None);
        assert_eq!(record.sentiment, record.text_sentiment);
    }

    #[test]
    fn test_empty_text_row_is_dropped() {
        assert!(analyzer().analyze(&ReviewRow::new("123 !!!", Some(5.0))).is_none());
    }

    #[test]
    fn test_batch_with_no_usable_rows_rejected() {
        let rows = vec![
            ReviewRow::new("", None),
            ReviewRow::new("...", Some(3.0)),
        ];
        assert!(analyzer().analyze_batch(&rows).is_err());
    }

    #[test]
    fn test_batch_keeps_row_order() {
        let rows = vec![
            ReviewRow::new("bagus sekali", None),
            ReviewRow::new("!!!", None),
            ReviewRow::new("jelek dan rusak", None),
        ];
        let records = analyzer().analyze_batch(&rows).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].sentiment, Sentiment::Positive);
        assert_eq!(records[1].sentiment, Sentiment::Negative);
    }
}
