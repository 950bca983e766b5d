//! Rating-derived sentiment and the fixed fusion precedence
//!
//! Ratings and text are scored independently; fusion is a precedence table,
//! not a weighted blend. Negative dominates, positive dominates neutral.

use reviewlens_core::Sentiment;

/// Convert a numeric rating (1-5) into a sentiment label.
///
/// Missing or non-finite ratings resolve to neutral rather than failing.
pub fn rating_to_sentiment(rating: Option<f64>) -> Sentiment {
    match rating {
        Some(r) if r.is_finite() => {
            if r >= 4.0 {
                Sentiment::Positive
            } else if r >= 2.0 {
                Sentiment::Neutral
            } else {
                Sentiment::Negative
            }
        }
        _ => Sentiment::Neutral,
    }
}

/// Combine text-derived and rating-derived labels.
pub fn combine(text: Sentiment, rating: Sentiment) -> Sentiment {
    if text == rating {
        return text;
    }
    if text == Sentiment::Negative || rating == Sentiment::Negative {
        return Sentiment::Negative;
    }
    if text == Sentiment::Positive || rating == Sentiment::Positive {
        return Sentiment::Positive;
    }
    Sentiment::Neutral
}

#[cfg(test)]
mod tests {
    use super::*;
    use reviewlens_core::Sentiment::{Negative, Neutral, Positive};

    #[test]
    fn test_rating_thresholds() {
        assert_eq!(rating_to_sentiment(Some(5.0)), Positive);
        assert_eq!(rating_to_sentiment(Some(4.0)), Positive);
        assert_eq!(rating_to_sentiment(Some(3.9)), Neutral);
        assert_eq!(rating_to_sentiment(Some(3.0)), Neutral);
        assert_eq!(rating_to_sentiment(Some(2.0)), Neutral);
        assert_eq!(rating_to_sentiment(Some(1.9)), Negative);
        assert_eq!(rating_to_sentiment(Some(1.0)), Negative);
    }

    #[test]
    fn test_missing_or_invalid_rating_is_neutral() {
        assert_eq!(rating_to_sentiment(None), Neutral);
        assert_eq!(rating_to_sentiment(Some(f64::NAN)), Neutral);
        assert_eq!(rating_to_sentiment(Some(f64::INFINITY)), Neutral);
    }

    #[test]
    fn test_combine_is_total_over_all_nine_pairs() {
        let expected = [
            ((Positive, Positive), Positive),
            ((Positive, Negative), Negative),
            ((Positive, Neutral), Positive),
            ((Negative, Positive), Negative),
            ((Negative, Negative), Negative),
            ((Negative, Neutral), Negative),
            ((Neutral, Positive), Positive),
            ((Neutral, Negative), Negative),
            ((Neutral, Neutral), Neutral),
        ];
        for ((text, rating), want) in expected {
            assert_eq!(
                combine(text, rating),
                want,
                "combine({text}, {rating}) should be {want}"
            );
        }
    }
}
