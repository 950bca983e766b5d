//! Batch aggregation
//!
//! Deterministic statistics over one classified batch: class breakdowns,
//! keyword views, rating-based accuracy estimate, and the tiered summary.

use crate::keywords;
use crate::types::{
    AccuracyEstimate, BatchReport, ChartSeries, KeywordEntry, PerClass, SampleRow,
};
use chrono::Utc;
use reviewlens_core::{Error, Result, ReviewRecord, Sentiment};

/// Keywords reported per class
pub const TOP_CLASS_KEYWORDS: usize = 10;

/// Entries in the global word-frequency view
pub const TOP_GLOBAL_WORDS: usize = 15;

/// Sample rows echoed back per batch
pub const MAX_SAMPLES: usize = 10;

/// Positive-percentage thresholds for the summary tiers
const TIER_EXCELLENT: f64 = 70.0;
const TIER_FAIR: f64 = 50.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Aggregate a classified batch into a [`BatchReport`].
///
/// The records must be the usable rows of one batch, in input order.
pub fn aggregate(records: &[ReviewRecord]) -> Result<BatchReport> {
    if records.is_empty() {
        return Err(Error::batch("cannot aggregate an empty batch"));
    }

    let total = records.len();
    let mut counts = PerClass::<usize>::default();
    for record in records {
        *counts.get_mut(record.sentiment) += 1;
    }

    let mut percentages = PerClass::<f64>::default();
    for class in Sentiment::ALL {
        *percentages.get_mut(class) = round2(*counts.get(class) as f64 / total as f64 * 100.0);
    }

    let chart = ChartSeries {
        labels: Sentiment::ALL.iter().map(|c| c.as_str().to_string()).collect(),
        counts: Sentiment::ALL.iter().map(|c| *counts.get(*c)).collect(),
        percentages: Sentiment::ALL.iter().map(|c| *percentages.get(*c)).collect(),
    };

    let mut class_keywords = PerClass::<Vec<KeywordEntry>>::default();
    for class in Sentiment::ALL {
        *class_keywords.get_mut(class) = keywords::top_keywords(
            records
                .iter()
                .filter(|r| r.sentiment == class)
                .map(|r| r.cleaned.as_str()),
            TOP_CLASS_KEYWORDS,
        );
    }

    let word_frequency = keywords::top_keywords_filtered(
        records.iter().map(|r| r.cleaned.as_str()),
        TOP_GLOBAL_WORDS,
    );

    let has_rating = records.iter().any(|r| r.rating.is_some());
    let accuracy = has_rating.then(|| estimate_accuracy(records));

    let (summary, recommendation) = summarize(&percentages);

    let samples = records
        .iter()
        .take(MAX_SAMPLES)
        .map(|r| SampleRow {
            text: r.text.clone(),
            sentiment: r.sentiment,
        })
        .collect();

    Ok(BatchReport {
        total_reviews: total,
        counts,
        percentages,
        chart,
        keywords: class_keywords,
        word_frequency,
        summary,
        recommendation,
        samples,
        has_rating,
        accuracy,
        analyzed_at: Utc::now(),
    })
}

/// A record matches when its final label agrees with its rating band.
fn rating_matches(record: &ReviewRecord) -> bool {
    let Some(rating) = record.rating else {
        return false;
    };
    match record.sentiment {
        Sentiment::Positive => rating >= 4.0,
        Sentiment::Negative => rating <= 2.0,
        Sentiment::Neutral => (2.5..=3.5).contains(&rating),
    }
}

fn estimate_accuracy(records: &[ReviewRecord]) -> AccuracyEstimate {
    let matches = records.iter().filter(|r| rating_matches(r)).count();
    let total_compared = records.len();
    AccuracyEstimate {
        estimated_accuracy: round2(matches as f64 / total_compared as f64 * 100.0),
        matches,
        total_compared,
    }
}

/// Three-tier summary and recommendation keyed on the positive percentage.
fn summarize(percentages: &PerClass<f64>) -> (String, String) {
    let positive = percentages.positive;
    let negative = percentages.negative;

    if positive >= TIER_EXCELLENT {
        (
            format!("EXCELLENT - {positive}% of reviews are positive."),
            "Maintain product and service quality. Consider expanding stock or adding product \
             variants."
                .to_string(),
        )
    } else if positive >= TIER_FAIR {
        (
            format!("FAIR - {positive}% of reviews are positive."),
            format!(
                "Address the areas behind the negative reviews ({negative}%). Focus on the top \
                 negative keywords."
            ),
        )
    } else {
        (
            format!("NEEDS ATTENTION - only {positive}% of reviews are positive."),
            "Run a deep evaluation. Improve product quality, packaging, or delivery service."
                .to_string(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(text: &str, sentiment: Sentiment, rating: Option<f64>) -> ReviewRecord {
        ReviewRecord {
            text: text.to_string(),
            rating,
            cleaned: text.to_lowercase(),
            text_sentiment: sentiment,
            rating_sentiment: rating.map(|_| sentiment),
            sentiment,
        }
    }

    fn mixed_batch() -> Vec<ReviewRecord> {
        vec![
            record("barang bagus", Sentiment::Positive, Some(5.0)),
            record("mantap sekali", Sentiment::Positive, Some(4.0)),
            record("jelek rusak", Sentiment::Negative, Some(1.0)),
            record("biasa saja", Sentiment::Neutral, Some(3.0)),
        ]
    }

    #[test]
    fn test_counts_and_percentages() {
        let report = aggregate(&mixed_batch()).unwrap();
        assert_eq!(report.total_reviews, 4);
        assert_eq!(report.counts.positive, 2);
        assert_eq!(report.counts.negative, 1);
        assert_eq!(report.counts.neutral, 1);
        assert_eq!(report.percentages.positive, 50.0);
        assert_eq!(report.percentages.negative, 25.0);
        assert_eq!(report.percentages.neutral, 25.0);
    }

    #[test]
    fn test_percentages_sum_to_one_hundred() {
        // 3 classes over 7 records forces rounding
        let mut records = mixed_batch();
        records.push(record("oke", Sentiment::Neutral, None));
        records.push(record("kecewa", Sentiment::Negative, None));
        records.push(record("puas", Sentiment::Positive, None));

        let report = aggregate(&records).unwrap();
        let sum =
            report.percentages.positive + report.percentages.negative + report.percentages.neutral;
        assert!((sum - 100.0).abs() <= 0.03, "percentages sum to {sum}");

        for class in Sentiment::ALL {
            assert!(*report.counts.get(class) <= report.total_reviews);
        }
    }

    #[test]
    fn test_chart_series_mirrors_breakdown() {
        let report = aggregate(&mixed_batch()).unwrap();
        assert_eq!(report.chart.labels, ["positive", "negative", "neutral"]);
        assert_eq!(report.chart.counts, [2, 1, 1]);
        assert_eq!(report.chart.percentages, [50.0, 25.0, 25.0]);
    }

    #[test]
    fn test_accuracy_estimate() {
        let report = aggregate(&mixed_batch()).unwrap();
        let accuracy = report.accuracy.unwrap();
        // every rating in the fixture agrees with its label
        assert_eq!(accuracy.matches, 4);
        assert_eq!(accuracy.total_compared, 4);
        assert_eq!(accuracy.estimated_accuracy, 100.0);
    }

    #[test]
    fn test_accuracy_bounds() {
        let records = vec![
            record("bagus", Sentiment::Positive, Some(1.0)),
            record("jelek", Sentiment::Negative, Some(5.0)),
            record("biasa", Sentiment::Neutral, None),
        ];
        let report = aggregate(&records).unwrap();
        let accuracy = report.accuracy.unwrap();
        assert_eq!(accuracy.matches, 0);
        assert_eq!(accuracy.total_compared, 3);
        assert!((0.0..=100.0).contains(&accuracy.estimated_accuracy));
        assert!(accuracy.matches <= accuracy.total_compared);
    }

    #[test]
    fn test_no_accuracy_without_ratings() {
        let records = vec![record("bagus", Sentiment::Positive, None)];
        let report = aggregate(&records).unwrap();
        assert!(!report.has_rating);
        assert!(report.accuracy.is_none());
    }

    #[test]
    fn test_neutral_accuracy_band() {
        let hit = record("biasa", Sentiment::Neutral, Some(3.5));
        let miss = record("biasa", Sentiment::Neutral, Some(4.0));
        assert!(rating_matches(&hit));
        assert!(!rating_matches(&miss));
    }

    #[test]
    fn test_summary_tiers() {
        let tier = |positive: f64| {
            summarize(&PerClass {
                positive,
                negative: 100.0 - positive,
                neutral: 0.0,
            })
            .0
        };
        assert!(tier(85.0).starts_with("EXCELLENT"));
        assert!(tier(70.0).starts_with("EXCELLENT"));
        assert!(tier(55.0).starts_with("FAIR"));
        assert!(tier(50.0).starts_with("FAIR"));
        assert!(tier(20.0).starts_with("NEEDS ATTENTION"));
    }

    #[test]
    fn test_samples_capped_at_ten() {
        let records: Vec<ReviewRecord> = (0..25)
            .map(|i| record(&format!("ulasan nomor {i}"), Sentiment::Neutral, None))
            .collect();
        let report = aggregate(&records).unwrap();
        assert_eq!(report.samples.len(), MAX_SAMPLES);
        assert_eq!(report.samples[0].text, "ulasan nomor 0");
    }

    #[test]
    fn test_empty_batch_rejected() {
        assert!(aggregate(&[]).is_err());
    }
}
