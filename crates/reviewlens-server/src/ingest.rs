//! CSV ingestion for review batches
//!
//! Uploads are CSV files with a required `review` column and an optional
//! `rating` column. Per-row junk (blank text, unparseable ratings) degrades
//! to safe defaults; structural problems reject the whole batch.

use reviewlens_core::{Error, Result, ReviewRow};
use std::path::Path;

/// Column holding the review text (required)
const REVIEW_COLUMN: &str = "review";

/// Column holding the numeric rating (optional)
const RATING_COLUMN: &str = "rating";

/// Parse an uploaded CSV payload into review rows.
pub fn parse_csv(bytes: &[u8]) -> Result<Vec<ReviewRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| Error::batch(format!("could not read CSV header: {e}")))?
        .clone();

    let review_idx = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(REVIEW_COLUMN))
        .ok_or_else(|| Error::batch("CSV must contain a 'review' column"))?;
    let rating_idx = headers
        .iter()
        .position(|h| h.trim().eq_ignore_ascii_case(RATING_COLUMN));

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| Error::batch(format!("could not read CSV row: {e}")))?;
        let text = record.get(review_idx).unwrap_or("").to_string();
        let rating = rating_idx
            .and_then(|idx| record.get(idx))
            .and_then(parse_rating);
        rows.push(ReviewRow { text, rating });
    }

    if rows.is_empty() {
        return Err(Error::batch("CSV contains no data rows"));
    }
    Ok(rows)
}

/// Read one or more CSV corpora for offline training, keeping only the
/// review texts.
pub fn read_corpus(paths: &[impl AsRef<Path>]) -> Result<(Vec<String>, Vec<String>)> {
    let mut reviews = Vec::new();
    let mut sources = Vec::new();
    for path in paths {
        let path = path.as_ref();
        let bytes = std::fs::read(path)
            .map_err(|e| Error::config(format!("failed to read {}: {e}", path.display())))?;
        let rows = parse_csv(&bytes)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
        tracing::info!(path = %path.display(), rows = rows.len(), "read training corpus");
        reviews.extend(rows.into_iter().map(|row| row.text));
        sources.push(
            path.file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
        );
    }
    Ok((reviews, sources))
}

/// Parse a rating cell. Unparseable or blank cells become `None`.
fn parse_rating(cell: &str) -> Option<f64> {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|r| r.is_finite())
}
