//! Text normalization for review input
//!
//! Cleaning happens in a fixed order: case-fold, strip URL-like substrings,
//! blank out punctuation and symbols, drop digit runs, collapse whitespace.
//! Normalization never fails; malformed input degrades to an empty string.

use regex::Regex;
use reviewlens_core::{Error, Result};

/// Review text normalizer.
///
/// Holds its compiled URL pattern, so build one and share it.
pub struct Normalizer {
    url: Regex,
}

impl Normalizer {
    pub fn new() -> Result<Self> {
        // Scheme-prefixed or www-prefixed runs up to the next whitespace.
        let url = Regex::new(r"http\S+|www\S+")
            .map_err(|e| Error::internal(format!("failed to compile URL pattern: {e}")))?;
        Ok(Self { url })
    }

    /// Normalize raw review text. Output may be empty; never errors.
    pub fn normalize(&self, raw: &str) -> String {
        if raw.is_empty() {
            return String::new();
        }

        let lowered = raw.to_lowercase();
        let without_urls = self.url.replace_all(&lowered, "");

        let mut out = String::with_capacity(without_urls.len());
        let mut pending_space = false;
        for ch in without_urls.chars() {
            if ch.is_numeric() {
                // digit runs are dropped entirely
                continue;
            }
            if ch.is_alphabetic() {
                if pending_space && !out.is_empty() {
                    out.push(' ');
                }
                pending_space = false;
                out.push(ch);
            } else {
                // whitespace, punctuation, symbols, emoji all act as separators
                pending_space = true;
            }
        }
        out
    }
}
