//! Keyword frequency extraction
//!
//! Two views with deliberately different filters: the per-class view keeps
//! every token longer than two characters, while the global word-frequency
//! view additionally strips a fixed stopword set.

use crate::types::KeywordEntry;
use std::collections::HashMap;

/// Minimum token length for the keyword views
const MIN_KEYWORD_LEN: usize = 3;

/// Fixed stopword set for the global word-frequency view
const STOPWORDS: &[&str] = &[
    "yang", "dan", "di", "ke", "dari", "untuk", "dengan", "ini", "itu", "saya", "kamu", "kami",
    "mereka", "ada", "tidak", "bukan", "akan", "sudah", "belum", "pernah", "saja", "hanya",
    "bisa", "dapat", "mau", "ingin",
];

fn count_tokens<'a>(
    texts: impl Iterator<Item = &'a str>,
    skip_stopwords: bool,
) -> HashMap<&'a str, usize> {
    let mut counts = HashMap::new();
    for text in texts {
        for token in text.split_whitespace() {
            if token.chars().count() < MIN_KEYWORD_LEN {
                continue;
            }
            if skip_stopwords && STOPWORDS.contains(&token) {
                continue;
            }
            *counts.entry(token).or_insert(0) += 1;
        }
    }
    counts
}

fn top_n(counts: HashMap<&str, usize>, n: usize) -> Vec<KeywordEntry> {
    let mut entries: Vec<(&str, usize)> = counts.into_iter().collect();
    // highest count first; ties alphabetical for a stable view
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    entries
        .into_iter()
        .take(n)
        .map(|(word, count)| KeywordEntry {
            word: word.to_string(),
            count,
        })
        .collect()
}

/// Top keywords over cleaned texts, no stopword filtering.
pub fn top_keywords<'a>(texts: impl Iterator<Item = &'a str>, n: usize) -> Vec<KeywordEntry> {
    top_n(count_tokens(texts, false), n)
}

/// Top keywords over cleaned texts with the stopword set stripped.
pub fn top_keywords_filtered<'a>(
    texts: impl Iterator<Item = &'a str>,
    n: usize,
) -> Vec<KeywordEntry> {
    top_n(count_tokens(texts, true), n)
}
