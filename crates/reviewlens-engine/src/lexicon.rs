//! Lexicon store: built-in definitions and snapshot IO
//!
//! The built-in lexicon is the hand-curated Indonesian marketplace-review
//! vocabulary the platform ships with. A trained snapshot produced by the
//! offline trainer can replace it at process start.

use reviewlens_core::{Error, Lexicon, LexiconSnapshot, Result};
use std::path::Path;

/// Curated positive vocabulary with weights
const POSITIVE: &[(&str, f64)] = &[
    ("bagus", 2.5),
    ("baik", 2.5),
    ("suka", 2.5),
    ("puas", 2.5),
    ("mantap", 2.5),
    ("recommended", 2.5),
    ("cepat", 2.0),
    ("murah", 2.0),
    ("berkualitas", 2.5),
    ("sempurna", 2.5),
    ("original", 2.0),
    ("memuaskan", 2.5),
    ("top", 2.5),
    ("terbaik", 2.5),
    ("ramah", 2.0),
    ("aman", 2.0),
    ("rapih", 2.0),
    ("senang", 2.0),
    ("hebat", 2.5),
    ("luar", 1.5),
    ("biasa", 1.5),
    ("wow", 1.5),
    ("keren", 2.0),
    ("cocok", 1.5),
    ("pas", 1.5),
    ("sesuai", 1.5),
    ("lengkap", 1.5),
    ("fresh", 1.0),
    ("enak", 2.0),
    ("nyaman", 2.0),
    ("lembut", 1.5),
    ("halus", 1.5),
    ("tepat", 1.5),
    ("amanah", 2.0),
    ("sukses", 1.5),
    ("salut", 1.5),
    ("jempol", 2.0),
    ("gemess", 1.0),
    ("lucu", 1.5),
    ("cantik", 2.0),
    ("imut", 1.5),
    ("gemes", 1.0),
    ("recomend", 2.5),
    ("love", 2.0),
    ("sempurnah", 2.5),
    ("oke", 1.5),
    ("ok", 1.5),
    ("mantul", 2.0),
    ("mantab", 2.0),
    ("menarik", 1.5),
    ("indah", 1.5),
    ("elok", 1.0),
    ("mulus", 1.5),
    ("bersih", 1.5),
    ("sehat", 1.0),
    ("segar", 1.0),
    ("wang", 1.0),
    ("harum", 1.0),
    ("lezat", 1.5),
    ("nikmat", 1.5),
    ("legit", 1.0),
    ("renyah", 1.0),
];

/// Curated negative vocabulary with weights
const NEGATIVE: &[(&str, f64)] = &[
    ("buruk", 2.5),
    ("jelek", 2.5),
    ("kecewa", 2.5),
    ("lambat", 2.0),
    ("mahal", 2.0),
    ("rusak", 2.5),
    ("cacat", 2.5),
    ("mengecewakan", 2.5),
    ("palsu", 2.5),
    ("gagal", 2.5),
    ("error", 2.0),
    ("bermasalah", 2.0),
    ("reject", 2.0),
    ("komplain", 2.0),
    ("salah", 2.0),
    ("tipis", 1.5),
    ("kecil", 1.5),
    ("panas", 1.5),
    ("kasar", 1.5),
    ("kotor", 2.0),
    ("bau", 2.0),
    ("retak", 2.0),
    ("sobek", 2.0),
    ("lecet", 2.0),
    ("penyok", 2.0),
    ("bolong", 2.0),
    ("kurang", 1.5),
    ("tidak", 1.5),
    ("jangan", 1.5),
    ("kapok", 2.0),
    ("rugi", 2.0),
    ("bohong", 2.5),
    ("menipu", 2.5),
    ("tipu", 2.5),
    ("ngawur", 2.0),
    ("menyesal", 2.0),
    ("nyesel", 2.0),
];

/// Curated neutral vocabulary with weights.
///
/// "biasa" carries more weight here than in the positive lexicon (where it
/// only supports the "luar biasa" idiom), so plain "biasa saja" reviews
/// resolve to neutral.
const NEUTRAL: &[(&str, f64)] = &[
    ("biasa", 2.0),
    ("lumayan", 1.5),
    ("standar", 1.5),
    ("oke", 1.5),
    ("cukup", 1.5),
    ("pas", 1.0),
    ("sesuai", 1.0),
    ("normal", 1.5),
    ("regular", 1.5),
    ("average", 1.5),
    ("mediocre", 1.5),
    ("moderat", 1.5),
    ("sedang", 1.5),
    ("pertengahan", 1.5),
    ("tengah", 1.5),
    ("netral", 2.0),
    ("imbang", 1.5),
    ("seimbang", 1.5),
];

fn to_lexicon(entries: &[(&str, f64)]) -> Lexicon {
    entries
        .iter()
        .map(|(word, weight)| (word.to_string(), *weight))
        .collect()
}

/// The built-in lexicon snapshot used when no trained snapshot is supplied.
pub fn builtin() -> LexiconSnapshot {
    LexiconSnapshot {
        positive: to_lexicon(POSITIVE),
        negative: to_lexicon(NEGATIVE),
        neutral: to_lexicon(NEUTRAL),
        sample_count: 0,
        source_files: Vec::new(),
        trained_at: None,
    }
}

/// Load and validate a trained snapshot from a JSON file.
///
/// Any failure here is fatal to startup; a corrupt snapshot would silently
/// invalidate every subsequent classification.
pub fn load(path: impl AsRef<Path>) -> Result<LexiconSnapshot> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)
        .map_err(|e| Error::snapshot(format!("failed to read {}: {e}", path.display())))?;
    let snapshot: LexiconSnapshot = serde_json::from_str(&raw)
        .map_err(|e| Error::snapshot(format!("failed to parse {}: {e}", path.display())))?;
    snapshot.validate()?;
    tracing::info!(
        path = %path.display(),
        words = snapshot.word_count(),
        samples = snapshot.sample_count,
        "loaded lexicon snapshot"
    );
    Ok(snapshot)
}

/// Write a snapshot as pretty-printed JSON.
pub fn save(snapshot: &LexiconSnapshot, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(snapshot)?;
    std::fs::write(path, json)?;
    Ok(())
}
