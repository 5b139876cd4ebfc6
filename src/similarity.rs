//! Normalized Indel similarity.
//!
//! The Indel distance counts insertions and deletions only, so
//! `indel(a, b) = |a| + |b| - 2 * lcs(a, b)`. Normalizing by the combined length
//! gives a score in `[0, 1]` that is comparable across short and long strings.

use similar::{ChangeTag, TextDiff};

/// Similarity of two strings in `[0.0, 1.0]`.
///
/// Symmetric, and `1.0` for identical strings (including two empty ones).
/// Characters are Unicode scalar values; no case folding is applied here.
pub fn similarity(a: &str, b: &str) -> f64 {
    let total = a.chars().count() + b.chars().count();
    if total == 0 {
        return 1.0;
    }

    let common = TextDiff::from_chars(a, b)
        .iter_all_changes()
        .filter(|change| change.tag() == ChangeTag::Equal)
        .count();

    (2 * common) as f64 / total as f64
}
