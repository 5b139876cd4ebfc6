//! Selection of a menu option from free text.
//!
//! Two passes, label first:
//! 1. the lowercased input against every lowercased label;
//! 2. the raw input against every 1-based option number.
//!
//! Each pass keeps the first option with the highest score and accepts it if
//! the score reaches the threshold. Typing a near-match of either the label or
//! the displayed number therefore works, with labels taking precedence.

use crate::config::MatchingConfig;
use crate::similarity::similarity;
use crate::tree::{MenuOption, Target};

/// Minimum similarity for a match unless configured otherwise.
pub const DEFAULT_THRESHOLD: f64 = 0.5;

/// Pick the option `input` refers to, or `None` if nothing is close enough.
pub fn resolve(options: &[MenuOption], input: &str, threshold: f64) -> Option<Target> {
    let folded = input.to_lowercase();
    if let Some((index, score)) = best(options.iter().map(|o| similarity(&o.label.to_lowercase(), &folded))) {
        tracing::trace!(input, label = %options[index].label, score, "best label match");
        if score >= threshold {
            return Some(options[index].target);
        }
    }

    if let Some((index, score)) = best((1..=options.len()).map(|n| similarity(&n.to_string(), input))) {
        tracing::trace!(input, number = index + 1, score, "best number match");
        if score >= threshold {
            return Some(options[index].target);
        }
    }

    None
}

/// [`resolve`] with the threshold from configuration.
pub fn resolve_with(options: &[MenuOption], input: &str, matching: &MatchingConfig) -> Option<Target> {
    resolve(options, input, matching.threshold)
}

/// Index and value of the first maximum.
fn best(scores: impl Iterator<Item = f64>) -> Option<(usize, f64)> {
    scores.enumerate().fold(None, |best, (i, score)| match best {
        Some((_, top)) if score <= top => best,
        _ => Some((i, score)),
    })
}
