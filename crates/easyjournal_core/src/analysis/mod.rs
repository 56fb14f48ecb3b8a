//! Pure text analysis over journal entries.
//!
//! # Responsibility
//! - Classify answer text into a [`Mood`](crate::model::entry::Mood).
//! - Derive the mood time series and keyword frequency table for a window.
//!
//! # Invariants
//! - Every function here is total and deterministic for a given input.
//! - Tokenization is lowercase + split on whitespace runs; punctuation is
//!   kept as part of the token.

pub mod keywords;
pub mod mood_series;
pub mod sentiment;

use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid ws regex"));

/// Lowercases `text` and splits it on runs of whitespace.
///
/// Leading/trailing whitespace produces no empty tokens.
pub(crate) fn tokenize(text: &str) -> Vec<String> {
    let lowered = text.to_lowercase();
    WHITESPACE_RE
        .split(lowered.trim())
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
        .collect()
}
