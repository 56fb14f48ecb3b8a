//! Word-frequency ranking for the word cloud.
//!
//! # Invariants
//! - Counts accumulate across the whole window, not per entry.
//! - Ties keep first-encounter order, so output is reproducible.
//! - `size = count / max_count * 3 + 1`, with `max_count` taken over every
//!   counted word and floored at 1; sizes therefore lie in `[1, 4]`.

use super::tokenize;
use crate::model::entry::JournalEntry;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::{HashMap, HashSet};

/// Default number of items shown in the word cloud.
pub const DEFAULT_KEYWORD_LIMIT: usize = 20;

/// Tokens with this many characters or fewer are dropped.
///
/// Length is counted in Unicode scalar values (`chars()`), not UTF-16 code
/// units: a token of two astral-plane emoji has length 2 and is dropped.
const MIN_TOKEN_CHARS: usize = 2;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
    "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does", "did",
    "will", "would", "could", "should", "may", "might", "must", "can", "this", "that", "these",
    "those", "i", "you", "he", "she", "it", "we", "they", "me", "him", "her", "us", "them", "my",
    "your", "his", "its", "our", "their",
];

static STOP_SET: Lazy<HashSet<&'static str>> = Lazy::new(|| STOP_WORDS.iter().copied().collect());

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WordCloudItem {
    pub word: String,
    pub frequency: u32,
    pub size: f32,
}

/// Ranks non-stop-word tokens by frequency and returns at most `limit` items.
pub fn rank_keywords(entries: &[JournalEntry], limit: usize) -> Vec<WordCloudItem> {
    let counts = count_words(entries);
    let max_count = counts.iter().map(|(_, count)| *count).max().unwrap_or(0).max(1);

    let mut ranked = counts;
    // Stable sort: equal counts stay in encounter order.
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked
        .into_iter()
        .take(limit)
        .map(|(word, frequency)| WordCloudItem {
            word,
            frequency,
            size: frequency as f32 / max_count as f32 * 3.0 + 1.0,
        })
        .collect()
}

/// Builds `(word, count)` pairs in first-encounter order.
fn count_words(entries: &[JournalEntry]) -> Vec<(String, u32)> {
    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut counts: Vec<(String, u32)> = Vec::new();

    for token in entries.iter().flat_map(|entry| tokenize(&entry.answer)) {
        if !is_keyword(&token) {
            continue;
        }
        match positions.get(&token) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(token.clone(), counts.len());
                counts.push((token, 1));
            }
        }
    }

    counts
}

fn is_keyword(token: &str) -> bool {
    token.chars().count() > MIN_TOKEN_CHARS && !STOP_SET.contains(token)
}
