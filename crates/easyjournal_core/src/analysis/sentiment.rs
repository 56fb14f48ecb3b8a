//! Lexicon-based sentiment classification.
//!
//! Exact token membership only: no stemming, no substring matching, so
//! `"happy!"` does not count as `"happy"`.

use super::tokenize;
use crate::model::entry::Mood;
use once_cell::sync::Lazy;
use std::collections::HashSet;

const POSITIVE_WORDS: &[&str] = &[
    "happy", "joy", "excited", "grateful", "blessed", "wonderful", "amazing", "great", "good",
    "love", "like", "enjoy", "fun", "smile", "laugh", "positive", "optimistic", "hopeful",
    "proud", "accomplished", "successful", "achieved", "improved", "better", "best",
    "fantastic", "excellent", "brilliant", "perfect", "beautiful", "peaceful", "calm",
    "relaxed", "content", "satisfied", "fulfilled", "inspired", "motivated", "energized",
    "refreshed", "renewed", "thankful", "appreciative", "lucky", "fortunate", "privileged",
];

const NEGATIVE_WORDS: &[&str] = &[
    "sad", "angry", "frustrated", "disappointed", "worried", "anxious", "stressed", "tired",
    "exhausted", "overwhelmed", "depressed", "lonely", "isolated", "hurt", "pain", "suffering",
    "struggling", "difficult", "hard", "challenging", "problem", "issue", "trouble", "bad",
    "terrible", "awful", "horrible", "miserable", "unhappy", "dissatisfied", "fear", "afraid",
    "scared", "terrified", "nervous", "tense", "irritated", "annoyed", "upset", "distressed",
    "hopeless", "helpless", "defeated", "lost", "confused", "uncertain", "doubtful",
    "skeptical", "cynical", "bitter", "resentful",
];

static POSITIVE: Lazy<HashSet<&'static str>> =
    Lazy::new(|| POSITIVE_WORDS.iter().copied().collect());
static NEGATIVE: Lazy<HashSet<&'static str>> =
    Lazy::new(|| NEGATIVE_WORDS.iter().copied().collect());

/// Lexicon hit counts for one text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentimentScore {
    pub positive: usize,
    pub negative: usize,
}

impl SentimentScore {
    /// Majority wins; ties (including 0/0) are neutral.
    pub fn mood(self) -> Mood {
        use std::cmp::Ordering;
        match self.positive.cmp(&self.negative) {
            Ordering::Greater => Mood::Positive,
            Ordering::Less => Mood::Negative,
            Ordering::Equal => Mood::Neutral,
        }
    }
}

/// Counts positive and negative lexicon tokens in `text`.
pub fn score(text: &str) -> SentimentScore {
    tokenize(text)
        .iter()
        .fold(SentimentScore::default(), |mut acc, token| {
            if POSITIVE.contains(token.as_str()) {
                acc.positive += 1;
            } else if NEGATIVE.contains(token.as_str()) {
                acc.negative += 1;
            }
            acc
        })
}

/// Classifies free text into one of three moods. Never fails.
pub fn classify(text: &str) -> Mood {
    score(text).mood()
}
