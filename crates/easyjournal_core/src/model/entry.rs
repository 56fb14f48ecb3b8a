//! Journal entry domain model.
//!
//! # Responsibility
//! - Define the dated reflection record and its mood classification.
//! - Provide write-path validation shared by repository and service code.
//!
//! # Invariants
//! - `date` is the identity key; saving twice on one date replaces the row.
//! - `answer` must contain at least one non-whitespace character.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Three-bucket mood derived from lexicon scoring of the answer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mood {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Mood {
    /// Normalized plotting value: positive `1.0`, neutral `0.5`, negative `0.0`.
    pub fn value(self) -> f32 {
        match self {
            Self::Positive => 1.0,
            Self::Neutral => 0.5,
            Self::Negative => 0.0,
        }
    }

    /// Stable lowercase name used for storage and display.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Positive => "positive",
            Self::Neutral => "neutral",
            Self::Negative => "negative",
        }
    }

    /// Parses a storage name produced by [`Mood::as_str`].
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "positive" => Some(Self::Positive),
            "neutral" => Some(Self::Neutral),
            "negative" => Some(Self::Negative),
            _ => None,
        }
    }
}

impl Display for Mood {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

/// Validation failures for entry write paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryValidationError {
    /// Answer is empty or whitespace-only.
    BlankAnswer,
}

impl Display for EntryValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankAnswer => write!(f, "answer must not be blank"),
        }
    }
}

impl Error for EntryValidationError {}

/// One daily reflection: the prompt shown and the user's answer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    /// Calendar day this entry belongs to. Unique key.
    pub date: NaiveDate,
    /// Prompt text shown to the user.
    pub question: String,
    /// Free-form answer text.
    pub answer: String,
    /// Unix epoch milliseconds of the last save.
    pub created_at: i64,
    /// Mood classified at save time.
    pub mood: Mood,
}

impl JournalEntry {
    /// Creates an entry stamped with the current time and neutral mood.
    ///
    /// Callers that classify text set `mood` afterwards; construction does
    /// not validate.
    pub fn new(date: NaiveDate, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            date,
            question: question.into(),
            answer: answer.into(),
            created_at: Utc::now().timestamp_millis(),
            mood: Mood::Neutral,
        }
    }

    /// Returns a copy with the given mood.
    pub fn with_mood(mut self, mood: Mood) -> Self {
        self.mood = mood;
        self
    }

    /// Validates write-path invariants.
    pub fn validate(&self) -> Result<(), EntryValidationError> {
        if self.answer.trim().is_empty() {
            return Err(EntryValidationError::BlankAnswer);
        }
        Ok(())
    }
}
