//! Daily reflection prompt rotation.
//!
//! The prompt for a day is fixed by its day-of-year, so every device shows
//! the same question on the same date and the cycle restarts each January.

use chrono::{Datelike, NaiveDate};

pub const DAILY_PROMPTS: [&str; 30] = [
    "What made you smile today?",
    "What's one thing you're grateful for?",
    "What challenged you today?",
    "How are you feeling right now?",
    "What would make tomorrow better?",
    "What's something you learned today?",
    "What's your biggest win today?",
    "What's something you're looking forward to?",
    "What's one thing you'd like to improve?",
    "What made you feel proud today?",
    "What's something that made you laugh?",
    "What's your biggest worry right now?",
    "What's something you're excited about?",
    "What's one thing you're proud of?",
    "What's something you're curious about?",
    "What's your biggest goal right now?",
    "What's something that inspired you?",
    "What's one thing you'd like to change?",
    "What's something you're thankful for?",
    "What's your biggest fear?",
    "What's something you're passionate about?",
    "What's one thing you'd like to learn?",
    "What's something that made you think?",
    "What's your biggest dream?",
    "What's something you're working on?",
    "What's one thing you'd like to achieve?",
    "What's something that made you happy?",
    "What's your biggest strength?",
    "What's something you're hopeful about?",
    "What's one thing you'd like to remember?",
];

/// Returns the reflection prompt for `date`.
pub fn prompt_for_date(date: NaiveDate) -> &'static str {
    let index = (date.ordinal0() as usize) % DAILY_PROMPTS.len();
    DAILY_PROMPTS[index]
}
