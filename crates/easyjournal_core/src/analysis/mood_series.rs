//! Mood time series for plotting.

use crate::model::entry::{JournalEntry, Mood};
use chrono::NaiveDate;
use serde::Serialize;

/// One plotted point; `value` is [`Mood::value`] of the stored mood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MoodDataPoint {
    pub date: NaiveDate,
    pub mood: Mood,
    pub value: f32,
}

impl MoodDataPoint {
    /// Short axis label, e.g. `03/07`.
    pub fn label(&self) -> String {
        self.date.format("%m/%d").to_string()
    }
}

/// Maps entries to points one-to-one, preserving input order.
///
/// Uses the mood stored on each entry; text is not re-classified.
pub fn build_mood_series(entries: &[JournalEntry]) -> Vec<MoodDataPoint> {
    entries
        .iter()
        .map(|entry| MoodDataPoint {
            date: entry.date,
            mood: entry.mood,
            value: entry.mood.value(),
        })
        .collect()
}
