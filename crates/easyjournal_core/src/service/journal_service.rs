//! Journal use-case service.
//!
//! # Responsibility
//! - Save, edit, delete and browse dated reflections.
//! - Classify mood at save time and feed the monthly aggregator.
//!
//! # Invariants
//! - Blank answers are rejected before storage is touched.
//! - `save_answer` upserts: a second save on one date replaces the first.
//! - `update_entry` keeps the caller-provided mood; only saves classify.

use crate::analysis::sentiment::classify;
use crate::model::entry::{EntryValidationError, JournalEntry};
use crate::repo::entry_repo::{EntryRepository, RepoError, RepoResult};
use crate::service::aggregate::{
    AggregateError, AggregateResult, MonthlyAggregator, MONTHLY_WINDOW,
};
use chrono::NaiveDate;
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Service error for journal use cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Input failed entry validation (blank answer).
    Validation(EntryValidationError),
    /// No entry stored for the given date.
    EntryNotFound(NaiveDate),
    /// Fewer entries than a monthly summary requires.
    InsufficientData { required: u32, actual: u32 },
    /// Persistence-layer failure.
    Repo(RepoError),
    /// Write succeeded but read-back disagrees.
    InconsistentState(&'static str),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::EntryNotFound(date) => write!(f, "no journal entry for {date}"),
            Self::InsufficientData { required, actual } => write!(
                f,
                "need {required} entries to generate summary, have {actual}"
            ),
            Self::Repo(err) => write!(f, "{err}"),
            Self::InconsistentState(details) => write!(f, "inconsistent journal state: {details}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for ServiceError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::NotFound(date) => Self::EntryNotFound(date),
            RepoError::Validation(err) => Self::Validation(err),
            other => Self::Repo(other),
        }
    }
}

impl From<EntryValidationError> for ServiceError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<AggregateError> for ServiceError {
    fn from(value: AggregateError) -> Self {
        match value {
            AggregateError::InsufficientData { required, actual } => {
                Self::InsufficientData { required, actual }
            }
        }
    }
}

/// Journal service facade over an entry repository.
pub struct JournalService<R: EntryRepository> {
    repo: R,
}

impl<R: EntryRepository> JournalService<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Saves the answer for `date`, classifying its mood.
    ///
    /// Replaces any entry already stored for that date.
    pub fn save_answer(
        &self,
        date: NaiveDate,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Result<JournalEntry, ServiceError> {
        let entry = JournalEntry::new(date, question, answer);
        entry.validate()?;
        let mood = classify(&entry.answer);
        let entry = entry.with_mood(mood);

        self.repo.upsert_entry(&entry)?;
        info!("event=entry_save module=service status=ok date={date} mood={mood}");

        self.repo
            .get_entry(date)?
            .ok_or(ServiceError::InconsistentState("saved entry not found in read-back"))
    }

    /// Replaces an existing entry as given.
    pub fn update_entry(&self, entry: &JournalEntry) -> Result<JournalEntry, ServiceError> {
        entry.validate()?;
        self.repo.update_entry(entry)?;
        info!(
            "event=entry_update module=service status=ok date={}",
            entry.date
        );

        self.repo
            .get_entry(entry.date)?
            .ok_or(ServiceError::InconsistentState("updated entry not found in read-back"))
    }

    pub fn delete_entry(&self, date: NaiveDate) -> Result<(), ServiceError> {
        self.repo.delete_entry(date)?;
        info!("event=entry_delete module=service status=ok date={date}");
        Ok(())
    }

    pub fn get_entry(&self, date: NaiveDate) -> RepoResult<Option<JournalEntry>> {
        self.repo.get_entry(date)
    }

    /// All entries, newest first.
    pub fn list_entries(&self) -> RepoResult<Vec<JournalEntry>> {
        self.repo.list_entries()
    }

    /// Entries in `[start, end]`, oldest first.
    pub fn entries_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<JournalEntry>> {
        self.repo.entries_in_range(start, end)
    }

    pub fn entry_count(&self) -> RepoResult<u32> {
        self.repo.count_entries()
    }

    /// Whether enough entries exist for a monthly summary.
    pub fn summary_available(&self) -> RepoResult<bool> {
        Ok(self.repo.count_entries()? >= MONTHLY_WINDOW)
    }

    /// Loads the latest window and aggregates it.
    pub async fn monthly_summary(
        &self,
        aggregator: &MonthlyAggregator,
    ) -> Result<AggregateResult, ServiceError> {
        let window = self.repo.last_entries(MONTHLY_WINDOW)?;
        Ok(aggregator.aggregate_monthly(&window).await?)
    }
}
