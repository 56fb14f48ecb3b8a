//! Core domain logic for EasyJournal.
//! This crate is the single source of truth for entry invariants and the
//! monthly aggregation pipeline.

pub mod analysis;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod prompts;
pub mod repo;
pub mod service;
pub mod summary;

pub use analysis::keywords::{rank_keywords, WordCloudItem, DEFAULT_KEYWORD_LIMIT};
pub use analysis::mood_series::{build_mood_series, MoodDataPoint};
pub use analysis::sentiment::classify;
pub use config::{ConfigError, SummaryConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::entry::{EntryValidationError, JournalEntry, Mood};
pub use prompts::prompt_for_date;
pub use repo::entry_repo::{EntryRepository, RepoError, RepoResult, SqliteEntryRepository};
pub use service::aggregate::{
    AggregateError, AggregateResult, MonthlyAggregator, MONTHLY_WINDOW,
};
pub use service::journal_service::{JournalService, ServiceError};
pub use summary::{
    request_summary, GeminiClient, GenerationError, TextGenerator, UnconfiguredGenerator,
    NO_ENTRIES_MESSAGE, SUMMARY_FALLBACK,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
