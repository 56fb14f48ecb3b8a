//! Natural-language monthly summary via an external text generator.
//!
//! # Responsibility
//! - Render a window of entries into the summary prompt.
//! - Call the generator under a timeout and absorb every failure.
//!
//! # Invariants
//! - [`request_summary`] never returns an error and never returns an empty
//!   string.
//! - Empty input short-circuits without calling the generator.
//! - Log lines carry outcome metadata only, never entry text.

pub mod gemini;

use crate::model::entry::JournalEntry;
use async_trait::async_trait;
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::{Duration, Instant};

pub use gemini::GeminiClient;

/// Returned when there is nothing to summarize.
pub const NO_ENTRIES_MESSAGE: &str = "No entries to summarize.";

/// Returned whenever the generator fails, times out or answers blank.
pub const SUMMARY_FALLBACK: &str =
    "Unable to generate AI summary at this time. Please try again later.";

const SUMMARY_INSTRUCTION: &str = "Summarize the emotional and thematic pattern from the following 30 journal entries in a warm, supportive tone:";

/// Failure modes of a [`TextGenerator`].
#[derive(Debug)]
pub enum GenerationError {
    /// Transport-level failure (DNS, TLS, connection reset, client timeout).
    Transport(String),
    /// Non-success HTTP status from the backend.
    Status { status: u16, body: String },
    /// Response decoded but did not contain usable text.
    MalformedResponse(String),
    /// Generator is not configured (e.g. missing credential).
    NotConfigured(&'static str),
}

impl Display for GenerationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Transport(message) => write!(f, "text generation transport error: {message}"),
            Self::Status { status, body } => {
                write!(f, "text generation failed with status {status}: {body}")
            }
            Self::MalformedResponse(message) => {
                write!(f, "malformed text generation response: {message}")
            }
            Self::NotConfigured(what) => write!(f, "text generator not configured: {what}"),
        }
    }
}

impl Error for GenerationError {}

impl GenerationError {
    fn code(&self) -> &'static str {
        match self {
            Self::Transport(_) => "transport",
            Self::Status { .. } => "status",
            Self::MalformedResponse(_) => "malformed",
            Self::NotConfigured(_) => "not_configured",
        }
    }
}

/// Opaque text-generation backend: one prompt in, one text out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}

/// Stand-in used when no backend could be built; every call fails with
/// `NotConfigured`, so summaries degrade to [`SUMMARY_FALLBACK`].
#[derive(Debug, Clone, Copy)]
pub struct UnconfiguredGenerator {
    missing: &'static str,
}

impl UnconfiguredGenerator {
    pub fn new(missing: &'static str) -> Self {
        Self { missing }
    }
}

#[async_trait]
impl TextGenerator for UnconfiguredGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::NotConfigured(self.missing))
    }
}

/// Renders the summary prompt: instruction, blank line, one
/// `YYYY-MM-DD: answer` line per entry in input order.
pub fn build_summary_prompt(entries: &[JournalEntry]) -> String {
    let lines = entries
        .iter()
        .map(|entry| format!("{}: {}", entry.date.format("%Y-%m-%d"), entry.answer))
        .collect::<Vec<_>>()
        .join("\n");
    format!("{SUMMARY_INSTRUCTION}\n\n{lines}")
}

/// Produces a narrative summary for `entries`, best effort.
///
/// Any generator error, an elapsed `timeout`, or a blank response yields
/// [`SUMMARY_FALLBACK`]. Dropping the returned future cancels the call.
pub async fn request_summary(
    generator: &dyn TextGenerator,
    entries: &[JournalEntry],
    timeout: Duration,
) -> String {
    if entries.is_empty() {
        return NO_ENTRIES_MESSAGE.to_string();
    }

    let prompt = build_summary_prompt(entries);
    let started_at = Instant::now();
    let outcome = tokio::time::timeout(timeout, generator.generate(&prompt)).await;
    let duration_ms = started_at.elapsed().as_millis();

    match outcome {
        Ok(Ok(text)) if !text.trim().is_empty() => {
            info!(
                "event=summary_generate module=summary status=ok entries={} duration_ms={duration_ms}",
                entries.len()
            );
            text.trim().to_string()
        }
        Ok(Ok(_)) => {
            warn!("event=summary_generate module=summary status=fallback reason=empty_response duration_ms={duration_ms}");
            SUMMARY_FALLBACK.to_string()
        }
        Ok(Err(err)) => {
            warn!(
                "event=summary_generate module=summary status=fallback reason={} duration_ms={duration_ms} error={err}",
                err.code()
            );
            SUMMARY_FALLBACK.to_string()
        }
        Err(_) => {
            warn!(
                "event=summary_generate module=summary status=fallback reason=timeout timeout_ms={}",
                timeout.as_millis()
            );
            SUMMARY_FALLBACK.to_string()
        }
    }
}
