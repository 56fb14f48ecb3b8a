//! Monthly aggregation over the most recent entries.
//!
//! # Responsibility
//! - Guard the minimum window size.
//! - Run mood series, keyword ranking and summary generation over one
//!   immutable window and assemble the result.
//!
//! # Invariants
//! - Windows smaller than [`MONTHLY_WINDOW`] fail with `InsufficientData`
//!   before any generator call.
//! - Mood series and keywords are pure functions of the window; only the
//!   summary text may vary between runs.
//! - Results are display-only and never written back to storage.

use crate::analysis::keywords::{rank_keywords, WordCloudItem, DEFAULT_KEYWORD_LIMIT};
use crate::analysis::mood_series::{build_mood_series, MoodDataPoint};
use crate::config::SummaryConfig;
use crate::model::entry::JournalEntry;
use crate::summary::{request_summary, TextGenerator};
use log::info;
use serde::Serialize;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Number of entries a monthly summary needs and looks at.
pub const MONTHLY_WINDOW: u32 = 30;

/// Aggregation precondition failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AggregateError {
    InsufficientData { required: u32, actual: u32 },
}

impl Display for AggregateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InsufficientData { required, actual } => write!(
                f,
                "need {required} entries to generate summary, have {actual}"
            ),
        }
    }
}

impl Error for AggregateError {}

/// Output of one aggregation run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateResult {
    pub summary: String,
    pub mood_series: Vec<MoodDataPoint>,
    pub keywords: Vec<WordCloudItem>,
}

/// Monthly aggregation orchestrator.
///
/// Holds the text generator explicitly; construct one per composition root.
#[derive(Clone)]
pub struct MonthlyAggregator {
    generator: Arc<dyn TextGenerator>,
    summary_timeout: Duration,
    keyword_limit: usize,
}

impl MonthlyAggregator {
    pub fn new(generator: Arc<dyn TextGenerator>, summary_timeout: Duration) -> Self {
        Self {
            generator,
            summary_timeout,
            keyword_limit: DEFAULT_KEYWORD_LIMIT,
        }
    }

    /// Builds an aggregator using the timeout from `config`.
    pub fn from_config(generator: Arc<dyn TextGenerator>, config: &SummaryConfig) -> Self {
        Self::new(generator, config.timeout)
    }

    /// Overrides the number of word-cloud items (default 20).
    pub fn with_keyword_limit(mut self, limit: usize) -> Self {
        self.keyword_limit = limit;
        self
    }

    /// Aggregates `window` into summary, mood series and keywords.
    ///
    /// The window is used as given (callers pass newest-first entries from
    /// the store); mood comes from each entry's stored classification.
    pub async fn aggregate_monthly(
        &self,
        window: &[JournalEntry],
    ) -> Result<AggregateResult, AggregateError> {
        let actual = u32::try_from(window.len()).unwrap_or(u32::MAX);
        if actual < MONTHLY_WINDOW {
            info!(
                "event=aggregate_monthly module=service status=rejected reason=insufficient_data entries={actual} required={MONTHLY_WINDOW}"
            );
            return Err(AggregateError::InsufficientData {
                required: MONTHLY_WINDOW,
                actual,
            });
        }

        let started_at = Instant::now();
        let summary_fut = request_summary(self.generator.as_ref(), window, self.summary_timeout);
        let local_fut = async {
            (
                build_mood_series(window),
                rank_keywords(window, self.keyword_limit),
            )
        };
        let (summary, (mood_series, keywords)) = tokio::join!(summary_fut, local_fut);

        info!(
            "event=aggregate_monthly module=service status=ok entries={actual} keywords={} duration_ms={}",
            keywords.len(),
            started_at.elapsed().as_millis()
        );

        Ok(AggregateResult {
            summary,
            mood_series,
            keywords,
        })
    }
}
