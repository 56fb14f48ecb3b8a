use async_trait::async_trait;
use chrono::{Duration as Days, NaiveDate};
use easyjournal_core::db::open_db_in_memory;
use easyjournal_core::{
    AggregateError, GenerationError, JournalEntry, JournalService, Mood, MonthlyAggregator,
    ServiceError, SqliteEntryRepository, TextGenerator, UnconfiguredGenerator, MONTHLY_WINDOW,
    SUMMARY_FALLBACK,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Records prompts and replies with a fixed text.
#[derive(Default)]
struct RecordingGenerator {
    prompts: Mutex<Vec<String>>,
    calls: AtomicUsize,
}

#[async_trait]
impl TextGenerator for RecordingGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.prompts.lock().unwrap().push(prompt.to_string());
        Ok("You found calm in small routines this month.".to_string())
    }
}

struct FailingGenerator;

#[async_trait]
impl TextGenerator for FailingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        Err(GenerationError::Status {
            status: 503,
            body: "overloaded".to_string(),
        })
    }
}

struct HangingGenerator;

#[async_trait]
impl TextGenerator for HangingGenerator {
    async fn generate(&self, _prompt: &str) -> Result<String, GenerationError> {
        std::future::pending::<()>().await;
        unreachable!()
    }
}

fn window(len: usize) -> Vec<JournalEntry> {
    let start = NaiveDate::from_ymd_opt(2024, 6, 30).unwrap();
    (0..len)
        .map(|idx| {
            let mood = match idx % 3 {
                0 => Mood::Positive,
                1 => Mood::Neutral,
                _ => Mood::Negative,
            };
            JournalEntry::new(
                start - Days::days(idx as i64),
                "What made you smile today?",
                format!("walked the garden with coffee, day{idx}"),
            )
            .with_mood(mood)
        })
        .collect()
}

fn aggregator(generator: Arc<dyn TextGenerator>) -> MonthlyAggregator {
    MonthlyAggregator::new(generator, Duration::from_secs(5))
}

#[tokio::test]
async fn short_window_is_rejected_without_calling_generator() {
    let generator = Arc::new(RecordingGenerator::default());
    let aggregator = aggregator(generator.clone());

    let err = aggregator.aggregate_monthly(&window(29)).await.unwrap_err();
    assert_eq!(
        err,
        AggregateError::InsufficientData {
            required: MONTHLY_WINDOW,
            actual: 29
        }
    );
    assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn full_window_produces_all_parts() {
    let generator = Arc::new(RecordingGenerator::default());
    let aggregator = aggregator(generator.clone());
    let entries = window(30);

    let result = aggregator.aggregate_monthly(&entries).await.unwrap();

    assert_eq!(result.summary, "You found calm in small routines this month.");
    assert_eq!(result.mood_series.len(), entries.len());
    assert_eq!(result.mood_series[0].value, 1.0);
    assert_eq!(result.mood_series[2].value, 0.0);

    assert!(result.keywords.len() <= 20);
    assert_eq!(result.keywords[0].word, "walked");
    assert_eq!(result.keywords[0].frequency, 30);
    assert_eq!(result.keywords[0].size, 4.0);
    assert!(result.keywords.iter().all(|k| k.word != "the" && k.word != "with"));

    let prompts = generator.prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert!(prompts[0].contains("2024-06-30: walked the garden with coffee, day0"));
}

#[tokio::test]
async fn larger_window_is_accepted() {
    let generator = Arc::new(RecordingGenerator::default());
    let result = aggregator(generator)
        .aggregate_monthly(&window(45))
        .await
        .unwrap();
    assert_eq!(result.mood_series.len(), 45);
}

#[tokio::test]
async fn generator_failure_degrades_to_fallback() {
    let result = aggregator(Arc::new(FailingGenerator))
        .aggregate_monthly(&window(30))
        .await
        .unwrap();
    assert_eq!(result.summary, SUMMARY_FALLBACK);
    assert_eq!(result.mood_series.len(), 30);
    assert!(!result.keywords.is_empty());
}

#[tokio::test(start_paused = true)]
async fn generator_timeout_degrades_to_fallback() {
    let result = aggregator(Arc::new(HangingGenerator))
        .aggregate_monthly(&window(30))
        .await
        .unwrap();
    assert_eq!(result.summary, SUMMARY_FALLBACK);
}

#[tokio::test]
async fn repeated_runs_are_stable_apart_from_summary() {
    let aggregator = aggregator(Arc::new(RecordingGenerator::default()));
    let entries = window(30);

    let first = aggregator.aggregate_monthly(&entries).await.unwrap();
    let second = aggregator.aggregate_monthly(&entries).await.unwrap();
    assert_eq!(first.mood_series, second.mood_series);
    assert_eq!(first.keywords, second.keywords);
    assert!(!second.summary.is_empty());
}

#[tokio::test]
async fn service_summary_uses_latest_thirty_entries() {
    let conn = open_db_in_memory().unwrap();
    let service = JournalService::new(SqliteEntryRepository::new(&conn));
    let generator = Arc::new(RecordingGenerator::default());
    let aggregator = aggregator(generator.clone());

    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    for idx in 0..29 {
        service
            .save_answer(start + Days::days(idx), "q", "happy walk")
            .unwrap();
    }

    let err = service.monthly_summary(&aggregator).await.unwrap_err();
    assert!(matches!(
        err,
        ServiceError::InsufficientData {
            required: 30,
            actual: 29
        }
    ));

    for idx in 29..35 {
        service
            .save_answer(start + Days::days(idx), "q", "tired evening")
            .unwrap();
    }

    let result = service.monthly_summary(&aggregator).await.unwrap();
    assert_eq!(result.mood_series.len(), 30);
    assert_eq!(result.mood_series[0].date, start + Days::days(34));
    assert_eq!(result.mood_series[0].mood, Mood::Negative);
    assert_eq!(result.mood_series[29].date, start + Days::days(5));

    let prompts = generator.prompts.lock().unwrap();
    assert!(!prompts[0].contains("2024-01-05"));
}

#[tokio::test]
async fn unconfigured_generator_still_yields_series_and_keywords() {
    let result = aggregator(Arc::new(UnconfiguredGenerator::new("GEMINI_API_KEY")))
        .aggregate_monthly(&window(30))
        .await
        .unwrap();
    assert_eq!(result.summary, SUMMARY_FALLBACK);
    assert_eq!(result.mood_series.len(), 30);
    assert_eq!(result.keywords[0].word, "walked");
}

#[tokio::test]
async fn unconfigured_generator_keeps_insufficient_data_distinct() {
    let err = aggregator(Arc::new(UnconfiguredGenerator::new("GEMINI_API_KEY")))
        .aggregate_monthly(&window(1))
        .await
        .unwrap_err();
    assert_eq!(
        err,
        AggregateError::InsufficientData {
            required: MONTHLY_WINDOW,
            actual: 1
        }
    );
}

#[tokio::test]
async fn keyword_limit_caps_word_cloud() {
    let result = aggregator(Arc::new(RecordingGenerator::default()))
        .with_keyword_limit(3)
        .aggregate_monthly(&window(30))
        .await
        .unwrap();
    assert_eq!(result.keywords.len(), 3);
    assert_eq!(result.keywords[0].size, 4.0);
    assert_eq!(result.mood_series.len(), 30);
}
