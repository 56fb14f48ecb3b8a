//! EasyJournal command-line entry point.
//!
//! # Responsibility
//! - Act as the composition root: open the store, build the text
//!   generator from configuration, and hand both to core services.
//! - Keep output plain text; exit non-zero on any surfaced error.

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand};
use easyjournal_core::db::open_db;
use easyjournal_core::{
    default_log_level, init_logging, prompt_for_date, AggregateResult, GeminiClient,
    GenerationError, JournalService, MonthlyAggregator, ServiceError, SqliteEntryRepository,
    SummaryConfig, TextGenerator, UnconfiguredGenerator,
};
use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

const DEFAULT_DB_PATH: &str = "easyjournal.sqlite3";

/// Daily reflection journal with monthly summaries.
#[derive(Parser)]
#[command(name = "easyjournal", version, about)]
struct Cli {
    /// Journal database file (env: EASYJOURNAL_DB).
    #[arg(long, env = "EASYJOURNAL_DB", default_value = DEFAULT_DB_PATH)]
    db: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print today's reflection prompt.
    Prompt,
    /// Save an answer to the prompt of the given day (default today).
    Save {
        answer: String,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// List all entries, newest first.
    List,
    /// Delete the entry for a date (YYYY-MM-DD).
    Delete { date: NaiveDate },
    /// Summarize the latest 30 entries.
    Summary,
}

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    if let Err(err) = start_logging() {
        eprintln!("warning: logging disabled: {err}");
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("event=cli_command module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn start_logging() -> Result<(), String> {
    let Ok(log_dir) = std::env::var("EASYJOURNAL_LOG_DIR") else {
        return Ok(());
    };
    let level = std::env::var("EASYJOURNAL_LOG_LEVEL")
        .unwrap_or_else(|_| default_log_level().to_string());
    init_logging(&level, &log_dir)
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let conn = open_db(&cli.db)?;
    let service = JournalService::new(SqliteEntryRepository::new(&conn));
    let today = Local::now().date_naive();

    match cli.command {
        Command::Prompt => println!("{}", prompt_for_date(today)),
        Command::Save { answer, date } => {
            let date = date.unwrap_or(today);
            let entry = service.save_answer(date, prompt_for_date(date), answer)?;
            println!("saved {} ({})", entry.date, entry.mood);
        }
        Command::List => {
            for entry in service.list_entries()? {
                println!("{}  {:<8}  {}", entry.date, entry.mood, entry.answer);
            }
        }
        Command::Delete { date } => {
            service.delete_entry(date)?;
            println!("deleted {date}");
        }
        Command::Summary => {
            let config = SummaryConfig::from_env()?;
            let generator = build_generator(&config);
            let aggregator = MonthlyAggregator::from_config(generator, &config);

            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            match runtime.block_on(service.monthly_summary(&aggregator)) {
                Ok(result) => print_summary(&result),
                Err(ServiceError::InsufficientData { required, actual }) => {
                    println!("Need {required} entries to generate summary ({actual} so far).");
                }
                Err(err) => return Err(err.into()),
            }
        }
    }

    Ok(())
}

/// Missing or broken backends degrade to the fallback summary instead of
/// failing the command.
fn build_generator(config: &SummaryConfig) -> Arc<dyn TextGenerator> {
    match GeminiClient::new(config) {
        Ok(client) => Arc::new(client),
        Err(err) => {
            log::warn!("event=summary_client module=cli status=fallback error={err}");
            let missing = match err {
                GenerationError::NotConfigured(what) => what,
                _ => "http client",
            };
            Arc::new(UnconfiguredGenerator::new(missing))
        }
    }
}

fn print_summary(result: &AggregateResult) {
    println!("{}\n", result.summary);

    println!("Mood trend:");
    for point in &result.mood_series {
        println!("  {}  {:<8}  {:.1}", point.label(), point.mood, point.value);
    }

    println!("\nTop words:");
    for item in &result.keywords {
        println!("  {:<16} {:>3}  size {:.2}", item.word, item.frequency, item.size);
    }
}
