//! Journal entry repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide date-keyed CRUD and window queries over `journal_entries`.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - One row per calendar date; `upsert_entry` is last-write-wins.
//! - Dates are stored as ISO-8601 `YYYY-MM-DD` text so lexical order is
//!   chronological order.
//! - Read paths reject invalid persisted state instead of masking it.

use crate::db::DbError;
use crate::model::entry::{EntryValidationError, JournalEntry, Mood};
use chrono::NaiveDate;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const ENTRY_SELECT_SQL: &str = "SELECT
    entry_date,
    question,
    answer,
    created_at,
    mood
FROM journal_entries";

const DATE_FORMAT: &str = "%Y-%m-%d";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for entry persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(EntryValidationError),
    Db(DbError),
    NotFound(NaiveDate),
    InvalidData(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotFound(date) => write!(f, "journal entry not found for {date}"),
            Self::InvalidData(message) => write!(f, "invalid persisted entry data: {message}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotFound(_) | Self::InvalidData(_) => None,
        }
    }
}

impl From<EntryValidationError> for RepoError {
    fn from(value: EntryValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Entry store contract.
///
/// Ordering: `list_entries` and `last_entries` are newest-first;
/// `entries_in_range` is oldest-first.
pub trait EntryRepository {
    fn list_entries(&self) -> RepoResult<Vec<JournalEntry>>;
    fn get_entry(&self, date: NaiveDate) -> RepoResult<Option<JournalEntry>>;
    /// Inserts or replaces the entry for `entry.date`.
    fn upsert_entry(&self, entry: &JournalEntry) -> RepoResult<()>;
    /// Updates an existing entry; `NotFound` when the date has none.
    fn update_entry(&self, entry: &JournalEntry) -> RepoResult<()>;
    fn delete_entry(&self, date: NaiveDate) -> RepoResult<()>;
    fn last_entries(&self, limit: u32) -> RepoResult<Vec<JournalEntry>>;
    fn entries_in_range(&self, start: NaiveDate, end: NaiveDate)
        -> RepoResult<Vec<JournalEntry>>;
    fn count_entries(&self) -> RepoResult<u32>;
}

/// SQLite-backed entry repository over a migrated connection.
pub struct SqliteEntryRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteEntryRepository<'conn> {
    /// Wraps a connection returned by [`crate::db::open_db`].
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }

    fn query_entries(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> RepoResult<Vec<JournalEntry>> {
        let mut stmt = self.conn.prepare(sql)?;
        let mut rows = stmt.query(params)?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }
        Ok(entries)
    }
}

impl EntryRepository for SqliteEntryRepository<'_> {
    fn list_entries(&self) -> RepoResult<Vec<JournalEntry>> {
        self.query_entries(&format!("{ENTRY_SELECT_SQL} ORDER BY entry_date DESC;"), [])
    }

    fn get_entry(&self, date: NaiveDate) -> RepoResult<Option<JournalEntry>> {
        let mut entries = self.query_entries(
            &format!("{ENTRY_SELECT_SQL} WHERE entry_date = ?1;"),
            [date_to_db(date)],
        )?;
        Ok(entries.pop())
    }

    fn upsert_entry(&self, entry: &JournalEntry) -> RepoResult<()> {
        entry.validate()?;

        self.conn.execute(
            "INSERT INTO journal_entries (
                entry_date,
                question,
                answer,
                created_at,
                mood
            ) VALUES (?1, ?2, ?3, ?4, ?5)
            ON CONFLICT(entry_date) DO UPDATE SET
                question = excluded.question,
                answer = excluded.answer,
                created_at = excluded.created_at,
                mood = excluded.mood;",
            params![
                date_to_db(entry.date),
                entry.question.as_str(),
                entry.answer.as_str(),
                entry.created_at,
                entry.mood.as_str(),
            ],
        )?;

        Ok(())
    }

    fn update_entry(&self, entry: &JournalEntry) -> RepoResult<()> {
        entry.validate()?;

        let changed = self.conn.execute(
            "UPDATE journal_entries
             SET
                question = ?2,
                answer = ?3,
                created_at = ?4,
                mood = ?5
             WHERE entry_date = ?1;",
            params![
                date_to_db(entry.date),
                entry.question.as_str(),
                entry.answer.as_str(),
                entry.created_at,
                entry.mood.as_str(),
            ],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(entry.date));
        }
        Ok(())
    }

    fn delete_entry(&self, date: NaiveDate) -> RepoResult<()> {
        let changed = self.conn.execute(
            "DELETE FROM journal_entries WHERE entry_date = ?1;",
            [date_to_db(date)],
        )?;

        if changed == 0 {
            return Err(RepoError::NotFound(date));
        }
        Ok(())
    }

    fn last_entries(&self, limit: u32) -> RepoResult<Vec<JournalEntry>> {
        self.query_entries(
            &format!("{ENTRY_SELECT_SQL} ORDER BY entry_date DESC LIMIT ?1;"),
            [i64::from(limit)],
        )
    }

    fn entries_in_range(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> RepoResult<Vec<JournalEntry>> {
        self.query_entries(
            &format!(
                "{ENTRY_SELECT_SQL}
                 WHERE entry_date >= ?1 AND entry_date <= ?2
                 ORDER BY entry_date ASC;"
            ),
            [date_to_db(start), date_to_db(end)],
        )
    }

    fn count_entries(&self) -> RepoResult<u32> {
        let count = self
            .conn
            .query_row("SELECT COUNT(*) FROM journal_entries;", [], |row| {
                row.get::<_, u32>(0)
            })?;
        Ok(count)
    }
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<JournalEntry> {
    let date_text: String = row.get("entry_date")?;
    let date = NaiveDate::parse_from_str(&date_text, DATE_FORMAT).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid date `{date_text}` in journal_entries.entry_date"
        ))
    })?;

    let mood_text: String = row.get("mood")?;
    let mood = Mood::parse(&mood_text).ok_or_else(|| {
        RepoError::InvalidData(format!("invalid mood `{mood_text}` in journal_entries.mood"))
    })?;

    let entry = JournalEntry {
        date,
        question: row.get("question")?,
        answer: row.get("answer")?,
        created_at: row.get("created_at")?,
        mood,
    };
    entry.validate()?;
    Ok(entry)
}

fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}
