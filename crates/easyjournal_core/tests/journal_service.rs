use chrono::NaiveDate;
use easyjournal_core::db::open_db_in_memory;
use easyjournal_core::{
    EntryValidationError, JournalService, Mood, ServiceError, SqliteEntryRepository,
};

fn date(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
}

#[test]
fn save_answer_classifies_and_persists() {
    let conn = open_db_in_memory().unwrap();
    let service = JournalService::new(SqliteEntryRepository::new(&conn));

    let saved = service
        .save_answer(date(1), "How are you?", "I am happy and grateful today")
        .unwrap();
    assert_eq!(saved.mood, Mood::Positive);

    let sad = service
        .save_answer(date(2), "How are you?", "I am sad and tired today")
        .unwrap();
    assert_eq!(sad.mood, Mood::Negative);

    let plain = service
        .save_answer(date(3), "How are you?", "I went to the store today")
        .unwrap();
    assert_eq!(plain.mood, Mood::Neutral);

    assert_eq!(service.entry_count().unwrap(), 3);
}

#[test]
fn save_answer_rejects_blank_before_storage() {
    let conn = open_db_in_memory().unwrap();
    let service = JournalService::new(SqliteEntryRepository::new(&conn));

    let err = service.save_answer(date(1), "q", "  \n").unwrap_err();
    assert!(matches!(
        err,
        ServiceError::Validation(EntryValidationError::BlankAnswer)
    ));
    assert_eq!(service.entry_count().unwrap(), 0);
}

#[test]
fn saving_twice_on_one_date_keeps_last_write() {
    let conn = open_db_in_memory().unwrap();
    let service = JournalService::new(SqliteEntryRepository::new(&conn));

    service.save_answer(date(1), "q", "awful day").unwrap();
    let second = service.save_answer(date(1), "q", "actually great").unwrap();

    assert_eq!(service.entry_count().unwrap(), 1);
    assert_eq!(second.answer, "actually great");
    assert_eq!(second.mood, Mood::Positive);
}

#[test]
fn update_keeps_caller_mood() {
    let conn = open_db_in_memory().unwrap();
    let service = JournalService::new(SqliteEntryRepository::new(&conn));

    let mut entry = service.save_answer(date(1), "q", "happy").unwrap();
    entry.answer = "sad sad sad".to_string();
    let updated = service.update_entry(&entry).unwrap();

    assert_eq!(updated.answer, "sad sad sad");
    assert_eq!(updated.mood, Mood::Positive);
}

#[test]
fn delete_missing_entry_is_not_found() {
    let conn = open_db_in_memory().unwrap();
    let service = JournalService::new(SqliteEntryRepository::new(&conn));

    service.save_answer(date(1), "q", "something").unwrap();
    service.delete_entry(date(1)).unwrap();

    let err = service.delete_entry(date(1)).unwrap_err();
    assert!(matches!(err, ServiceError::EntryNotFound(d) if d == date(1)));
    assert!(service.get_entry(date(1)).unwrap().is_none());
}

#[test]
fn summary_available_flips_at_thirty_entries() {
    let conn = open_db_in_memory().unwrap();
    let service = JournalService::new(SqliteEntryRepository::new(&conn));

    for d in 1..=29 {
        service.save_answer(date(d), "q", "a quiet day").unwrap();
    }
    assert!(!service.summary_available().unwrap());

    service.save_answer(date(30), "q", "a quiet day").unwrap();
    assert!(service.summary_available().unwrap());
    assert_eq!(service.list_entries().unwrap().len(), 30);
    assert_eq!(
        service.entries_in_range(date(10), date(12)).unwrap().len(),
        3
    );
}
