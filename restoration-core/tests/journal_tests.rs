//! Journal persistence tests for restoration-core

use chrono::NaiveDate;
use restoration_core::journal::{DiaryEntry, JournalKind, JournalStore, MissionPlan};
use restoration_core::storage::{LocalStorage, MemoryStorage, StorageProvider};
use restoration_core::JournalError;
use std::sync::Arc;
use tempfile::TempDir;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn diary(repentance: &str, resolve: &str, dream: &str) -> DiaryEntry {
    DiaryEntry {
        repentance: repentance.to_string(),
        resolve: resolve.to_string(),
        dream: dream.to_string(),
    }
}

#[tokio::test]
async fn test_missing_record_is_empty() {
    let store = JournalStore::new(Arc::new(MemoryStorage::new()));
    assert!(store.entries::<DiaryEntry>(date(2025, 1, 1)).await.unwrap().is_empty());
    assert_eq!(store.latest::<MissionPlan>(date(2025, 1, 1)).await.unwrap(), None);
    assert!(store.dates(JournalKind::Diary).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_entries_accumulate_in_save_order() {
    let store = JournalStore::new(Arc::new(MemoryStorage::new()));
    let day = date(2025, 2, 14);

    store
        .save_diary(day, diary("Forgive my neglect", "", ""))
        .await
        .unwrap();
    let second = store
        .save_diary(day, diary("", "Pray at dawn", "A rebuilt wall"))
        .await
        .unwrap();

    let entries = store.entries::<DiaryEntry>(day).await.unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].content.repentance, "Forgive my neglect");
    assert_eq!(entries[1], second);
    assert!(entries[0].timestamp <= entries[1].timestamp);
    assert_ne!(entries[0].id, entries[1].id);

    let latest = store.latest::<DiaryEntry>(day).await.unwrap().unwrap();
    assert_eq!(latest.resolve, "Pray at dawn");

    // Other dates are unaffected
    assert!(store.entries::<DiaryEntry>(date(2025, 2, 15)).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_blank_entries_are_rejected() {
    let store = JournalStore::new(Arc::new(MemoryStorage::new()));
    let day = date(2025, 2, 14);

    assert!(matches!(
        store.save_diary(day, diary(" ", "\n", "")).await,
        Err(JournalError::EmptyEntry)
    ));
    assert!(matches!(
        store.save_mission(day, MissionPlan::new("   ")).await,
        Err(JournalError::EmptyEntry)
    ));
    assert!(store.dates(JournalKind::Mission).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_diary_and_mission_records_are_separate() {
    let store = JournalStore::new(Arc::new(MemoryStorage::new()));
    let day = date(2025, 3, 1);

    store
        .save_mission(day, MissionPlan::new("Share Nehemiah 1 with a coworker"))
        .await
        .unwrap();

    assert!(store.entries::<DiaryEntry>(day).await.unwrap().is_empty());
    let plans = store.entries::<MissionPlan>(day).await.unwrap();
    assert_eq!(plans.len(), 1);
    assert_eq!(plans[0].content.plan, "Share Nehemiah 1 with a coworker");
    assert_eq!(store.dates(JournalKind::Mission).await.unwrap(), vec![day]);
    assert!(store.dates(JournalKind::Diary).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_corrupt_record_is_reported_and_kept() {
    let storage = Arc::new(MemoryStorage::new());
    storage
        .write("journal/diary-2025-03-01.json", b"{not json".to_vec())
        .await
        .unwrap();
    let store = JournalStore::new(storage.clone());
    let day = date(2025, 3, 1);

    match store.entries::<DiaryEntry>(day).await {
        Err(JournalError::Corrupt { key, .. }) => assert_eq!(key, "diary-2025-03-01"),
        other => panic!("expected corrupt record, got {:?}", other.map(|e| e.len())),
    }

    assert!(store.save_diary(day, diary("x", "", "")).await.is_err());
    assert_eq!(
        storage.read("journal/diary-2025-03-01.json").await.unwrap(),
        b"{not json"
    );
}

#[tokio::test]
async fn test_local_storage_layout() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = JournalStore::new(Arc::new(LocalStorage::new(dir.path())));

    store
        .save_diary(date(2025, 1, 2), diary("Grateful", "", ""))
        .await
        .unwrap();
    store
        .save_diary(date(2025, 1, 1), diary("Grateful", "", ""))
        .await
        .unwrap();

    let path = dir.path().join("journal").join("diary-2025-01-02.json");
    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(path).unwrap()).unwrap();
    assert_eq!(saved[0]["content"]["repentance"], "Grateful");
    assert!(saved[0]["id"].is_string());
    assert!(saved[0]["timestamp"].is_string());

    assert_eq!(
        store.dates(JournalKind::Diary).await.unwrap(),
        vec![date(2025, 1, 1), date(2025, 1, 2)]
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 8)]
async fn test_concurrent_saves_are_all_kept() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let store = JournalStore::new(Arc::new(LocalStorage::new(dir.path())));
    let day = date(2025, 1, 1);

    let saves: Vec<_> = (0..20)
        .map(|i| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .save_diary(day, diary(&format!("entry {}", i), "", ""))
                    .await
            })
        })
        .collect();

    let mut saved_ids = Vec::new();
    for save in saves {
        saved_ids.push(save.await.unwrap().expect("every save should succeed").id);
    }

    let mut stored_ids: Vec<_> = store
        .entries::<DiaryEntry>(day)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.id)
        .collect();
    assert_eq!(stored_ids.len(), 20);

    saved_ids.sort();
    stored_ids.sort();
    assert_eq!(stored_ids, saved_ids);

    // Only the record itself remains in the journal directory
    assert_eq!(store.dates(JournalKind::Diary).await.unwrap(), vec![day]);
    assert_eq!(std::fs::read_dir(dir.path().join("journal")).unwrap().count(), 1);
}
