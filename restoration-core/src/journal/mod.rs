//! Faith diary and mission plan records, kept per calendar date
//!
//! Each date has one record per kind, holding every saved entry in save
//! order. Records live at `journal/{kind}-{YYYY-MM-DD}.json`.

use crate::error::{JournalError, StorageError};
use crate::storage::StorageProvider;
use chrono::{DateTime, NaiveDate, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Storage prefix for journal records
pub const JOURNAL_PREFIX: &str = "journal";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Result type for journal operations
pub type JournalResult<T> = std::result::Result<T, JournalError>;

/// Which journal a record belongs to
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum JournalKind {
    Diary,
    Mission,
}

impl JournalKind {
    pub fn as_str(self) -> &'static str {
        match self {
            JournalKind::Diary => "diary",
            JournalKind::Mission => "mission",
        }
    }

    /// Date-stamped record identifier, e.g. `diary-2025-01-01`
    pub fn record_key(self, date: NaiveDate) -> String {
        format!("{}-{}", self.as_str(), date.format(DATE_FORMAT))
    }

    fn storage_key(self, date: NaiveDate) -> String {
        format!("{}/{}.json", JOURNAL_PREFIX, self.record_key(date))
    }

    /// Parse a storage file name back into its date
    fn date_of(self, file_name: &str) -> Option<NaiveDate> {
        let stem = file_name.strip_suffix(".json")?;
        let date = stem.strip_prefix(self.as_str())?.strip_prefix('-')?;
        NaiveDate::parse_from_str(date, DATE_FORMAT).ok()
    }
}

impl fmt::Display for JournalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One faith diary entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiaryEntry {
    /// Repentance and gratitude
    #[serde(default)]
    pub repentance: String,

    /// Resolution and application
    #[serde(default)]
    pub resolve: String,

    /// God-given vision
    #[serde(default)]
    pub dream: String,
}

/// Content kinds that can be saved to a journal record
pub trait JournalRecord: Serialize + DeserializeOwned + Clone + Send + Sync {
    /// The record this content is stored in
    const KIND: JournalKind;

    /// Blank content is never saved
    fn is_blank(&self) -> bool;
}

impl JournalRecord for DiaryEntry {
    const KIND: JournalKind = JournalKind::Diary;

    /// True when every field is blank
    fn is_blank(&self) -> bool {
        [&self.repentance, &self.resolve, &self.dream]
            .iter()
            .all(|field| field.trim().is_empty())
    }
}

/// An evangelism and mission plan
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MissionPlan {
    pub plan: String,
}

impl MissionPlan {
    pub fn new(plan: impl Into<String>) -> Self {
        Self { plan: plan.into() }
    }
}

impl JournalRecord for MissionPlan {
    const KIND: JournalKind = JournalKind::Mission;

    fn is_blank(&self) -> bool {
        self.plan.trim().is_empty()
    }
}

/// A saved snapshot of an entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SavedEntry<T> {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub content: T,
}

impl<T> SavedEntry<T> {
    fn new(content: T) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            content,
        }
    }
}

/// Diary and mission persistence over a storage provider
///
/// Clones share one write lock, so saves through any clone are applied
/// one at a time and none is lost to a concurrent read-modify-write.
#[derive(Clone)]
pub struct JournalStore {
    storage: Arc<dyn StorageProvider>,
    write_lock: Arc<Mutex<()>>,
}

impl JournalStore {
    pub fn new(storage: Arc<dyn StorageProvider>) -> Self {
        Self {
            storage,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Entries of kind `T` saved for `date`, oldest first
    pub async fn entries<T: JournalRecord>(
        &self,
        date: NaiveDate,
    ) -> JournalResult<Vec<SavedEntry<T>>> {
        let kind = T::KIND;
        let data = match self.storage.read(&kind.storage_key(date)).await {
            Ok(data) => data,
            Err(StorageError::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        serde_json::from_slice(&data).map_err(|source| JournalError::Corrupt {
            key: kind.record_key(date),
            source,
        })
    }

    /// Most recently saved content for `date`, used to restore a draft
    pub async fn latest<T: JournalRecord>(&self, date: NaiveDate) -> JournalResult<Option<T>> {
        Ok(self.entries::<T>(date).await?.pop().map(|e| e.content))
    }

    /// Append `content` to its record for `date`
    pub async fn save<T: JournalRecord>(
        &self,
        date: NaiveDate,
        content: T,
    ) -> JournalResult<SavedEntry<T>> {
        if content.is_blank() {
            return Err(JournalError::EmptyEntry);
        }

        let _guard = self.write_lock.lock().await;

        let mut entries = self.entries::<T>(date).await?;
        let entry = SavedEntry::new(content);
        entries.push(entry.clone());

        let data = serde_json::to_vec_pretty(&entries)?;
        self.storage.write(&T::KIND.storage_key(date), data).await?;

        tracing::info!(
            "Saved {} entry {} ({} total)",
            T::KIND.record_key(date),
            entry.id,
            entries.len()
        );
        Ok(entry)
    }

    /// Append a diary entry; at least one field must have content
    pub async fn save_diary(
        &self,
        date: NaiveDate,
        entry: DiaryEntry,
    ) -> JournalResult<SavedEntry<DiaryEntry>> {
        self.save(date, entry).await
    }

    /// Append a mission plan; the plan must have content
    pub async fn save_mission(
        &self,
        date: NaiveDate,
        plan: MissionPlan,
    ) -> JournalResult<SavedEntry<MissionPlan>> {
        self.save(date, plan).await
    }

    /// Dates that have a record of `kind`, ascending
    pub async fn dates(&self, kind: JournalKind) -> JournalResult<Vec<NaiveDate>> {
        let names = match self.storage.list(JOURNAL_PREFIX).await {
            Ok(names) => names,
            Err(StorageError::NotFound(_)) => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };

        let mut dates: Vec<NaiveDate> = names.iter().filter_map(|n| kind.date_of(n)).collect();
        dates.sort();
        dates.dedup();
        Ok(dates)
    }
}
