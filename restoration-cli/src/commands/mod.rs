//! CLI command implementations

mod history;
mod journal;
mod reflect;
mod schedule;
mod today;

pub use history::history;
pub use journal::{diary_add, diary_list, journal_dates, mission_add, mission_list};
pub use reflect::reflect;
pub use schedule::schedule;
pub use today::today;

use chrono::NaiveDate;
use restoration_core::journal::JournalStore;
use restoration_core::storage::LocalStorage;
use restoration_core::{Language, ReadingSchedule, Settings};
use std::sync::Arc;

/// Resolved settings shared by every command
pub struct Context {
    pub settings: Settings,
    pub schedule: &'static ReadingSchedule,
}

impl Context {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            schedule: ReadingSchedule::restoration(),
        }
    }

    pub fn language(&self) -> Language {
        self.settings.language
    }

    /// `date`, or today's local date
    pub fn date(&self, date: Option<NaiveDate>) -> NaiveDate {
        date.unwrap_or_else(|| ReadingSchedule::date_for(&chrono::Local::now()))
    }

    pub fn journal(&self) -> JournalStore {
        JournalStore::new(Arc::new(LocalStorage::new(&self.settings.data_path)))
    }
}
