//! Restoration Core Library
//!
//! This crate provides the reading schedule, localization and journal logic for the
//! Restoration meditation diary. A fixed table of restoration-era books is expanded into
//! a chapter-by-chapter plan that is read two chapters a day, cycling indefinitely.

pub mod config;
pub mod error;
pub mod history;
pub mod i18n;
pub mod journal;
pub mod locale;
pub mod reflection;
pub mod schedule;
pub mod storage;

pub use config::Settings;
pub use error::{
    JournalError, LanguageError, ReflectionError, RestorationError, Result, ScheduleError,
    StorageError,
};
pub use locale::{Language, Localized};
pub use schedule::{
    Book, ChapterRef, DailyReading, ReadingPlan, ReadingPlanItem, ReadingSchedule, ScheduleItem,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restoration_schedule() {
        let schedule = ReadingSchedule::restoration();
        assert_eq!(schedule.plan().len(), 53);
        assert_eq!(schedule.epoch().to_string(), "2025-01-01");
    }
}
