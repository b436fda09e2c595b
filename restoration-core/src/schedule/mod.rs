//! Reading schedule: book table, flattened plan and date resolution

mod books;
mod calendar;
pub mod format;
mod plan;

pub use books::{Book, RESTORATION_BOOKS};
pub use calendar::{ChapterRef, DailyReading, ReadingSchedule, ScheduleItem, CHAPTERS_PER_DAY};
pub use plan::{ReadingPlan, ReadingPlanItem};
