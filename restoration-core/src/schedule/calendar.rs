//! Date-based resolution of the reading schedule

use super::{format, ReadingPlan, ReadingPlanItem, RESTORATION_BOOKS};
use crate::error::ScheduleError;
use crate::locale::Language;
use chrono::{DateTime, NaiveDate, TimeZone};
use once_cell::sync::Lazy;
use serde::Serialize;

/// Chapters read per day
pub const CHAPTERS_PER_DAY: usize = 2;

static RESTORATION_SCHEDULE: Lazy<ReadingSchedule> = Lazy::new(|| {
    let epoch = NaiveDate::from_ymd_opt(2025, 1, 1).expect("schedule epoch is a valid date");
    ReadingSchedule::new(&RESTORATION_BOOKS, epoch).expect("restoration book table is well formed")
});

/// One chapter of a daily reading, named in the requested language
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct ChapterRef {
    pub book: &'static str,
    pub chapter: u32,
}

impl ChapterRef {
    fn localize(item: &ReadingPlanItem, language: Language) -> Self {
        Self {
            book: item.book.name(language),
            chapter: item.chapter,
        }
    }
}

/// The two chapters assigned to a day
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct DailyReading {
    pub language: Language,
    pub chapters: [ChapterRef; 2],
}

impl DailyReading {
    pub fn first(&self) -> &ChapterRef {
        &self.chapters[0]
    }

    pub fn second(&self) -> &ChapterRef {
        &self.chapters[1]
    }

    /// Display reference, e.g. `Haggai 1-2` or `느헤미야 13장 & 말라기 1장`
    pub fn reference(&self) -> String {
        let [first, second] = &self.chapters;
        format::pair(
            (first.book, first.chapter),
            (second.book, second.chapter),
            self.language,
        )
    }
}

/// One day of the canonical cycle
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ScheduleItem {
    /// 1-based day number
    pub day: u32,

    /// Formatted reading range
    pub reading: String,
}

/// Maps calendar dates onto a cyclic reading plan, two chapters per day
#[derive(Debug, Clone)]
pub struct ReadingSchedule {
    plan: ReadingPlan,
    epoch: NaiveDate,
}

impl ReadingSchedule {
    pub fn new(books: &[super::Book], epoch: NaiveDate) -> Result<Self, ScheduleError> {
        Ok(Self {
            plan: ReadingPlan::new(books)?,
            epoch,
        })
    }

    /// The process-wide restoration schedule, starting 2025-01-01
    pub fn restoration() -> &'static ReadingSchedule {
        &RESTORATION_SCHEDULE
    }

    pub fn plan(&self) -> &ReadingPlan {
        &self.plan
    }

    pub fn epoch(&self) -> NaiveDate {
        self.epoch
    }

    /// Calendar days elapsed since the epoch; earlier dates clamp to day 0
    pub fn day_of_schedule(&self, date: NaiveDate) -> u64 {
        date.signed_duration_since(self.epoch).num_days().max(0) as u64
    }

    /// Local calendar date of a timestamp, dropping the time of day
    pub fn date_for<Tz: TimeZone>(moment: &DateTime<Tz>) -> NaiveDate {
        moment.date_naive()
    }

    /// Chapters for the given day offset, wrapping around the plan
    pub fn reading_for_day(&self, day: u64, language: Language) -> DailyReading {
        let len = self.plan.len() as u64;
        let start = (day % len) * CHAPTERS_PER_DAY as u64 % len;
        let first = self.plan.wrapping(start);
        let second = self.plan.wrapping(start + 1);

        DailyReading {
            language,
            chapters: [
                ChapterRef::localize(first, language),
                ChapterRef::localize(second, language),
            ],
        }
    }

    /// Chapters assigned to `date`
    pub fn daily_reading(&self, date: NaiveDate, language: Language) -> DailyReading {
        self.reading_for_day(self.day_of_schedule(date), language)
    }

    /// Number of days in one cycle
    pub fn total_days(&self) -> u32 {
        self.plan.len().div_ceil(CHAPTERS_PER_DAY) as u32
    }

    /// 1-based position of `date` within the current cycle
    pub fn current_day(&self, date: NaiveDate) -> u32 {
        (self.day_of_schedule(date) % self.total_days() as u64) as u32 + 1
    }

    /// One full cycle of daily readings from the start of the plan
    pub fn full_schedule(&self, language: Language) -> impl Iterator<Item = ScheduleItem> + '_ {
        self.plan
            .items()
            .chunks(CHAPTERS_PER_DAY)
            .enumerate()
            .map(move |(index, chunk)| {
                let first = &chunk[0];
                let reading = match chunk.get(1) {
                    Some(second) => format::pair(
                        (first.book.name(language), first.chapter),
                        (second.book.name(language), second.chapter),
                        language,
                    ),
                    None => format::single(first.book.name(language), first.chapter, language),
                };

                ScheduleItem {
                    day: index as u32 + 1,
                    reading,
                }
            })
    }
}
