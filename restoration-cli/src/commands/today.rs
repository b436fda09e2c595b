//! Today command implementation

use super::Context;
use anyhow::Result;
use chrono::NaiveDate;
use restoration_core::i18n::{self, MessageKey};
use restoration_core::{ChapterRef, Language};
use serde::Serialize;

/// Reading output
#[derive(Serialize)]
struct TodayInfo {
    date: NaiveDate,
    language: Language,
    day: u32,
    total_days: u32,
    readings: [ChapterRef; 2],
    reference: String,
}

/// Show the reading for a day
pub fn today(ctx: &Context, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let date = ctx.date(date);
    let language = ctx.language();
    let reading = ctx.schedule.daily_reading(date, language);

    let info = TodayInfo {
        date,
        language,
        day: ctx.schedule.current_day(date),
        total_days: ctx.schedule.total_days(),
        readings: reading.chapters,
        reference: reading.reference(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&info)?);
    } else {
        println!("{} ({})", i18n::t(language, MessageKey::TodaysPassage), info.date);
        println!("  {}", info.reference);
        println!(
            "{}",
            i18n::t_with(
                language,
                MessageKey::ReadingPlanInfo,
                &[("totalDays", &info.total_days), ("currentDay", &info.day)],
            )
        );
    }

    Ok(())
}
