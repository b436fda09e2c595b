//! Schedule command implementation

use super::Context;
use anyhow::Result;
use chrono::NaiveDate;
use restoration_core::i18n::{self, MessageKey};
use restoration_core::ScheduleItem;

/// List one full reading cycle, marking the current day
pub fn schedule(ctx: &Context, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let language = ctx.language();
    let items: Vec<ScheduleItem> = ctx.schedule.full_schedule(language).collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&items)?);
        return Ok(());
    }

    let current = ctx.schedule.current_day(ctx.date(date));

    println!("{}", i18n::t(language, MessageKey::ReadingPlanTitle));
    for item in &items {
        let marker = if item.day == current { '*' } else { ' ' };
        let label = i18n::t_with(language, MessageKey::Day, &[("day", &item.day)]);
        println!("{} {:<8} {}", marker, label, item.reading);
    }

    Ok(())
}
