//! Diary and mission command implementations

use super::Context;
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use restoration_core::journal::{DiaryEntry, JournalKind, MissionPlan};

/// Save a diary entry
pub async fn diary_add(
    ctx: &Context,
    date: Option<NaiveDate>,
    repentance: String,
    resolve: String,
    dream: String,
) -> Result<()> {
    let date = ctx.date(date);
    let entry = DiaryEntry {
        repentance,
        resolve,
        dream,
    };

    let saved = ctx
        .journal()
        .save_diary(date, entry)
        .await
        .with_context(|| format!("Failed to save diary for {}", date))?;

    println!("Saved {} ({})", JournalKind::Diary.record_key(date), saved.id);
    Ok(())
}

/// List diary entries saved for a day
pub async fn diary_list(ctx: &Context, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let date = ctx.date(date);
    let entries = ctx.journal().entries::<DiaryEntry>(date).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }

    if entries.is_empty() {
        println!("No diary entries for {}", date);
        return Ok(());
    }

    for saved in &entries {
        println!("[{}] {}", saved.timestamp.format("%Y-%m-%d %H:%M"), saved.id);
        for (label, text) in [
            ("Repentance", &saved.content.repentance),
            ("Resolve", &saved.content.resolve),
            ("Dream", &saved.content.dream),
        ] {
            if !text.trim().is_empty() {
                println!("  {:<11} {}", format!("{}:", label), text);
            }
        }
    }

    Ok(())
}

/// Save a mission plan
pub async fn mission_add(ctx: &Context, date: Option<NaiveDate>, plan: String) -> Result<()> {
    let date = ctx.date(date);

    let saved = ctx
        .journal()
        .save_mission(date, MissionPlan::new(plan))
        .await
        .with_context(|| format!("Failed to save mission plan for {}", date))?;

    println!("Saved {} ({})", JournalKind::Mission.record_key(date), saved.id);
    Ok(())
}

/// List mission plans saved for a day
pub async fn mission_list(ctx: &Context, date: Option<NaiveDate>, json: bool) -> Result<()> {
    let date = ctx.date(date);
    let plans = ctx.journal().entries::<MissionPlan>(date).await?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
        return Ok(());
    }

    if plans.is_empty() {
        println!("No mission plans for {}", date);
        return Ok(());
    }

    for saved in &plans {
        println!(
            "[{}] {}",
            saved.timestamp.format("%Y-%m-%d %H:%M"),
            saved.content.plan
        );
    }

    Ok(())
}

/// List the days that have records of `kind`
pub async fn journal_dates(ctx: &Context, kind: JournalKind) -> Result<()> {
    let dates = ctx.journal().dates(kind).await?;

    if dates.is_empty() {
        println!("No {} records", kind);
    }
    for date in dates {
        println!("{}", date);
    }

    Ok(())
}
