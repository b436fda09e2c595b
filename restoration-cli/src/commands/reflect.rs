//! Reflect command implementation

use super::Context;
use anyhow::{Context as _, Result};
use chrono::NaiveDate;
use indicatif::{ProgressBar, ProgressStyle};
use restoration_core::i18n::{self, MessageKey};
use restoration_core::reflection::{ReflectionKind, ReflectionService};
use std::time::Duration;

/// Generate a reflection on the reading for `date`
pub async fn reflect(ctx: &Context, kind: ReflectionKind, date: Option<NaiveDate>) -> Result<()> {
    let language = ctx.language();
    let reading = ctx.schedule.daily_reading(ctx.date(date), language);
    let service = ReflectionService::from_settings(&ctx.settings);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_message(format!(
        "{} {}",
        reading.reference(),
        i18n::t(language, MessageKey::LoadingPassage)
    ));

    let result = service.reflect(kind, &reading).await;
    pb.finish_and_clear();

    let reflection =
        result.with_context(|| format!("Failed to generate {} for {}", kind, reading.reference()))?;

    tracing::debug!("Reflection {} served from {:?}", kind, reflection.source);

    println!("{}", reading.reference());
    println!();
    println!("{}", reflection.text);

    Ok(())
}
