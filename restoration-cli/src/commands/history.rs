//! History command implementation

use super::Context;
use anyhow::Result;
use restoration_core::history::historical_context;

/// Print the historical timeline
pub fn history(ctx: &Context) -> Result<()> {
    let context = historical_context(ctx.language());

    println!("{}", context.title);
    for period in context.periods {
        println!("  {:<10} {}", period.year, period.event);
    }

    Ok(())
}
