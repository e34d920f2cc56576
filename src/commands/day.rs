use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use shiftcal_core::{Side, YearMonth};

use super::load_session;
use crate::config::ShiftcalConfig;

/// Wipe every assignment of one date on one side. A simulation-side wipe
/// suppresses the date's live-backed cells rather than deleting them.
pub async fn clear(config: &ShiftcalConfig, date: NaiveDate, side: Side) -> Result<()> {
    let mut session = load_session(config, YearMonth::from_date(date)).await?;
    session.clear_date(side, date).await?;
    println!("{} {} cleared ({})", "✓".green(), date, side);
    Ok(())
}

/// Hide a date from the grid, or bring it back.
pub async fn hide(config: &ShiftcalConfig, date: NaiveDate, undo: bool) -> Result<()> {
    let mut session = load_session(config, YearMonth::from_date(date)).await?;
    session.set_date_hidden(date, !undo).await?;
    if undo {
        println!("{} {} restored", "✓".green(), date);
    } else {
        println!("{} {} hidden", "✓".green(), date);
    }
    Ok(())
}
