use std::path::PathBuf;

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use shiftcal_core::{Side, YearMonth};

use super::{load_session, today};
use crate::config::ShiftcalConfig;
use crate::export::month_csv;

/// Export one side of a month as CSV, to a file or stdout.
pub async fn run(
    config: &ShiftcalConfig,
    month: Option<YearMonth>,
    side: Side,
    output: Option<PathBuf>,
) -> Result<()> {
    let today = today();
    let month = month.unwrap_or_else(|| YearMonth::from_date(today));
    let session = load_session(config, month).await?;

    let csv = month_csv(&session.grid(side, today)?);

    match output {
        Some(path) => {
            std::fs::write(&path, &csv)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{} exported {} ({}) to {}", "✓".green(), month, side, path.display());
        }
        None => print!("{csv}"),
    }
    Ok(())
}
