use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use shiftcal_core::{Side, YearMonth};

use super::load_session;
use crate::config::ShiftcalConfig;

/// Show or set the note of a date on one side. Saving an empty string
/// clears the note.
pub async fn run(
    config: &ShiftcalConfig,
    date: NaiveDate,
    content: Option<String>,
    side: Side,
) -> Result<()> {
    let mut session = load_session(config, YearMonth::from_date(date)).await?;

    match content {
        None => {
            let note = session.data()?.notes.get(date, side);
            if note.is_empty() {
                println!("{}", "No note".dimmed());
            } else {
                println!("{note}");
            }
        }
        Some(content) => {
            session.save_note(side, date, content).await?;
            println!("{} note for {} ({}) saved", "✓".green(), date, side);
        }
    }
    Ok(())
}
