use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use shiftcal_core::{Side, SlotKey, TimeSlot, YearMonth};

use super::{load_session, resolve_employee};
use crate::config::ShiftcalConfig;

/// The click interaction of the original grid: advance the cell to the next
/// pattern in catalog order, wrapping after the last.
pub async fn run(
    config: &ShiftcalConfig,
    employee: &str,
    date: NaiveDate,
    slot: TimeSlot,
    side: Side,
) -> Result<()> {
    let mut session = load_session(config, YearMonth::from_date(date)).await?;
    let employee_id = resolve_employee(session.data()?, employee)?;

    let next = session
        .cycle_shift(side, SlotKey::new(employee_id, date, slot))
        .await?;
    let name = session.data()?.catalog.name_of(next).to_string();

    println!(
        "{} {} {} {} -> {}",
        "✓".green(),
        employee,
        date,
        slot,
        name.bold()
    );
    Ok(())
}
