use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use shiftcal_core::{Side, SlotKey, TimeSlot, YearMonth};

use super::{load_session, resolve_employee};
use crate::config::ShiftcalConfig;

/// Clear one cell. On the live side this deletes the assignment; on the
/// simulation side a live-backed cell is suppressed instead, so the live
/// record survives.
pub async fn run(
    config: &ShiftcalConfig,
    employee: &str,
    date: NaiveDate,
    slot: TimeSlot,
    side: Side,
) -> Result<()> {
    let mut session = load_session(config, YearMonth::from_date(date)).await?;
    let employee_id = resolve_employee(session.data()?, employee)?;

    session
        .clear_shift(side, SlotKey::new(employee_id, date, slot))
        .await?;

    println!("{} {} {} {} cleared", "✓".green(), employee, date, slot);
    Ok(())
}
