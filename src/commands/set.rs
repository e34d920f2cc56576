use anyhow::Result;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

use shiftcal_core::{Side, SlotKey, TimeSlot, YearMonth};

use super::{load_session, resolve_employee};
use crate::config::ShiftcalConfig;

pub async fn run(
    config: &ShiftcalConfig,
    employee: &str,
    date: NaiveDate,
    slot: TimeSlot,
    pattern: &str,
    side: Side,
) -> Result<()> {
    let mut session = load_session(config, YearMonth::from_date(date)).await?;
    let data = session.data()?;

    let employee_id = resolve_employee(data, employee)?;
    let pattern = data
        .catalog
        .resolve(pattern)
        .ok_or_else(|| {
            let available: Vec<_> = data.catalog.iter().map(|p| p.name.as_str()).collect();
            anyhow::anyhow!(
                "Pattern '{}' not found. Available: {}",
                pattern,
                available.join(", ")
            )
        })?
        .clone();

    session
        .set_shift(side, SlotKey::new(employee_id, date, slot), pattern.id)
        .await?;

    println!(
        "{} {} {} {} -> {}",
        "✓".green(),
        employee,
        date,
        slot,
        pattern.name.bold()
    );
    Ok(())
}
