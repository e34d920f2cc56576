use anyhow::Result;

use shiftcal_core::{Side, YearMonth};

use super::{load_session, today};
use crate::config::ShiftcalConfig;
use crate::render::render_grid;

pub async fn run(
    config: &ShiftcalConfig,
    month: Option<YearMonth>,
    side: Side,
    context: Option<u32>,
) -> Result<()> {
    let today = today();
    let month = month.unwrap_or_else(|| YearMonth::from_date(today));
    let session = load_session(config, month).await?;

    println!("{month} ({side})");
    println!("{}", render_grid(&session.grid(side, today)?, context));
    Ok(())
}
