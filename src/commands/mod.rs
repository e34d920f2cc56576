pub mod clear;
pub mod cycle;
pub mod day;
pub mod employees;
pub mod export;
pub mod note;
pub mod patterns;
pub mod set;
pub mod show;

use std::time::Duration;

use anyhow::Result;
use chrono::{Local, NaiveDate};
use indicatif::{ProgressBar, ProgressStyle};

use shiftcal_core::YearMonth;

use crate::client::ApiClient;
use crate::config::ShiftcalConfig;
use crate::session::{MonthData, MonthSession};

pub fn create_spinner(msg: String) -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message(msg);
    spinner.enable_steady_tick(Duration::from_millis(80));
    spinner
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Build a session for a month and load it, with a spinner while the
/// fetches run.
pub async fn load_session(config: &ShiftcalConfig, month: YearMonth) -> Result<MonthSession> {
    let client = ApiClient::new(config.server_url.clone());
    let mut session = MonthSession::new(client, config.holiday_feed_url.clone(), month);

    let spinner = create_spinner(format!("Loading {month}"));
    let result = session.load().await;
    spinner.finish_and_clear();
    result?;

    Ok(session)
}

pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| anyhow::anyhow!("Invalid date format '{}'. Expected YYYY-MM-DD", s))
}

/// Resolve a user-supplied employee reference (name or numeric id) against
/// the loaded month.
pub fn resolve_employee(data: &MonthData, reference: &str) -> Result<i64> {
    if let Some(employee) = data.employees.iter().find(|e| e.name == reference) {
        return Ok(employee.id);
    }
    if let Ok(id) = reference.parse::<i64>() {
        if data.employees.iter().any(|e| e.id == id) {
            return Ok(id);
        }
    }

    let available: Vec<_> = data.employees.iter().map(|e| e.name.as_str()).collect();
    anyhow::bail!(
        "Employee '{}' not found. Available: {}",
        reference,
        available.join(", ")
    )
}
