use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::config::ShiftcalConfig;

/// List the employee columns in display order.
pub async fn run(config: &ShiftcalConfig) -> Result<()> {
    let client = ApiClient::new(config.server_url.clone());
    let employees = client.employees().await.context("Could not list employees")?;

    if employees.is_empty() {
        println!("{}", "No employees".dimmed());
        return Ok(());
    }

    for employee in employees {
        if employee.memo.is_empty() {
            println!("{:>4}  {}", employee.id, employee.name);
        } else {
            println!(
                "{:>4}  {}  {}",
                employee.id,
                employee.name,
                employee.memo.dimmed()
            );
        }
    }
    Ok(())
}
