use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::client::ApiClient;
use crate::config::ShiftcalConfig;

/// List the attendance pattern catalog in cycling order.
pub async fn run(config: &ShiftcalConfig) -> Result<()> {
    let client = ApiClient::new(config.server_url.clone());
    let patterns = client.patterns().await.context("Could not list patterns")?;

    if patterns.is_empty() {
        println!("{}", "No attendance patterns".dimmed());
        return Ok(());
    }

    for pattern in patterns {
        if pattern.description.is_empty() {
            println!("{:>4}  {}", pattern.id, pattern.name);
        } else {
            println!(
                "{:>4}  {}  {}",
                pattern.id,
                pattern.name,
                pattern.description.dimmed()
            );
        }
    }
    Ok(())
}
