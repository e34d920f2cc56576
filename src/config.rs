//! Global shiftcal configuration.

use std::path::PathBuf;

use anyhow::{Context, Result};
use config::{Config, File};
use serde::Deserialize;

static DEFAULT_SERVER_URL: &str = "http://127.0.0.1:8080";
static DEFAULT_HOLIDAY_FEED_URL: &str = "https://holidays-jp.github.io/api/v1/date.json";

fn default_server_url() -> String {
    DEFAULT_SERVER_URL.to_string()
}

fn default_holiday_feed_url() -> String {
    DEFAULT_HOLIDAY_FEED_URL.to_string()
}

/// Configuration at ~/.config/shiftcal/config.toml
#[derive(Deserialize, Clone)]
pub struct ShiftcalConfig {
    /// Base URL of the schedule backend.
    #[serde(default = "default_server_url")]
    pub server_url: String,

    /// Holiday feed returning a JSON object of ISO date -> holiday name.
    #[serde(default = "default_holiday_feed_url")]
    pub holiday_feed_url: String,
}

impl ShiftcalConfig {
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("shiftcal");

        Ok(config_dir.join("config.toml"))
    }

    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        let config: ShiftcalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .context("Could not read shiftcal config")?
            .try_deserialize()
            .context("Could not parse shiftcal config")?;

        Ok(config)
    }

    /// Create a default config file with all options commented out.
    fn create_default_config(path: &std::path::Path) -> Result<()> {
        let contents = format!(
            "\
# shiftcal configuration

# Schedule backend:
# server_url = \"{DEFAULT_SERVER_URL}\"

# Holiday feed (JSON object of \"YYYY-MM-DD\": \"holiday name\"):
# holiday_feed_url = \"{DEFAULT_HOLIDAY_FEED_URL}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }

        std::fs::write(path, contents)
            .with_context(|| format!("Could not write {}", path.display()))?;

        Ok(())
    }
}
