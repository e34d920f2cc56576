mod client;
mod commands;
mod config;
mod export;
mod holidays;
mod render;
mod session;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use shiftcal_core::{Side, TimeSlot, YearMonth};

use crate::config::ShiftcalConfig;

#[derive(Parser)]
#[command(name = "shiftcal")]
#[command(about = "Edit your team's shift schedule and its what-if simulation")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the month grid for one side
    Show {
        /// Month to show (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Calendar side: live or simulation
        #[arg(short, long, default_value = "live")]
        side: String,

        /// Only show this many days around today
        #[arg(long)]
        context: Option<u32>,
    },
    /// Assign a pattern to one cell
    Set {
        /// Employee name or id
        employee: String,

        /// Date (YYYY-MM-DD)
        date: String,

        /// Time slot: morning, day or night
        slot: String,

        /// Pattern name or id
        pattern: String,

        #[arg(short, long, default_value = "live")]
        side: String,
    },
    /// Advance one cell to the next pattern in catalog order
    Cycle {
        employee: String,
        date: String,
        slot: String,

        #[arg(short, long, default_value = "live")]
        side: String,
    },
    /// Clear one cell (suppresses live-backed simulation cells)
    Clear {
        employee: String,
        date: String,
        slot: String,

        #[arg(short, long, default_value = "live")]
        side: String,
    },
    /// Show or set the note of a date
    Note {
        date: String,

        /// New note content; omit to show the current note
        content: Option<String>,

        #[arg(short, long, default_value = "live")]
        side: String,
    },
    /// Wipe every assignment of a date on one side
    ClearDay {
        date: String,

        #[arg(short, long, default_value = "live")]
        side: String,
    },
    /// Hide a date from the grid
    HideDay {
        date: String,

        /// Bring a hidden date back
        #[arg(long)]
        undo: bool,
    },
    /// List employees in display order
    Employees,
    /// List the attendance pattern catalog
    Patterns,
    /// Export a month as CSV
    Export {
        #[arg(short, long)]
        month: Option<String>,

        #[arg(short, long, default_value = "live")]
        side: String,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ShiftcalConfig::load()?;

    match cli.command {
        Commands::Show {
            month,
            side,
            context,
        } => {
            commands::show::run(&config, parse_month(month.as_deref())?, parse_side(&side)?, context)
                .await
        }
        Commands::Set {
            employee,
            date,
            slot,
            pattern,
            side,
        } => {
            commands::set::run(
                &config,
                &employee,
                commands::parse_date(&date)?,
                parse_slot(&slot)?,
                &pattern,
                parse_side(&side)?,
            )
            .await
        }
        Commands::Cycle {
            employee,
            date,
            slot,
            side,
        } => {
            commands::cycle::run(
                &config,
                &employee,
                commands::parse_date(&date)?,
                parse_slot(&slot)?,
                parse_side(&side)?,
            )
            .await
        }
        Commands::Clear {
            employee,
            date,
            slot,
            side,
        } => {
            commands::clear::run(
                &config,
                &employee,
                commands::parse_date(&date)?,
                parse_slot(&slot)?,
                parse_side(&side)?,
            )
            .await
        }
        Commands::Note {
            date,
            content,
            side,
        } => {
            commands::note::run(&config, commands::parse_date(&date)?, content, parse_side(&side)?)
                .await
        }
        Commands::ClearDay { date, side } => {
            commands::day::clear(&config, commands::parse_date(&date)?, parse_side(&side)?).await
        }
        Commands::HideDay { date, undo } => {
            commands::day::hide(&config, commands::parse_date(&date)?, undo).await
        }
        Commands::Employees => commands::employees::run(&config).await,
        Commands::Patterns => commands::patterns::run(&config).await,
        Commands::Export {
            month,
            side,
            output,
        } => {
            commands::export::run(&config, parse_month(month.as_deref())?, parse_side(&side)?, output)
                .await
        }
    }
}

fn parse_month(s: Option<&str>) -> Result<Option<YearMonth>> {
    s.map(|s| s.parse::<YearMonth>().map_err(anyhow::Error::from))
        .transpose()
}

fn parse_side(s: &str) -> Result<Side> {
    s.parse::<Side>().map_err(anyhow::Error::from)
}

fn parse_slot(s: &str) -> Result<TimeSlot> {
    s.parse::<TimeSlot>().map_err(anyhow::Error::from)
}
