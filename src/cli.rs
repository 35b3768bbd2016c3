//! Command-line flags and subcommands.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::models::Currency;

/// PayStream: watch your monthly salary accrue in real time.
#[derive(Parser, Debug)]
#[command(name = "paystream", version, about)]
pub struct Cli {
    /// Runtime configuration file.
    #[arg(long, default_value = "config/paystream.yaml", env = "PAYSTREAM_CONFIG")]
    pub config: PathBuf,

    /// Directory holding the saved salary settings (defaults to the
    /// platform configuration directory).
    #[arg(long, env = "PAYSTREAM_SETTINGS_DIR")]
    pub settings_dir: Option<PathBuf>,

    /// What to do.
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Render the live counter in the terminal.
    Watch {
        /// Stop after this many ticks instead of waiting for Ctrl-C.
        #[arg(long)]
        ticks: Option<u64>,
    },
    /// Serve the counter over HTTP.
    Serve {
        /// Listen address, overriding the configuration file.
        #[arg(long)]
        addr: Option<String>,
    },
    /// Save salary settings.
    Configure {
        /// Monthly gross salary.
        #[arg(long)]
        salary: f64,
        /// Currency the salary is paid in (ARS or USD).
        #[arg(long)]
        currency: Currency,
        /// ARS per USD. Required unless --use-quote is given.
        #[arg(long, required_unless_present = "use_quote")]
        rate: Option<f64>,
        /// Use the current official quote as the rate.
        #[arg(long)]
        use_quote: bool,
    },
    /// Print the current official ARS/USD quote.
    Rate,
}

impl Cli {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
