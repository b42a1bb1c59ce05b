//! Command-line argument definitions for the payment archive
//!
//! Defines the CLI using the clap derive API.

use crate::config::{ServerConfig, default_data_dir, default_listen_addr};
use crate::error::{ArchiveError, Result};
use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::net::SocketAddr;
use std::path::PathBuf;

/// CLI arguments for the payment archive service
///
/// Serves a `YYYYMMDD/HHMMSS.payments` archive as read-only JSON over HTTP,
/// and answers the same queries offline.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "payment-archive",
    version,
    about = "Serve a day/time partitioned archive of payment CSV files as JSON",
    long_about = "Exposes a directory of YYYYMMDD day folders holding HHMMSS.payments CSV files \
                  through a read-only HTTP API returning JSON. GET / lists days, GET /<day>/ lists \
                  record files and GET /<day>/<file> returns the parsed payments."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Serve the archive over HTTP
    Serve(ServeArgs),
    /// Answer one request path offline and print the JSON body
    Inspect(InspectArgs),
    /// Scan the whole archive and report skipped entries and broken files
    Validate(ValidateArgs),
}

/// Options shared by every command
#[derive(Debug, Clone, ClapArgs)]
pub struct ArchiveArgs {
    /// Archive root directory
    ///
    /// Holds one YYYYMMDD directory per day. Defaults to ./data under the
    /// current working directory.
    #[arg(
        short = 'd',
        long = "data-dir",
        value_name = "PATH",
        help = "Archive root directory (default: ./data)"
    )]
    pub data_dir: Option<PathBuf>,

    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

/// Arguments for the serve command
#[derive(Debug, Clone, Parser)]
pub struct ServeArgs {
    #[command(flatten)]
    pub archive: ArchiveArgs,

    /// Socket address to listen on
    #[arg(
        short = 'l',
        long = "listen",
        value_name = "ADDR",
        help = "Socket address to listen on (default: 0.0.0.0:9999)"
    )]
    pub listen: Option<SocketAddr>,
}

/// Arguments for the inspect command
#[derive(Debug, Clone, Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub archive: ArchiveArgs,

    /// Request path, e.g. `/`, `/20220717/` or `/20220717/090000.payments`
    #[arg(value_name = "PATH", default_value = "/")]
    pub path: String,

    /// Pretty-print the JSON body
    #[arg(long = "pretty", help = "Pretty-print the JSON output")]
    pub pretty: bool,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub archive: ArchiveArgs,

    /// Report format
    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        help = "Output format for the validation report"
    )]
    pub output_format: OutputFormat,
}

/// Output format options for reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON format for scripting
    Json,
}

impl Args {
    /// Get the command if one was specified
    pub fn get_command(&self) -> Option<&Commands> {
        self.command.as_ref()
    }
}

impl ArchiveArgs {
    /// Archive root from the flag, or `./data`
    pub fn get_data_dir(&self) -> PathBuf {
        self.data_dir.clone().unwrap_or_else(default_data_dir)
    }

    /// Log level from `-q`/`-v`, starting at `base` with no flags
    pub fn get_log_level(&self, base: &'static str) -> &'static str {
        if self.quiet {
            return "error";
        }
        const LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];
        let start = LEVELS.iter().position(|l| *l == base).unwrap_or(1);
        let index = (start + usize::from(self.verbose)).min(LEVELS.len() - 1);
        LEVELS[index]
    }

    /// Check if we should show progress bars (not in quiet mode)
    pub fn show_progress(&self) -> bool {
        !self.quiet
    }

    /// Validate that the archive root exists and is a directory
    pub fn validate(&self) -> Result<()> {
        let data_dir = self.get_data_dir();
        if !data_dir.is_dir() {
            return Err(ArchiveError::configuration(format!(
                "Data directory does not exist or is not a directory: {}",
                data_dir.display()
            )));
        }
        Ok(())
    }
}

impl ServeArgs {
    /// Build the server configuration from the flags
    pub fn to_config(&self) -> ServerConfig {
        ServerConfig::default()
            .with_data_dir(self.archive.get_data_dir())
            .with_listen_addr(self.listen.unwrap_or_else(default_listen_addr))
    }
}
