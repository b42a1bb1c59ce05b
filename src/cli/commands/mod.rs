//! Command implementations for the payment archive CLI
//!
//! Each subcommand lives in its own module:
//! - `serve`: HTTP service over the archive
//! - `inspect`: one offline query printed as JSON
//! - `validate`: whole-archive scan and report

pub mod inspect;
pub mod serve;
pub mod shared;
pub mod validate;

use crate::Result;
use crate::cli::args::Commands;

/// Dispatch to the subcommand handler
pub async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Serve(serve_args) => serve::run_serve(serve_args).await,
        Commands::Inspect(inspect_args) => inspect::run_inspect(inspect_args).await,
        Commands::Validate(validate_args) => validate::run_validate(validate_args).await,
    }
}
