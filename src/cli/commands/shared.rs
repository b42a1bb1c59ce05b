//! Shared components for CLI commands

use crate::Result;
use crate::cli::args::ArchiveArgs;
use crate::constants::LOG_TARGET;
use tracing::debug;

/// Set up structured logging on stderr
///
/// `RUST_LOG` takes precedence over the verbosity flags. Calling this more
/// than once keeps the first subscriber.
pub fn setup_logging(args: &ArchiveArgs, base_level: &'static str) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level(base_level);

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!("{}={},tower_http={}", LOG_TARGET, log_level, log_level))
    });

    let initialized = if args.quiet {
        // Minimal logging for quiet mode
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        // Standard logging with timestamps
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if initialized.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
    Ok(())
}
