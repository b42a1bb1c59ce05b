//! Serve command: run the HTTP service until Ctrl-C

use super::shared::setup_logging;
use crate::Result;
use crate::cli::args::ServeArgs;
use crate::server;
use tracing::{debug, info};

pub async fn run_serve(args: ServeArgs) -> Result<()> {
    setup_logging(&args.archive, "info")?;
    debug!("Serve arguments: {:?}", args);

    let config = args.to_config();
    config.validate()?;

    info!("Initializing payments service");
    server::serve(config).await?;

    info!("Payments service stopped");
    Ok(())
}
