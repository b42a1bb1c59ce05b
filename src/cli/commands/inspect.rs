//! Inspect command: answer one request path without starting a server
//!
//! Classification and dispatch are the same as over HTTP, so the printed
//! body is what `GET <PATH>` would return.

use super::shared::setup_logging;
use crate::app::services::archive::ArchiveService;
use crate::app::services::path_classifier::classify;
use crate::cli::args::InspectArgs;
use crate::server::{ArchiveReply, ReplyError, answer};
use crate::{ArchiveError, Result};
use tracing::debug;

pub async fn run_inspect(args: InspectArgs) -> Result<()> {
    setup_logging(&args.archive, "warn")?;
    args.archive.validate()?;

    let archive = ArchiveService::open(args.archive.get_data_dir())?;
    let shape = classify(&args.path);
    debug!("Classified '{}' as {:?}", args.path, shape);

    let reply = tokio::task::spawn_blocking(move || answer(&archive, &shape))
        .await
        .map_err(|e| {
            ArchiveError::internal("inspect task failed", std::io::Error::other(e.to_string()))
        })?;

    match reply {
        Ok(reply) => {
            println!("{}", render(&reply, args.pretty)?);
            Ok(())
        }
        Err(ReplyError::NotFound) => Err(ArchiveError::not_found(args.path)),
        Err(ReplyError::ServerError) => Err(ArchiveError::internal(
            format!("request path '{}' could not be answered", args.path),
            std::io::Error::other(ReplyError::ServerError),
        )),
    }
}

fn render(reply: &ArchiveReply, pretty: bool) -> Result<String> {
    let rendered = if pretty {
        serde_json::to_string_pretty(reply)
    } else {
        serde_json::to_string(reply)
    };
    rendered.map_err(|e| ArchiveError::internal("failed to render JSON", std::io::Error::other(e)))
}
