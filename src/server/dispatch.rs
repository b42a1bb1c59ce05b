//! Request dispatch from path shape to archive query
//!
//! [`answer`] is transport independent and is shared by the HTTP handler and
//! the `inspect` command; [`ReplyError`] turns into the generic 404/500
//! responses.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{debug, error, warn};

use crate::app::services::archive::ArchiveService;
use crate::app::services::path_classifier::{RequestShape, join_segments};
use crate::constants::{JSON_CONTENT_TYPE, NOT_FOUND_BODY, SERVER_ERROR_BODY};
use crate::error::ArchiveError;
use crate::models::Payment;

/// Successful answer to a request, serialized as a bare JSON array
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArchiveReply {
    /// Day directory or record file names
    Names(Vec<String>),
    Payments(Vec<Payment>),
}

impl ArchiveReply {
    /// Serialize to the JSON response body
    pub fn to_json(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}

/// Failed answer; carries no internal detail towards the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReplyError {
    #[error("{}", NOT_FOUND_BODY)]
    NotFound,
    #[error("{}", SERVER_ERROR_BODY)]
    ServerError,
}

impl ReplyError {
    pub fn status(&self) -> StatusCode {
        match self {
            ReplyError::NotFound => StatusCode::NOT_FOUND,
            ReplyError::ServerError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// `NotFound` stays a 404; every other archive error is a 500
    fn from_archive(error: &ArchiveError) -> Self {
        if error.is_not_found() {
            warn!("{}", error);
            ReplyError::NotFound
        } else {
            error!("{}", error);
            ReplyError::ServerError
        }
    }
}

impl IntoResponse for ReplyError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

/// Run the archive query a request shape asks for
pub fn answer(
    archive: &ArchiveService,
    shape: &RequestShape,
) -> std::result::Result<ArchiveReply, ReplyError> {
    debug!("Dispatching {:?}", shape);

    match shape {
        RequestShape::Root => archive
            .list_days()
            .map(|listing| ArchiveReply::Names(listing.into_entries()))
            .map_err(|e| {
                error!("{}", e);
                ReplyError::ServerError
            }),
        RequestShape::Day { day } => archive
            .list_files(day)
            .map(|listing| ArchiveReply::Names(listing.into_entries()))
            .map_err(|e| ReplyError::from_archive(&e)),
        RequestShape::Record { day, file } => archive
            .get_records(&join_segments(day, file))
            .map(|result| ArchiveReply::Payments(result.records))
            .map_err(|e| ReplyError::from_archive(&e)),
        RequestShape::Invalid => {
            warn!("Rejected request path with too many segments");
            Err(ReplyError::ServerError)
        }
    }
}

/// 200 response with the JSON body and content type
pub fn json_response(reply: &ArchiveReply) -> Response {
    match reply.to_json() {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, JSON_CONTENT_TYPE)],
            body,
        )
            .into_response(),
        Err(e) => {
            error!("Failed to serialize response: {}", e);
            ReplyError::ServerError.into_response()
        }
    }
}
