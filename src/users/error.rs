use std::num::ParseIntError;

use thiserror::Error;
use tracing::debug;

use crate::response::{IntoResponse, Response};
use crate::router::{NOT_FOUND_BODY, not_found};
use crate::status::Status;

/// Request-level failures of the user handlers.
///
/// Each variant carries the raw error text it is answered with.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The `{id}` segment is not a `[0-9a-z]+` token, so the route
    /// pattern does not match it.
    #[error("{}", NOT_FOUND_BODY)]
    UnmatchedId(String),

    /// Alphanumeric but not a non-negative integer that fits in `u64`.
    #[error("{0}")]
    InvalidId(#[from] ParseIntError),

    #[error("{0}")]
    MalformedBody(#[from] serde_json::Error),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::UnmatchedId(token) => {
                debug!(%token, "id outside the route pattern");
                not_found()
            }
            Self::InvalidId(_) | Self::MalformedBody(_) => Response::builder()
                .status(Status::BadRequest)
                .text(self.to_string()),
        }
    }
}
