//! HTTP error mapping.
//!
//! Validation failures become `400 { "error": "<reason>" }`. All other
//! failures become the same generic `500` body; the log line records which
//! of the three kinds it was.

use actix_web::{HttpResponse, ResponseError, http::StatusCode};
use janawaaz_maps::MapsError;
use janawaaz_server_models::ApiError;
use thiserror::Error;

/// Body message returned for every 500.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Errors surfaced by API handlers.
#[derive(Debug, Error)]
pub enum ServerError {
    /// Missing or malformed request input.
    #[error("{0}")]
    Validation(String),

    /// An upstream API answered with an error.
    #[error("Upstream API returned an error: {0}")]
    UpstreamStatus(String),

    /// An upstream API could not be reached.
    #[error("Upstream API unreachable: {0}")]
    UpstreamUnreachable(String),

    /// Any other unexpected fault.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<MapsError> for ServerError {
    fn from(e: MapsError) -> Self {
        if e.is_unreachable() {
            return Self::UpstreamUnreachable(e.to_string());
        }
        match e {
            MapsError::Status { .. } | MapsError::Api { .. } => Self::UpstreamStatus(e.to_string()),
            MapsError::Http(_) | MapsError::Parse { .. } | MapsError::Config { .. } => {
                Self::Internal(e.to_string())
            }
        }
    }
}

impl ResponseError for ServerError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::UpstreamStatus(_) | Self::UpstreamUnreachable(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let error = match self {
            Self::Validation(message) => {
                log::debug!("Rejected request: {message}");
                message.clone()
            }
            Self::UpstreamStatus(_) | Self::UpstreamUnreachable(_) | Self::Internal(_) => {
                log::error!("{self}");
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        HttpResponse::build(self.status_code()).json(ApiError { error })
    }
}
