//! Error types for the collector service.
//!
//! Only authentication and ingestion failures are user-visible; everything
//! downstream of the persistence commit point is contained and logged. The
//! wire shapes are fixed: `403 {"message":"Invalid API Key"}` and
//! `500 {"message":<error text>}`.

use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use sentinel_auth::AuthError;
use sentinel_store::StoreError;
use thiserror::Error;

/// Result type alias for collector operations.
pub type CollectorResult<T> = Result<T, CollectorError>;

/// Errors that can occur while validating and persisting an event payload.
#[derive(Debug, Error)]
pub enum IngestError {
    /// A required field is absent from the payload.
    #[error("missing required field: {name}")]
    MissingField {
        /// Name of the absent field.
        name: &'static str,
    },

    /// A field is present but unusable.
    #[error("invalid field {name}: {reason}")]
    InvalidField {
        /// Name of the offending field.
        name: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// Persisting the event failed.
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Errors that can occur while persisting an alert.
///
/// Sink failures are logged and swallowed by the pipeline: the triggering
/// request has already succeeded by the time alerts are written.
#[derive(Debug, Error)]
pub enum SinkError {
    /// Persisting the alert failed.
    #[error("{0}")]
    Store(#[from] StoreError),
}

/// Errors that can occur in the collector service.
#[derive(Debug, Error)]
pub enum CollectorError {
    /// Failed to bind to the specified address.
    #[error("failed to bind to {0}: {1}")]
    BindFailed(SocketAddr, std::io::Error),

    /// The caller could not be authenticated.
    #[error("{0}")]
    Auth(#[from] AuthError),

    /// The event payload could not be validated or persisted.
    #[error("{0}")]
    Ingest(#[from] IngestError),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

/// JSON error response body.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    message: String,
}

impl IntoResponse for CollectorError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Auth(_) => StatusCode::FORBIDDEN,
            Self::Ingest(_) | Self::BindFailed(_, _) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = ErrorResponse {
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
