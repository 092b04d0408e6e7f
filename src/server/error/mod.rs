//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into enveloped HTTP responses. The `AppError` enum serves
//! as the top-level error type that wraps domain-specific errors and implements
//! `IntoResponse`, so controllers can simply propagate with `?`.

pub mod config;
pub mod transaction;
pub mod transport;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::{api::ApiResultEntity, return_status::ReturnCode},
    server::error::{
        config::ConfigError, transaction::TransactionError, transport::TransportError,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Every variant renders as an `ApiResultEntity`
/// carrying `ReturnCode::Exception`; only the HTTP status and description differ.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    ///
    /// Results in 500 Internal Server Error with error details logged server-side.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Transaction holder misuse or a timed out user transaction.
    ///
    /// Results in 500 Internal Server Error.
    #[error(transparent)]
    TransactionErr(#[from] TransactionError),

    /// Outbound HTTP call failed (REST API or mail gateway).
    ///
    /// Results in 502 Bad Gateway with details logged server-side.
    #[error(transparent)]
    TransportErr(#[from] TransportError),

    /// I/O failure while binding or serving.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided error message.
    #[error("{0}")]
    NotFound(String),

    /// Invalid request error, including input validation failures.
    ///
    /// Results in 400 Bad Request with the provided error message.
    #[error("{0}")]
    BadRequest(String),

    /// Internal server error with custom message.
    ///
    /// Results in 500 Internal Server Error. The provided message is logged
    /// but a generic message is returned to the client.
    #[error("{0}")]
    InternalError(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::TransportErr(TransportError::Request(err))
    }
}

/// Converts application errors into enveloped HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `BadRequest` variant
/// - 404 Not Found - For `NotFound` variant
/// - 502 Bad Gateway - For `TransportErr` variant
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(msg) => failure(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => failure(StatusCode::BAD_REQUEST, msg),
            Self::TransportErr(err) => {
                tracing::error!("Outbound request failed: {}", err);
                failure(StatusCode::BAD_GATEWAY, "Upstream service unavailable")
            }
            Self::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" envelope
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        failure(StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
    }
}

/// Body of an error response.
///
/// Stored in the response extensions so the trace middleware can render the
/// envelope again with the request's collected traces.
#[derive(Debug, Clone)]
pub struct FailureEnvelope(pub ApiResultEntity<()>);

fn failure(status: StatusCode, desc: impl Into<String>) -> Response {
    let body = ApiResultEntity::<()>::failure(
        status.as_u16(),
        status.canonical_reason().unwrap_or_default(),
        &ReturnCode::Exception,
        desc,
    );

    let mut response = (status, Json(body.clone())).into_response();
    response.extensions_mut().insert(FailureEnvelope(body));
    response
}
