//! Centralized error handling.
//!
//! `AppError` is the HTTP-facing error type; `BootstrapError` carries the
//! outcome of a failed start-up so the entry point can decide whether the
//! process must stop.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::config::FATAL_DB_MESSAGE;

/// Failure while bootstrapping the database connection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BootstrapError {
    /// Production policy: the process must terminate. Only the public
    /// message is kept; the detail has already been logged.
    #[error("{public_message}")]
    Fatal { public_message: String },

    /// Non-production: surfaced to the caller with the driver message.
    #[error("Database connection failed: {message}")]
    Connection { message: String },
}

impl BootstrapError {
    pub fn fatal() -> Self {
        BootstrapError::Fatal {
            public_message: FATAL_DB_MESSAGE.to_string(),
        }
    }

    pub fn connection(message: impl Into<String>) -> Self {
        BootstrapError::Connection {
            message: message.into(),
        }
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, BootstrapError::Fatal { .. })
    }
}

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error(transparent)]
    Bootstrap(#[from] BootstrapError),

    #[error("Internal server error")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: ErrorBody,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    code: String,
    message: String,
}

impl AppError {
    /// Get error code for client
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Bootstrap(BootstrapError::Fatal { .. }) => "SERVICE_UNAVAILABLE",
            AppError::Bootstrap(BootstrapError::Connection { .. }) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Get HTTP status code
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Bootstrap(BootstrapError::Fatal { .. }) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Database(_)
            | AppError::Bootstrap(BootstrapError::Connection { .. })
            | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get user-facing message (hides internal details)
    pub fn user_message(&self) -> String {
        match self {
            // Outside production the connection detail is meant for the developer
            AppError::Bootstrap(e) => e.to_string(),

            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                "A database error occurred".to_string()
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                "An internal error occurred".to_string()
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = ErrorResponse {
            error: ErrorBody {
                code: self.code().to_string(),
                message: self.user_message(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}
