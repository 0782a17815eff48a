//! Typed error handling for the portal
//!
//! This module provides an error type hierarchy that enables clients to
//! handle errors specifically rather than dealing with generic
//! `anyhow::Error` types.
//!
//! # Error Categories
//!
//! - [`RecordError`]: Errors related to record lookups and operations
//! - [`TransitionError`]: Illegal status transitions (re-exported from `core::state`)
//! - [`ConfigError`]: Errors related to configuration loading and parsing
//! - [`RequestError`]: Malformed HTTP requests
//!
//! # Example
//!
//! ```rust,ignore
//! use portal::prelude::*;
//!
//! async fn get_ticket(id: Uuid) -> Result<Ticket, PortalError> {
//!     store.get(&id).await?.ok_or_else(|| {
//!         RecordError::NotFound { kind: "ticket", id }.into()
//!     })
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

use crate::core::state::TransitionError;

/// The main error type for the portal
///
/// This enum encompasses all errors that can surface from the data logic or
/// the REST exposure. Each variant carries a more specific error type.
#[derive(Debug)]
pub enum PortalError {
    /// Record-related errors (lookups, store operations)
    Record(RecordError),

    /// Illegal status transitions
    Transition(TransitionError),

    /// Configuration errors
    Config(ConfigError),

    /// Malformed requests
    Request(RequestError),

    /// Internal errors (should not happen in normal operation)
    Internal(String),
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::Record(e) => write!(f, "{}", e),
            PortalError::Transition(e) => write!(f, "{}", e),
            PortalError::Config(e) => write!(f, "{}", e),
            PortalError::Request(e) => write!(f, "{}", e),
            PortalError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortalError::Record(e) => Some(e),
            PortalError::Transition(e) => Some(e),
            PortalError::Config(e) => Some(e),
            PortalError::Request(e) => Some(e),
            PortalError::Internal(_) => None,
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl PortalError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            PortalError::Record(e) => e.status_code(),
            PortalError::Transition(_) => StatusCode::CONFLICT,
            PortalError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PortalError::Request(e) => e.status_code(),
            PortalError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            PortalError::Record(e) => e.error_code(),
            PortalError::Transition(_) => "ILLEGAL_TRANSITION",
            PortalError::Config(_) => "CONFIG_ERROR",
            PortalError::Request(e) => e.error_code(),
            PortalError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    /// Get additional details for the error
    fn details(&self) -> Option<serde_json::Value> {
        match self {
            PortalError::Record(RecordError::NotFound { kind, id }) => Some(serde_json::json!({
                "kind": kind,
                "id": id.to_string()
            })),
            PortalError::Transition(TransitionError { from, to }) => Some(serde_json::json!({
                "from": from,
                "to": to
            })),
            _ => None,
        }
    }
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Record Errors
// =============================================================================

/// Errors related to record operations
#[derive(Debug)]
pub enum RecordError {
    /// Record was not found
    NotFound {
        kind: &'static str,
        id: Uuid,
    },

    /// Record already exists (conflict)
    AlreadyExists {
        kind: &'static str,
        id: Uuid,
    },

    /// Record operation failed
    OperationFailed {
        kind: &'static str,
        operation: String,
        message: String,
    },
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordError::NotFound { kind, id } => {
                write!(f, "{} with id '{}' not found", kind, id)
            }
            RecordError::AlreadyExists { kind, id } => {
                write!(f, "{} with id '{}' already exists", kind, id)
            }
            RecordError::OperationFailed {
                kind,
                operation,
                message,
            } => {
                write!(f, "Failed to {} {}: {}", operation, kind, message)
            }
        }
    }
}

impl std::error::Error for RecordError {}

impl RecordError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RecordError::NotFound { .. } => StatusCode::NOT_FOUND,
            RecordError::AlreadyExists { .. } => StatusCode::CONFLICT,
            RecordError::OperationFailed { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RecordError::NotFound { .. } => "RECORD_NOT_FOUND",
            RecordError::AlreadyExists { .. } => "RECORD_ALREADY_EXISTS",
            RecordError::OperationFailed { .. } => "RECORD_OPERATION_FAILED",
        }
    }
}

impl From<RecordError> for PortalError {
    fn from(err: RecordError) -> Self {
        PortalError::Record(err)
    }
}

impl From<TransitionError> for PortalError {
    fn from(err: TransitionError) -> Self {
        PortalError::Transition(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration file
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// IO error while reading configuration
    IoError {
        path: String,
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::IoError { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for PortalError {
    fn from(err: ConfigError) -> Self {
        PortalError::Config(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to malformed requests
#[derive(Debug)]
pub enum RequestError {
    /// Path id is not a valid UUID
    InvalidId {
        value: String,
    },

    /// Missing required argument
    MissingArgument {
        argument: String,
    },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::InvalidId { value } => {
                write!(f, "Invalid record id: {}", value)
            }
            RequestError::MissingArgument { argument } => {
                write!(f, "Missing required argument: {}", argument)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::InvalidId { .. } => StatusCode::BAD_REQUEST,
            RequestError::MissingArgument { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::InvalidId { .. } => "INVALID_ID",
            RequestError::MissingArgument { .. } => "MISSING_ARGUMENT",
        }
    }
}

impl From<RequestError> for PortalError {
    fn from(err: RequestError) -> Self {
        PortalError::Request(err)
    }
}

impl From<anyhow::Error> for PortalError {
    fn from(err: anyhow::Error) -> Self {
        PortalError::Internal(err.to_string())
    }
}
