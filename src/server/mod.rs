//! REST exposure for the client area
//!
//! This module provides a `PortalBuilder` that assembles the record stores
//! and configuration into an axum router with, per domain:
//! - a list route (criteria + sort + pagination via the query string)
//! - a get-by-id route
//! - a stats route aggregating the whole store
//! - a status-transition route running the lifecycle state machine

pub mod builder;
pub mod invoices;
pub mod router;
pub mod services;
pub mod state;
pub mod tickets;

pub use builder::PortalBuilder;
pub use router::portal_router;
pub use state::AppState;

use uuid::Uuid;

use crate::core::error::{PortalError, RequestError};

/// Parse a path segment as a record id
pub(crate) fn parse_id(value: &str) -> Result<Uuid, PortalError> {
    Uuid::parse_str(value).map_err(|_| {
        RequestError::InvalidId {
            value: value.to_string(),
        }
        .into()
    })
}
