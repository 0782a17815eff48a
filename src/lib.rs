//! # Portal-RS
//!
//! The data-logic core of a client-area portal for a hosting business.
//!
//! ## Features
//!
//! - **Typed Records**: Tickets, invoices and services as immutable values
//! - **Criteria Filtering**: Composable predicates (search, status, ranges) with AND semantics
//! - **Stable Sorting**: Per-domain sort keys with deterministic tie handling
//! - **Aggregate Statistics**: Whole-collection counts and monetary totals
//! - **Enforced Lifecycles**: Status transitions validated by a state machine
//! - **Injectable Storage**: Async `RecordStore` trait with an in-memory implementation
//! - **REST Exposure**: Axum routes for list/get/stats/transition per domain
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use portal::prelude::*;
//!
//! let tickets = portal::storage::seed::sample_tickets();
//!
//! // Filter, then sort for the visible list
//! let criteria = TicketCriteria {
//!     search: Some("slow".to_string()),
//!     status: FieldFilter::Exactly(TicketStatus::Open),
//!     ..Default::default()
//! };
//! let visible = filter(&tickets, &criteria);
//! let visible = Ticket::sorted(visible, TicketSortKey::Priority);
//!
//! // Statistics always reflect the whole collection, not the filter view
//! let stats = Ticket::aggregate(&tickets);
//! assert_eq!(stats.total, tickets.len());
//! ```

pub mod config;
pub mod core;
pub mod entities;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        criteria::{AmountRange, DateRange, FieldFilter, Filterable, filter},
        error::{PortalError, RecordError, RequestError},
        optimistic::OptimisticUpdate,
        query::{PageMeta, PaginatedResponse, Pagination},
        record::Record,
        service::RecordStore,
        sort::Sortable,
        state::{Lifecycle, TransitionError},
        stats::Summarize,
    };

    // === Domain Records ===
    pub use crate::entities::{
        customer::{Agent, Customer},
        invoice::{
            Invoice, InvoiceCriteria, InvoiceSortKey, InvoiceStats, InvoiceStatus, LineItem,
            PaymentRecord, TaxLine,
        },
        service::{
            Plan, Service, ServiceAction, ServiceCategory, ServiceCriteria, ServiceSortKey,
            ServiceStats, ServiceStatus, UsageMetrics,
        },
        ticket::{
            Ticket, TicketCategory, TicketCriteria, TicketMessage, TicketPriority, TicketSortKey,
            TicketStats, TicketStatus,
        },
    };

    // === Storage ===
    pub use crate::storage::InMemoryStore;

    // === Config ===
    pub use crate::config::{ListingConfig, PortalConfig, ServerConfig};

    // === Server ===
    pub use crate::server::PortalBuilder;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
