//! Core module containing fundamental traits and types for the portal

pub mod criteria;
pub mod error;
pub mod optimistic;
pub mod query;
pub mod record;
pub mod service;
pub mod sort;
pub mod state;
pub mod stats;

pub use criteria::{AmountRange, DateRange, FieldFilter, Filterable, filter};
pub use error::{ConfigError, PortalError, RecordError, RequestError};
pub use optimistic::OptimisticUpdate;
pub use query::{PageMeta, PaginatedResponse, Pagination};
pub use record::Record;
pub use service::RecordStore;
pub use sort::Sortable;
pub use state::{Lifecycle, TransitionError};
pub use stats::Summarize;
