//! Record trait defining the common shape of portal records

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for all records handled by the portal.
///
/// Records are immutable values produced by a store and rendered read-only;
/// state changes go back through the store rather than through shared
/// mutation. Every record has:
/// - id: Unique identifier
/// - created_at: Creation timestamp
/// - updated_at: Last modification timestamp
/// - status: Current lifecycle status (exposed here as its wire label)
pub trait Record: Clone + Send + Sync + 'static {
    /// The plural resource name used in URLs (e.g., "tickets", "invoices")
    fn resource_name() -> &'static str;

    /// The singular resource name (e.g., "ticket", "invoice")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this record
    fn id(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Get the last update timestamp
    fn updated_at(&self) -> DateTime<Utc>;

    /// Get the wire label of the current status (e.g., "open", "unpaid")
    fn status_label(&self) -> &'static str;

    /// Text fields participating in case-insensitive search.
    ///
    /// A search criterion matches when any of these contains the query as a
    /// substring, ignoring case.
    fn search_text(&self) -> Vec<String>;
}
