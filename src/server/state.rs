//! Shared application state handed to every handler

use std::sync::Arc;

use crate::config::PortalConfig;
use crate::core::service::RecordStore;
use crate::entities::invoice::Invoice;
use crate::entities::service::Service;
use crate::entities::ticket::Ticket;

/// Injected record stores plus configuration.
///
/// Stores are trait objects so any backend satisfying the `RecordStore`
/// contract can be plugged in; handlers never see a concrete store type.
#[derive(Clone)]
pub struct AppState {
    pub tickets: Arc<dyn RecordStore<Ticket>>,
    pub invoices: Arc<dyn RecordStore<Invoice>>,
    pub services: Arc<dyn RecordStore<Service>>,
    pub config: Arc<PortalConfig>,
}
