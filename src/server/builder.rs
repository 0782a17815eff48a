//! PortalBuilder for fluent API to build the HTTP server

use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

use crate::config::PortalConfig;
use crate::core::service::RecordStore;
use crate::entities::invoice::Invoice;
use crate::entities::service::Service;
use crate::entities::ticket::Ticket;
use crate::storage::in_memory::InMemoryStore;
use crate::storage::seed;

use super::router::portal_router;
use super::state::AppState;

/// Builder assembling record stores and configuration into a server
///
/// # Example
///
/// ```ignore
/// PortalBuilder::new()
///     .with_config(PortalConfig::default_config())
///     .with_seed_data()
///     .serve()
///     .await?;
/// ```
pub struct PortalBuilder {
    config: PortalConfig,
    tickets: Option<Arc<dyn RecordStore<Ticket>>>,
    invoices: Option<Arc<dyn RecordStore<Invoice>>>,
    services: Option<Arc<dyn RecordStore<Service>>>,
}

impl PortalBuilder {
    /// Create a new PortalBuilder with default configuration
    pub fn new() -> Self {
        Self {
            config: PortalConfig::default(),
            tickets: None,
            invoices: None,
            services: None,
        }
    }

    /// Set the portal configuration
    pub fn with_config(mut self, config: PortalConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the ticket store
    pub fn with_ticket_store(mut self, store: impl RecordStore<Ticket> + 'static) -> Self {
        self.tickets = Some(Arc::new(store));
        self
    }

    /// Set the invoice store
    pub fn with_invoice_store(mut self, store: impl RecordStore<Invoice> + 'static) -> Self {
        self.invoices = Some(Arc::new(store));
        self
    }

    /// Set the service store
    pub fn with_service_store(mut self, store: impl RecordStore<Service> + 'static) -> Self {
        self.services = Some(Arc::new(store));
        self
    }

    /// Back all three domains with in-memory stores holding the sample
    /// dataset. Useful for demos and integration tests.
    pub fn with_seed_data(mut self) -> Self {
        self.tickets = Some(Arc::new(InMemoryStore::seeded(seed::sample_tickets())));
        self.invoices = Some(Arc::new(InMemoryStore::seeded(seed::sample_invoices())));
        self.services = Some(Arc::new(InMemoryStore::seeded(seed::sample_services())));
        self
    }

    /// Build the application router.
    ///
    /// Domains without a configured store fall back to empty in-memory
    /// stores.
    pub fn build(self) -> Router {
        let state = AppState {
            tickets: self
                .tickets
                .unwrap_or_else(|| Arc::new(InMemoryStore::<Ticket>::new())),
            invoices: self
                .invoices
                .unwrap_or_else(|| Arc::new(InMemoryStore::<Invoice>::new())),
            services: self
                .services
                .unwrap_or_else(|| Arc::new(InMemoryStore::<Service>::new())),
            config: Arc::new(self.config),
        };

        portal_router(state)
    }

    /// Serve the application with graceful shutdown
    ///
    /// This will:
    /// - Bind to the configured address
    /// - Start serving requests
    /// - Handle SIGTERM and SIGINT (Ctrl+C) for graceful shutdown
    pub async fn serve(self) -> Result<()> {
        let addr = self.config.server.addr();
        let app = self.build();
        let listener = TcpListener::bind(&addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for PortalBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
