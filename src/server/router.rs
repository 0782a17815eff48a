//! Route table for the client area

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::state::AppState;
use super::{invoices, services, tickets};

/// Build the portal routes
///
/// Per domain:
/// - GET  /{domain}              - List with criteria, sort and pagination
/// - GET  /{domain}/stats        - Whole-collection statistics
/// - GET  /{domain}/{id}         - Get a specific record
/// - POST /{domain}/{id}/status  - Run a status transition
pub fn portal_router(state: AppState) -> Router {
    Router::new()
        .route("/tickets", get(tickets::list_tickets))
        .route("/tickets/stats", get(tickets::ticket_stats))
        .route("/tickets/{id}", get(tickets::get_ticket))
        .route("/tickets/{id}/status", post(tickets::change_ticket_status))
        .route("/invoices", get(invoices::list_invoices))
        .route("/invoices/stats", get(invoices::invoice_stats))
        .route("/invoices/{id}", get(invoices::get_invoice))
        .route(
            "/invoices/{id}/status",
            post(invoices::change_invoice_status),
        )
        .route("/services", get(services::list_services))
        .route("/services/stats", get(services::service_stats))
        .route("/services/{id}", get(services::get_service))
        .route(
            "/services/{id}/status",
            post(services::change_service_status),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
