//! Invoice HTTP handlers

use axum::extract::{Path, Query, State};
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::criteria::{AmountRange, DateRange, FieldFilter, filter};
use crate::core::error::{PortalError, RecordError};
use crate::core::query::{PaginatedResponse, Pagination};
use crate::core::sort::Sortable;
use crate::core::state::Lifecycle;
use crate::core::stats::Summarize;
use crate::entities::invoice::{
    Invoice, InvoiceCriteria, InvoiceSortKey, InvoiceStats, InvoiceStatus,
};

use super::parse_id;
use super::state::AppState;

/// Query-string parameters of the invoice list route
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct InvoiceListQuery {
    pub search: Option<String>,
    pub status: FieldFilter<InvoiceStatus>,
    pub issued_after: Option<DateTime<Utc>>,
    pub issued_before: Option<DateTime<Utc>>,
    pub amount_min: Option<f64>,
    pub amount_max: Option<f64>,
    pub sort: Option<InvoiceSortKey>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl InvoiceListQuery {
    fn criteria(&self) -> InvoiceCriteria {
        InvoiceCriteria {
            search: self.search.clone(),
            status: self.status.clone(),
            issued: DateRange::new(self.issued_after, self.issued_before),
            amount: AmountRange::new(self.amount_min, self.amount_max),
        }
    }
}

pub async fn list_invoices(
    State(state): State<AppState>,
    Query(query): Query<InvoiceListQuery>,
) -> Result<Json<PaginatedResponse<Invoice>>, PortalError> {
    let records = state.invoices.list().await?;

    let visible = filter(&records, &query.criteria());
    let visible = Invoice::sorted(visible, query.sort.unwrap_or(InvoiceSortKey::Issued));

    let pagination = Pagination::from_parts(query.page, query.limit, &state.config.listing);
    let (data, meta) = pagination.slice(visible);

    Ok(Json(PaginatedResponse {
        data,
        pagination: meta,
    }))
}

pub async fn get_invoice(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Invoice>, PortalError> {
    let id = parse_id(&id)?;

    state
        .invoices
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| RecordError::NotFound { kind: "invoice", id }.into())
}

/// Statistics always reflect the whole collection, independent of any
/// filter parameters on the list route
pub async fn invoice_stats(
    State(state): State<AppState>,
) -> Result<Json<InvoiceStats>, PortalError> {
    let records = state.invoices.list().await?;
    Ok(Json(Invoice::aggregate(&records)))
}

/// Request body of the status-transition route
#[derive(Debug, Deserialize)]
pub struct InvoiceStatusChange {
    pub status: InvoiceStatus,
}

pub async fn change_invoice_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<InvoiceStatusChange>,
) -> Result<Json<Invoice>, PortalError> {
    let id = parse_id(&id)?;

    let invoice = state
        .invoices
        .get(&id)
        .await?
        .ok_or(RecordError::NotFound { kind: "invoice", id })?;

    let from = invoice.status;
    let updated = invoice.transition_to(change.status)?;
    let updated = state.invoices.update(&id, updated).await?;

    tracing::info!(
        invoice_id = %id,
        from = from.label(),
        to = change.status.label(),
        "invoice status changed"
    );

    Ok(Json(updated))
}
