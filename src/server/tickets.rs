//! Ticket HTTP handlers

use axum::extract::{Path, Query, State};
use axum::response::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::core::criteria::{DateRange, FieldFilter, filter};
use crate::core::error::{PortalError, RecordError};
use crate::core::query::{PaginatedResponse, Pagination};
use crate::core::sort::Sortable;
use crate::core::state::Lifecycle;
use crate::core::stats::Summarize;
use crate::entities::ticket::{
    Ticket, TicketCategory, TicketCriteria, TicketPriority, TicketSortKey, TicketStats,
    TicketStatus,
};

use super::parse_id;
use super::state::AppState;

/// Query-string parameters of the ticket list route
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct TicketListQuery {
    pub search: Option<String>,
    pub status: FieldFilter<TicketStatus>,
    pub priority: FieldFilter<TicketPriority>,
    pub category: FieldFilter<TicketCategory>,
    pub created_after: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub sort: Option<TicketSortKey>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl TicketListQuery {
    fn criteria(&self) -> TicketCriteria {
        TicketCriteria {
            search: self.search.clone(),
            status: self.status.clone(),
            priority: self.priority.clone(),
            category: self.category.clone(),
            created: DateRange::new(self.created_after, self.created_before),
        }
    }
}

pub async fn list_tickets(
    State(state): State<AppState>,
    Query(query): Query<TicketListQuery>,
) -> Result<Json<PaginatedResponse<Ticket>>, PortalError> {
    let records = state.tickets.list().await?;

    let visible = filter(&records, &query.criteria());
    let visible = Ticket::sorted(visible, query.sort.unwrap_or(TicketSortKey::Updated));

    let pagination = Pagination::from_parts(query.page, query.limit, &state.config.listing);
    let (data, meta) = pagination.slice(visible);

    Ok(Json(PaginatedResponse {
        data,
        pagination: meta,
    }))
}

pub async fn get_ticket(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Ticket>, PortalError> {
    let id = parse_id(&id)?;

    state
        .tickets
        .get(&id)
        .await?
        .map(Json)
        .ok_or_else(|| RecordError::NotFound { kind: "ticket", id }.into())
}

/// Statistics always reflect the whole collection, independent of any
/// filter parameters on the list route
pub async fn ticket_stats(
    State(state): State<AppState>,
) -> Result<Json<TicketStats>, PortalError> {
    let records = state.tickets.list().await?;
    Ok(Json(Ticket::aggregate(&records)))
}

/// Request body of the status-transition route
#[derive(Debug, Deserialize)]
pub struct TicketStatusChange {
    pub status: TicketStatus,
}

pub async fn change_ticket_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<TicketStatusChange>,
) -> Result<Json<Ticket>, PortalError> {
    let id = parse_id(&id)?;

    let ticket = state
        .tickets
        .get(&id)
        .await?
        .ok_or(RecordError::NotFound { kind: "ticket", id })?;

    let from = ticket.status;
    let updated = ticket.transition_to(change.status)?;
    let updated = state.tickets.update(&id, updated).await?;

    tracing::info!(
        ticket_id = %id,
        from = from.label(),
        to = change.status.label(),
        "ticket status changed"
    );

    Ok(Json(updated))
}
