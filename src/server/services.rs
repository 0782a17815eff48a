//! Service HTTP handlers

use axum::extract::{Path, Query, State};
use axum::response::Json;
use serde::{Deserialize, Serialize};

use crate::core::criteria::{FieldFilter, filter};
use crate::core::error::{PortalError, RecordError};
use crate::core::query::{PaginatedResponse, Pagination};
use crate::core::sort::Sortable;
use crate::core::state::Lifecycle;
use crate::core::stats::Summarize;
use crate::entities::service::{
    Service, ServiceAction, ServiceCategory, ServiceCriteria, ServiceSortKey, ServiceStats,
    ServiceStatus,
};

use super::parse_id;
use super::state::AppState;

/// Query-string parameters of the service list route
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceListQuery {
    pub search: Option<String>,
    pub status: FieldFilter<ServiceStatus>,
    pub category: FieldFilter<ServiceCategory>,
    pub sort: Option<ServiceSortKey>,
    pub page: Option<usize>,
    pub limit: Option<usize>,
}

impl ServiceListQuery {
    fn criteria(&self) -> ServiceCriteria {
        ServiceCriteria {
            search: self.search.clone(),
            status: self.status.clone(),
            category: self.category.clone(),
        }
    }
}

/// A service enriched with the operations its status permits
#[derive(Debug, Serialize)]
pub struct ServiceDetail {
    #[serde(flatten)]
    pub service: Service,
    pub available_actions: Vec<ServiceAction>,
}

impl From<Service> for ServiceDetail {
    fn from(service: Service) -> Self {
        let available_actions = service.available_actions().to_vec();
        Self {
            service,
            available_actions,
        }
    }
}

pub async fn list_services(
    State(state): State<AppState>,
    Query(query): Query<ServiceListQuery>,
) -> Result<Json<PaginatedResponse<ServiceDetail>>, PortalError> {
    let records = state.services.list().await?;

    let visible = filter(&records, &query.criteria());
    let visible = Service::sorted(visible, query.sort.unwrap_or(ServiceSortKey::Created));

    let pagination = Pagination::from_parts(query.page, query.limit, &state.config.listing);
    let (data, meta) = pagination.slice(visible);

    Ok(Json(PaginatedResponse {
        data: data.into_iter().map(ServiceDetail::from).collect(),
        pagination: meta,
    }))
}

pub async fn get_service(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ServiceDetail>, PortalError> {
    let id = parse_id(&id)?;

    state
        .services
        .get(&id)
        .await?
        .map(|service| Json(ServiceDetail::from(service)))
        .ok_or_else(|| RecordError::NotFound { kind: "service", id }.into())
}

/// Statistics always reflect the whole collection, independent of any
/// filter parameters on the list route
pub async fn service_stats(
    State(state): State<AppState>,
) -> Result<Json<ServiceStats>, PortalError> {
    let records = state.services.list().await?;
    Ok(Json(Service::aggregate(&records)))
}

/// Request body of the status-transition route
#[derive(Debug, Deserialize)]
pub struct ServiceStatusChange {
    pub status: ServiceStatus,
}

pub async fn change_service_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(change): Json<ServiceStatusChange>,
) -> Result<Json<ServiceDetail>, PortalError> {
    let id = parse_id(&id)?;

    let service = state
        .services
        .get(&id)
        .await?
        .ok_or(RecordError::NotFound { kind: "service", id })?;

    let from = service.status;
    let updated = service.transition_to(change.status)?;
    let updated = state.services.update(&id, updated).await?;

    tracing::info!(
        service_id = %id,
        from = from.label(),
        to = change.status.label(),
        "service status changed"
    );

    Ok(Json(ServiceDetail::from(updated)))
}
