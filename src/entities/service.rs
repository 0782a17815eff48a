//! Provisioned service records: lifecycle, permitted actions and statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

use crate::core::criteria::{FieldFilter, Filterable, matches_search};
use crate::core::record::Record;
use crate::core::sort::{self, Sortable};
use crate::core::state::{Lifecycle, TransitionError};
use crate::core::stats::Summarize;

/// Product family of a provisioned service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ServiceCategory {
    WebHosting,
    Vps,
    DedicatedServer,
    Domain,
    Ssl,
}

/// Lifecycle states of a provisioned service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Pending,
    Active,
    Suspended,
    Maintenance,
    Terminated,
}

impl Lifecycle for ServiceStatus {
    fn label(self) -> &'static str {
        match self {
            ServiceStatus::Pending => "pending",
            ServiceStatus::Active => "active",
            ServiceStatus::Suspended => "suspended",
            ServiceStatus::Maintenance => "maintenance",
            ServiceStatus::Terminated => "terminated",
        }
    }

    fn is_terminal(self) -> bool {
        matches!(self, ServiceStatus::Terminated)
    }

    fn can_transition(self, next: Self) -> bool {
        matches!(
            (self, next),
            (ServiceStatus::Pending, ServiceStatus::Active)
                | (ServiceStatus::Active, ServiceStatus::Suspended)
                | (ServiceStatus::Active, ServiceStatus::Maintenance)
                | (ServiceStatus::Active, ServiceStatus::Terminated)
                | (ServiceStatus::Suspended, ServiceStatus::Active)
                | (ServiceStatus::Suspended, ServiceStatus::Terminated)
                | (ServiceStatus::Maintenance, ServiceStatus::Active)
        )
    }
}

impl ServiceStatus {
    /// The operations a customer may request in this status
    pub fn available_actions(self) -> &'static [ServiceAction] {
        match self {
            ServiceStatus::Pending => &[ServiceAction::Cancel],
            ServiceStatus::Active => &[
                ServiceAction::Restart,
                ServiceAction::Stop,
                ServiceAction::Reinstall,
                ServiceAction::Upgrade,
                ServiceAction::Renew,
                ServiceAction::Cancel,
            ],
            ServiceStatus::Suspended => &[ServiceAction::Unsuspend, ServiceAction::Cancel],
            ServiceStatus::Maintenance => &[],
            ServiceStatus::Terminated => &[],
        }
    }
}

impl fmt::Display for ServiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Operations that can be requested against a service, gated by its status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceAction {
    Restart,
    Stop,
    Reinstall,
    Upgrade,
    Renew,
    Unsuspend,
    Cancel,
}

/// The plan a service is provisioned on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub name: String,
    pub monthly_price: f64,
    /// Human-readable specification lines, e.g. "4 vCPU", "8 GB RAM"
    pub specifications: Vec<String>,
}

/// Point-in-time resource usage snapshot
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UsageMetrics {
    pub uptime_percent: f64,
    pub cpu_percent: f64,
    pub ram_percent: f64,
    pub disk_percent: f64,
    pub bandwidth_used_gb: f64,
    pub bandwidth_total_gb: f64,
}

impl Default for UsageMetrics {
    fn default() -> Self {
        Self {
            uptime_percent: 100.0,
            cpu_percent: 0.0,
            ram_percent: 0.0,
            disk_percent: 0.0,
            bandwidth_used_gb: 0.0,
            bandwidth_total_gb: 0.0,
        }
    }
}

/// A provisioned service as handed out by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: Uuid,
    pub name: String,
    pub category: ServiceCategory,
    pub plan: Plan,
    pub status: ServiceStatus,
    pub metrics: UsageMetrics,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Service {
    /// Create a new service awaiting provisioning
    pub fn new(name: impl Into<String>, category: ServiceCategory, plan: Plan) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            category,
            plan,
            status: ServiceStatus::Pending,
            metrics: UsageMetrics::default(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// The operations permitted by the current status
    pub fn available_actions(&self) -> &'static [ServiceAction] {
        self.status.available_actions()
    }

    /// Move the service to a new status, validating the transition
    pub fn transition_to(mut self, next: ServiceStatus) -> Result<Self, TransitionError> {
        self.status = self.status.transition(next)?;
        self.touch();
        Ok(self)
    }
}

impl Record for Service {
    fn resource_name() -> &'static str {
        "services"
    }

    fn resource_name_singular() -> &'static str {
        "service"
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn status_label(&self) -> &'static str {
        self.status.label()
    }

    fn search_text(&self) -> Vec<String> {
        vec![self.name.clone(), self.plan.name.clone()]
    }
}

/// Optional predicates for the service list, combined with AND semantics
#[derive(Debug, Clone, Default)]
pub struct ServiceCriteria {
    /// Case-insensitive substring match against service and plan names
    pub search: Option<String>,
    pub status: FieldFilter<ServiceStatus>,
    pub category: FieldFilter<ServiceCategory>,
}

impl Filterable for Service {
    type Criteria = ServiceCriteria;

    fn matches(&self, criteria: &ServiceCriteria) -> bool {
        if let Some(query) = &criteria.search {
            if !matches_search(query, &self.search_text()) {
                return false;
            }
        }

        criteria.status.matches(&self.status) && criteria.category.matches(&self.category)
    }
}

/// Sort keys for the service list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceSortKey {
    /// Most recently provisioned first
    Created,
    /// Alphabetical by service name
    Name,
}

impl Sortable for Service {
    type Key = ServiceSortKey;

    fn compare(&self, other: &Self, key: ServiceSortKey) -> Ordering {
        match key {
            ServiceSortKey::Created => sort::newest_first(self.created_at, other.created_at),
            ServiceSortKey::Name => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
        }
    }
}

/// Whole-collection service statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ServiceStats {
    pub total: usize,
    pub pending: usize,
    pub active: usize,
    pub suspended: usize,
    pub maintenance: usize,
    pub terminated: usize,
}

impl Summarize for Service {
    type Stats = ServiceStats;

    fn aggregate(records: &[Self]) -> ServiceStats {
        let mut stats = ServiceStats::default();
        for service in records {
            stats.total += 1;
            match service.status {
                ServiceStatus::Pending => stats.pending += 1,
                ServiceStatus::Active => stats.active += 1,
                ServiceStatus::Suspended => stats.suspended += 1,
                ServiceStatus::Maintenance => stats.maintenance += 1,
                ServiceStatus::Terminated => stats.terminated += 1,
            }
        }
        stats
    }
}
