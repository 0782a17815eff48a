//! Support ticket records: lifecycle, filtering, sorting and statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

use crate::core::criteria::{DateRange, FieldFilter, Filterable, matches_search};
use crate::core::record::Record;
use crate::core::sort::{self, Sortable};
use crate::core::state::{Lifecycle, TransitionError};
use crate::core::stats::Summarize;

use super::customer::{Agent, Customer};

/// Lifecycle states of a support ticket
///
/// Open tickets move to in-progress when a staff member picks them up, and
/// from there to resolved or closed. Resolved and closed are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TicketStatus {
    Open,
    InProgress,
    Resolved,
    Closed,
}

impl Lifecycle for TicketStatus {
    fn label(self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in-progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
        }
    }

    fn is_terminal(self) -> bool {
        matches!(self, TicketStatus::Resolved | TicketStatus::Closed)
    }

    fn can_transition(self, next: Self) -> bool {
        matches!(
            (self, next),
            (TicketStatus::Open, TicketStatus::InProgress)
                | (TicketStatus::InProgress, TicketStatus::Resolved)
                | (TicketStatus::InProgress, TicketStatus::Closed)
        )
    }
}

impl fmt::Display for TicketStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Ordered ticket priority, low < medium < high < urgent
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl TicketPriority {
    /// Fixed rank table used for priority sorting
    pub fn rank(self) -> u8 {
        match self {
            TicketPriority::Low => 1,
            TicketPriority::Medium => 2,
            TicketPriority::High => 3,
            TicketPriority::Urgent => 4,
        }
    }
}

/// Department a ticket is routed to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketCategory {
    Technical,
    Billing,
    Sales,
    General,
}

/// One entry of a ticket's message thread
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TicketMessage {
    pub id: Uuid,
    pub author: String,
    pub body: String,
    pub attachments: Vec<String>,
    /// Internal notes are visible to staff only
    pub internal: bool,
    pub sent_at: DateTime<Utc>,
}

impl TicketMessage {
    pub fn new(author: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            author: author.into(),
            body: body.into(),
            attachments: Vec::new(),
            internal: false,
            sent_at: Utc::now(),
        }
    }
}

/// A support ticket as handed out by the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub subject: String,
    pub description: String,
    pub category: TicketCategory,
    pub priority: TicketPriority,
    pub status: TicketStatus,
    pub customer: Customer,
    pub assigned_to: Option<Agent>,
    /// Message thread in chronological order; append-only
    pub messages: Vec<TicketMessage>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub closed_at: Option<DateTime<Utc>>,
    pub estimated_resolution: Option<DateTime<Utc>>,
}

impl Ticket {
    /// Create a new open ticket
    pub fn new(
        subject: impl Into<String>,
        description: impl Into<String>,
        category: TicketCategory,
        priority: TicketPriority,
        customer: Customer,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            subject: subject.into(),
            description: description.into(),
            category,
            priority,
            status: TicketStatus::Open,
            customer,
            assigned_to: None,
            messages: Vec::new(),
            created_at: now,
            updated_at: now,
            closed_at: None,
            estimated_resolution: None,
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Append a message to the thread, preserving chronological order
    pub fn push_message(&mut self, message: TicketMessage) {
        self.messages.push(message);
        self.touch();
    }

    /// Move the ticket to a new status, validating the transition.
    ///
    /// Entering `Closed` stamps `closed_at`.
    pub fn transition_to(mut self, next: TicketStatus) -> Result<Self, TransitionError> {
        self.status = self.status.transition(next)?;
        if next == TicketStatus::Closed {
            self.closed_at = Some(Utc::now());
        }
        self.touch();
        Ok(self)
    }
}

impl Record for Ticket {
    fn resource_name() -> &'static str {
        "tickets"
    }

    fn resource_name_singular() -> &'static str {
        "ticket"
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
        vec![
            self.subject.clone(),
            self.description.clone(),
            self.id.to_string(),
        ]
    }
}

/// Optional predicates for the ticket list, combined with AND semantics
#[derive(Debug, Clone, Default)]
pub struct TicketCriteria {
    /// Case-insensitive substring match against subject, description and id
    pub search: Option<String>,
    pub status: FieldFilter<TicketStatus>,
    pub priority: FieldFilter<TicketPriority>,
    pub category: FieldFilter<TicketCategory>,
    /// Inclusive range over `created_at`
    pub created: DateRange,
}

impl Filterable for Ticket {
    type Criteria = TicketCriteria;

    fn matches(&self, criteria: &TicketCriteria) -> bool {
        if let Some(query) = &criteria.search {
            if !matches_search(query, &self.search_text()) {
                return false;
            }
        }

        criteria.status.matches(&self.status)
            && criteria.priority.matches(&self.priority)
            && criteria.category.matches(&self.category)
            && criteria.created.contains(self.created_at)
    }
}

/// Sort keys for the ticket list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TicketSortKey {
    /// Most recently created first
    Created,
    /// Most recently updated first
    Updated,
    /// Highest priority rank first
    Priority,
}

impl Sortable for Ticket {
    type Key = TicketSortKey;

    fn compare(&self, other: &Self, key: TicketSortKey) -> Ordering {
        match key {
            TicketSortKey::Created => sort::newest_first(self.created_at, other.created_at),
            TicketSortKey::Updated => sort::newest_first(self.updated_at, other.updated_at),
            TicketSortKey::Priority => other.priority.rank().cmp(&self.priority.rank()),
        }
    }
}

/// Whole-collection ticket statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total: usize,
    pub open: usize,
    pub in_progress: usize,
    pub resolved: usize,
    pub closed: usize,
}

impl Summarize for Ticket {
    type Stats = TicketStats;

    fn aggregate(records: &[Self]) -> TicketStats {
        let mut stats = TicketStats::default();
        for ticket in records {
            stats.total += 1;
            match ticket.status {
                TicketStatus::Open => stats.open += 1,
                TicketStatus::InProgress => stats.in_progress += 1,
                TicketStatus::Resolved => stats.resolved += 1,
                TicketStatus::Closed => stats.closed += 1,
            }
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::criteria::filter;

    fn sample_ticket(subject: &str, priority: TicketPriority) -> Ticket {
        Ticket::new(
            subject,
            "description",
            TicketCategory::Technical,
            priority,
            Customer::new("Alice Smith", "alice@example.com"),
        )
    }

    // === Lifecycle ===

    #[test]
    fn test_open_ticket_can_start_progress() {
        let ticket = sample_ticket("Mail down", TicketPriority::High);
        let ticket = ticket.transition_to(TicketStatus::InProgress).unwrap();
        assert_eq!(ticket.status, TicketStatus::InProgress);
    }

    #[test]
    fn test_in_progress_resolves_or_closes() {
        let ticket = sample_ticket("Mail down", TicketPriority::High)
            .transition_to(TicketStatus::InProgress)
            .unwrap();

        let resolved = ticket.clone().transition_to(TicketStatus::Resolved).unwrap();
        assert_eq!(resolved.status, TicketStatus::Resolved);
        assert!(resolved.closed_at.is_none());

        let closed = ticket.transition_to(TicketStatus::Closed).unwrap();
        assert_eq!(closed.status, TicketStatus::Closed);
        assert!(closed.closed_at.is_some());
    }

    #[test]
    fn test_open_cannot_skip_to_resolved() {
        let ticket = sample_ticket("Mail down", TicketPriority::High);
        let err = ticket.transition_to(TicketStatus::Resolved).unwrap_err();
        assert_eq!(err.from, "open");
        assert_eq!(err.to, "resolved");
    }

    #[test]
    fn test_closed_is_terminal() {
        assert!(TicketStatus::Closed.is_terminal());
        assert!(!TicketStatus::Closed.can_transition(TicketStatus::Open));
        assert!(!TicketStatus::Resolved.can_transition(TicketStatus::InProgress));
    }

    // === Messages ===

    #[test]
    fn test_messages_stay_in_insertion_order() {
        let mut ticket = sample_ticket("Mail down", TicketPriority::Low);
        ticket.push_message(TicketMessage::new("Alice Smith", "first"));
        ticket.push_message(TicketMessage::new("Support", "second"));

        let bodies: Vec<&str> = ticket.messages.iter().map(|m| m.body.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second"]);
    }

    // === Filtering ===

    #[test]
    fn test_search_matches_subject() {
        let tickets = vec![
            sample_ticket("Website loading extremely slow", TicketPriority::High),
            sample_ticket("Invoice payment failed", TicketPriority::Urgent),
        ];

        let criteria = TicketCriteria {
            search: Some("slow".to_string()),
            ..Default::default()
        };

        let matched = filter(&tickets, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].subject, "Website loading extremely slow");
    }

    #[test]
    fn test_search_excludes_even_when_other_criteria_match() {
        let tickets = vec![sample_ticket("Invoice payment failed", TicketPriority::High)];

        let criteria = TicketCriteria {
            search: Some("slow".to_string()),
            priority: FieldFilter::Exactly(TicketPriority::High),
            ..Default::default()
        };

        assert!(filter(&tickets, &criteria).is_empty());
    }

    #[test]
    fn test_status_filter() {
        let open = sample_ticket("a", TicketPriority::Low);
        let in_progress = sample_ticket("b", TicketPriority::Low)
            .transition_to(TicketStatus::InProgress)
            .unwrap();
        let tickets = vec![open, in_progress];

        let criteria = TicketCriteria {
            status: FieldFilter::Exactly(TicketStatus::InProgress),
            ..Default::default()
        };

        let matched = filter(&tickets, &criteria);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].subject, "b");
    }

    // === Sorting ===

    #[test]
    fn test_priority_sort_rank_descending() {
        let tickets = vec![
            sample_ticket("low", TicketPriority::Low),
            sample_ticket("urgent", TicketPriority::Urgent),
            sample_ticket("medium", TicketPriority::Medium),
        ];

        let sorted = Ticket::sorted(tickets, TicketSortKey::Priority);
        let subjects: Vec<&str> = sorted.iter().map(|t| t.subject.as_str()).collect();
        assert_eq!(subjects, vec!["urgent", "medium", "low"]);
    }

    #[test]
    fn test_priority_order_is_total() {
        assert!(TicketPriority::Low < TicketPriority::Medium);
        assert!(TicketPriority::Medium < TicketPriority::High);
        assert!(TicketPriority::High < TicketPriority::Urgent);
        assert_eq!(TicketPriority::Urgent.rank(), 4);
        assert_eq!(TicketPriority::Low.rank(), 1);
    }

    // === Statistics ===

    #[test]
    fn test_aggregate_counts_by_status() {
        let open = sample_ticket("a", TicketPriority::Low);
        let in_progress = sample_ticket("b", TicketPriority::Low)
            .transition_to(TicketStatus::InProgress)
            .unwrap();
        let resolved = sample_ticket("c", TicketPriority::Low)
            .transition_to(TicketStatus::InProgress)
            .unwrap()
            .transition_to(TicketStatus::Resolved)
            .unwrap();

        let stats = Ticket::aggregate(&[open, in_progress, resolved]);
        assert_eq!(stats.total, 3);
        assert_eq!(stats.open, 1);
        assert_eq!(stats.in_progress, 1);
        assert_eq!(stats.resolved, 1);
        assert_eq!(stats.closed, 0);
        assert_eq!(
            stats.open + stats.in_progress + stats.resolved + stats.closed,
            stats.total
        );
    }

    #[test]
    fn test_aggregate_empty_collection() {
        let stats = Ticket::aggregate(&[]);
        assert_eq!(stats.total, 0);
        assert_eq!(stats.open, 0);
    }

    // === Serde ===

    #[test]
    fn test_status_wire_labels() {
        assert_eq!(
            serde_json::to_string(&TicketStatus::InProgress).unwrap(),
            "\"in-progress\""
        );
        assert_eq!(
            serde_json::from_str::<TicketStatus>("\"open\"").unwrap(),
            TicketStatus::Open
        );
    }
}
