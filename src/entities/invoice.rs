//! Invoice records: monetary invariants, lifecycle, filtering and statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use uuid::Uuid;

use crate::core::criteria::{AmountRange, DateRange, FieldFilter, Filterable, matches_search};
use crate::core::record::Record;
use crate::core::sort::{self, Sortable};
use crate::core::state::{Lifecycle, TransitionError};
use crate::core::stats::Summarize;

use super::customer::Customer;

/// Lifecycle states of an invoice
///
/// Drafts become unpaid once issued to the customer. Overdue is usually
/// derived from the due date rather than transitioned explicitly, but it can
/// be asserted by a billing run; either way it still accepts payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Draft,
    Unpaid,
    Paid,
    Overdue,
    Cancelled,
    Refunded,
}

impl Lifecycle for InvoiceStatus {
    fn label(self) -> &'static str {
        match self {
            InvoiceStatus::Draft => "draft",
            InvoiceStatus::Unpaid => "unpaid",
            InvoiceStatus::Paid => "paid",
            InvoiceStatus::Overdue => "overdue",
            InvoiceStatus::Cancelled => "cancelled",
            InvoiceStatus::Refunded => "refunded",
        }
    }

    fn is_terminal(self) -> bool {
        matches!(self, InvoiceStatus::Cancelled | InvoiceStatus::Refunded)
    }

    fn can_transition(self, next: Self) -> bool {
        matches!(
            (self, next),
            (InvoiceStatus::Draft, InvoiceStatus::Unpaid)
                | (InvoiceStatus::Unpaid, InvoiceStatus::Paid)
                | (InvoiceStatus::Unpaid, InvoiceStatus::Overdue)
                | (InvoiceStatus::Unpaid, InvoiceStatus::Cancelled)
                | (InvoiceStatus::Unpaid, InvoiceStatus::Refunded)
                | (InvoiceStatus::Overdue, InvoiceStatus::Paid)
                | (InvoiceStatus::Overdue, InvoiceStatus::Cancelled)
                | (InvoiceStatus::Paid, InvoiceStatus::Refunded)
        )
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One billable line of an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: f64,
    pub amount: f64,
}

impl LineItem {
    pub fn new(description: impl Into<String>, quantity: u32, unit_price: f64) -> Self {
        Self {
            description: description.into(),
            quantity,
            unit_price,
            amount: f64::from(quantity) * unit_price,
        }
    }
}

/// A tax applied to the invoice subtotal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxLine {
    pub name: String,
    /// Rate as a fraction, e.g. 0.20 for 20%
    pub rate: f64,
    pub amount: f64,
}

/// One transaction of the invoice's payment history
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub id: Uuid,
    pub method: String,
    pub transaction_id: Option<String>,
    pub amount: f64,
    pub paid_at: DateTime<Utc>,
}

/// An invoice as handed out by the store.
///
/// Monetary invariants hold by construction: `total = subtotal + total_tax`
/// and `amount_due = total - amount_paid`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    pub id: Uuid,
    pub invoice_number: String,
    pub status: InvoiceStatus,
    pub customer: Customer,
    pub line_items: Vec<LineItem>,
    pub taxes: Vec<TaxLine>,
    pub subtotal: f64,
    pub total_tax: f64,
    pub total: f64,
    pub amount_paid: f64,
    pub amount_due: f64,
    /// Payment history in chronological order; append-only
    pub payment_history: Vec<PaymentRecord>,
    pub issued_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Invoice {
    /// Create a new draft invoice, deriving totals from its parts
    pub fn new(
        invoice_number: impl Into<String>,
        customer: Customer,
        line_items: Vec<LineItem>,
        taxes: Vec<TaxLine>,
        due_at: DateTime<Utc>,
    ) -> Self {
        let now = Utc::now();
        let subtotal: f64 = line_items.iter().map(|item| item.amount).sum();
        let total_tax: f64 = taxes.iter().map(|tax| tax.amount).sum();
        let total = subtotal + total_tax;

        Self {
            id: Uuid::new_v4(),
            invoice_number: invoice_number.into(),
            status: InvoiceStatus::Draft,
            customer,
            line_items,
            taxes,
            subtotal,
            total_tax,
            total,
            amount_paid: 0.0,
            amount_due: total,
            payment_history: Vec::new(),
            issued_at: now,
            due_at,
            created_at: now,
            updated_at: now,
        }
    }

    /// Refresh the update timestamp
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// Record a payment, keeping `amount_due = total - amount_paid`
    pub fn record_payment(&mut self, payment: PaymentRecord) {
        self.amount_paid += payment.amount;
        self.amount_due = self.total - self.amount_paid;
        self.payment_history.push(payment);
        self.touch();
    }

    /// Whether the due date has passed with an outstanding balance
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        matches!(
            self.status,
            InvoiceStatus::Unpaid | InvoiceStatus::Overdue
        ) && now > self.due_at
            && self.amount_due > 0.0
    }

    /// The status to display: reports overdue for an unpaid invoice past its
    /// due date without mutating the stored record
    pub fn effective_status(&self, now: DateTime<Utc>) -> InvoiceStatus {
        if self.status == InvoiceStatus::Unpaid && self.is_overdue(now) {
            InvoiceStatus::Overdue
        } else {
            self.status
        }
    }

    /// Move the invoice to a new status, validating the transition
    pub fn transition_to(mut self, next: InvoiceStatus) -> Result<Self, TransitionError> {
        self.status = self.status.transition(next)?;
        self.touch();
        Ok(self)
    }
}

impl Record for Invoice {
    fn resource_name() -> &'static str {
        "invoices"
    }

    fn resource_name_singular() -> &'static str {
        "invoice"
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
        let mut fields = vec![self.invoice_number.clone(), self.customer.name.clone()];
        if let Some(company) = &self.customer.company {
            fields.push(company.clone());
        }
        fields
    }
}

/// Optional predicates for the invoice list, combined with AND semantics
#[derive(Debug, Clone, Default)]
pub struct InvoiceCriteria {
    /// Case-insensitive substring match against invoice number, customer
    /// name and company
    pub search: Option<String>,
    pub status: FieldFilter<InvoiceStatus>,
    /// Inclusive range over `issued_at`
    pub issued: DateRange,
    /// Inclusive range over `total`
    pub amount: AmountRange,
}

impl Filterable for Invoice {
    type Criteria = InvoiceCriteria;

    fn matches(&self, criteria: &InvoiceCriteria) -> bool {
        if let Some(query) = &criteria.search {
            if !matches_search(query, &self.search_text()) {
                return false;
            }
        }

        criteria.status.matches(&self.status)
            && criteria.issued.contains(self.issued_at)
            && criteria.amount.contains(self.total)
    }
}

/// Sort keys for the invoice list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceSortKey {
    /// Most recently issued first
    Issued,
    /// Soonest due first; ascending on purpose, unlike the other date keys
    Due,
    /// Largest total first
    Amount,
}

impl Sortable for Invoice {
    type Key = InvoiceSortKey;

    fn compare(&self, other: &Self, key: InvoiceSortKey) -> Ordering {
        match key {
            InvoiceSortKey::Issued => sort::newest_first(self.issued_at, other.issued_at),
            InvoiceSortKey::Due => sort::oldest_first(self.due_at, other.due_at),
            InvoiceSortKey::Amount => sort::largest_first(self.total, other.total),
        }
    }
}

/// Whole-collection invoice statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct InvoiceStats {
    pub total: usize,
    pub draft: usize,
    pub unpaid: usize,
    pub paid: usize,
    pub overdue: usize,
    pub cancelled: usize,
    pub refunded: usize,
    /// Sum of `total` across paid invoices only
    pub total_revenue: f64,
    /// Sum of `amount_due` across unpaid and overdue invoices
    pub outstanding_amount: f64,
    /// Sum of `total` across all invoices divided by count; zero when empty
    pub average_invoice_value: f64,
}

impl Summarize for Invoice {
    type Stats = InvoiceStats;

    fn aggregate(records: &[Self]) -> InvoiceStats {
        let mut stats = InvoiceStats::default();
        let mut grand_total = 0.0;

        for invoice in records {
            stats.total += 1;
            grand_total += invoice.total;
            match invoice.status {
                InvoiceStatus::Draft => stats.draft += 1,
                InvoiceStatus::Unpaid => {
                    stats.unpaid += 1;
                    stats.outstanding_amount += invoice.amount_due;
                }
                InvoiceStatus::Paid => {
                    stats.paid += 1;
                    stats.total_revenue += invoice.total;
                }
                InvoiceStatus::Overdue => {
                    stats.overdue += 1;
                    stats.outstanding_amount += invoice.amount_due;
                }
                InvoiceStatus::Cancelled => stats.cancelled += 1,
                InvoiceStatus::Refunded => stats.refunded += 1,
            }
        }

        if stats.total > 0 {
            stats.average_invoice_value = grand_total / stats.total as f64;
        }

        stats
    }
}
