//! Shared fixtures for integration tests
//!
//! Builds small record collections with fixed timestamps so ordering
//! expectations are reproducible.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! mod support;
//! use support::*;
//! ```

#![allow(dead_code)]

use chrono::{DateTime, Utc};
use uuid::Uuid;

use portal::prelude::*;

pub fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 timestamp")
}

pub fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

/// A ticket with the given subject, status, priority and creation time
pub fn ticket(
    subject: &str,
    status: TicketStatus,
    priority: TicketPriority,
    created_at: DateTime<Utc>,
) -> Ticket {
    Ticket {
        id: Uuid::new_v4(),
        subject: subject.to_string(),
        description: String::new(),
        category: TicketCategory::Technical,
        priority,
        status,
        customer: Customer::new("Alice Smith", "alice@example.com"),
        assigned_to: None,
        messages: Vec::new(),
        created_at,
        updated_at: created_at,
        closed_at: None,
        estimated_resolution: None,
    }
}

/// An invoice with the given number, status, total and outstanding balance.
///
/// Keeps the monetary invariants: no taxes, `amount_paid = total - amount_due`.
pub fn invoice(
    number: &str,
    status: InvoiceStatus,
    total: f64,
    amount_due: f64,
    due_at: DateTime<Utc>,
) -> Invoice {
    let issued_at = ts("2024-09-01T00:00:00Z");
    Invoice {
        id: Uuid::new_v4(),
        invoice_number: number.to_string(),
        status,
        customer: Customer::new("Alice Smith", "alice@example.com"),
        line_items: Vec::new(),
        taxes: Vec::new(),
        subtotal: total,
        total_tax: 0.0,
        total,
        amount_paid: total - amount_due,
        amount_due,
        payment_history: Vec::new(),
        issued_at,
        due_at,
        created_at: issued_at,
        updated_at: issued_at,
    }
}

/// A service with the given name and status
pub fn service(name: &str, status: ServiceStatus, created_at: DateTime<Utc>) -> Service {
    Service {
        id: Uuid::new_v4(),
        name: name.to_string(),
        category: ServiceCategory::WebHosting,
        plan: Plan {
            name: "Starter".to_string(),
            monthly_price: 9.99,
            specifications: Vec::new(),
        },
        status,
        metrics: UsageMetrics::default(),
        created_at,
        updated_at: created_at,
    }
}
