//! Sorting behavior: per-domain key directions and stability.

mod support;

use portal::prelude::*;
use support::*;

// ==============================================================
// Tickets
// ==============================================================

#[test]
fn priority_sorts_by_rank_descending() {
    let tickets = vec![
        ticket("low", TicketStatus::Open, TicketPriority::Low, ts("2024-11-01T00:00:00Z")),
        ticket("urgent", TicketStatus::Open, TicketPriority::Urgent, ts("2024-11-02T00:00:00Z")),
        ticket("medium", TicketStatus::Open, TicketPriority::Medium, ts("2024-11-03T00:00:00Z")),
    ];

    let sorted = Ticket::sorted(tickets, TicketSortKey::Priority);
    let subjects: Vec<&str> = sorted.iter().map(|t| t.subject.as_str()).collect();
    assert_eq!(subjects, vec!["urgent", "medium", "low"]);
}

#[test]
fn priority_ties_keep_input_order() {
    let tickets = vec![
        ticket("first-high", TicketStatus::Open, TicketPriority::High, ts("2024-11-01T00:00:00Z")),
        ticket("urgent", TicketStatus::Open, TicketPriority::Urgent, ts("2024-11-02T00:00:00Z")),
        ticket("second-high", TicketStatus::Open, TicketPriority::High, ts("2024-11-03T00:00:00Z")),
        ticket("third-high", TicketStatus::Open, TicketPriority::High, ts("2024-10-01T00:00:00Z")),
    ];

    let sorted = Ticket::sorted(tickets, TicketSortKey::Priority);
    let subjects: Vec<&str> = sorted.iter().map(|t| t.subject.as_str()).collect();
    assert_eq!(
        subjects,
        vec!["urgent", "first-high", "second-high", "third-high"]
    );
}

#[test]
fn created_sorts_most_recent_first() {
    let tickets = vec![
        ticket("older", TicketStatus::Open, TicketPriority::Low, ts("2024-10-01T00:00:00Z")),
        ticket("newer", TicketStatus::Open, TicketPriority::Low, ts("2024-11-01T00:00:00Z")),
    ];

    let sorted = Ticket::sorted(tickets, TicketSortKey::Created);
    assert_eq!(sorted[0].subject, "newer");
}

#[test]
fn updated_sorts_most_recent_first() {
    let mut stale = ticket("stale", TicketStatus::Open, TicketPriority::Low, ts("2024-11-01T00:00:00Z"));
    stale.updated_at = ts("2024-11-01T00:00:00Z");
    let mut fresh = ticket("fresh", TicketStatus::Open, TicketPriority::Low, ts("2024-10-01T00:00:00Z"));
    fresh.updated_at = ts("2024-11-20T00:00:00Z");

    let sorted = Ticket::sorted(vec![stale, fresh], TicketSortKey::Updated);
    assert_eq!(sorted[0].subject, "fresh");
}

// ==============================================================
// Invoices
// ==============================================================

#[test]
fn due_sorts_ascending_soonest_first() {
    let invoices = vec![
        invoice("INV-DEC", InvoiceStatus::Unpaid, 10.0, 10.0, ts("2024-12-15T00:00:00Z")),
        invoice("INV-OCT", InvoiceStatus::Unpaid, 10.0, 10.0, ts("2024-10-15T00:00:00Z")),
    ];

    let sorted = Invoice::sorted(invoices, InvoiceSortKey::Due);
    assert_eq!(sorted[0].invoice_number, "INV-OCT");
    assert_eq!(sorted[1].invoice_number, "INV-DEC");
}

#[test]
fn issued_sorts_most_recent_first() {
    let mut old = invoice("INV-OLD", InvoiceStatus::Paid, 10.0, 0.0, ts("2024-12-01T00:00:00Z"));
    old.issued_at = ts("2024-09-01T00:00:00Z");
    let mut new = invoice("INV-NEW", InvoiceStatus::Paid, 10.0, 0.0, ts("2024-12-01T00:00:00Z"));
    new.issued_at = ts("2024-11-01T00:00:00Z");

    let sorted = Invoice::sorted(vec![old, new], InvoiceSortKey::Issued);
    assert_eq!(sorted[0].invoice_number, "INV-NEW");
}

#[test]
fn amount_sorts_largest_first() {
    let invoices = vec![
        invoice("INV-S", InvoiceStatus::Unpaid, 27.05, 27.05, ts("2024-12-15T00:00:00Z")),
        invoice("INV-L", InvoiceStatus::Unpaid, 99.00, 99.00, ts("2024-12-15T00:00:00Z")),
        invoice("INV-M", InvoiceStatus::Unpaid, 40.73, 40.73, ts("2024-12-15T00:00:00Z")),
    ];

    let sorted = Invoice::sorted(invoices, InvoiceSortKey::Amount);
    let numbers: Vec<&str> = sorted.iter().map(|i| i.invoice_number.as_str()).collect();
    assert_eq!(numbers, vec!["INV-L", "INV-M", "INV-S"]);
}

#[test]
fn amount_ties_keep_input_order() {
    let invoices = vec![
        invoice("INV-A", InvoiceStatus::Unpaid, 40.73, 40.73, ts("2024-12-15T00:00:00Z")),
        invoice("INV-B", InvoiceStatus::Unpaid, 40.73, 40.73, ts("2024-12-15T00:00:00Z")),
        invoice("INV-C", InvoiceStatus::Unpaid, 99.00, 99.00, ts("2024-12-15T00:00:00Z")),
    ];

    let sorted = Invoice::sorted(invoices, InvoiceSortKey::Amount);
    let numbers: Vec<&str> = sorted.iter().map(|i| i.invoice_number.as_str()).collect();
    assert_eq!(numbers, vec!["INV-C", "INV-A", "INV-B"]);
}

// ==============================================================
// Services
// ==============================================================

#[test]
fn service_name_sorts_alphabetically() {
    let services = vec![
        service("zeta", ServiceStatus::Active, ts("2024-01-01T00:00:00Z")),
        service("Alpha", ServiceStatus::Active, ts("2024-02-01T00:00:00Z")),
        service("midway", ServiceStatus::Active, ts("2024-03-01T00:00:00Z")),
    ];

    let sorted = Service::sorted(services, ServiceSortKey::Name);
    let names: Vec<&str> = sorted.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Alpha", "midway", "zeta"]);
}

// ==============================================================
// Filter then sort
// ==============================================================

#[test]
fn sorting_preserves_filter_order_for_ties() {
    // Records that survive the filter keep their relative order when the
    // sort key cannot tell them apart.
    let tickets = vec![
        ticket("a", TicketStatus::Open, TicketPriority::High, ts("2024-11-01T00:00:00Z")),
        ticket("drop", TicketStatus::Closed, TicketPriority::High, ts("2024-11-02T00:00:00Z")),
        ticket("b", TicketStatus::Open, TicketPriority::High, ts("2024-11-03T00:00:00Z")),
        ticket("c", TicketStatus::Open, TicketPriority::High, ts("2024-11-04T00:00:00Z")),
    ];

    let criteria = TicketCriteria {
        status: FieldFilter::Exactly(TicketStatus::Open),
        ..Default::default()
    };
    let visible = filter(&tickets, &criteria);
    let sorted = Ticket::sorted(visible, TicketSortKey::Priority);

    let subjects: Vec<&str> = sorted.iter().map(|t| t.subject.as_str()).collect();
    assert_eq!(subjects, vec!["a", "b", "c"]);
}
