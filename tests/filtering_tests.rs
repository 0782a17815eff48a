//! Filter properties across the three domains: subset, identity,
//! composition, AND semantics and degraded edge cases.

mod support;

use portal::prelude::*;
use support::*;

fn sample_tickets() -> Vec<Ticket> {
    vec![
        ticket(
            "Website loading extremely slow",
            TicketStatus::Open,
            TicketPriority::High,
            ts("2024-11-02T09:00:00Z"),
        ),
        ticket(
            "Invoice payment failed",
            TicketStatus::InProgress,
            TicketPriority::Urgent,
            ts("2024-11-01T09:00:00Z"),
        ),
        ticket(
            "Mailbox quota exceeded",
            TicketStatus::Open,
            TicketPriority::High,
            ts("2024-10-20T09:00:00Z"),
        ),
        ticket(
            "DNS change request",
            TicketStatus::Closed,
            TicketPriority::Low,
            ts("2024-09-15T09:00:00Z"),
        ),
    ]
}

// ==============================================================
// Properties
// ==============================================================

#[test]
fn filter_output_is_subset_of_input() {
    let tickets = sample_tickets();
    let criteria = TicketCriteria {
        status: FieldFilter::Exactly(TicketStatus::Open),
        ..Default::default()
    };

    let matched = filter(&tickets, &criteria);
    for record in &matched {
        assert!(tickets.iter().any(|t| t.id == record.id));
    }
    assert!(matched.len() <= tickets.len());
}

#[test]
fn empty_criteria_is_identity() {
    let tickets = sample_tickets();
    let matched = filter(&tickets, &TicketCriteria::default());

    let original: Vec<_> = tickets.iter().map(|t| t.id).collect();
    let filtered: Vec<_> = matched.iter().map(|t| t.id).collect();
    assert_eq!(filtered, original);
}

#[test]
fn filters_compose_via_intersection() {
    let tickets = sample_tickets();

    let by_status = TicketCriteria {
        status: FieldFilter::Exactly(TicketStatus::Open),
        ..Default::default()
    };
    let by_priority = TicketCriteria {
        priority: FieldFilter::Exactly(TicketPriority::High),
        ..Default::default()
    };
    let combined = TicketCriteria {
        status: FieldFilter::Exactly(TicketStatus::Open),
        priority: FieldFilter::Exactly(TicketPriority::High),
        ..Default::default()
    };

    let sequential = filter(&filter(&tickets, &by_status), &by_priority);
    let joint = filter(&tickets, &combined);

    let sequential_ids: Vec<_> = sequential.iter().map(|t| t.id).collect();
    let joint_ids: Vec<_> = joint.iter().map(|t| t.id).collect();
    assert_eq!(sequential_ids, joint_ids);
    assert_eq!(joint.len(), 2);
}

#[test]
fn empty_collection_yields_empty_result() {
    let criteria = TicketCriteria {
        search: Some("anything".to_string()),
        ..Default::default()
    };
    assert!(filter(&Vec::<Ticket>::new(), &criteria).is_empty());
}

// ==============================================================
// Search
// ==============================================================

#[test]
fn search_matches_subject_substring() {
    let tickets = sample_tickets();
    let criteria = TicketCriteria {
        search: Some("slow".to_string()),
        ..Default::default()
    };

    let matched = filter(&tickets, &criteria);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].subject, "Website loading extremely slow");
}

#[test]
fn unmatched_search_excludes_despite_other_criteria() {
    let tickets = sample_tickets();
    let criteria = TicketCriteria {
        search: Some("slow".to_string()),
        status: FieldFilter::Exactly(TicketStatus::InProgress),
        ..Default::default()
    };

    // "Invoice payment failed" is in-progress but does not contain "slow"
    assert!(filter(&tickets, &criteria).is_empty());
}

#[test]
fn search_covers_invoice_number_and_company() {
    let mut first = invoice(
        "INV-2024-001",
        InvoiceStatus::Paid,
        40.73,
        0.0,
        ts("2024-10-31T00:00:00Z"),
    );
    first.customer = Customer::new("Alice Smith", "alice@example.com").with_company("Acme Ltd");
    let second = invoice(
        "INV-2024-002",
        InvoiceStatus::Unpaid,
        27.05,
        27.05,
        ts("2024-12-15T00:00:00Z"),
    );
    let invoices = vec![first, second];

    let by_number = InvoiceCriteria {
        search: Some("2024-002".to_string()),
        ..Default::default()
    };
    assert_eq!(filter(&invoices, &by_number).len(), 1);

    let by_company = InvoiceCriteria {
        search: Some("acme".to_string()),
        ..Default::default()
    };
    let matched = filter(&invoices, &by_company);
    assert_eq!(matched.len(), 1);
    assert_eq!(matched[0].invoice_number, "INV-2024-001");
}

// ==============================================================
// Ranges
// ==============================================================

#[test]
fn date_range_filters_on_created_at() {
    let tickets = sample_tickets();
    let criteria = TicketCriteria {
        created: DateRange::new(
            Some(ts("2024-11-01T00:00:00Z")),
            Some(ts("2024-11-30T23:59:59Z")),
        ),
        ..Default::default()
    };

    assert_eq!(filter(&tickets, &criteria).len(), 2);
}

#[test]
fn amount_range_filters_on_total() {
    let invoices = vec![
        invoice("INV-A", InvoiceStatus::Paid, 40.73, 0.0, ts("2024-10-31T00:00:00Z")),
        invoice("INV-B", InvoiceStatus::Unpaid, 27.05, 27.05, ts("2024-12-15T00:00:00Z")),
        invoice("INV-C", InvoiceStatus::Draft, 99.00, 99.00, ts("2024-12-20T00:00:00Z")),
    ];

    let criteria = InvoiceCriteria {
        amount: AmountRange::new(Some(27.05), Some(50.0)),
        ..Default::default()
    };

    let matched = filter(&invoices, &criteria);
    assert_eq!(matched.len(), 2);
}

#[test]
fn inverted_range_yields_empty_not_error() {
    let invoices = vec![invoice(
        "INV-A",
        InvoiceStatus::Paid,
        40.73,
        0.0,
        ts("2024-10-31T00:00:00Z"),
    )];

    let criteria = InvoiceCriteria {
        amount: AmountRange::new(Some(100.0), Some(1.0)),
        ..Default::default()
    };

    assert!(filter(&invoices, &criteria).is_empty());
}

// ==============================================================
// Sentinel
// ==============================================================

#[test]
fn any_filter_imposes_no_constraint() {
    let services = vec![
        service("web01", ServiceStatus::Active, ts("2024-03-12T00:00:00Z")),
        service("vps01", ServiceStatus::Suspended, ts("2024-06-01T00:00:00Z")),
    ];

    let criteria = ServiceCriteria {
        status: FieldFilter::Any,
        ..Default::default()
    };
    assert_eq!(filter(&services, &criteria).len(), 2);

    let criteria = ServiceCriteria {
        status: FieldFilter::Exactly(ServiceStatus::Suspended),
        ..Default::default()
    };
    assert_eq!(filter(&services, &criteria).len(), 1);
}
