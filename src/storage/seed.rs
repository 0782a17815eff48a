//! Deterministic sample dataset for demos and integration tests
//!
//! Stands in for the backend the portal will eventually talk to. Timestamps
//! are fixed so relative ordering in list views is reproducible.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::customer::{Agent, Customer};
use crate::entities::invoice::{Invoice, InvoiceStatus, LineItem, PaymentRecord, TaxLine};
use crate::entities::service::{Plan, Service, ServiceCategory, ServiceStatus, UsageMetrics};
use crate::entities::ticket::{
    Ticket, TicketCategory, TicketMessage, TicketPriority, TicketStatus,
};

fn ts(s: &str) -> DateTime<Utc> {
    s.parse().expect("valid RFC 3339 timestamp")
}

fn alice() -> Customer {
    Customer {
        id: Uuid::parse_str("7f9c24e5-2f31-4a5b-8d11-3c1b2a9e6f01").expect("valid UUID"),
        name: "Alice Smith".to_string(),
        email: "alice@acme.example".to_string(),
        company: Some("Acme Ltd".to_string()),
    }
}

fn bob() -> Customer {
    Customer {
        id: Uuid::parse_str("2b6e8d4a-9c03-47f2-b5a1-08d7e3f6c902").expect("valid UUID"),
        name: "Bob Johnson".to_string(),
        email: "bob@example.com".to_string(),
        company: None,
    }
}

fn support_agent() -> Agent {
    Agent {
        id: Uuid::parse_str("c3a1f8b7-6d42-4e90-a2c5-1f0b9d8e7a03").expect("valid UUID"),
        name: "Sam Carter".to_string(),
    }
}

/// Sample support tickets covering every lifecycle state
pub fn sample_tickets() -> Vec<Ticket> {
    let slow_site = Ticket {
        id: Uuid::new_v4(),
        subject: "Website loading extremely slow".to_string(),
        description: "Pages take over ten seconds to load since yesterday evening.".to_string(),
        category: TicketCategory::Technical,
        priority: TicketPriority::High,
        status: TicketStatus::Open,
        customer: alice(),
        assigned_to: None,
        messages: Vec::new(),
        created_at: ts("2024-11-02T09:15:00Z"),
        updated_at: ts("2024-11-02T09:15:00Z"),
        closed_at: None,
        estimated_resolution: None,
    };

    let failed_payment = Ticket {
        id: Uuid::new_v4(),
        subject: "Invoice payment failed".to_string(),
        description: "Card was declined although the limit is not reached.".to_string(),
        category: TicketCategory::Billing,
        priority: TicketPriority::Urgent,
        status: TicketStatus::InProgress,
        customer: bob(),
        assigned_to: Some(support_agent()),
        messages: vec![
            TicketMessage {
                id: Uuid::new_v4(),
                author: "Bob Johnson".to_string(),
                body: "The payment keeps failing with error code 402.".to_string(),
                attachments: vec!["screenshot.png".to_string()],
                internal: false,
                sent_at: ts("2024-11-01T14:03:00Z"),
            },
            TicketMessage {
                id: Uuid::new_v4(),
                author: "Sam Carter".to_string(),
                body: "Escalated to the payment provider.".to_string(),
                attachments: Vec::new(),
                internal: true,
                sent_at: ts("2024-11-01T15:40:00Z"),
            },
        ],
        created_at: ts("2024-11-01T14:03:00Z"),
        updated_at: ts("2024-11-01T15:40:00Z"),
        closed_at: None,
        estimated_resolution: Some(ts("2024-11-04T17:00:00Z")),
    };

    let ssl_install = Ticket {
        id: Uuid::new_v4(),
        subject: "Request SSL certificate installation".to_string(),
        description: "Please install the wildcard certificate on web02.".to_string(),
        category: TicketCategory::Technical,
        priority: TicketPriority::Medium,
        status: TicketStatus::Resolved,
        customer: alice(),
        assigned_to: Some(support_agent()),
        messages: Vec::new(),
        created_at: ts("2024-10-20T08:00:00Z"),
        updated_at: ts("2024-10-21T11:30:00Z"),
        closed_at: None,
        estimated_resolution: None,
    };

    let upgrade_question = Ticket {
        id: Uuid::new_v4(),
        subject: "Question about upgrade options".to_string(),
        description: "What would moving to the Performance plan cost?".to_string(),
        category: TicketCategory::Sales,
        priority: TicketPriority::Low,
        status: TicketStatus::Closed,
        customer: bob(),
        assigned_to: None,
        messages: Vec::new(),
        created_at: ts("2024-10-05T10:20:00Z"),
        updated_at: ts("2024-10-07T16:45:00Z"),
        closed_at: Some(ts("2024-10-07T16:45:00Z")),
        estimated_resolution: None,
    };

    vec![slow_site, failed_payment, ssl_install, upgrade_question]
}

/// Sample invoices covering paid, unpaid, overdue and draft states
pub fn sample_invoices() -> Vec<Invoice> {
    let paid = Invoice {
        id: Uuid::new_v4(),
        invoice_number: "INV-2024-001".to_string(),
        status: InvoiceStatus::Paid,
        customer: alice(),
        line_items: vec![LineItem::new("Web hosting (monthly)", 2, 16.97)],
        taxes: vec![TaxLine {
            name: "VAT".to_string(),
            rate: 0.20,
            amount: 6.79,
        }],
        subtotal: 33.94,
        total_tax: 6.79,
        total: 40.73,
        amount_paid: 40.73,
        amount_due: 0.0,
        payment_history: vec![PaymentRecord {
            id: Uuid::new_v4(),
            method: "card".to_string(),
            transaction_id: Some("txn_9f2c1a".to_string()),
            amount: 40.73,
            paid_at: ts("2024-10-18T12:00:00Z"),
        }],
        issued_at: ts("2024-10-01T00:00:00Z"),
        due_at: ts("2024-10-31T00:00:00Z"),
        created_at: ts("2024-10-01T00:00:00Z"),
        updated_at: ts("2024-10-18T12:00:00Z"),
    };

    let unpaid = Invoice {
        id: Uuid::new_v4(),
        invoice_number: "INV-2024-002".to_string(),
        status: InvoiceStatus::Unpaid,
        customer: bob(),
        line_items: vec![LineItem::new("VPS Starter (monthly)", 1, 22.54)],
        taxes: vec![TaxLine {
            name: "VAT".to_string(),
            rate: 0.20,
            amount: 4.51,
        }],
        subtotal: 22.54,
        total_tax: 4.51,
        total: 27.05,
        amount_paid: 0.0,
        amount_due: 27.05,
        payment_history: Vec::new(),
        issued_at: ts("2024-11-15T00:00:00Z"),
        due_at: ts("2024-12-15T00:00:00Z"),
        created_at: ts("2024-11-15T00:00:00Z"),
        updated_at: ts("2024-11-15T00:00:00Z"),
    };

    let overdue = Invoice {
        id: Uuid::new_v4(),
        invoice_number: "INV-2024-003".to_string(),
        status: InvoiceStatus::Overdue,
        customer: bob(),
        line_items: vec![LineItem::new("Domain renewal", 1, 24.99)],
        taxes: Vec::new(),
        subtotal: 24.99,
        total_tax: 0.0,
        total: 24.99,
        amount_paid: 0.0,
        amount_due: 24.99,
        payment_history: Vec::new(),
        issued_at: ts("2024-09-15T00:00:00Z"),
        due_at: ts("2024-10-15T00:00:00Z"),
        created_at: ts("2024-09-15T00:00:00Z"),
        updated_at: ts("2024-10-16T00:00:00Z"),
    };

    let draft = Invoice {
        id: Uuid::new_v4(),
        invoice_number: "INV-2024-004".to_string(),
        status: InvoiceStatus::Draft,
        customer: alice(),
        line_items: vec![LineItem::new("Dedicated server (monthly)", 1, 99.00)],
        taxes: Vec::new(),
        subtotal: 99.00,
        total_tax: 0.0,
        total: 99.00,
        amount_paid: 0.0,
        amount_due: 99.00,
        payment_history: Vec::new(),
        issued_at: ts("2024-11-20T00:00:00Z"),
        due_at: ts("2024-12-20T00:00:00Z"),
        created_at: ts("2024-11-20T00:00:00Z"),
        updated_at: ts("2024-11-20T00:00:00Z"),
    };

    vec![paid, unpaid, overdue, draft]
}

/// Sample provisioned services
pub fn sample_services() -> Vec<Service> {
    let web = Service {
        id: Uuid::new_v4(),
        name: "acme-web".to_string(),
        category: ServiceCategory::WebHosting,
        plan: Plan {
            name: "Business".to_string(),
            monthly_price: 16.97,
            specifications: vec![
                "2 vCPU".to_string(),
                "4 GB RAM".to_string(),
                "80 GB SSD".to_string(),
            ],
        },
        status: ServiceStatus::Active,
        metrics: UsageMetrics {
            uptime_percent: 99.98,
            cpu_percent: 34.2,
            ram_percent: 61.5,
            disk_percent: 48.0,
            bandwidth_used_gb: 312.4,
            bandwidth_total_gb: 1000.0,
        },
        created_at: ts("2024-03-12T00:00:00Z"),
        updated_at: ts("2024-11-01T00:00:00Z"),
    };

    let vps = Service {
        id: Uuid::new_v4(),
        name: "bob-vps".to_string(),
        category: ServiceCategory::Vps,
        plan: Plan {
            name: "Starter".to_string(),
            monthly_price: 22.54,
            specifications: vec!["1 vCPU".to_string(), "2 GB RAM".to_string()],
        },
        status: ServiceStatus::Suspended,
        metrics: UsageMetrics {
            uptime_percent: 97.10,
            cpu_percent: 0.0,
            ram_percent: 0.0,
            disk_percent: 72.3,
            bandwidth_used_gb: 58.0,
            bandwidth_total_gb: 500.0,
        },
        created_at: ts("2024-06-01T00:00:00Z"),
        updated_at: ts("2024-10-16T00:00:00Z"),
    };

    let domain = Service {
        id: Uuid::new_v4(),
        name: "acme-ltd.example".to_string(),
        category: ServiceCategory::Domain,
        plan: Plan {
            name: "Domain registration".to_string(),
            monthly_price: 2.08,
            specifications: vec!["Annual renewal".to_string()],
        },
        status: ServiceStatus::Pending,
        metrics: UsageMetrics::default(),
        created_at: ts("2024-11-18T00:00:00Z"),
        updated_at: ts("2024-11-18T00:00:00Z"),
    };

    vec![web, vps, domain]
}
