//! Domain records of the client area: tickets, invoices and services

pub mod customer;
pub mod invoice;
pub mod service;
pub mod ticket;

pub use customer::{Agent, Customer};
pub use invoice::{Invoice, InvoiceCriteria, InvoiceSortKey, InvoiceStats, InvoiceStatus};
pub use service::{Service, ServiceCriteria, ServiceSortKey, ServiceStats, ServiceStatus};
pub use ticket::{Ticket, TicketCriteria, TicketSortKey, TicketStats, TicketStatus};
