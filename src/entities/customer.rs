//! Participant references attached to records

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The account holder a ticket, invoice or service belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    /// Company name, when the account is a business account
    pub company: Option<String>,
}

impl Customer {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            company: None,
        }
    }

    pub fn with_company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }
}

/// A staff member a ticket can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Agent {
    pub id: Uuid,
    pub name: String,
}

impl Agent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_builder() {
        let customer = Customer::new("Alice Smith", "alice@example.com").with_company("Acme Ltd");
        assert_eq!(customer.name, "Alice Smith");
        assert_eq!(customer.company.as_deref(), Some("Acme Ltd"));
    }
}
