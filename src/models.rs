// Domain Models - Customer and Transaction
//
// Both types are read-only inputs to the reward calculator. They are owned
// by whatever provider supplied them; the calculator never mutates them.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ============================================================================
// CUSTOMER
// ============================================================================

/// A customer as returned by the data provider.
///
/// Immutable once fetched. The id is the provider's stable identifier and
/// the only field the calculator keys on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Customer {
    pub fn new(id: &str, name: &str, email: &str) -> Self {
        Customer {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

// ============================================================================
// TRANSACTION
// ============================================================================

/// A purchase transaction as returned by the data provider.
///
/// The amount is a raw monetary value; non-negativity is a business rule
/// enforced by the calculator, not by this type. The date is a calendar
/// date with no time component.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Provider-assigned identifier. Generated as a UUID when the provider
    /// creates transactions without one (e.g. CSV rows with no id column).
    #[serde(default = "default_uuid")]
    pub id: String,

    pub customer_id: String,

    pub amount: f64,

    pub date: NaiveDate,
}

fn default_uuid() -> String {
    uuid::Uuid::new_v4().to_string()
}

impl Transaction {
    /// Create a transaction with a generated UUID id.
    pub fn new(customer_id: &str, amount: f64, date: NaiveDate) -> Self {
        Transaction {
            id: default_uuid(),
            customer_id: customer_id.to_string(),
            amount,
            date,
        }
    }

    /// Create a transaction with a known id (provider-assigned).
    pub fn with_id(id: &str, customer_id: &str, amount: f64, date: NaiveDate) -> Self {
        Transaction {
            id: id.to_string(),
            customer_id: customer_id.to_string(),
            amount,
            date,
        }
    }
}
