// Data Provider - external collaborator boundary
//
// The calculator never talks to storage directly. It goes through the
// RewardDataProvider trait, so the real data source (database, remote
// service, in-memory registry) is injected at construction time.
//
// The in-memory registry here is the implementation the CLI and API server
// run on. In production this would be backed by a database.

use crate::models::{Customer, Transaction};
use chrono::NaiveDate;
use std::sync::RwLock;

// ============================================================================
// PROVIDER TRAIT
// ============================================================================

/// Supplies customers and transactions to the reward calculator.
///
/// `find_transactions` must apply the inclusive `[start, end]` date filter
/// itself and preserve its stored transaction order; the calculator does not
/// re-filter and mirrors the returned order in its output.
pub trait RewardDataProvider {
    fn find_customer_by_id(&self, id: &str) -> Option<Customer>;

    fn find_transactions(
        &self,
        customer_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Transaction>;
}

// ============================================================================
// IN-MEMORY PROVIDER
// ============================================================================

/// In-memory registry of customers and transactions.
///
/// Append-only; interior mutability so the registry can be shared behind an
/// Arc and still accept registrations. Reads are safe from multiple threads.
pub struct InMemoryProvider {
    customers: RwLock<Vec<Customer>>,
    transactions: RwLock<Vec<Transaction>>,
}

impl InMemoryProvider {
    /// Create an empty registry.
    pub fn new() -> Self {
        InMemoryProvider {
            customers: RwLock::new(Vec::new()),
            transactions: RwLock::new(Vec::new()),
        }
    }

    /// Create a registry pre-seeded with a small demo dataset, so the
    /// binaries are runnable without input files.
    pub fn with_demo_data() -> Self {
        let provider = InMemoryProvider::new();

        provider.add_customer(Customer::new("C1", "John Doe", "john@example.com"));
        provider.add_customer(Customer::new("C2", "Jane Roe", "jane@example.com"));

        let d = |y, m, day| NaiveDate::from_ymd_opt(y, m, day).unwrap();
        provider.add_transaction(Transaction::with_id("T1", "C1", 120.0, d(2024, 1, 10)));
        provider.add_transaction(Transaction::with_id("T2", "C1", 80.0, d(2024, 2, 5)));
        provider.add_transaction(Transaction::with_id("T3", "C1", 60.0, d(2024, 3, 1)));
        provider.add_transaction(Transaction::with_id("T4", "C2", 200.0, d(2024, 1, 20)));

        provider
    }

    pub fn add_customer(&self, customer: Customer) {
        let mut customers = self.customers.write().unwrap();
        customers.push(customer);
    }

    pub fn add_transaction(&self, transaction: Transaction) {
        let mut transactions = self.transactions.write().unwrap();
        transactions.push(transaction);
    }

    pub fn customer_count(&self) -> usize {
        self.customers.read().unwrap().len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.read().unwrap().len()
    }
}

impl Default for InMemoryProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl RewardDataProvider for InMemoryProvider {
    fn find_customer_by_id(&self, id: &str) -> Option<Customer> {
        let customers = self.customers.read().unwrap();
        customers.iter().find(|c| c.id == id).cloned()
    }

    fn find_transactions(
        &self,
        customer_id: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Vec<Transaction> {
        let transactions = self.transactions.read().unwrap();
        transactions
            .iter()
            .filter(|tx| tx.customer_id == customer_id && tx.date >= start && tx.date <= end)
            .cloned()
            .collect()
    }
}

// ============================================================================
// TESTS
// ============================================================================
