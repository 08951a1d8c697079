// Reward Points Service - Core Library
// Exposes all modules for use in the CLI, API server, and tests

pub mod calculator;
pub mod loader;
pub mod models;
pub mod provider;
pub mod summary;

// Re-export commonly used types
pub use calculator::{points_for_amount, RewardCalculator, RewardError};
pub use loader::{
    customers_from_reader, load_customers, load_transactions, transactions_from_reader,
};
pub use models::{Customer, Transaction};
pub use provider::{InMemoryProvider, RewardDataProvider};
pub use summary::{month_key, RewardSummary, TransactionPoints};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
