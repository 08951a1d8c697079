// Reward Calculator - validation + points computation + monthly aggregation
//
// Tiered points rule:
// - 2 points per dollar above $100
// - 1 point per dollar between $50 and $100
// - nothing below $50
//
// The whole computation is a single stateless pass over the provider's
// transaction list, so a calculator can be shared across threads as long as
// its provider is safe for concurrent reads.

use crate::models::Customer;
use crate::provider::RewardDataProvider;
use crate::summary::{month_key, RewardSummary, TransactionPoints};
use chrono::{Local, NaiveDate};
use std::collections::BTreeMap;

// ============================================================================
// ERRORS
// ============================================================================

/// Terminal failures of a reward computation. No retry, no partial result.
///
/// The HTTP/CLI adapters own the mapping to transport codes; the calculator
/// only distinguishes "the request was malformed" from "the customer does
/// not exist".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RewardError {
    /// Client-supplied data is malformed or violates a business rule
    /// (empty id, start after end, future date, negative amount).
    InvalidInput(String),

    /// The referenced customer does not exist.
    CustomerNotFound(String),
}

impl std::fmt::Display for RewardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RewardError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            RewardError::CustomerNotFound(id) => write!(f, "customer not found: {}", id),
        }
    }
}

impl std::error::Error for RewardError {}

// ============================================================================
// POINTS RULE
// ============================================================================

/// Compute reward points for a single transaction amount.
///
/// Two-tier marginal rule: 2x for the portion above 100, 1x for the portion
/// between 50 and 100. The weighted sum is truncated toward zero, so the
/// result is a non-negative integer for any amount >= 0.
///
/// points(0) = 0, points(50) = 0, points(80) = 30,
/// points(100) = 50, points(120) = 90.
pub fn points_for_amount(amount: f64) -> i64 {
    let over_100 = (amount - 100.0).max(0.0);
    let between_50_and_100 = (amount.min(100.0) - 50.0).max(0.0);

    (2.0 * over_100 + between_50_and_100) as i64
}

// ============================================================================
// REWARD CALCULATOR
// ============================================================================

fn system_today() -> NaiveDate {
    Local::now().date_naive()
}

/// Computes a customer's reward summary over a date range.
///
/// Holds no mutable state between calls. The data provider is injected at
/// construction; the clock is injectable too so future-date validation is
/// testable against a fixed "today".
pub struct RewardCalculator<P: RewardDataProvider> {
    provider: P,
    today: fn() -> NaiveDate,
}

impl<P: RewardDataProvider> RewardCalculator<P> {
    /// Create a calculator using the local system date as "today".
    pub fn new(provider: P) -> Self {
        RewardCalculator {
            provider,
            today: system_today,
        }
    }

    /// Create a calculator with an explicit clock.
    pub fn with_clock(provider: P, today: fn() -> NaiveDate) -> Self {
        RewardCalculator { provider, today }
    }

    /// Compute per-transaction points, per-month totals, and the grand total
    /// for one customer over `[start_date, end_date]` (inclusive).
    ///
    /// Validation runs in a fixed order so error precedence is
    /// deterministic: blank id, then date ordering, then future dates, then
    /// customer existence. The provider is trusted to apply the range
    /// filter; each returned amount is still checked for negativity.
    pub fn compute_rewards(
        &self,
        customer_id: &str,
        start_date: NaiveDate,
        end_date: NaiveDate,
    ) -> Result<RewardSummary, RewardError> {
        let customer_id = customer_id.trim();
        if customer_id.is_empty() {
            return Err(RewardError::InvalidInput(
                "customer id must not be empty".to_string(),
            ));
        }

        if start_date > end_date {
            return Err(RewardError::InvalidInput(
                "start date cannot be after end date".to_string(),
            ));
        }

        let today = (self.today)();
        if start_date > today || end_date > today {
            return Err(RewardError::InvalidInput(
                "dates cannot be in the future".to_string(),
            ));
        }

        let customer: Customer = self
            .provider
            .find_customer_by_id(customer_id)
            .ok_or_else(|| RewardError::CustomerNotFound(customer_id.to_string()))?;

        let transactions = self
            .provider
            .find_transactions(customer_id, start_date, end_date);

        let mut enriched: Vec<TransactionPoints> = Vec::with_capacity(transactions.len());
        let mut points_per_month: BTreeMap<String, i64> = BTreeMap::new();
        let mut total_points: i64 = 0;

        for tx in &transactions {
            if tx.amount < 0.0 {
                return Err(RewardError::InvalidInput(
                    "transaction amount cannot be negative".to_string(),
                ));
            }

            let points = points_for_amount(tx.amount);

            enriched.push(TransactionPoints {
                transaction_id: tx.id.clone(),
                date: tx.date,
                amount: tx.amount,
                points,
            });

            *points_per_month.entry(month_key(tx.date)).or_insert(0) += points;
            total_points += points;
        }

        Ok(RewardSummary {
            customer_id: customer.id,
            customer_name: customer.name,
            customer_email: customer.email,
            points_per_month,
            total_points,
            transactions: enriched,
        })
    }
}

// ============================================================================
// TESTS
// ============================================================================
