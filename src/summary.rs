// Reward Summary - output of a reward computation
//
// Everything here is derived data: built once per call, never mutated after.
// The invariant the calculator upholds:
//   sum(points_per_month) == total_points == sum(transactions[i].points)

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use std::collections::BTreeMap;

// ============================================================================
// MONTH KEY
// ============================================================================

/// Grouping key for a calendar month: `YYYY-MM`, zero-padded, 4-digit year.
///
/// Derived from the transaction's own date, never from the query range.
pub fn month_key(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

// ============================================================================
// PER-TRANSACTION POINTS
// ============================================================================

/// One transaction enriched with its computed points.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionPoints {
    pub transaction_id: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub points: i64,
}

// ============================================================================
// REWARD SUMMARY
// ============================================================================

/// Aggregated result for one customer over one date range.
///
/// `transactions` mirrors the provider-returned order. `points_per_month`
/// is a BTreeMap purely for deterministic serialization; bucket order
/// carries no meaning.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RewardSummary {
    pub customer_id: String,
    pub customer_name: String,
    pub customer_email: String,
    pub points_per_month: BTreeMap<String, i64>,
    pub total_points: i64,
    pub transactions: Vec<TransactionPoints>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_format() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
        assert_eq!(month_key(date), "2024-01");

        let date = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
        assert_eq!(month_key(date), "2024-12");
    }

    #[test]
    fn test_month_key_pads_year_and_month() {
        // 4-digit year padding matters for pre-1000 dates
        let date = NaiveDate::from_ymd_opt(987, 3, 1).unwrap();
        assert_eq!(month_key(date), "0987-03");
    }
}
