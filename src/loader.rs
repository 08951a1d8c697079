// CSV Loader - customer and transaction ingestion
//
// Feeds the in-memory provider from two CSV files:
//   customers.csv    -> Customer_Id, Name, Email
//   transactions.csv -> Transaction_Id, Customer_Id, Amount, Date
//
// Transaction dates are ISO (YYYY-MM-DD). Rows with an empty or missing
// Transaction_Id get a generated UUID.

use crate::models::{Customer, Transaction};
use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

// ============================================================================
// CSV ROW SHAPES
// ============================================================================

#[derive(Debug, Deserialize)]
struct CustomerRecord {
    #[serde(rename = "Customer_Id")]
    id: String,

    #[serde(rename = "Name")]
    name: String,

    #[serde(rename = "Email")]
    email: String,
}

#[derive(Debug, Deserialize)]
struct TransactionRecord {
    #[serde(rename = "Transaction_Id", default)]
    id: String,

    #[serde(rename = "Customer_Id")]
    customer_id: String,

    #[serde(rename = "Amount")]
    amount: f64,

    #[serde(rename = "Date")]
    date: NaiveDate,
}

impl From<CustomerRecord> for Customer {
    fn from(rec: CustomerRecord) -> Self {
        Customer {
            id: rec.id,
            name: rec.name,
            email: rec.email,
        }
    }
}

impl From<TransactionRecord> for Transaction {
    fn from(rec: TransactionRecord) -> Self {
        if rec.id.is_empty() {
            Transaction::new(&rec.customer_id, rec.amount, rec.date)
        } else {
            Transaction::with_id(&rec.id, &rec.customer_id, rec.amount, rec.date)
        }
    }
}

// ============================================================================
// LOADING
// ============================================================================

pub fn customers_from_reader<R: Read>(reader: R) -> Result<Vec<Customer>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut customers = Vec::new();

    for result in rdr.deserialize() {
        let record: CustomerRecord = result.context("Failed to deserialize customer row")?;
        customers.push(record.into());
    }

    Ok(customers)
}

pub fn transactions_from_reader<R: Read>(reader: R) -> Result<Vec<Transaction>> {
    let mut rdr = csv::Reader::from_reader(reader);
    let mut transactions = Vec::new();

    for result in rdr.deserialize() {
        let record: TransactionRecord = result.context("Failed to deserialize transaction row")?;
        transactions.push(record.into());
    }

    Ok(transactions)
}

pub fn load_customers(csv_path: &Path) -> Result<Vec<Customer>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open customer CSV {}", csv_path.display()))?;
    customers_from_reader(file)
}

pub fn load_transactions(csv_path: &Path) -> Result<Vec<Transaction>> {
    let file = std::fs::File::open(csv_path)
        .with_context(|| format!("Failed to open transaction CSV {}", csv_path.display()))?;
    transactions_from_reader(file)
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customers_from_csv() {
        let csv = "Customer_Id,Name,Email\n\
                   C1,John Doe,john@test.com\n\
                   C2,Jane Roe,jane@test.com\n";

        let customers = customers_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(customers.len(), 2);
        assert_eq!(customers[0].id, "C1");
        assert_eq!(customers[1].email, "jane@test.com");
    }

    #[test]
    fn test_transactions_from_csv() {
        let csv = "Transaction_Id,Customer_Id,Amount,Date\n\
                   T1,C1,120.00,2024-01-10\n\
                   T2,C1,80.50,2024-02-05\n";

        let transactions = transactions_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(transactions.len(), 2);
        assert_eq!(transactions[0].id, "T1");
        assert_eq!(transactions[1].amount, 80.50);
        assert_eq!(
            transactions[1].date,
            NaiveDate::from_ymd_opt(2024, 2, 5).unwrap()
        );
    }

    #[test]
    fn test_missing_transaction_id_gets_generated() {
        let csv = "Transaction_Id,Customer_Id,Amount,Date\n\
                   ,C1,60.00,2024-03-01\n";

        let transactions = transactions_from_reader(csv.as_bytes()).unwrap();

        assert_eq!(transactions.len(), 1);
        assert!(!transactions[0].id.is_empty(), "Empty id should be generated");
    }

    #[test]
    fn test_malformed_amount_is_an_error() {
        let csv = "Transaction_Id,Customer_Id,Amount,Date\n\
                   T1,C1,not-a-number,2024-01-10\n";

        assert!(transactions_from_reader(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_malformed_date_is_an_error() {
        let csv = "Transaction_Id,Customer_Id,Amount,Date\n\
                   T1,C1,50.00,01/10/2024\n";

        assert!(transactions_from_reader(csv.as_bytes()).is_err());
    }
}
