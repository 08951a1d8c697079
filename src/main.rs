use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use std::env;
use std::path::Path;

// Use library instead of local modules
use reward_points::{
    load_customers, load_transactions, InMemoryProvider, RewardCalculator, RewardSummary,
};

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    if args.len() != 4 && args.len() != 6 {
        print_usage(&args[0]);
        std::process::exit(1);
    }

    let customer_id = &args[1];
    let start_date = parse_date(&args[2]).context("Invalid start date")?;
    let end_date = parse_date(&args[3]).context("Invalid end date")?;

    // Build the provider: CSV-backed when files are given, demo data otherwise
    let provider = if args.len() == 6 {
        load_provider(Path::new(&args[4]), Path::new(&args[5]))?
    } else {
        println!("No CSV files given, using built-in demo data");
        InMemoryProvider::with_demo_data()
    };

    let calculator = RewardCalculator::new(provider);

    match calculator.compute_rewards(customer_id, start_date, end_date) {
        Ok(summary) => {
            print_summary(&summary, start_date, end_date);
            Ok(())
        }
        Err(e) => bail!("{}", e),
    }
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} <customer-id> <start-date> <end-date> [customers.csv transactions.csv]", program);
    eprintln!("       dates in YYYY-MM-DD format");
}

fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .with_context(|| format!("'{}' is not a YYYY-MM-DD date", raw))
}

fn load_provider(customers_csv: &Path, transactions_csv: &Path) -> Result<InMemoryProvider> {
    let provider = InMemoryProvider::new();

    let customers = load_customers(customers_csv)?;
    println!("✓ Loaded {} customers from {}", customers.len(), customers_csv.display());
    for customer in customers {
        provider.add_customer(customer);
    }

    let transactions = load_transactions(transactions_csv)?;
    println!(
        "✓ Loaded {} transactions from {}",
        transactions.len(),
        transactions_csv.display()
    );
    for tx in transactions {
        provider.add_transaction(tx);
    }

    Ok(provider)
}

fn print_summary(summary: &RewardSummary, start_date: NaiveDate, end_date: NaiveDate) {
    println!();
    println!("Reward summary for {} <{}>", summary.customer_name, summary.customer_email);
    println!("Range: {} to {}", start_date, end_date);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if summary.transactions.is_empty() {
        println!("No transactions in range.");
    }

    for tx in &summary.transactions {
        println!(
            "  {}  {:>10.2}  ->  {:>6} points  ({})",
            tx.date, tx.amount, tx.points, tx.transaction_id
        );
    }

    println!();
    for (month, points) in &summary.points_per_month {
        println!("  {}  {:>6} points", month, points);
    }

    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("✓ Total: {} points", summary.total_points);
}
