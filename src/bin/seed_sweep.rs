//! Generate demo accounts for a range of seeds and summarize them as CSV
//!
//! Accepts config via environment variables:
//!   SWEEP_START (default 0), SWEEP_COUNT (default 1000), SWEEP_OUTPUT (default seed_sweep.csv)
//! Useful for picking demo seeds with a particular look (new investment account, big balance).

use anyhow::{Context, Result};
use chrono::Local;
use rayon::prelude::*;
use serde::Serialize;
use stash_engine::accounts::Direction;
use stash_engine::mock::{generate_checking_account_on, generate_investment_account};
use std::env;
use std::time::Instant;

/// One CSV row per seed
#[derive(Debug, Serialize)]
struct SeedSummary {
    seed: u32,
    checking_balance: f64,
    last_four_digits: String,
    recent_spending: f64,
    largest_debit: f64,
    investment_balance: f64,
    new_investment_account: bool,
    monthly_contribution: f64,
    projected_value_10_years: f64,
    investment_account_name: String,
}

fn env_or<T: std::str::FromStr>(var: &str, default: T) -> Result<T> {
    match env::var(var) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| anyhow::anyhow!("{} has invalid value '{}'", var, raw)),
        Err(_) => Ok(default),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let start_seed: u32 = env_or("SWEEP_START", 0)?;
    let count: u32 = env_or("SWEEP_COUNT", 1000)?;
    let output_path: String = env_or("SWEEP_OUTPUT", "seed_sweep.csv".to_string())?;
    let today = Local::now().date_naive();

    let start = Instant::now();
    println!("Generating accounts for seeds {}..{}", start_seed, start_seed.saturating_add(count));

    let summaries: Vec<SeedSummary> = (start_seed..start_seed.saturating_add(count))
        .into_par_iter()
        .map(|seed| {
            let checking = generate_checking_account_on(seed, today);
            let investment = generate_investment_account(seed);
            let largest_debit = checking
                .recent_transactions
                .iter()
                .filter(|t| t.direction == Direction::Debit)
                .map(|t| t.amount)
                .fold(0.0, f64::max);

            SeedSummary {
                seed,
                checking_balance: checking.balance,
                last_four_digits: checking.last_four_digits.clone(),
                recent_spending: checking.recent_spending(),
                largest_debit,
                investment_balance: investment.balance,
                new_investment_account: investment.is_empty(),
                monthly_contribution: investment.monthly_contribution,
                projected_value_10_years: investment.projected_value_10_years,
                investment_account_name: investment.account_name,
            }
        })
        .collect();

    println!("Generated {} seeds in {:?}", summaries.len(), start.elapsed());

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("Failed to create {}", output_path))?;
    for summary in &summaries {
        writer.serialize(summary)?;
    }
    writer.flush()?;

    let new_accounts = summaries.iter().filter(|s| s.new_investment_account).count();
    let mean_balance = if summaries.is_empty() {
        0.0
    } else {
        summaries.iter().map(|s| s.checking_balance).sum::<f64>() / summaries.len() as f64
    };

    println!("Output written to {}", output_path);
    println!("\nSweep Summary:");
    println!("  New investment accounts: {} of {}", new_accounts, summaries.len());
    println!("  Mean checking balance:   ${:.2}", mean_balance);

    Ok(())
}
