//! Stash CLI
//!
//! Command-line access to projections, generated demo accounts and simulated transfers

use anyhow::{Context, Result};
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use serde::Serialize;
use stash_engine::{
    insights::{insight_for, SPENDING_PATTERNS},
    ledger::Ledger,
    mock::{generate_checking_account_on, generate_investment_account, generate_transaction_history, spend_by_weekday},
    projection::{format_currency, opportunity_cost, OPPORTUNITY_ANNUAL_RATE},
    DemoConfig, PledgeBook,
};
use std::fs;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "stash", version, about = "Pledge projections and demo account data")]
struct Cli {
    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    /// Seed for generated data (overrides STASH_SEED)
    #[arg(long, global = true)]
    seed: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Year-by-year projected value of a deposit plus optional weekly pledges
    Project {
        /// One-time deposit
        initial: f64,
        #[arg(long)]
        weekly: Option<f64>,
        #[arg(long)]
        years: Option<u32>,
        #[arg(long)]
        rate: Option<f64>,
    },
    /// Generated checking account
    Checking {
        /// Reference date for transaction dates (default: today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Generated investment account
    Investment,
    /// Simulate one or more transfers from checking to investment
    Transfer {
        /// Amounts, applied in order to the same ledger
        #[arg(required = true, allow_negative_numbers = true)]
        amounts: Vec<f64>,
        /// Starting checking balance (default: generated)
        #[arg(long, requires = "investment")]
        checking: Option<f64>,
        /// Starting investment balance (default: generated)
        #[arg(long, requires = "checking")]
        investment: Option<f64>,
    },
    /// What a skipped expense would grow into
    Opportunity {
        amount: f64,
        #[arg(long, default_value_t = 10.0)]
        years: f64,
        #[arg(long, default_value_t = OPPORTUNITY_ANNUAL_RATE)]
        rate: f64,
    },
    /// Generated discretionary spending history
    History {
        #[arg(long, default_value_t = 90)]
        days: u32,
        #[arg(long)]
        date: Option<NaiveDate>,
    },
    /// Pledge totals and projection, from a JSON file or the demo pledges
    Pledges {
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Today's spending insight and the known spending patterns
    Insight,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = DemoConfig::from_env().context("Invalid STASH_* environment configuration")?;
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }
    let today = Local::now().date_naive();

    match cli.command {
        Command::Project { initial, weekly, years, rate } => {
            let mut series_config = config.series(initial);
            if let Some(weekly) = weekly {
                series_config.weekly_contribution = weekly;
            }
            if let Some(years) = years {
                series_config.years = years;
            }
            if let Some(rate) = rate {
                series_config.annual_rate = rate;
            }
            series_config.validate()?;

            let series = series_config.series();
            if cli.json {
                return print_json(&series);
            }

            println!("Projection: {} initial, {} weekly, {:.2}% annual",
                format_currency(series_config.initial_amount),
                format_currency(series_config.weekly_contribution),
                series_config.annual_rate * 100.0);
            println!("{:>6} {:>14}", "Year", "Value");
            println!("{}", "-".repeat(21));
            for point in &series {
                println!("{:>6} {:>14}", point.year, format_currency(point.value as f64));
            }
        }

        Command::Checking { date } => {
            let account = generate_checking_account_on(config.seed, date.unwrap_or(today));
            if cli.json {
                return print_json(&account);
            }

            println!("{} {}  balance ${:.2}", account.account_name, account.masked_number(), account.balance);
            println!("{:<12} {:<26} {:<15} {:>10}", "Date", "Merchant", "Category", "Amount");
            println!("{}", "-".repeat(66));
            for txn in &account.recent_transactions {
                println!("{:<12} {:<26} {:<15} {:>10.2}", txn.date, txn.merchant, txn.category, txn.signed_amount());
            }
        }

        Command::Investment => {
            let account = generate_investment_account(config.seed);
            if cli.json {
                return print_json(&account);
            }

            println!("{}", account.account_name);
            println!("  Balance:              ${:.2}", account.balance);
            println!("  Total Contributions:  ${:.2}", account.total_contributions);
            println!("  Total Growth:         ${:.2}", account.total_growth);
            println!("  Monthly Contribution: ${:.2}", account.monthly_contribution);
            println!("  Projected (10 years): ${:.2}", account.projected_value_10_years);
        }

        Command::Transfer { amounts, checking, investment } => {
            let mut ledger = match (checking, investment) {
                (Some(c), Some(i)) => Ledger::with_balances(c, i),
                _ => Ledger::with_seed(config.seed),
            };

            let results: Vec<_> = amounts.iter().map(|&amount| ledger.transfer(amount)).collect();
            if cli.json {
                return print_json(&results);
            }
            for result in &results {
                println!("[{}] {}", if result.success { "ok" } else { "rejected" }, result.message);
                println!("      checking ${:.2}  investment ${:.2}", result.new_checking_balance, result.new_investment_balance);
            }
        }

        Command::Opportunity { amount, years, rate } => {
            let cost = opportunity_cost(amount, years, rate);
            if cli.json {
                return print_json(&cost);
            }
            println!("${:.2} invested for {} years at {:.2}% grows to ${:.2} (+${:.2})",
                amount, years, rate * 100.0, cost.future_value, cost.total_growth);
        }

        Command::History { days, date } => {
            let events = generate_transaction_history(config.seed, date.unwrap_or(today), days);
            if cli.json {
                return print_json(&events);
            }

            for e in &events {
                println!("{} {:?} {} {:<22} {:>8.2}", e.date, e.weekday, e.time.format("%H:%M"), e.merchant, e.amount);
            }
            let totals = spend_by_weekday(&events);
            println!("\nSpend by weekday:");
            for (day, total) in ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"].iter().zip(totals) {
                println!("  {}: ${:.2}", day, total);
            }
        }

        Command::Pledges { file } => {
            let book = match file {
                Some(path) => {
                    let json = fs::read_to_string(&path)
                        .with_context(|| format!("Failed to read {}", path.display()))?;
                    PledgeBook::from_json(&json)?
                }
                None => PledgeBook::demo(),
            };
            if cli.json {
                return print_json(&book);
            }

            for pledge in book.pledges() {
                println!("{} {:<22} {:>8} -> {}", pledge.date, pledge.category,
                    format_currency(pledge.amount), format_currency(pledge.future_value as f64));
            }
            println!("Total pledged: {}  (in 10 years: {})",
                format_currency(book.total_pledged()), format_currency(book.projected_value() as f64));
        }

        Command::Insight => {
            let insight = insight_for(today.weekday());
            if cli.json {
                return print_json(&(insight, &SPENDING_PATTERNS));
            }

            println!("{:?}: you usually spend {} ({}). Staying in saves {}, worth {} in 10 years.",
                insight.weekday,
                format_currency(insight.average_spending),
                insight.top_category,
                format_currency(insight.saved_if_stayed_in),
                format_currency(insight.projected_in_10_years));
            for pattern in SPENDING_PATTERNS.iter() {
                println!("  {:<16} {:<20} {:>6}  {}", pattern.id, pattern.name,
                    format_currency(pattern.average_amount), pattern.pledge_suggestion);
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
