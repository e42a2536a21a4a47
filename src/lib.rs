//! Stash Engine - Projection math and seeded demo data for the Stash pledge app
//!
//! This library provides:
//! - Compound growth of one-time pledges and weekly contribution streams
//! - Year-by-year projection series for charts
//! - Deterministic synthetic checking/investment accounts and spending history
//! - A caller-owned ledger simulating checking → investment transfers
//! - Spending patterns, weekday insights and pledge bookkeeping

pub mod error;
pub mod config;
pub mod projection;
pub mod accounts;
pub mod mock;
pub mod ledger;
pub mod insights;
pub mod pledge;

// Re-export commonly used types
pub use error::{ConfigError, PledgeError, ProjectionError};
pub use config::DemoConfig;
pub use projection::{future_value, recurring_future_value, projection_series, opportunity_cost, ProjectionPoint};
pub use accounts::{CheckingAccount, InvestmentAccount, Transaction};
pub use mock::{generate_checking_account, generate_investment_account, SeededRng};
pub use ledger::{Ledger, TransferResult, TransferStatus};
pub use pledge::{Pledge, PledgeBook};
