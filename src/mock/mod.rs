//! Seeded synthetic account and transaction data
//!
//! Every generator builds its own [`SeededRng`] from the seed it is given, so calling a
//! generator twice with the same seed (and reference date) yields identical records.

mod rng;
mod merchants;
mod checking;
mod investment;
mod history;

pub use rng::SeededRng;
pub use merchants::{Merchant, IncomeSource, CHECKING_MERCHANTS, PAYROLL};
pub use checking::{
    generate_checking_account, generate_checking_account_on,
    CHECKING_ACCOUNT_NAME, DEMO_ROUTING_NUMBER, PAYDAY_SLOTS, RECENT_TRANSACTION_COUNT,
};
pub use investment::{
    generate_investment_account, project_monthly,
    DEFAULT_MONTHLY_CONTRIBUTION, INVESTMENT_ACCOUNT_NAMES, INVESTMENT_ANNUAL_RATE,
};
pub use history::{generate_transaction_history, spend_by_weekday, SpendingEvent, DEFAULT_HISTORY_DAYS};

/// Seed used when the caller does not pick one
pub const DEFAULT_SEED: u32 = 42;
