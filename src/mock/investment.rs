//! Demo investment account generation

use log::debug;

use super::rng::SeededRng;
use crate::accounts::{AccountKind, InvestmentAccount};
use crate::projection::round_cents;

/// Annual return assumed for the 10-year account projection
pub const INVESTMENT_ANNUAL_RATE: f64 = 0.07;

/// Monthly contribution suggested to a brand-new account
pub const DEFAULT_MONTHLY_CONTRIBUTION: f64 = 150.0;

/// Share of an established balance that came from contributions
const CONTRIBUTION_SHARE: f64 = 0.95;

const PROJECTION_MONTHS: u32 = 120;

pub const INVESTMENT_ACCOUNT_NAMES: [&str; 2] = ["Future You Account", "Future Me Fund"];

/// Generate a demo investment account.
///
/// Draws, in order: whether the account is established (70%), then for established accounts
/// a balance in [50, 500] and a monthly contribution in [100, 300], then the display name.
pub fn generate_investment_account(seed: u32) -> InvestmentAccount {
    let mut rng = SeededRng::new(seed);

    let established = rng.above(0.3);

    let (balance, total_contributions) = if established {
        let balance = round_cents(rng.uniform(50.0, 500.0));
        (balance, round_cents(balance * CONTRIBUTION_SHARE))
    } else {
        (0.0, 0.0)
    };
    let total_growth = round_cents(balance - total_contributions);

    let monthly_contribution = if established {
        round_cents(rng.uniform(100.0, 300.0))
    } else {
        DEFAULT_MONTHLY_CONTRIBUTION
    };

    let projected_value_10_years = round_cents(project_monthly(
        balance,
        monthly_contribution,
        INVESTMENT_ANNUAL_RATE,
        PROJECTION_MONTHS,
    ));

    let account_name = if rng.above(0.5) {
        INVESTMENT_ACCOUNT_NAMES[0]
    } else {
        INVESTMENT_ACCOUNT_NAMES[1]
    };

    debug!(
        "Generated investment account for seed {}: established={}, balance {:.2}",
        seed, established, balance
    );

    InvestmentAccount {
        balance,
        account_name: account_name.to_string(),
        total_contributions,
        total_growth,
        projected_value_10_years,
        monthly_contribution,
        account_kind: AccountKind::Investment,
    }
}

/// Lump sum plus an ordinary annuity of monthly contributions, compounded monthly
pub fn project_monthly(balance: f64, monthly_contribution: f64, annual_rate: f64, months: u32) -> f64 {
    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return balance + monthly_contribution * months as f64;
    }

    let growth = (1.0 + monthly_rate).powi(months as i32);
    balance * growth + monthly_contribution * ((growth - 1.0) / monthly_rate)
}
