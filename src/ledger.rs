//! Simulated checking → investment transfers
//!
//! The ledger is an explicit value owned by the caller. It starts uninitialized and seeds
//! itself from generated (or caller-supplied) accounts on the first transfer.

use chrono::{DateTime, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::accounts::{CheckingAccount, InvestmentAccount};
use crate::mock::{generate_checking_account, generate_investment_account, CHECKING_ACCOUNT_NAME, DEFAULT_SEED};
use crate::projection::round_cents;

pub const TRANSFER_DESTINATION_NAME: &str = "Future Me Fund";

/// Running balances of the two demo accounts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerBalances {
    pub checking: f64,
    pub investment: f64,
}

/// Outcome category of a transfer attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferStatus {
    Completed,
    InvalidAmount,
    InsufficientFunds,
}

/// Result of one simulated transfer. Failures are reported here, never as errors.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferResult {
    pub success: bool,
    pub status: TransferStatus,
    pub from_account: String,
    pub to_account: String,
    pub amount: f64,
    pub timestamp: DateTime<Utc>,
    pub new_checking_balance: f64,
    pub new_investment_balance: f64,
    pub message: String,
}

/// Caller-owned checking/investment balance pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    /// Seed for lazily generated starting accounts
    seed: u32,
    balances: Option<LedgerBalances>,
}

impl Ledger {
    /// Uninitialized ledger that will seed itself from the default demo accounts
    pub fn new() -> Self {
        Self::with_seed(DEFAULT_SEED)
    }

    /// Uninitialized ledger that will seed itself from accounts generated with `seed`
    pub fn with_seed(seed: u32) -> Self {
        Self { seed, balances: None }
    }

    /// Ledger already holding the given balances
    pub fn with_balances(checking: f64, investment: f64) -> Self {
        Self {
            seed: DEFAULT_SEED,
            balances: Some(LedgerBalances { checking, investment }),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.balances.is_some()
    }

    /// Current balances, or `None` before the first transfer
    pub fn balances(&self) -> Option<LedgerBalances> {
        self.balances
    }

    /// Forget the balances; the next transfer re-seeds from fresh accounts
    pub fn reset(&mut self) {
        debug!("Ledger reset");
        self.balances = None;
    }

    /// Move `amount` from checking to investment
    pub fn transfer(&mut self, amount: f64) -> TransferResult {
        self.transfer_with(amount, None, None)
    }

    /// Move `amount` from checking to investment.
    ///
    /// A supplied snapshot's balance is the one checked and debited on every call, falling
    /// back to the ledger's running balance when absent. An uninitialized ledger seeds itself
    /// from the snapshots, generating any that are missing from the ledger's seed. Rejected
    /// transfers leave the ledger untouched (apart from that first initialization).
    pub fn transfer_with(
        &mut self,
        amount: f64,
        checking: Option<&CheckingAccount>,
        investment: Option<&InvestmentAccount>,
    ) -> TransferResult {
        let running = self.ensure_initialized(checking, investment);
        let current = LedgerBalances {
            checking: checking.map(|c| c.balance).unwrap_or(running.checking),
            investment: investment.map(|i| i.balance).unwrap_or(running.investment),
        };

        // Written as a negated comparison so NaN is rejected too
        if !(amount > 0.0) {
            warn!("Rejected transfer of {}: amount must be positive", amount);
            return failed(
                TransferStatus::InvalidAmount,
                amount,
                current,
                "Transfer amount must be greater than zero.".to_string(),
            );
        }

        if amount > current.checking {
            warn!("Rejected transfer of {:.2}: only {:.2} available", amount, current.checking);
            return failed(
                TransferStatus::InsufficientFunds,
                amount,
                current,
                format!("Insufficient funds. Available balance: ${:.2}", current.checking),
            );
        }

        let updated = LedgerBalances {
            checking: round_cents(current.checking - amount),
            investment: round_cents(current.investment + amount),
        };
        self.balances = Some(updated);

        info!(
            "Transferred {:.2}: checking {:.2} -> {:.2}, investment {:.2} -> {:.2}",
            amount, current.checking, updated.checking, current.investment, updated.investment
        );

        TransferResult {
            success: true,
            status: TransferStatus::Completed,
            from_account: CHECKING_ACCOUNT_NAME.to_string(),
            to_account: TRANSFER_DESTINATION_NAME.to_string(),
            amount,
            timestamp: Utc::now(),
            new_checking_balance: updated.checking,
            new_investment_balance: updated.investment,
            message: format!(
                "Successfully transferred ${:.2} to your {}! Keep building that future.",
                amount, TRANSFER_DESTINATION_NAME
            ),
        }
    }

    fn ensure_initialized(
        &mut self,
        checking: Option<&CheckingAccount>,
        investment: Option<&InvestmentAccount>,
    ) -> LedgerBalances {
        if let Some(balances) = self.balances {
            return balances;
        }

        let checking = checking
            .map(|c| c.balance)
            .unwrap_or_else(|| generate_checking_account(self.seed).balance);
        let investment = investment
            .map(|i| i.balance)
            .unwrap_or_else(|| generate_investment_account(self.seed).balance);

        debug!("Ledger initialized: checking {:.2}, investment {:.2}", checking, investment);

        let balances = LedgerBalances { checking, investment };
        self.balances = Some(balances);
        balances
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

fn failed(status: TransferStatus, amount: f64, current: LedgerBalances, message: String) -> TransferResult {
    TransferResult {
        success: false,
        status,
        from_account: CHECKING_ACCOUNT_NAME.to_string(),
        to_account: TRANSFER_DESTINATION_NAME.to_string(),
        amount,
        timestamp: Utc::now(),
        new_checking_balance: current.checking,
        new_investment_balance: current.investment,
        message,
    }
}
