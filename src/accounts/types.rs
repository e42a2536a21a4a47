//! Account and transaction records shared by the generators and the ledger

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether money left or entered the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Debit,
    Credit,
}

impl Direction {
    /// Sign to apply when displaying an amount
    pub fn sign(&self) -> f64 {
        match self {
            Direction::Debit => -1.0,
            Direction::Credit => 1.0,
        }
    }
}

/// Spending category tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Groceries,
    Shopping,
    Gas,
    Coffee,
    Dining,
    Delivery,
    Pharmacy,
    Transportation,
    Subscription,
    Utilities,
    Nightlife,
    Income,
    Transfer,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Groceries => "groceries",
            Category::Shopping => "shopping",
            Category::Gas => "gas",
            Category::Coffee => "coffee",
            Category::Dining => "dining",
            Category::Delivery => "delivery",
            Category::Pharmacy => "pharmacy",
            Category::Transportation => "transportation",
            Category::Subscription => "subscription",
            Category::Utilities => "utilities",
            Category::Nightlife => "nightlife",
            Category::Income => "income",
            Category::Transfer => "transfer",
        }
    }

    /// Discretionary categories are the ones a pledge can redirect
    pub fn is_discretionary(&self) -> bool {
        matches!(
            self,
            Category::Coffee | Category::Dining | Category::Delivery | Category::Nightlife | Category::Shopping
        )
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Account kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountKind {
    Checking,
    Investment,
}

/// A single posted transaction. `amount` is always positive; `direction` carries the sign.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: NaiveDate,
    pub merchant: String,
    pub amount: f64,
    pub category: Category,
    pub direction: Direction,
}

impl Transaction {
    /// Amount with the direction's sign applied
    pub fn signed_amount(&self) -> f64 {
        self.amount * self.direction.sign()
    }
}

/// Demo checking account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckingAccount {
    pub balance: f64,
    pub account_name: String,
    /// Masked account number, always four digits
    pub last_four_digits: String,
    /// Most recent first
    pub recent_transactions: Vec<Transaction>,
    pub routing_number: String,
    pub account_kind: AccountKind,
}

impl CheckingAccount {
    /// `****1234` style display of the account number
    pub fn masked_number(&self) -> String {
        format!("****{}", self.last_four_digits)
    }

    /// Sum of debits among the listed transactions
    pub fn recent_spending(&self) -> f64 {
        self.recent_transactions
            .iter()
            .filter(|t| t.direction == Direction::Debit)
            .map(|t| t.amount)
            .sum()
    }
}

/// Demo investment ("Future Me") account
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestmentAccount {
    pub balance: f64,
    pub account_name: String,
    pub total_contributions: f64,
    /// `balance - total_contributions`
    pub total_growth: f64,
    pub projected_value_10_years: f64,
    /// Target monthly contribution
    pub monthly_contribution: f64,
    pub account_kind: AccountKind,
}

impl InvestmentAccount {
    /// True for a brand-new account with nothing in it yet
    pub fn is_empty(&self) -> bool {
        self.balance == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(direction: Direction, amount: f64) -> Transaction {
        Transaction {
            id: "t".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 10).unwrap(),
            merchant: "TARGET".to_string(),
            amount,
            category: Category::Shopping,
            direction,
        }
    }

    #[test]
    fn test_signed_amount() {
        assert_eq!(txn(Direction::Debit, 42.5).signed_amount(), -42.5);
        assert_eq!(txn(Direction::Credit, 3250.0).signed_amount(), 3250.0);
    }

    #[test]
    fn test_serialized_tags() {
        let json = serde_json::to_value(txn(Direction::Debit, 10.0)).unwrap();
        assert_eq!(json["direction"], "debit");
        assert_eq!(json["category"], "shopping");
        assert_eq!(json["date"], "2026-01-10");
        assert_eq!(serde_json::to_value(AccountKind::Checking).unwrap(), "checking");
    }

    #[test]
    fn test_recent_spending_skips_credits() {
        let account = CheckingAccount {
            balance: 1000.0,
            account_name: "Personal Checking".to_string(),
            last_four_digits: "4321".to_string(),
            recent_transactions: vec![txn(Direction::Debit, 20.0), txn(Direction::Credit, 3250.0), txn(Direction::Debit, 5.5)],
            routing_number: "121000358".to_string(),
            account_kind: AccountKind::Checking,
        };
        assert_eq!(account.recent_spending(), 25.5);
        assert_eq!(account.masked_number(), "****4321");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Income.to_string(), "income");
        assert!(Category::Nightlife.is_discretionary());
        assert!(!Category::Utilities.is_discretionary());
    }
}
