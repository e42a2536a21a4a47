//! Account and transaction data model

mod types;

pub use types::{AccountKind, Category, CheckingAccount, Direction, InvestmentAccount, Transaction};
