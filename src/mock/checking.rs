//! Demo checking account generation

use chrono::{Duration, Local, NaiveDate};
use log::debug;

use super::merchants::{CHECKING_MERCHANTS, PAYROLL};
use super::rng::SeededRng;
use crate::accounts::{AccountKind, CheckingAccount, Direction, Transaction};
use crate::projection::round_cents;

pub const CHECKING_ACCOUNT_NAME: &str = "Personal Checking";
pub const DEMO_ROUTING_NUMBER: &str = "121000358";

/// Number of transactions listed on a generated account
pub const RECENT_TRANSACTION_COUNT: usize = 10;

/// Transaction slots that always hold the paycheck
pub const PAYDAY_SLOTS: [usize; 2] = [4, 9];

const MIN_BALANCE: f64 = 1500.0;
const MAX_BALANCE: f64 = 8000.0;

/// Generate a checking account with transactions dated back from today
pub fn generate_checking_account(seed: u32) -> CheckingAccount {
    generate_checking_account_on(seed, Local::now().date_naive())
}

/// Generate a checking account with transactions dated back from `today`.
///
/// Draw order is part of the reproducibility contract: balance, account digits, then per
/// transaction a day offset followed (for non-payday slots) by a merchant and, unless the
/// merchant is fixed-price, an amount.
pub fn generate_checking_account_on(seed: u32, today: NaiveDate) -> CheckingAccount {
    let mut rng = SeededRng::new(seed);

    let balance = round_cents(rng.uniform(MIN_BALANCE, MAX_BALANCE));
    let last_four = (1000.0 + rng.next_f64() * 9000.0).floor() as u32;

    let mut transactions = Vec::with_capacity(RECENT_TRANSACTION_COUNT);
    for i in 0..RECENT_TRANSACTION_COUNT {
        let days_back = i as i64 + (rng.next_f64() * 2.0).floor() as i64;
        let date = today - Duration::days(days_back);

        let txn = if PAYDAY_SLOTS.contains(&i) {
            Transaction {
                id: format!("chk-{}-inc-{}", seed, i),
                date,
                merchant: PAYROLL.name.to_string(),
                amount: PAYROLL.amount,
                category: PAYROLL.category,
                direction: Direction::Credit,
            }
        } else {
            let merchant = &CHECKING_MERCHANTS[rng.index(CHECKING_MERCHANTS.len())];
            let amount = if merchant.is_fixed_price() {
                merchant.min
            } else {
                round_cents(rng.uniform(merchant.min, merchant.max))
            };

            Transaction {
                id: format!("chk-{}-{}", seed, i),
                date,
                merchant: merchant.name.to_string(),
                amount,
                category: merchant.category,
                direction: Direction::Debit,
            }
        };
        transactions.push(txn);
    }

    // Stable sort keeps generation order for same-day transactions
    transactions.sort_by(|a, b| b.date.cmp(&a.date));

    debug!("Generated checking account for seed {}: balance {:.2}", seed, balance);

    CheckingAccount {
        balance,
        account_name: CHECKING_ACCOUNT_NAME.to_string(),
        last_four_digits: last_four.to_string(),
        recent_transactions: transactions,
        routing_number: DEMO_ROUTING_NUMBER.to_string(),
        account_kind: AccountKind::Checking,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::accounts::Category;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_seed_42_account() {
        let account = generate_checking_account_on(42, today());

        assert_eq!(account.balance, 5285.0);
        assert_eq!(account.last_four_digits, "5678");
        assert_eq!(account.account_name, "Personal Checking");
        assert_eq!(account.routing_number, "121000358");
        assert_eq!(account.account_kind, AccountKind::Checking);

        let first = &account.recent_transactions[0];
        assert_eq!(first.id, "chk-42-0");
        assert_eq!(first.merchant, "AT&T WIRELESS");
        assert_eq!(first.amount, 85.0);
        assert_eq!(first.date, today());

        let whole_foods = account
            .recent_transactions
            .iter()
            .find(|t| t.id == "chk-42-1")
            .unwrap();
        assert_eq!(whole_foods.merchant, "WHOLE FOODS MARKET");
        assert!((whole_foods.amount - 76.3).abs() < 1e-9);
        assert_eq!(whole_foods.date, NaiveDate::from_ymd_opt(2026, 3, 13).unwrap());
    }

    #[test]
    fn test_same_seed_same_account() {
        let a = generate_checking_account_on(42, today());
        let b = generate_checking_account_on(42, today());
        assert_eq!(a, b);
        assert_ne!(a, generate_checking_account_on(7, today()));
    }

    #[test]
    fn test_ten_transactions_with_two_paydays() {
        for seed in [0, 1, 3, 7, 42, 1000, 123_456] {
            let account = generate_checking_account_on(seed, today());
            assert_eq!(account.recent_transactions.len(), 10);

            let paydays: Vec<_> = account
                .recent_transactions
                .iter()
                .filter(|t| t.category == Category::Income)
                .collect();
            assert_eq!(paydays.len(), 2);
            for slot in PAYDAY_SLOTS {
                let id = format!("chk-{}-inc-{}", seed, slot);
                let payday = paydays.iter().find(|t| t.id == id).unwrap();
                assert_eq!(payday.direction, Direction::Credit);
                assert_eq!(payday.amount, 3250.0);
            }
        }
    }

    #[test]
    fn test_sorted_newest_first_and_stable() {
        for seed in 0..50 {
            let account = generate_checking_account_on(seed, today());
            let txns = &account.recent_transactions;
            assert!(txns.windows(2).all(|w| w[0].date >= w[1].date));

            // Same-day entries keep generation order (index suffix ascending)
            let slot = |t: &Transaction| -> usize {
                t.id.rsplit('-').next().unwrap().parse().unwrap()
            };
            for w in txns.windows(2) {
                if w[0].date == w[1].date {
                    assert!(slot(&w[0]) < slot(&w[1]));
                }
            }
        }
    }

    #[test]
    fn test_drawn_values_within_ranges() {
        for seed in 0..200 {
            let account = generate_checking_account_on(seed, today());
            assert!((1500.0..=8000.0).contains(&account.balance));

            let digits: u32 = account.last_four_digits.parse().unwrap();
            assert!((1000..=9999).contains(&digits));

            for txn in &account.recent_transactions {
                assert!(txn.amount > 0.0);
                let days_back = (today() - txn.date).num_days();
                assert!((0..=10).contains(&days_back));
                if txn.direction == Direction::Debit {
                    let merchant = CHECKING_MERCHANTS.iter().find(|m| m.name == txn.merchant).unwrap();
                    assert!(txn.amount >= merchant.min - 1e-9 && txn.amount <= merchant.max + 1e-9);
                    assert_eq!(txn.category, merchant.category);
                }
            }
        }
    }
}
