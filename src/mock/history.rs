//! Ninety-day discretionary spending history
//!
//! Saturday nights are the heavy days, Fridays sometimes, weekday lunches about half the time,
//! and streaming subscriptions land on the 1st.

use chrono::{Datelike, Duration, NaiveDate, NaiveTime, Weekday};
use log::debug;
use serde::{Deserialize, Serialize};

use super::merchants::{Merchant, DINING_MERCHANTS, NIGHT_OUT_MERCHANTS, STREAMING_SUBSCRIPTIONS};
use super::rng::SeededRng;
use crate::accounts::Category;
use crate::projection::round_cents;

pub const DEFAULT_HISTORY_DAYS: u32 = 90;

/// A card swipe with time-of-day detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpendingEvent {
    pub id: String,
    pub date: NaiveDate,
    pub weekday: Weekday,
    pub time: NaiveTime,
    pub merchant: String,
    pub amount: f64,
    pub category: Category,
}

/// Generate `days` days of spending ending on `today`, newest first
pub fn generate_transaction_history(seed: u32, today: NaiveDate, days: u32) -> Vec<SpendingEvent> {
    let mut rng = SeededRng::new(seed);
    let mut events = Vec::new();

    for i in 0..days {
        let Some(date) = today.checked_sub_signed(Duration::days(i as i64)) else {
            break;
        };
        let weekday = date.weekday();

        match weekday {
            Weekday::Sat => {
                let count = 2 + rng.index(3);
                for j in 0..count {
                    let merchant = pick(&mut rng, &NIGHT_OUT_MERCHANTS);
                    let amount = round_cents(rng.uniform(merchant.min, merchant.max));
                    // 6 PM through 1 AM; past midnight wraps to early morning
                    let hour = (18 + rng.index(8) as u32) % 24;
                    let minute = rng.index(60) as u32;
                    events.push(event(format!("sat-{}-{}", i, j), date, hour, minute, merchant, amount, Category::Nightlife));
                }
            }
            Weekday::Fri => {
                if rng.above(0.4) {
                    let merchant = pick(&mut rng, &NIGHT_OUT_MERCHANTS);
                    let amount = round_cents(rng.uniform(merchant.min, merchant.max));
                    let hour = 20 + rng.index(4) as u32;
                    let minute = rng.index(60) as u32;
                    events.push(event(format!("fri-{}", i), date, hour, minute, merchant, amount, Category::Nightlife));
                }
            }
            Weekday::Mon | Weekday::Tue | Weekday::Wed | Weekday::Thu => {
                if rng.above(0.5) {
                    let merchant = pick(&mut rng, &DINING_MERCHANTS);
                    let amount = round_cents(rng.uniform(merchant.min, merchant.max));
                    let hour = 11 + rng.index(3) as u32;
                    let minute = rng.index(60) as u32;
                    events.push(event(format!("din-{}", i), date, hour, minute, merchant, amount, Category::Dining));
                }
            }
            Weekday::Sun => {}
        }

        if date.day() == 1 {
            for (idx, sub) in STREAMING_SUBSCRIPTIONS.iter().enumerate() {
                events.push(event(format!("sub-{}-{}", i, idx), date, 0, 0, sub, sub.min, Category::Subscription));
            }
        }
    }

    events.sort_by(|a, b| b.date.cmp(&a.date));
    debug!("Generated {} spending events over {} days for seed {}", events.len(), days, seed);
    events
}

/// Total spend per weekday, indexed Monday = 0 through Sunday = 6
pub fn spend_by_weekday(events: &[SpendingEvent]) -> [f64; 7] {
    let mut totals = [0.0; 7];
    for e in events {
        totals[e.weekday.num_days_from_monday() as usize] += e.amount;
    }
    totals
}

fn pick<'a>(rng: &mut SeededRng, merchants: &'a [Merchant]) -> &'a Merchant {
    &merchants[rng.index(merchants.len())]
}

fn event(
    id: String,
    date: NaiveDate,
    hour: u32,
    minute: u32,
    merchant: &Merchant,
    amount: f64,
    category: Category,
) -> SpendingEvent {
    SpendingEvent {
        id,
        date,
        weekday: date.weekday(),
        time: NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN),
        merchant: merchant.name.to_string(),
        amount,
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    fn today() -> NaiveDate {
        // A Saturday
        NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
    }

    #[test]
    fn test_history_stops_at_earliest_date() {
        let today = NaiveDate::MIN.checked_add_signed(Duration::days(3)).unwrap();
        let events = generate_transaction_history(1, today, 1000);
        assert!(events.iter().all(|e| e.date >= NaiveDate::MIN && e.date <= today));

        let dates: std::collections::BTreeSet<_> = events.iter().map(|e| e.date).collect();
        assert!(dates.len() <= 4);
    }

    #[test]
    fn test_history_is_reproducible() {
        let a = generate_transaction_history(42, today(), DEFAULT_HISTORY_DAYS);
        let b = generate_transaction_history(42, today(), DEFAULT_HISTORY_DAYS);
        assert_eq!(a, b);
        assert!(!a.is_empty());
    }

    #[test]
    fn test_weekday_rules() {
        let events = generate_transaction_history(7, today(), DEFAULT_HISTORY_DAYS);
        let oldest = today() - Duration::days(89);

        for e in &events {
            assert!(e.date <= today() && e.date >= oldest);
            assert_eq!(e.weekday, e.date.weekday());
            assert!(e.amount > 0.0);
            match e.category {
                Category::Nightlife => assert!(matches!(e.weekday, Weekday::Fri | Weekday::Sat)),
                Category::Dining => {
                    assert!(!matches!(e.weekday, Weekday::Fri | Weekday::Sat | Weekday::Sun));
                    assert!((11..=13).contains(&e.time.hour()));
                }
                Category::Subscription => assert_eq!(e.date.day(), 1),
                other => panic!("unexpected category {}", other),
            }
        }
    }

    #[test]
    fn test_every_saturday_has_two_to_four_events() {
        let events = generate_transaction_history(3, today(), DEFAULT_HISTORY_DAYS);
        for week in 0..13 {
            let saturday = today() - Duration::days(week * 7);
            let count = events
                .iter()
                .filter(|e| e.date == saturday && e.category == Category::Nightlife)
                .count();
            assert!((2..=4).contains(&count), "{} had {} events", saturday, count);
        }
    }

    #[test]
    fn test_subscriptions_on_first_of_month() {
        let events = generate_transaction_history(42, today(), DEFAULT_HISTORY_DAYS);
        // Mar 1, Feb 1 and Jan 1 fall inside the window
        let subs: Vec<_> = events.iter().filter(|e| e.category == Category::Subscription).collect();
        assert_eq!(subs.len(), 9);
        assert!(subs.iter().all(|e| e.time == NaiveTime::MIN));
    }

    #[test]
    fn test_sorted_newest_first() {
        let events = generate_transaction_history(11, today(), 30);
        assert!(events.windows(2).all(|w| w[0].date >= w[1].date));
    }

    #[test]
    fn test_spend_by_weekday_sums_all_events() {
        let events = generate_transaction_history(5, today(), DEFAULT_HISTORY_DAYS);
        let totals = spend_by_weekday(&events);
        let sum: f64 = events.iter().map(|e| e.amount).sum();
        assert!((totals.iter().sum::<f64>() - sum).abs() < 1e-6);
        assert!(totals[Weekday::Sat.num_days_from_monday() as usize] > 0.0);
    }
}
