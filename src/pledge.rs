//! Pledges and the dashboard's running total

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PledgeError;
use crate::insights::{find_pattern, SpendingPattern};
use crate::projection::{future_value, projection_series, ProjectionPoint, DEFAULT_ANNUAL_RATE, DEFAULT_YEARS};

/// A promise to redirect one instance of a spending habit into savings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pledge {
    pub id: String,
    pub amount: f64,
    /// Name of the spending pattern pledged against
    pub category: String,
    pub date: NaiveDate,
    /// `amount` grown at 8% for 10 years, whole units
    pub future_value: i64,
}

impl Pledge {
    pub fn new(
        id: impl Into<String>,
        pattern: &SpendingPattern,
        amount: f64,
        date: NaiveDate,
    ) -> Result<Self, PledgeError> {
        if !(amount > 0.0) || !amount.is_finite() {
            return Err(PledgeError::InvalidAmount(amount));
        }

        Ok(Self {
            id: id.into(),
            amount,
            category: pattern.name.to_string(),
            date,
            future_value: future_value(amount, DEFAULT_ANNUAL_RATE, DEFAULT_YEARS).round() as i64,
        })
    }
}

/// Ordered collection of pledges. Serializes as a bare JSON array.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PledgeBook {
    pledges: Vec<Pledge>,
}

impl PledgeBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// The two pledges shown to first-time visitors
    pub fn demo() -> Self {
        let demo = [
            ("1", "saturday-night", 150.0, (2026, 1, 11)),
            ("2", "food-delivery", 85.0, (2026, 1, 8)),
        ];

        let pledges = demo
            .iter()
            .filter_map(|&(id, pattern, amount, (y, m, d))| {
                let date = NaiveDate::from_ymd_opt(y, m, d)?;
                Pledge::new(id, find_pattern(pattern), amount, date).ok()
            })
            .collect();

        Self { pledges }
    }

    pub fn from_json(json: &str) -> Result<Self, PledgeError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PledgeError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn add(&mut self, pledge: Pledge) {
        self.pledges.push(pledge);
    }

    pub fn pledges(&self) -> &[Pledge] {
        &self.pledges
    }

    pub fn is_empty(&self) -> bool {
        self.pledges.is_empty()
    }

    pub fn total_pledged(&self) -> f64 {
        self.pledges.iter().map(|p| p.amount).sum()
    }

    /// Ten-year growth of the pledged total at the default rate
    pub fn projection(&self) -> Vec<ProjectionPoint> {
        projection_series(self.total_pledged(), 0.0, DEFAULT_YEARS as u32, DEFAULT_ANNUAL_RATE)
    }

    /// Final value of [`Self::projection`]
    pub fn projected_value(&self) -> i64 {
        self.projection().last().map(|p| p.value).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 2, 7).unwrap()
    }

    #[test]
    fn test_pledge_future_value() {
        let pledge = Pledge::new("p1", find_pattern("saturday-night"), 150.0, date()).unwrap();
        assert_eq!(pledge.future_value, 324);
        assert_eq!(pledge.category, "Saturday Night Out");
    }

    #[test]
    fn test_pledge_rejects_non_positive() {
        let pattern = find_pattern("subscriptions");
        assert!(matches!(Pledge::new("x", pattern, 0.0, date()), Err(PledgeError::InvalidAmount(_))));
        assert!(Pledge::new("x", pattern, -10.0, date()).is_err());
        assert!(Pledge::new("x", pattern, f64::INFINITY, date()).is_err());
    }

    #[test]
    fn test_demo_book() {
        let book = PledgeBook::demo();
        assert_eq!(book.pledges().len(), 2);
        assert_eq!(book.total_pledged(), 235.0);
        assert_eq!(book.projection().len(), 11);
        assert_eq!(book.projected_value(), 507);
    }

    #[test]
    fn test_empty_book_projects_zero() {
        let book = PledgeBook::new();
        assert!(book.is_empty());
        assert_eq!(book.projected_value(), 0);
    }

    #[test]
    fn test_json_is_plain_array() {
        let mut book = PledgeBook::new();
        book.add(Pledge::new("42", find_pattern("food-delivery"), 30.0, date()).unwrap());

        let json = book.to_json().unwrap();
        assert!(json.starts_with('['));
        assert!(json.contains("\"futureValue\":65"));

        let restored = PledgeBook::from_json(&json).unwrap();
        assert_eq!(restored, book);

        assert!(matches!(PledgeBook::from_json("{not json"), Err(PledgeError::Json(_))));
    }
}
