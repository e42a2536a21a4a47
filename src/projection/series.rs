//! Year-by-year projected value tables for charting

use serde::{Deserialize, Serialize};

use super::growth::{future_value, recurring_future_value, DEFAULT_ANNUAL_RATE};
use crate::error::ProjectionError;

/// One chart point: projected value at the end of `year`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionPoint {
    pub year: u32,
    /// Whole currency units
    pub value: i64,
    pub label: String,
}

/// Inputs for a projection series
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SeriesConfig {
    /// One-time deposit at year 0
    pub initial_amount: f64,

    /// Recurring weekly deposit (0 = none)
    pub weekly_contribution: f64,

    /// Number of years after year 0
    pub years: u32,

    /// Annual growth rate
    pub annual_rate: f64,
}

impl SeriesConfig {
    pub fn new(initial_amount: f64) -> Self {
        Self {
            initial_amount,
            ..Default::default()
        }
    }

    /// Check the rate is above -100% and amounts are finite
    pub fn validate(&self) -> Result<(), ProjectionError> {
        super::growth::try_future_value(self.initial_amount, self.annual_rate, self.years as f64)?;
        super::growth::try_recurring_future_value(
            self.weekly_contribution,
            self.annual_rate,
            self.years as f64,
        )?;
        Ok(())
    }

    pub fn series(&self) -> Vec<ProjectionPoint> {
        projection_series(
            self.initial_amount,
            self.weekly_contribution,
            self.years,
            self.annual_rate,
        )
    }
}

impl Default for SeriesConfig {
    fn default() -> Self {
        Self {
            initial_amount: 0.0,
            weekly_contribution: 0.0,
            years: 10,
            annual_rate: DEFAULT_ANNUAL_RATE,
        }
    }
}

/// Tabulate projected value for every year from 0 through `years` inclusive.
///
/// Each value is the grown initial deposit plus, when `weekly_contribution > 0`, the grown
/// weekly stream, rounded to the nearest whole unit.
pub fn projection_series(
    initial_amount: f64,
    weekly_contribution: f64,
    years: u32,
    annual_rate: f64,
) -> Vec<ProjectionPoint> {
    (0..=years)
        .map(|year| {
            let one_time = future_value(initial_amount, annual_rate, year as f64);
            let recurring = if weekly_contribution > 0.0 {
                recurring_future_value(weekly_contribution, annual_rate, year as f64)
            } else {
                0.0
            };

            ProjectionPoint {
                year,
                value: (one_time + recurring).round() as i64,
                label: format!("Year {}", year),
            }
        })
        .collect()
}
