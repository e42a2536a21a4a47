//! Compound growth of single deposits and weekly contribution streams

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;

/// Annual return used by the pledge and dashboard projections
pub const DEFAULT_ANNUAL_RATE: f64 = 0.08;

/// Annual return used by the opportunity-cost helper
pub const OPPORTUNITY_ANNUAL_RATE: f64 = 0.07;

/// Default projection horizon in years
pub const DEFAULT_YEARS: f64 = 10.0;

/// Contribution periods per year for recurring pledges
pub const WEEKS_PER_YEAR: f64 = 52.0;

/// Future value of a single deposit compounded annually.
///
/// `principal * (1 + annual_rate)^years`. Inputs are not validated: callers must keep
/// `annual_rate > -1` and `years >= 0`. Fractional years are allowed.
pub fn future_value(principal: f64, annual_rate: f64, years: f64) -> f64 {
    principal * (1.0 + annual_rate).powf(years)
}

/// Future value of an ordinary annuity of weekly contributions, compounded weekly.
///
/// # Arguments
/// * `weekly_contribution` - Amount deposited at the end of each week
/// * `annual_rate` - Nominal annual rate, split evenly over 52 weeks
/// * `years` - Horizon; `years * 52` contributions are made
///
/// A zero rate degenerates to the plain sum of contributions.
pub fn recurring_future_value(weekly_contribution: f64, annual_rate: f64, years: f64) -> f64 {
    let weekly_rate = annual_rate / WEEKS_PER_YEAR;
    let total_weeks = years * WEEKS_PER_YEAR;

    if weekly_rate == 0.0 {
        return weekly_contribution * total_weeks;
    }

    weekly_contribution * (((1.0 + weekly_rate).powf(total_weeks) - 1.0) / weekly_rate)
}

/// [`future_value`] with its preconditions checked
pub fn try_future_value(principal: f64, annual_rate: f64, years: f64) -> Result<f64, ProjectionError> {
    check_finite("principal", principal)?;
    check_rate_and_years(annual_rate, years)?;
    Ok(future_value(principal, annual_rate, years))
}

/// [`recurring_future_value`] with its preconditions checked
pub fn try_recurring_future_value(
    weekly_contribution: f64,
    annual_rate: f64,
    years: f64,
) -> Result<f64, ProjectionError> {
    check_finite("weekly_contribution", weekly_contribution)?;
    check_rate_and_years(annual_rate, years)?;
    Ok(recurring_future_value(weekly_contribution, annual_rate, years))
}

pub(crate) fn check_rate_and_years(annual_rate: f64, years: f64) -> Result<(), ProjectionError> {
    check_finite("annual_rate", annual_rate)?;
    check_finite("years", years)?;
    if annual_rate <= -1.0 {
        return Err(ProjectionError::RateOutOfRange(annual_rate));
    }
    if years < 0.0 {
        return Err(ProjectionError::NegativeYears(years));
    }
    Ok(())
}

fn check_finite(name: &'static str, value: f64) -> Result<(), ProjectionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::NonFinite { name, value })
    }
}

/// What a skipped expense would be worth if invested instead
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpportunityCost {
    /// Grown value, rounded to cents
    pub future_value: f64,
    /// `future_value - amount`, rounded to cents
    pub total_growth: f64,
}

/// Single-deposit growth of `amount` at `annual_rate` for `years`, in cents precision
pub fn opportunity_cost(amount: f64, years: f64, annual_rate: f64) -> OpportunityCost {
    let future_value = round_cents(future_value(amount, annual_rate, years));
    let total_growth = round_cents(future_value - amount);

    OpportunityCost { future_value, total_growth }
}

/// Round to 2 decimal places (half away from zero)
pub fn round_cents(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
