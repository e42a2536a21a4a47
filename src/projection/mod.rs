//! Projection engine: compound growth of pledges and weekly contributions

mod growth;
mod series;
mod format;

pub use growth::{
    future_value, recurring_future_value, try_future_value, try_recurring_future_value,
    opportunity_cost, round_cents, OpportunityCost,
    DEFAULT_ANNUAL_RATE, DEFAULT_YEARS, OPPORTUNITY_ANNUAL_RATE, WEEKS_PER_YEAR,
};
pub use series::{projection_series, ProjectionPoint, SeriesConfig};
pub use format::format_currency;
