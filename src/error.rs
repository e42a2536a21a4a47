//! Error types for the library
//!
//! Transfer rejections are not errors; see [`crate::ledger::TransferResult`].

use thiserror::Error;

/// Rejected inputs to the validated projection functions
#[derive(Debug, Error, PartialEq)]
pub enum ProjectionError {
    #[error("{name} must be a finite number, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("Annual rate {0} must be greater than -100%")]
    RateOutOfRange(f64),

    #[error("Years must be non-negative, got {0}")]
    NegativeYears(f64),
}

/// Failures reading configuration from the environment
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Environment variable {var} has invalid value '{value}'")]
    InvalidValue { var: &'static str, value: String },

    #[error("Projection parameter rejected: {0}")]
    Projection(#[from] ProjectionError),
}

/// Failures loading or saving a pledge book
#[derive(Debug, Error)]
pub enum PledgeError {
    #[error("Pledge amount must be greater than zero, got {0}")]
    InvalidAmount(f64),

    #[error("Pledge JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
