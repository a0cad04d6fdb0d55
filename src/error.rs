// src/error.rs

use thiserror::Error;

/// Invalid simulation parameters. Raised before any day is simulated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("horizon must be at least one day")]
    NonPositiveHorizon,

    #[error("order period must be at least one day")]
    NonPositiveOrderPeriod,

    #[error("annual demand must not be negative (got {0})")]
    NegativeDemand(f64),

    #[error("order quantity must not be negative (got {0})")]
    NegativeOrderQuantity(f64),

    #[error("{field} must be a finite number")]
    NonFinite { field: &'static str },
}

/// Analytics invoked on input they cannot summarise.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AnalyticsError {
    #[error("cannot analyse an empty record sequence")]
    EmptySeries,
}

/// Failures of the I/O layer (configuration files, CSV export).
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),
}
