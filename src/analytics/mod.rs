// src/analytics/mod.rs

//! Four independent summaries of a completed run.
//!
//! Each builder is a pure function of the record slice; none depends on
//! another's output.

pub mod descriptive;
pub mod diagnostic;
pub mod predictive;
pub mod prescriptive;
pub mod stats;

pub use descriptive::{descriptive, DescriptiveReport};
pub use diagnostic::{diagnostic, DiagnosticReport, ShortageDiagnosis};
pub use predictive::{
    predictive, Autocorrelation, PredictiveReport, ShortagePrediction, ShortageTrend, Stability,
    TrendDirection,
};
pub use prescriptive::{
    prescriptive, CorrectiveActions, FrequencyAdvice, OrderFrequencyChange, OrderQuantityChange,
    PrescriptiveReport, Recommendation,
};

use crate::error::{AnalyticsError, ConfigError};
use crate::simulation::engine::DayRecord;
use serde::{Deserialize, Serialize};

/// Shortage rate above which the prescriptive report recommends changes.
pub const DEFAULT_SHORTAGE_THRESHOLD: f64 = 0.05;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnalyticsConfig {
    pub shortage_threshold: f64,
}

impl Default for AnalyticsConfig {
    fn default() -> Self {
        Self {
            shortage_threshold: DEFAULT_SHORTAGE_THRESHOLD,
        }
    }
}

impl AnalyticsConfig {
    /// A NaN threshold would compare false against every rate and hide
    /// every shortage, so only finite values are accepted.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.shortage_threshold.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "shortage_threshold",
            });
        }
        Ok(())
    }
}

/// All four views of one record sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub descriptive: DescriptiveReport,
    pub diagnostic: DiagnosticReport,
    pub predictive: PredictiveReport,
    pub prescriptive: PrescriptiveReport,
}

pub fn analyze(
    records: &[DayRecord],
    config: &AnalyticsConfig,
) -> Result<AnalyticsReport, AnalyticsError> {
    Ok(AnalyticsReport {
        descriptive: descriptive(records)?,
        diagnostic: diagnostic(records)?,
        predictive: predictive(records)?,
        prescriptive: prescriptive(records, config.shortage_threshold)?,
    })
}

pub(crate) fn ensure_non_empty(records: &[DayRecord]) -> Result<(), AnalyticsError> {
    if records.is_empty() {
        Err(AnalyticsError::EmptySeries)
    } else {
        Ok(())
    }
}

/// Day numbers of records flagged as shortages, in sequence order.
pub(crate) fn shortage_days(records: &[DayRecord]) -> Vec<u32> {
    records.iter().filter(|r| r.shortage).map(|r| r.day).collect()
}

/// Day numbers on which an order was placed, in sequence order.
pub(crate) fn order_days(records: &[DayRecord]) -> Vec<u32> {
    records
        .iter()
        .filter(|r| r.ordered_qty > 0.0)
        .map(|r| r.day)
        .collect()
}
