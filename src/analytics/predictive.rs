// src/analytics/predictive.rs

use super::{ensure_non_empty, shortage_days, stats};
use crate::error::AnalyticsError;
use crate::simulation::engine::DayRecord;
use serde::Serialize;
use tracing::debug;

const STABLE_CORRELATION: f64 = 0.7;
const VOLATILE_CORRELATION: f64 = 0.3;
/// One half must exceed the other by this factor to count as a trend.
const TREND_FACTOR: f64 = 1.2;

/// What is likely to happen next.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictiveReport {
    /// `None` when the stock series is constant or too short.
    pub autocorrelation: Option<Autocorrelation>,
    pub next_shortage: ShortagePrediction,
    pub trend: ShortageTrend,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Autocorrelation {
    pub coefficient: f64,
    pub stability: Stability,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stability {
    Stable,
    Moderate,
    Volatile,
}

impl Stability {
    pub fn classify(coefficient: f64) -> Self {
        if coefficient > STABLE_CORRELATION {
            Stability::Stable
        } else if coefficient < VOLATILE_CORRELATION {
            Stability::Volatile
        } else {
            Stability::Moderate
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ShortagePrediction {
    Predicted { day: u32, mean_interval: f64 },
    InsufficientData { shortage_day: u32 },
    NoShortages,
}

/// Shortage counts in the two halves of the sequence.
///
/// The split is by index (`len / 2`), so for odd lengths the second half is
/// one record longer. Counts are compared, not rates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ShortageTrend {
    pub first_half: usize,
    pub second_half: usize,
    pub direction: TrendDirection,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    Increasing,
    Decreasing,
    Stable,
}

pub fn predictive(records: &[DayRecord]) -> Result<PredictiveReport, AnalyticsError> {
    ensure_non_empty(records)?;

    let report = PredictiveReport {
        autocorrelation: stock_autocorrelation(records),
        next_shortage: predict_next_shortage(records),
        trend: shortage_trend(records),
    };
    debug!(
        autocorrelation = ?report.autocorrelation.map(|a| a.coefficient),
        trend = ?report.trend.direction,
        "Predictive report computed"
    );
    Ok(report)
}

pub fn stock_autocorrelation(records: &[DayRecord]) -> Option<Autocorrelation> {
    let stock: Vec<f64> = records.iter().map(|r| r.stock_after).collect();
    stats::lag1_autocorrelation(&stock).map(|coefficient| Autocorrelation {
        coefficient,
        stability: Stability::classify(coefficient),
    })
}

/// Last shortage day plus the rounded mean gap between shortage days.
pub fn predict_next_shortage(records: &[DayRecord]) -> ShortagePrediction {
    let days = shortage_days(records);
    match days.as_slice() {
        [] => ShortagePrediction::NoShortages,
        [only] => ShortagePrediction::InsufficientData { shortage_day: *only },
        [.., last] => match stats::mean_gap(&days) {
            Some(mean_interval) => ShortagePrediction::Predicted {
                day: last + mean_interval.round() as u32,
                mean_interval,
            },
            None => ShortagePrediction::InsufficientData { shortage_day: *last },
        },
    }
}

pub fn shortage_trend(records: &[DayRecord]) -> ShortageTrend {
    let (first, second) = records.split_at(records.len() / 2);
    let first_half = first.iter().filter(|r| r.shortage).count();
    let second_half = second.iter().filter(|r| r.shortage).count();

    let direction = if second_half as f64 > first_half as f64 * TREND_FACTOR {
        TrendDirection::Increasing
    } else if first_half as f64 > second_half as f64 * TREND_FACTOR {
        TrendDirection::Decreasing
    } else {
        TrendDirection::Stable
    };

    ShortageTrend {
        first_half,
        second_half,
        direction,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::fixtures;

    #[test]
    fn classifies_correlation_bands() {
        assert_eq!(Stability::classify(0.95), Stability::Stable);
        assert_eq!(Stability::classify(0.7), Stability::Moderate);
        assert_eq!(Stability::classify(0.5), Stability::Moderate);
        assert_eq!(Stability::classify(0.3), Stability::Moderate);
        assert_eq!(Stability::classify(0.1), Stability::Volatile);
        assert_eq!(Stability::classify(-0.8), Stability::Volatile);
    }

    #[test]
    fn smooth_drawdown_is_stable() {
        let records = fixtures::series(&[10.0, 9.0, 8.0, 7.0, 6.0, 5.0]);
        let ac = stock_autocorrelation(&records).unwrap();
        assert!((ac.coefficient - 1.0).abs() < 1e-12);
        assert_eq!(ac.stability, Stability::Stable);
    }

    #[test]
    fn constant_stock_has_no_autocorrelation() {
        let records = fixtures::series(&[0.0; 8]);
        assert_eq!(stock_autocorrelation(&records), None);
    }

    #[test]
    fn predicts_from_mean_shortage_interval() {
        // Shortages on days 2, 5, 9: gaps 3 and 4, mean 3.5 rounds to 4.
        let records = fixtures::series(&[1.0, -1.0, 1.0, 1.0, -1.0, 1.0, 1.0, 1.0, -1.0, 1.0]);
        assert_eq!(
            predict_next_shortage(&records),
            ShortagePrediction::Predicted {
                day: 13,
                mean_interval: 3.5
            }
        );
    }

    #[test]
    fn one_shortage_is_insufficient() {
        let records = fixtures::series(&[1.0, -1.0, 1.0]);
        assert_eq!(
            predict_next_shortage(&records),
            ShortagePrediction::InsufficientData { shortage_day: 2 }
        );
        let records = fixtures::series(&[1.0, 2.0]);
        assert_eq!(predict_next_shortage(&records), ShortagePrediction::NoShortages);
    }

    #[test]
    fn trend_compares_half_counts() {
        let increasing = fixtures::series(&[1.0, 1.0, -1.0, -1.0]);
        let trend = shortage_trend(&increasing);
        assert_eq!((trend.first_half, trend.second_half), (0, 2));
        assert_eq!(trend.direction, TrendDirection::Increasing);

        let decreasing = fixtures::series(&[-1.0, -1.0, -1.0, 1.0, 1.0, -1.0]);
        assert_eq!(shortage_trend(&decreasing).direction, TrendDirection::Decreasing);

        let flat = fixtures::series(&[-1.0, 1.0, -1.0, 1.0]);
        assert_eq!(shortage_trend(&flat).direction, TrendDirection::Stable);
    }

    #[test]
    fn odd_length_puts_extra_record_in_second_half() {
        // Five records split 2 / 3; one shortage each side stays stable.
        let records = fixtures::series(&[-1.0, 1.0, 1.0, 1.0, -1.0]);
        let trend = shortage_trend(&records);
        assert_eq!((trend.first_half, trend.second_half), (1, 1));
        assert_eq!(trend.direction, TrendDirection::Stable);

        // A lone record lands entirely in the second half.
        let single = fixtures::series(&[-1.0]);
        let trend = shortage_trend(&single);
        assert_eq!((trend.first_half, trend.second_half), (0, 1));
        assert_eq!(trend.direction, TrendDirection::Increasing);
    }
}
