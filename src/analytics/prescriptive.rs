// src/analytics/prescriptive.rs

use super::{ensure_non_empty, order_days, stats};
use crate::error::AnalyticsError;
use crate::simulation::engine::DayRecord;
use serde::Serialize;
use tracing::{debug, warn};

/// Recommended safety stock, in days of mean demand.
const SAFETY_STOCK_DAYS: f64 = 3.0;
const ORDER_QUANTITY_UPLIFT: f64 = 1.2;
/// Mean order interval above which more frequent ordering is advised.
const LONG_ORDER_INTERVAL: f64 = 15.0;
/// Mean order interval below which less frequent ordering is advised.
const SHORT_ORDER_INTERVAL: f64 = 5.0;

/// What to do about the observed policy performance.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PrescriptiveReport {
    pub shortage_rate: f64,
    pub threshold_rate: f64,
    pub mean_stock: f64,
    pub mean_daily_demand: f64,
    pub recommendation: Recommendation,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Recommendation {
    /// Shortage rate within threshold; keep the current policy.
    Adequate,
    Corrective(CorrectiveActions),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrectiveActions {
    pub safety_stock: f64,
    /// Present when at least one order was placed.
    pub order_quantity: Option<OrderQuantityChange>,
    /// Present when the mean order interval falls outside the 5..=15 day band.
    pub order_frequency: Option<OrderFrequencyChange>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderQuantityChange {
    pub current: f64,
    pub recommended: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct OrderFrequencyChange {
    pub current_interval: f64,
    pub advice: FrequencyAdvice,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FrequencyAdvice {
    OrderMoreOften,
    OrderLessOften,
}

pub fn prescriptive(
    records: &[DayRecord],
    threshold_rate: f64,
) -> Result<PrescriptiveReport, AnalyticsError> {
    ensure_non_empty(records)?;

    let shortage_count = records.iter().filter(|r| r.shortage).count();
    let shortage_rate = shortage_count as f64 / records.len() as f64;
    let mean_stock =
        stats::mean(records.iter().map(|r| r.stock_after)).ok_or(AnalyticsError::EmptySeries)?;
    let mean_daily_demand =
        stats::mean(records.iter().map(|r| r.demand)).ok_or(AnalyticsError::EmptySeries)?;

    let recommendation = if shortage_rate > threshold_rate {
        warn!(shortage_rate, threshold_rate, "Shortage rate above threshold");
        Recommendation::Corrective(corrective_actions(records, mean_daily_demand))
    } else {
        Recommendation::Adequate
    };

    debug!(shortage_rate, ?recommendation, "Prescriptive report computed");
    Ok(PrescriptiveReport {
        shortage_rate,
        threshold_rate,
        mean_stock,
        mean_daily_demand,
        recommendation,
    })
}

fn corrective_actions(records: &[DayRecord], mean_daily_demand: f64) -> CorrectiveActions {
    let order_quantity = records
        .iter()
        .map(|r| r.ordered_qty)
        .filter(|&q| q > 0.0)
        .reduce(f64::max)
        .map(|current| OrderQuantityChange {
            current,
            recommended: current * ORDER_QUANTITY_UPLIFT,
        });

    let order_frequency = stats::mean_gap(&order_days(records)).and_then(|interval| {
        let advice = if interval > LONG_ORDER_INTERVAL {
            FrequencyAdvice::OrderMoreOften
        } else if interval < SHORT_ORDER_INTERVAL {
            FrequencyAdvice::OrderLessOften
        } else {
            return None;
        };
        Some(OrderFrequencyChange {
            current_interval: interval,
            advice,
        })
    });

    CorrectiveActions {
        safety_stock: mean_daily_demand * SAFETY_STOCK_DAYS,
        order_quantity,
        order_frequency,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{fixtures, DEFAULT_SHORTAGE_THRESHOLD};

    fn corrective(report: &PrescriptiveReport) -> &CorrectiveActions {
        match &report.recommendation {
            Recommendation::Corrective(actions) => actions,
            Recommendation::Adequate => panic!("expected corrective actions"),
        }
    }

    #[test]
    fn low_shortage_rate_is_adequate() {
        let mut stock = vec![1.0; 40];
        stock[10] = -1.0;
        let report = prescriptive(&fixtures::series(&stock), DEFAULT_SHORTAGE_THRESHOLD).unwrap();
        assert_eq!(report.shortage_rate, 0.025);
        assert_eq!(report.recommendation, Recommendation::Adequate);
    }

    #[test]
    fn rate_equal_to_threshold_is_still_adequate() {
        let mut stock = vec![1.0; 20];
        stock[3] = -1.0;
        let report = prescriptive(&fixtures::series(&stock), 0.05).unwrap();
        assert_eq!(report.shortage_rate, 0.05);
        assert_eq!(report.recommendation, Recommendation::Adequate);
    }

    #[test]
    fn high_rate_recommends_buffer_and_bigger_orders() {
        let mut stock = vec![1.0; 30];
        stock[4] = -2.0;
        stock[5] = -1.0;
        let records = fixtures::with_orders(
            fixtures::series(&stock),
            &[(1, 40.0), (11, 50.0), (21, 45.0)],
        );
        let report = prescriptive(&records, DEFAULT_SHORTAGE_THRESHOLD).unwrap();
        let actions = corrective(&report);
        assert_eq!(actions.safety_stock, 3.0);
        let change = actions.order_quantity.unwrap();
        assert_eq!(change.current, 50.0);
        assert!((change.recommended - 60.0).abs() < 1e-9);
        // A ten-day interval sits inside the band.
        assert_eq!(actions.order_frequency, None);
    }

    #[test]
    fn interval_outside_band_adjusts_frequency() {
        let mut stock = vec![-1.0; 40];
        stock[0] = 1.0;
        let sparse = fixtures::with_orders(fixtures::series(&stock), &[(2, 10.0), (22, 10.0)]);
        let report = prescriptive(&sparse, DEFAULT_SHORTAGE_THRESHOLD).unwrap();
        let freq = corrective(&report).order_frequency.unwrap();
        assert_eq!(freq.current_interval, 20.0);
        assert_eq!(freq.advice, FrequencyAdvice::OrderMoreOften);

        let dense = fixtures::with_orders(
            fixtures::series(&stock),
            &[(2, 10.0), (4, 10.0), (6, 10.0)],
        );
        let report = prescriptive(&dense, DEFAULT_SHORTAGE_THRESHOLD).unwrap();
        let freq = corrective(&report).order_frequency.unwrap();
        assert_eq!(freq.current_interval, 2.0);
        assert_eq!(freq.advice, FrequencyAdvice::OrderLessOften);
    }

    #[test]
    fn no_orders_means_no_quantity_advice() {
        let records = fixtures::series(&[-1.0, -1.0, 1.0]);
        let report = prescriptive(&records, DEFAULT_SHORTAGE_THRESHOLD).unwrap();
        let actions = corrective(&report);
        assert_eq!(actions.order_quantity, None);
        assert_eq!(actions.order_frequency, None);
    }
}
