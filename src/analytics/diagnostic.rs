// src/analytics/diagnostic.rs

use super::{ensure_non_empty, order_days, shortage_days, stats};
use crate::error::AnalyticsError;
use crate::simulation::engine::DayRecord;
use serde::Serialize;
use tracing::debug;

/// Why shortages happened, or an explicit statement that none did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiagnosticReport {
    NoShortages,
    Shortages(ShortageDiagnosis),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortageDiagnosis {
    pub first_shortage_day: u32,
    pub last_shortage_day: u32,
    pub shortage_days: usize,
    pub mean_stock_on_shortage_days: f64,
    pub orders_placed: usize,
    /// Mean gap between order placement days; `None` with fewer than two orders.
    pub mean_order_interval: Option<f64>,
    /// Largest single order; `None` when nothing was ordered.
    pub max_order_quantity: Option<f64>,
    /// Mean stock over the whole horizon, for contrast with shortage days.
    pub mean_stock: f64,
}

pub fn diagnostic(records: &[DayRecord]) -> Result<DiagnosticReport, AnalyticsError> {
    ensure_non_empty(records)?;

    let shortages = shortage_days(records);
    let (first_shortage_day, last_shortage_day) = match (shortages.first(), shortages.last()) {
        (Some(&first), Some(&last)) => (first, last),
        _ => {
            debug!("Diagnostic report: no shortages");
            return Ok(DiagnosticReport::NoShortages);
        }
    };

    let mean_stock_on_shortage_days = stats::mean(
        records
            .iter()
            .filter(|r| r.shortage)
            .map(|r| r.stock_after),
    )
    .ok_or(AnalyticsError::EmptySeries)?;
    let mean_stock =
        stats::mean(records.iter().map(|r| r.stock_after)).ok_or(AnalyticsError::EmptySeries)?;

    let orders = order_days(records);
    let max_order_quantity = records
        .iter()
        .map(|r| r.ordered_qty)
        .filter(|&q| q > 0.0)
        .reduce(f64::max);

    let diagnosis = ShortageDiagnosis {
        first_shortage_day,
        last_shortage_day,
        shortage_days: shortages.len(),
        mean_stock_on_shortage_days,
        orders_placed: orders.len(),
        mean_order_interval: stats::mean_gap(&orders),
        max_order_quantity,
        mean_stock,
    };
    debug!(
        first = diagnosis.first_shortage_day,
        last = diagnosis.last_shortage_day,
        count = diagnosis.shortage_days,
        "Diagnostic report computed"
    );
    Ok(DiagnosticReport::Shortages(diagnosis))
}
