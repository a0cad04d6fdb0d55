// src/analytics/descriptive.rs

use super::{ensure_non_empty, stats};
use crate::error::AnalyticsError;
use crate::simulation::engine::DayRecord;
use serde::Serialize;
use tracing::debug;

/// What happened over the horizon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptiveReport {
    pub days: usize,
    pub mean_stock: f64,
    pub min_stock: f64,
    pub max_stock: f64,
    pub total_demand: f64,
    pub total_sales: f64,
    /// `total_demand - total_sales`.
    pub lost_sales: f64,
    pub shortage_days: usize,
    pub shortage_rate: f64,
    /// Days on which sales fell below demand.
    pub unmet_demand_days: usize,
    /// `total_sales / total_demand`; `None` when there was no demand.
    ///
    /// Within `[0, 1]` only for runs starting from non-negative stock: a
    /// negative opening balance is "sold" on day 1 as negative sales.
    pub fill_rate: Option<f64>,
    pub orders_placed: usize,
    pub total_ordered: f64,
}

pub fn descriptive(records: &[DayRecord]) -> Result<DescriptiveReport, AnalyticsError> {
    ensure_non_empty(records)?;

    let days = records.len();
    let stock = records.iter().map(|r| r.stock_after);
    let mean_stock = stats::mean(stock.clone()).ok_or(AnalyticsError::EmptySeries)?;
    let min_stock = stock.clone().fold(f64::INFINITY, f64::min);
    let max_stock = stock.fold(f64::NEG_INFINITY, f64::max);

    let total_demand: f64 = records.iter().map(|r| r.demand).sum();
    let total_sales: f64 = records.iter().map(|r| r.sales).sum();
    let shortage_days = records.iter().filter(|r| r.shortage).count();
    let unmet_demand_days = records.iter().filter(|r| r.sales < r.demand).count();

    let fill_rate = if total_demand > 0.0 {
        Some(total_sales / total_demand)
    } else {
        None
    };

    let orders = records.iter().filter(|r| r.ordered_qty > 0.0);
    let orders_placed = orders.clone().count();
    let total_ordered = orders.map(|r| r.ordered_qty).sum();

    let report = DescriptiveReport {
        days,
        mean_stock,
        min_stock,
        max_stock,
        total_demand,
        total_sales,
        lost_sales: total_demand - total_sales,
        shortage_days,
        shortage_rate: shortage_days as f64 / days as f64,
        unmet_demand_days,
        fill_rate,
        orders_placed,
        total_ordered,
    };
    debug!(
        mean_stock = report.mean_stock,
        shortage_days = report.shortage_days,
        fill_rate = ?report.fill_rate,
        "Descriptive report computed"
    );
    Ok(report)
}
