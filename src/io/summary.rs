// src/io/summary.rs

//! Plain-text presentation of analytics results. Rounding happens here and
//! nowhere else.

use crate::analytics::{
    AnalyticsReport, DescriptiveReport, DiagnosticReport, FrequencyAdvice, PredictiveReport,
    PrescriptiveReport, Recommendation, ShortagePrediction, Stability, TrendDirection,
};
use crate::simulation::config::SimulationParameters;
use std::fmt;

const RULE: &str = "============================================================";

/// One scenario: its parameters followed by all four reports.
pub struct ScenarioSummary<'a> {
    pub title: &'a str,
    pub params: &'a SimulationParameters,
    pub report: &'a AnalyticsReport,
}

impl fmt::Display for ScenarioSummary<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "{}", self.title.to_uppercase())?;
        writeln!(f, "{RULE}")?;
        write_parameters(f, self.params)?;
        write_descriptive(f, &self.report.descriptive)?;
        write_diagnostic(f, &self.report.diagnostic)?;
        write_predictive(f, &self.report.predictive)?;
        write_prescriptive(f, &self.report.prescriptive)
    }
}

/// Side-by-side headline numbers for several scenarios.
pub struct Comparison<'a> {
    pub scenarios: &'a [(&'a str, &'a DescriptiveReport)],
}

impl fmt::Display for Comparison<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "COMPARISON")?;
        writeln!(f, "{RULE}")?;
        for (name, report) in self.scenarios {
            writeln!(f, "  {name}:")?;
            writeln!(f, "    Shortage days:   {}", report.shortage_days)?;
            writeln!(f, "    Unmet days:      {}", report.unmet_demand_days)?;
            writeln!(f, "    Average stock:   {:.2} units", report.mean_stock)?;
            writeln!(f, "    Fill rate:       {}", percent(report.fill_rate))?;
        }
        Ok(())
    }
}

fn percent(rate: Option<f64>) -> String {
    match rate {
        Some(rate) => format!("{:.2}%", rate * 100.0),
        None => "n/a".to_string(),
    }
}

fn heading(f: &mut fmt::Formatter<'_>, title: &str) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "--- {title} ---")
}

fn write_parameters(f: &mut fmt::Formatter<'_>, p: &SimulationParameters) -> fmt::Result {
    heading(f, "Parameters")?;
    writeln!(f, "  Annual demand:   {} units", p.annual_demand)?;
    writeln!(f, "  Horizon:         {} days", p.horizon_days)?;
    writeln!(f, "  Lead time:       {} days", p.lead_time_days)?;
    writeln!(f, "  Order period:    {} days", p.order_period_days)?;
    writeln!(f, "  Order quantity:  {} units", p.order_quantity)?;
    writeln!(f, "  Initial stock:   {} units", p.initial_stock)
}

fn write_descriptive(f: &mut fmt::Formatter<'_>, r: &DescriptiveReport) -> fmt::Result {
    heading(f, "Descriptive: what happened")?;
    writeln!(f, "  Average stock:   {:.2} units", r.mean_stock)?;
    writeln!(f, "  Min stock:       {:.2} units", r.min_stock)?;
    writeln!(f, "  Max stock:       {:.2} units", r.max_stock)?;
    writeln!(f, "  Total demand:    {:.2} units", r.total_demand)?;
    writeln!(f, "  Total sales:     {:.2} units", r.total_sales)?;
    writeln!(f, "  Lost sales:      {:.2} units", r.lost_sales)?;
    writeln!(f, "  Shortage days:   {} ({:.2}%)", r.shortage_days, r.shortage_rate * 100.0)?;
    writeln!(f, "  Unmet days:      {}", r.unmet_demand_days)?;
    writeln!(f, "  Fill rate:       {}", percent(r.fill_rate))?;
    writeln!(f, "  Orders placed:   {}", r.orders_placed)?;
    writeln!(f, "  Total ordered:   {:.2} units", r.total_ordered)
}

fn write_diagnostic(f: &mut fmt::Formatter<'_>, r: &DiagnosticReport) -> fmt::Result {
    heading(f, "Diagnostic: why it happened")?;
    let d = match r {
        DiagnosticReport::NoShortages => {
            return writeln!(f, "  No shortages occurred; the policy held up.");
        }
        DiagnosticReport::Shortages(d) => d,
    };
    writeln!(f, "  First shortage:  day {}", d.first_shortage_day)?;
    writeln!(f, "  Last shortage:   day {}", d.last_shortage_day)?;
    writeln!(f, "  Shortage days:   {}", d.shortage_days)?;
    writeln!(f, "  Orders placed:   {}", d.orders_placed)?;
    if let Some(interval) = d.mean_order_interval {
        writeln!(f, "  Order interval:  {interval:.1} days")?;
    }
    if let Some(quantity) = d.max_order_quantity {
        writeln!(f, "  Largest order:   {quantity:.2} units")?;
    }
    writeln!(f, "  Average stock:   {:.2} units", d.mean_stock)?;
    writeln!(f, "  Shortage-day stock: {:.2} units", d.mean_stock_on_shortage_days)
}

fn write_predictive(f: &mut fmt::Formatter<'_>, r: &PredictiveReport) -> fmt::Result {
    heading(f, "Predictive: what will happen")?;
    match r.autocorrelation {
        Some(ac) => {
            let label = match ac.stability {
                Stability::Stable => "stock levels are stable",
                Stability::Moderate => "stock levels show some stability",
                Stability::Volatile => "stock levels are volatile",
            };
            writeln!(f, "  Lag-1 autocorrelation: {:.3} ({label})", ac.coefficient)?;
        }
        None => writeln!(f, "  Lag-1 autocorrelation: undefined (constant stock)")?,
    }
    match r.next_shortage {
        ShortagePrediction::Predicted { day, mean_interval } => writeln!(
            f,
            "  Next shortage:   around day {day} (mean interval {mean_interval:.1} days)"
        )?,
        ShortagePrediction::InsufficientData { shortage_day } => writeln!(
            f,
            "  Next shortage:   insufficient data (single shortage on day {shortage_day})"
        )?,
        ShortagePrediction::NoShortages => writeln!(f, "  Next shortage:   none observed")?,
    }
    let direction = match r.trend.direction {
        TrendDirection::Increasing => "increasing",
        TrendDirection::Decreasing => "decreasing",
        TrendDirection::Stable => "stable",
    };
    writeln!(
        f,
        "  Shortage trend:  {direction} ({} -> {})",
        r.trend.first_half, r.trend.second_half
    )
}

fn write_prescriptive(f: &mut fmt::Formatter<'_>, r: &PrescriptiveReport) -> fmt::Result {
    heading(f, "Prescriptive: what to do")?;
    writeln!(
        f,
        "  Shortage rate:   {:.2}% (threshold {:.2}%)",
        r.shortage_rate * 100.0,
        r.threshold_rate * 100.0
    )?;
    writeln!(f, "  Average stock:   {:.2} units", r.mean_stock)?;
    let actions = match &r.recommendation {
        Recommendation::Adequate => {
            return writeln!(f, "  -> Current policy is adequate; keep monitoring demand.");
        }
        Recommendation::Corrective(actions) => actions,
    };
    writeln!(f, "  Daily demand:    {:.2} units", r.mean_daily_demand)?;
    writeln!(f, "  -> Raise safety stock to at least {:.0} units", actions.safety_stock)?;
    if let Some(change) = actions.order_quantity {
        writeln!(
            f,
            "  -> Raise order quantity from {:.0} to {:.0} units",
            change.current, change.recommended
        )?;
    }
    if let Some(change) = actions.order_frequency {
        let advice = match change.advice {
            FrequencyAdvice::OrderMoreOften => "more",
            FrequencyAdvice::OrderLessOften => "less",
        };
        writeln!(
            f,
            "  -> Order {advice} frequently (currently every {:.0} days)",
            change.current_interval
        )?;
    }
    Ok(())
}
