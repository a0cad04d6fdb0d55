// src/simulation/config.rs

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Inputs of one simulation run. Immutable once handed to the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationParameters {
    /// Demand over the whole horizon; spread evenly across the days.
    pub annual_demand: f64,
    pub horizon_days: u32,
    /// Days between placing an order and receiving it.
    pub lead_time_days: u32,
    /// Days between successive order placements.
    pub order_period_days: u32,
    pub order_quantity: f64,
    pub initial_stock: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            annual_demand: 2000.0,
            horizon_days: 365,
            lead_time_days: 0,
            order_period_days: 10,
            order_quantity: 55.0,
            initial_stock: 55.0,
        }
    }
}

impl SimulationParameters {
    /// Constant per-day demand: `annual_demand / horizon_days`.
    pub fn daily_demand(&self) -> f64 {
        self.annual_demand / f64::from(self.horizon_days)
    }

    /// Same parameters with a different lead time.
    pub fn with_lead_time(&self, lead_time_days: u32) -> Self {
        Self {
            lead_time_days,
            ..self.clone()
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.horizon_days == 0 {
            return Err(ConfigError::NonPositiveHorizon);
        }
        if self.order_period_days == 0 {
            return Err(ConfigError::NonPositiveOrderPeriod);
        }
        for (field, value) in [
            ("annual_demand", self.annual_demand),
            ("order_quantity", self.order_quantity),
            ("initial_stock", self.initial_stock),
        ] {
            if !value.is_finite() {
                return Err(ConfigError::NonFinite { field });
            }
        }
        if self.annual_demand < 0.0 {
            return Err(ConfigError::NegativeDemand(self.annual_demand));
        }
        if self.order_quantity < 0.0 {
            return Err(ConfigError::NegativeOrderQuantity(self.order_quantity));
        }
        Ok(())
    }
}
