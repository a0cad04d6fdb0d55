// src/strategy/implementations.rs

use crate::error::ConfigError;
use crate::simulation::config::SimulationParameters;
use crate::strategy::traits::{OrderContext, OrderPolicy};
use std::num::NonZeroU32;

/// Periodic review: order a fixed quantity every `period` days.
///
/// The review clock starts on day 1 but day 1 itself never orders, so orders
/// fall on days `T+1, 2T+1, 3T+1, ...`. Stock position is ignored.
#[derive(Debug, Clone)]
pub struct PeriodicReviewPolicy {
    period: NonZeroU32,
    quantity: f64,
}

impl PeriodicReviewPolicy {
    pub fn new(period: NonZeroU32, quantity: f64) -> Self {
        Self { period, quantity }
    }

    pub fn from_params(params: &SimulationParameters) -> Result<Self, ConfigError> {
        let period =
            NonZeroU32::new(params.order_period_days).ok_or(ConfigError::NonPositiveOrderPeriod)?;
        Ok(Self::new(period, params.order_quantity))
    }

    pub fn is_review_day(&self, day: u32) -> bool {
        day > 1 && (day - 1) % self.period.get() == 0
    }
}

impl OrderPolicy for PeriodicReviewPolicy {
    fn calculate_order(&mut self, day: u32, _context: &OrderContext) -> f64 {
        if self.is_review_day(day) {
            self.quantity
        } else {
            0.0
        }
    }
}
