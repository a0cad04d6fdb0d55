// src/simulation/engine.rs

use crate::error::ConfigError;
use crate::model::ledger::StockLedger;
use crate::model::queues::{PendingOrder, PendingOrderQueue};
use crate::simulation::config::SimulationParameters;
use crate::strategy::implementations::PeriodicReviewPolicy;
use crate::strategy::traits::{OrderContext, OrderPolicy};
use serde::Serialize;
use tracing::{debug, info};

/// One simulated day. Serialize so the series can be written to CSV.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRecord {
    pub day: u32,
    pub demand: f64,
    pub ordered_qty: f64,
    pub received_qty: f64,
    pub stock_after: f64,
    pub sales: f64,
    pub shortage: bool,
}

/// How placed orders reach the shelf.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Received the day they are placed.
    Immediate,
    /// Received `lead_time_days` after the day they are placed.
    Deferred { lead_time_days: u32 },
}

/// Deterministic single-item replenishment simulation.
///
/// Holds validated parameters only; every run starts from fresh state, so
/// one instance can produce any number of independent runs.
#[derive(Debug, Clone)]
pub struct InventorySimulation {
    params: SimulationParameters,
    policy: PeriodicReviewPolicy,
}

impl InventorySimulation {
    pub fn new(params: SimulationParameters) -> Result<Self, ConfigError> {
        params.validate()?;
        let policy = PeriodicReviewPolicy::from_params(&params)?;
        Ok(Self { params, policy })
    }

    pub fn params(&self) -> &SimulationParameters {
        &self.params
    }

    pub fn daily_demand(&self) -> f64 {
        self.params.daily_demand()
    }

    /// Orders arrive the day they are placed.
    pub fn run_basic(&self) -> Vec<DayRecord> {
        self.run(Delivery::Immediate)
    }

    /// Orders arrive `lead_time_days` after placement. With a zero lead time
    /// this reproduces `run_basic` exactly.
    pub fn run_with_lead_time(&self) -> Vec<DayRecord> {
        self.run(Delivery::Deferred {
            lead_time_days: self.params.lead_time_days,
        })
    }

    pub fn run(&self, delivery: Delivery) -> Vec<DayRecord> {
        self.run_with_policy(self.policy.clone(), delivery)
    }

    /// Run the horizon with a caller-supplied ordering policy.
    pub fn run_with_policy<P: OrderPolicy>(&self, policy: P, delivery: Delivery) -> Vec<DayRecord> {
        info!(
            horizon_days = self.params.horizon_days,
            daily_demand = self.daily_demand(),
            ?delivery,
            "Starting inventory run"
        );

        let mut run = ReplenishmentRun::new(&self.params, policy, delivery);
        for day in 1..=self.params.horizon_days {
            run.step(day);
        }

        let shortage_days = run.history.iter().filter(|r| r.shortage).count();
        info!(
            shortage_days,
            final_stock = run.ledger.on_hand,
            undelivered = run.pending.in_transit(),
            "Inventory run complete"
        );
        run.history
    }
}

/// Mutable state owned by a single run.
struct ReplenishmentRun<P> {
    ledger: StockLedger,
    pending: PendingOrderQueue,
    policy: P,
    delivery: Delivery,
    daily_demand: f64,
    history: Vec<DayRecord>,
}

impl<P: OrderPolicy> ReplenishmentRun<P> {
    fn new(params: &SimulationParameters, policy: P, delivery: Delivery) -> Self {
        Self {
            ledger: StockLedger::new(params.initial_stock),
            pending: PendingOrderQueue::new(),
            policy,
            delivery,
            daily_demand: params.daily_demand(),
            history: Vec::with_capacity(params.horizon_days as usize),
        }
    }

    fn step(&mut self, day: u32) {
        // 1. Ordering decision
        let context = OrderContext {
            on_hand: self.ledger.on_hand,
            in_transit: self.pending.in_transit(),
        };
        let ordered = self.policy.calculate_order(day, &context);
        if ordered > 0.0 {
            debug!(day, quantity = ordered, "Order placed");
        }

        // 2. Arrivals
        let received = match self.delivery {
            Delivery::Immediate => ordered,
            Delivery::Deferred { lead_time_days } => {
                if ordered > 0.0 {
                    self.pending.push(PendingOrder {
                        arrival_day: u64::from(day) + u64::from(lead_time_days),
                        quantity: ordered,
                    });
                }
                self.pending.pop_arrivals(day)
            }
        };
        if received > 0.0 {
            debug!(day, quantity = received, "Order received");
        }
        self.ledger.receive(received);

        // 3. Demand
        let sales = self.ledger.fulfill(self.daily_demand);

        self.history.push(DayRecord {
            day,
            demand: self.daily_demand,
            ordered_qty: ordered,
            received_qty: received,
            stock_after: self.ledger.on_hand,
            sales,
            shortage: self.ledger.is_short(),
        });
    }
}
