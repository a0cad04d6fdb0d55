// src/lib.rs

//! Single-item periodic-review inventory simulation with descriptive,
//! diagnostic, predictive and prescriptive analytics over the daily series.

pub mod analytics;
pub mod error;
pub mod io;
pub mod logging;
pub mod model;
pub mod simulation;
pub mod strategy;

pub use analytics::{analyze, AnalyticsConfig, AnalyticsReport};
pub use error::{AnalyticsError, ConfigError, ReportError};
pub use simulation::config::SimulationParameters;
pub use simulation::engine::{DayRecord, Delivery, InventorySimulation};
