// src/io/config.rs

use crate::analytics::AnalyticsConfig;
use crate::error::ReportError;
use crate::simulation::config::SimulationParameters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

/// Everything a run needs, as read from a JSON file.
///
/// Missing sections and fields fall back to their defaults, so
/// `{"parameters": {"lead_time_days": 3}}` is a complete file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub parameters: SimulationParameters,
    pub analytics: AnalyticsConfig,
}

impl RunConfig {
    pub fn from_json_str(json: &str) -> Result<Self, ReportError> {
        let config: RunConfig = serde_json::from_str(json)?;
        config.parameters.validate()?;
        config.analytics.validate()?;
        Ok(config)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ReportError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!(path = %path.display(), "Loaded run configuration");
        Ok(config)
    }
}
