use crate::errors::{TrafficError, TrafficResult};
use crate::global_variables::{
    LATENCY_CROWD_SOURCED_MS, LATENCY_MAP_SERVICE_MS, LATENCY_SENSOR_FEED_MS, SOURCE_TIMEOUT_MS,
    TOMORROW_WEEKEND_DAYS, WEEKEND_DAYS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

/// Runtime knobs for the agent. Every field falls back to the
/// `global_variables` value when missing from the JSON document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    pub map_service_latency_ms: u64,
    pub crowd_sourced_latency_ms: u64,
    pub sensor_feed_latency_ms: u64,
    pub source_timeout_ms: u64,
    pub weekend_days: Vec<u8>,
    pub tomorrow_weekend_days: Vec<u8>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            map_service_latency_ms: LATENCY_MAP_SERVICE_MS,
            crowd_sourced_latency_ms: LATENCY_CROWD_SOURCED_MS,
            sensor_feed_latency_ms: LATENCY_SENSOR_FEED_MS,
            source_timeout_ms: SOURCE_TIMEOUT_MS,
            weekend_days: WEEKEND_DAYS.to_vec(),
            tomorrow_weekend_days: TOMORROW_WEEKEND_DAYS.to_vec(),
        }
    }
}

impl AgentConfig {
    pub fn from_json_str(json: &str) -> TrafficResult<Self> {
        let config: AgentConfig =
            serde_json::from_str(json).map_err(|e| TrafficError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file<P: AsRef<Path>>(path: P) -> TrafficResult<Self> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)
            .map_err(|e| TrafficError::Config(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&contents)
    }

    fn validate(&self) -> TrafficResult<()> {
        if self.source_timeout_ms == 0 {
            return Err(TrafficError::Config(
                "source_timeout_ms must be greater than zero".to_string(),
            ));
        }
        let bad_day = self
            .weekend_days
            .iter()
            .chain(self.tomorrow_weekend_days.iter())
            .find(|&&day| day > 6);
        if let Some(day) = bad_day {
            return Err(TrafficError::Config(format!(
                "day index {} is outside 0..=6",
                day
            )));
        }
        Ok(())
    }

    pub fn source_timeout(&self) -> Duration {
        Duration::from_millis(self.source_timeout_ms)
    }

    pub fn is_weekend(&self, weekday: u8) -> bool {
        self.weekend_days.contains(&weekday)
    }

    pub fn is_tomorrow_weekend(&self, weekday: u8) -> bool {
        self.tomorrow_weekend_days.contains(&weekday)
    }

    /// Zero latency on every source; used by tests and benchmarks.
    pub fn without_latency() -> Self {
        Self {
            map_service_latency_ms: 0,
            crowd_sourced_latency_ms: 0,
            sensor_feed_latency_ms: 0,
            ..Self::default()
        }
    }
}
