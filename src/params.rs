use std::path::Path;

use serde::Deserialize;

use crate::{Levels, MetricName};

/// Per metric upper levels. A metric without levels is always OK, but is still recorded.
///
/// Written as TOML, keys are the metric names and values `[warning, critical]`:
///
/// ```toml
/// currentTx = [10000000, 20000000]
/// totalRx = [500000000000, 800000000000]
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Params {
    #[serde(rename = "currentTx", default)]
    current_tx: Option<Levels<u64>>,
    #[serde(rename = "currentRx", default)]
    current_rx: Option<Levels<u64>>,
    #[serde(rename = "totalTx", default)]
    total_tx: Option<Levels<u64>>,
    #[serde(rename = "totalRx", default)]
    total_rx: Option<Levels<u64>>,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Toml(#[from] toml::de::Error),
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reads levels from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn levels(&self, metric: MetricName) -> Option<&Levels<u64>> {
        self.slot(metric).as_ref()
    }

    pub fn set_levels(&mut self, metric: MetricName, levels: Option<Levels<u64>>) {
        *self.slot_mut(metric) = levels;
    }

    pub fn with_levels(mut self, metric: MetricName, levels: Levels<u64>) -> Self {
        self.set_levels(metric, Some(levels));
        self
    }

    /// Overwrites levels with every level configured in `other`.
    pub fn merge(&mut self, other: &Params) {
        for metric in MetricName::ALL {
            if let Some(levels) = other.levels(metric) {
                self.set_levels(metric, Some(*levels));
            }
        }
    }

    fn slot(&self, metric: MetricName) -> &Option<Levels<u64>> {
        match metric {
            MetricName::CurrentTx => &self.current_tx,
            MetricName::CurrentRx => &self.current_rx,
            MetricName::TotalTx => &self.total_tx,
            MetricName::TotalRx => &self.total_rx,
        }
    }

    fn slot_mut(&mut self, metric: MetricName) -> &mut Option<Levels<u64>> {
        match metric {
            MetricName::CurrentTx => &mut self.current_tx,
            MetricName::CurrentRx => &mut self.current_rx,
            MetricName::TotalTx => &mut self.total_tx,
            MetricName::TotalRx => &mut self.total_rx,
        }
    }
}
