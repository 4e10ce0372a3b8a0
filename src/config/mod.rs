//! Configuration loading and management

use crate::core::error::{DashboardError, DashboardResult};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Location of the snapshot used by [`DashboardConfig::default_config`]
pub const DEFAULT_SNAPSHOT_PATH: &str = "./app/lib/users-local-db.json";

/// Artificial latency of the revenue query, in milliseconds
pub const DEFAULT_REVENUE_DELAY_MS: u64 = 3000;

/// Configuration of the dashboard data layer
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// JSON snapshot with `invoices`, `customers` and `revenue` arrays
    pub snapshot_path: PathBuf,

    /// Delay applied before answering the revenue query
    #[serde(default = "default_revenue_delay_ms")]
    pub revenue_delay_ms: u64,
}

fn default_revenue_delay_ms() -> u64 {
    DEFAULT_REVENUE_DELAY_MS
}

impl DashboardConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> DashboardResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| DashboardError::Config {
            message: format!("cannot read '{}': {}", path, e),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> DashboardResult<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    pub fn revenue_delay(&self) -> Duration {
        Duration::from_millis(self.revenue_delay_ms)
    }

    /// Create a default configuration pointing at the bundled snapshot location
    pub fn default_config() -> Self {
        Self {
            snapshot_path: PathBuf::from(DEFAULT_SNAPSHOT_PATH),
            revenue_delay_ms: DEFAULT_REVENUE_DELAY_MS,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::default_config()
    }
}
