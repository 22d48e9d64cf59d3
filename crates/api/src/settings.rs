//! Service Configuration

use config::{Config, ConfigError, Environment, File};
use monitor::MonitorConfig;
use serde::{Deserialize, Serialize};

/// Default configuration file, looked up without extension
pub const DEFAULT_CONFIG_PATH: &str = "config/vitals-monitor";

/// Top-level service configuration
///
/// Layered from an optional config file and `VITALS__*` environment
/// variables, e.g. `VITALS__MONITOR__FILTER__Z_THRESHOLD=2.0`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Listen address of the HTTP server
    pub bind_addr: String,
    /// Monitoring cycle period; the alert queue is drained once per cycle
    pub cycle_interval_ms: u64,
    /// Maximum tracing level
    pub log_level: String,
    /// Emit logs as JSON lines
    pub log_json: bool,
    /// Orchestrator settings
    pub monitor: MonitorConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: "0.0.0.0:8080".to_string(),
            cycle_interval_ms: 1_000,
            log_level: "info".to_string(),
            log_json: false,
            monitor: MonitorConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from `path` (optional) and the environment
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("VITALS").separator("__"))
            .build()?
            .try_deserialize()
    }
}
