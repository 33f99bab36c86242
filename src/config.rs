//! Runtime configuration for a [`DragDropManager`](crate::manager::DragDropManager).
//!
//! Every field has a default, so an empty JSON object (or no file at all) is a
//! valid configuration.

use crate::perf::DEFAULT_SLOW_OPERATION_MS;
use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default tracing directive when `DRAGNET_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DragDropConfig {
    /// Tracing filter directive used by [`init_logging`](crate::logging::init_logging)
    pub log_filter: String,
    /// Whether registry mutations (register, unregister, pin, unpin) notify
    /// change listeners
    pub notify_registry_changes: bool,
    /// Actions slower than this are logged as slow
    pub slow_operation_ms: f64,
}

impl Default for DragDropConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            notify_registry_changes: true,
            slow_operation_ms: DEFAULT_SLOW_OPERATION_MS,
        }
    }
}

impl DragDropConfig {
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: Self = serde_json::from_str(json).context("Invalid drag-and-drop config")?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json_str(&contents)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    fn validate(&self) -> anyhow::Result<()> {
        if !self.slow_operation_ms.is_finite() || self.slow_operation_ms < 0.0 {
            anyhow::bail!(
                "slow_operation_ms must be a non-negative number, got {}",
                self.slow_operation_ms
            );
        }
        Ok(())
    }
}
