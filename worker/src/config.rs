//! Worker configuration

use crate::accelerator::{AcceleratorProbe, FixedProbe, NvmlProbe};
use fleet_common::config::get_env;
use fleet_common::ServerConfig;
use std::sync::Arc;

/// Default listen port
pub const DEFAULT_PORT: u16 = 8000;

/// Overrides detection with `gpu` or `cpu`
pub const FORCE_DEVICE_ENV: &str = "WORKER_FORCE_DEVICE";

/// Worker settings
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    /// Listen settings (`WORKER_HOST` / `WORKER_PORT`)
    pub server: ServerConfig,
    /// Fixed detection answer, if forced
    pub forced_device: Option<bool>,
}

impl WorkerConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env("WORKER_HOST", "WORKER_PORT", DEFAULT_PORT),
            forced_device: get_env(FORCE_DEVICE_ENV).and_then(|raw| parse_forced_device(&raw)),
        }
    }

    /// Detection backend for this configuration
    pub fn build_probe(&self) -> Arc<dyn AcceleratorProbe> {
        match self.forced_device {
            Some(gpu) => {
                tracing::info!(gpu, "Accelerator detection overridden");
                Arc::new(FixedProbe(gpu))
            }
            None => Arc::new(NvmlProbe::new()),
        }
    }
}

fn parse_forced_device(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "gpu" => Some(true),
        "cpu" => Some(false),
        "" => None,
        other => {
            tracing::warn!(
                variable = FORCE_DEVICE_ENV,
                value = other,
                "Unknown device override, expected 'gpu' or 'cpu'"
            );
            None
        }
    }
}
