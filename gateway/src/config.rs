//! Gateway configuration
//!
//! Built once in `main` and handed to [`crate::AppState`]; the endpoint list
//! is never re-read while the process runs.

use fleet_common::config::{get_env, get_env_parse};
use fleet_common::ServerConfig;
use std::time::Duration;

/// Comma-separated list of worker base URLs
pub const ENDPOINTS_ENV: &str = "GPU_APP_URLS";

/// Default listen port
pub const DEFAULT_PORT: u16 = 5000;

/// Default per-call timeout for downstream `/status` requests (seconds)
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 5;

/// Gateway settings
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Listen settings (`GATEWAY_HOST` / `GATEWAY_PORT`)
    pub server: ServerConfig,
    /// Worker base URLs, in query and output order
    pub endpoints: Vec<String>,
    /// Timeout applied to each downstream call
    pub request_timeout: Duration,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let endpoints = get_env(ENDPOINTS_ENV)
            .map(|raw| parse_endpoint_list(&raw))
            .unwrap_or_default();
        let timeout_secs =
            get_env_parse("GATEWAY_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS);

        Self {
            server: ServerConfig::from_env("GATEWAY_HOST", "GATEWAY_PORT", DEFAULT_PORT),
            endpoints,
            request_timeout: Duration::from_secs(timeout_secs),
        }
    }
}

/// Split a comma-separated URL list, trimming entries and dropping empty ones.
///
/// No scheme or path validation is performed.
pub fn parse_endpoint_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(str::to_string)
        .collect()
}
