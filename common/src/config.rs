//! Configuration management via environment variables
//!
//! Both services read their settings once at startup. Nothing here is
//! consulted again after the config structs have been built.

use std::str::FromStr;

/// Default bind host for both services (all interfaces)
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Get an environment variable
///
/// Returns `None` if the variable is unset or is not valid unicode.
///
/// # Example
/// ```
/// use fleet_common::config::get_env;
///
/// let urls = get_env("GPU_APP_URLS").unwrap_or_default();
/// ```
pub fn get_env(name: &str) -> Option<String> {
    std::env::var(name).ok()
}

/// Get an environment variable with a default value
pub fn get_env_or(name: &str, default: &str) -> String {
    get_env(name).unwrap_or_else(|| default.to_string())
}

/// Get an environment variable, parsing to a specific type
///
/// Falls back to `default` when the variable is unset. An unparsable value
/// also falls back, with a warning naming the variable.
pub fn get_env_parse<T: FromStr>(name: &str, default: T) -> T {
    match get_env(name) {
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!(
                    variable = name,
                    value = %raw,
                    "Ignoring unparsable environment variable, using default"
                );
                default
            }
        },
        None => default,
    }
}

/// HTTP listen settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Bind address (default: "0.0.0.0")
    pub host: String,
    /// Listen port
    pub port: u16,
}

impl ServerConfig {
    /// Build from `host_var` / `port_var`, defaulting to all interfaces and `default_port`.
    pub fn from_env(host_var: &str, port_var: &str, default_port: u16) -> Self {
        Self {
            host: get_env_or(host_var, DEFAULT_HOST),
            port: get_env_parse(port_var, default_port),
        }
    }

    /// `host:port` string for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
