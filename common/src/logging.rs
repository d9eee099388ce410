//! ログ初期化
//!
//! `RUST_LOG` > `LOG_LEVEL` > 呼び出し側のデフォルト の順でフィルタを決定する。

use crate::config::get_env;
use crate::error::{CommonError, CommonResult};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Resolve the filter directive without installing anything.
fn resolve_filter(default_directive: &str) -> EnvFilter {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return filter;
    }
    get_env("LOG_LEVEL")
        .and_then(|level| EnvFilter::try_new(level).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive))
}

/// Install the global tracing subscriber.
///
/// Returns [`CommonError::Logging`] if a subscriber has already been set.
pub fn init(default_directive: &str) -> CommonResult<()> {
    tracing_subscriber::registry()
        .with(resolve_filter(default_directive))
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .try_init()
        .map_err(|e| CommonError::Logging(e.to_string()))
}
