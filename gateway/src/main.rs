//! GPU Fleet Gateway Entry Point

use fleet_common::{logging, server, CommonError, ShutdownController};
use fleet_gateway::{api, config::GatewayConfig, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), CommonError> {
    logging::init("fleet_gateway=info,fleet_common=info,tower_http=info")?;

    info!("GPU Fleet Gateway v{}", env!("CARGO_PKG_VERSION"));

    let config = GatewayConfig::from_env();
    if config.endpoints.is_empty() {
        info!("No worker endpoints configured; /aggregate will return an empty list");
    } else {
        info!(
            count = config.endpoints.len(),
            endpoints = ?config.endpoints,
            timeout_secs = config.request_timeout.as_secs(),
            "Worker endpoints configured"
        );
    }

    let state = AppState::from_config(&config)
        .map_err(|e| CommonError::Config(format!("failed to build HTTP client: {}", e)))?;
    let app = api::create_router(state);

    server::run(app, &config.server.bind_addr(), ShutdownController::default()).await
}
