//! GPU Fleet Worker Entry Point

use fleet_common::{logging, server, CommonError, ShutdownController};
use fleet_worker::{api, config::WorkerConfig, AppState};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), CommonError> {
    logging::init("fleet_worker=info,fleet_common=info,tower_http=info")?;

    info!("GPU Fleet Worker v{}", env!("CARGO_PKG_VERSION"));

    let config = WorkerConfig::from_env();
    let probe = config.build_probe();
    info!(gpu_available = probe.is_available(), "Accelerator detection ready");

    let app = api::create_router(AppState { probe });

    server::run(app, &config.server.bind_addr(), ShutdownController::default()).await
}
