//! axumサーバー起動・シャットダウンハンドリング

use crate::error::CommonResult;
use axum::Router;
use std::sync::{
    atomic::{AtomicBool, Ordering},
    Arc,
};
use tokio::net::TcpListener;
use tokio::sync::Notify;
use tracing::info;

/// Cooperative shutdown signal used for graceful exit.
///
/// OS signals are handled by [`shutdown_signal`]; this controller lets tests
/// (and anything else holding a clone) stop a running server.
#[derive(Clone, Debug, Default)]
pub struct ShutdownController {
    inner: Arc<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    requested: AtomicBool,
    notify: Notify,
}

impl ShutdownController {
    /// Returns true if shutdown has been requested.
    pub fn is_shutdown_requested(&self) -> bool {
        self.inner.requested.load(Ordering::Relaxed)
    }

    /// Request shutdown and wake all waiters.
    pub fn request_shutdown(&self) {
        self.inner.requested.store(true, Ordering::SeqCst);
        self.inner.notify.notify_waiters();
    }

    /// Wait until shutdown is requested.
    pub async fn wait(&self) {
        let notified = self.inner.notify.notified();
        if self.is_shutdown_requested() {
            return;
        }
        notified.await;
    }
}

/// axumサーバーを起動し、シャットダウンシグナルを待機する
pub async fn run(
    router: Router,
    bind_addr: &str,
    shutdown: ShutdownController,
) -> CommonResult<()> {
    let listener = TcpListener::bind(bind_addr).await?;
    serve(listener, router, shutdown).await
}

/// バインド済みリスナーでサーバーを起動する
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: ShutdownController,
) -> CommonResult<()> {
    info!(addr = %listener.local_addr()?, "Server listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal(shutdown))
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

/// シャットダウンシグナルを待機
pub async fn shutdown_signal(shutdown: ShutdownController) {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "Failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
        _ = shutdown.wait() => {
            info!("Shutdown requested, shutting down...");
        }
    }
}
