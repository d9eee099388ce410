//! REST APIハンドラー

pub mod status;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/status", get(status::get_status))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
