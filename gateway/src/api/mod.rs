//! REST APIハンドラー
//!
//! `GET /aggregate` のみを公開する

pub mod aggregate;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/aggregate", get(aggregate::aggregate_statuses))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
