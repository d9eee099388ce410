//! 集約API
//!
//! 下流の失敗はエントリ単位で表現し、このハンドラー自体は常に200を返す。

use crate::aggregate::AggregateResponse;
use crate::AppState;
use axum::{extract::State, Json};

/// GET /aggregate
pub async fn aggregate_statuses(State(state): State<AppState>) -> Json<AggregateResponse> {
    Json(state.aggregator.aggregate().await)
}
