//! ステータスAPI

use crate::accelerator::StatusPayload;
use crate::AppState;
use axum::{extract::State, Json};

/// GET /status
///
/// リクエストごとにGPU検出を行う。
pub async fn get_status(State(state): State<AppState>) -> Json<StatusPayload> {
    Json(StatusPayload::detect(state.probe.as_ref()))
}
