//! Contract Test: GET /status
//!
//! GPUの有無に応じて固定文字列を200で返すこと

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{Request, StatusCode},
    Router,
};
use fleet_worker::{
    accelerator::{AcceleratorProbe, FixedProbe},
    api, AppState,
};
use serde_json::{json, Value};
use tower::ServiceExt;

fn build_app(probe: Arc<dyn AcceleratorProbe>) -> Router {
    api::create_router(AppState { probe })
}

async fn get_status(app: Router) -> (StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/status")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

/// GPUがある場合
#[tokio::test]
async fn test_status_gpu_enabled() {
    let (status, body) = get_status(build_app(Arc::new(FixedProbe(true)))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "GPU enabled" }));
}

/// GPUがない場合
#[tokio::test]
async fn test_status_cpu_enabled() {
    let (status, body) = get_status(build_app(Arc::new(FixedProbe(false)))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "CPU enabled" }));
}

/// 検出はリクエストごとに実行される
#[tokio::test]
async fn test_status_detects_on_every_request() {
    struct CountingProbe(AtomicUsize);

    impl AcceleratorProbe for CountingProbe {
        fn is_available(&self) -> bool {
            // Alternate CPU, GPU, CPU, ...
            self.0.fetch_add(1, Ordering::SeqCst) % 2 == 1
        }
    }

    let probe = Arc::new(CountingProbe(AtomicUsize::new(0)));
    let app = build_app(probe.clone());

    let (_, first) = get_status(app.clone()).await;
    let (_, second) = get_status(app).await;

    assert_eq!(first["status"], "CPU enabled");
    assert_eq!(second["status"], "GPU enabled");
    assert_eq!(probe.0.load(Ordering::SeqCst), 2);
}

/// 未定義パスは404
#[tokio::test]
async fn test_unknown_path_not_found() {
    let response = build_app(Arc::new(FixedProbe(false)))
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
