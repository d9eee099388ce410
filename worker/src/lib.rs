//! GPU Fleet Worker
//!
//! ローカルのGPU利用可否を報告するサーバー

#![warn(missing_docs)]

/// GPU検出
pub mod accelerator;

/// REST APIハンドラー
pub mod api;

/// 設定管理（環境変数読み込み）
pub mod config;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// GPU検出器
    pub probe: Arc<dyn accelerator::AcceleratorProbe>,
}
