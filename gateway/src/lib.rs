//! GPU Fleet Gateway
//!
//! 設定された worker 群の `/status` を順番に問い合わせ、結果を集約するサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// worker ステータスの取得と集約
pub mod aggregate;

/// 設定管理（環境変数読み込み）
pub mod config;

use std::sync::Arc;

/// アプリケーション状態
#[derive(Clone)]
pub struct AppState {
    /// 起動時に構築した集約クライアント
    pub aggregator: Arc<aggregate::StatusAggregator>,
}

impl AppState {
    /// 設定から状態を構築する
    pub fn from_config(config: &config::GatewayConfig) -> Result<Self, aggregate::FetchError> {
        let aggregator =
            aggregate::StatusAggregator::new(config.endpoints.clone(), config.request_timeout)?;
        Ok(Self {
            aggregator: Arc::new(aggregator),
        })
    }
}
