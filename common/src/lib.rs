//! GPU Fleet Common
//!
//! gateway / worker 共通の設定・ログ・サーバー起動処理

#![warn(missing_docs)]

/// 環境変数ベースの設定ヘルパー
pub mod config;

/// エラー型定義
pub mod error;

/// ログ初期化
pub mod logging;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

pub use config::ServerConfig;
pub use error::{CommonError, CommonResult};
pub use server::ShutdownController;
