//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// Common layer error type
#[derive(Debug, Error)]
pub enum CommonError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Logging subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// Socket bind / serve failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Common layer result type
pub type CommonResult<T> = Result<T, CommonError>;
