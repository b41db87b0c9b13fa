//! 获取并保存汇率过程中的错误类型

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum QuoteError {
    /// 网络错误或超时
    #[error("quotation API request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("quotation API returned status {0}")]
    UpstreamStatus(reqwest::StatusCode),

    #[error("invalid quotation API response: {0}")]
    Decode(#[from] serde_json::Error),

    /// 上游返回结构正确但所有字段为空
    #[error("Empty response from quotation API")]
    EmptyQuote,

    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("database insert exceeded {0:?} deadline")]
    StoreTimeout(Duration),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
