// error.rs - 時間工具錯誤定義
//
// 只有輸入驗證類錯誤：月份、時區名稱、時鐘字串等。
// 這些錯誤都是確定性的，直接回傳給呼叫者，不做重試。

use thiserror::Error;

use crate::config::validation::ValidationError;

#[derive(Debug, Error)]
pub enum TimeUtilsError {
    #[error("無效的月份: {0}，必須介於 1 到 12 之間")]
    InvalidMonth(u32),

    #[error("無效的時區名稱: {0}")]
    InvalidTimezone(String),

    #[error("無效的時鐘字串: {0}，格式應為 HH:MM:SS")]
    InvalidClock(String),

    #[error("無效的格式字串: {0}")]
    InvalidPattern(String),

    #[error("無效的時間戳字串: {0}")]
    InvalidTimestamp(String),

    #[error("時間超出可表示範圍: {0}")]
    OutOfRange(i64),

    #[error("配置載入錯誤: {0}")]
    Config(#[from] config::ConfigError),

    #[error("配置驗證錯誤: {0}")]
    Validation(#[from] ValidationError),
}

pub type TimeUtilsResult<T> = Result<T, TimeUtilsError>;
