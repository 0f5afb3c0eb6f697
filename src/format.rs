// format.rs - 時間格式化
//
// 以 IANA 時區名稱與 strftime 格式輸出時間字串。
// 時區資料只用於顯示，分桶與區間判斷一律使用固定 UTC+7 偏移。

use chrono::{DateTime, FixedOffset, TimeZone};
use chrono_tz::Tz;
use std::fmt::Write;
use tracing::{debug, warn};

use crate::config::FormatConfig;
use crate::error::{TimeUtilsError, TimeUtilsResult};

/// 格式化參數
///
/// `location` 或 `format` 為 `None`（或空字串）時使用配置中的預設值。
#[derive(Debug, Clone)]
pub struct FormatParam<'a, Z: TimeZone> {
    pub t: &'a DateTime<Z>,
    pub location: Option<&'a str>,
    pub format: Option<&'a str>,
}

impl<'a, Z: TimeZone> FormatParam<'a, Z> {
    pub fn new(t: &'a DateTime<Z>) -> Self {
        Self {
            t,
            location: None,
            format: None,
        }
    }

    pub fn location(mut self, location: &'a str) -> Self {
        self.location = Some(location);
        self
    }

    pub fn format(mut self, format: &'a str) -> Self {
        self.format = Some(format);
        self
    }
}

/// 解析 IANA 時區名稱
pub fn load_location(name: &str) -> TimeUtilsResult<Tz> {
    name.parse::<Tz>().map_err(|_| {
        warn!("無法載入時區: {}", name);
        TimeUtilsError::InvalidTimezone(name.to_string())
    })
}

/// 解析 RFC 3339 時間字串，保留原始偏移
pub fn parse_rfc3339(s: &str) -> TimeUtilsResult<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(s).map_err(|e| {
        warn!("無法解析時間戳 {}: {}", s, e);
        TimeUtilsError::InvalidTimestamp(s.to_string())
    })
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// 依照配置中的預設值格式化
pub fn format_with<Z: TimeZone>(
    config: &FormatConfig,
    param: &FormatParam<'_, Z>,
) -> TimeUtilsResult<String> {
    let location = non_empty(param.location).unwrap_or_else(|| {
        debug!("未指定時區，使用預設值 {}", config.location);
        config.location.as_str()
    });
    let pattern = non_empty(param.format).unwrap_or(config.pattern.as_str());

    let tz = load_location(location)?;
    render(&param.t.with_timezone(&tz), pattern)
}

/// 使用預設配置格式化（Asia/Jakarta，RFC 3339）
pub fn format<Z: TimeZone>(param: &FormatParam<'_, Z>) -> TimeUtilsResult<String> {
    format_with(&FormatConfig::default(), param)
}

fn render(local: &DateTime<Tz>, pattern: &str) -> TimeUtilsResult<String> {
    let mut out = String::new();
    // 無效的格式說明符會在寫入時回報錯誤，而不是 panic
    write!(out, "{}", local.format(pattern))
        .map_err(|_| TimeUtilsError::InvalidPattern(pattern.to_string()))?;
    Ok(out)
}

/// 格式化為 `28 Mar 2023 00:00 WIB`
pub fn format_date<Z: TimeZone>(t: &DateTime<Z>) -> TimeUtilsResult<String> {
    let config = FormatConfig::default();
    format_with(
        &config,
        &FormatParam::new(t)
            .location(&config.location)
            .format(&config.date_pattern),
    )
}

/// 格式化為 Jakarta 時間的 MySQL DATETIME 字串
pub fn format_mysql_date_jakarta<Z: TimeZone>(t: &DateTime<Z>) -> TimeUtilsResult<String> {
    let config = FormatConfig::default();
    format_with(
        &config,
        &FormatParam::new(t)
            .location("Asia/Jakarta")
            .format(&config.mysql_pattern),
    )
}

/// 格式化為 UTC 時間的 MySQL DATETIME 字串
pub fn format_mysql_date_utc<Z: TimeZone>(t: &DateTime<Z>) -> TimeUtilsResult<String> {
    let config = FormatConfig::default();
    format_with(
        &config,
        &FormatParam::new(t).location("UTC").format(&config.mysql_pattern),
    )
}
