use serde::{Deserialize, Serialize};

use crate::config::validation::{ValidationError, ValidationUtils, Validator};

/// 預設顯示時區
pub const DEFAULT_LOCATION: &str = "Asia/Jakarta";

/// RFC 3339 格式，未指定格式時使用
pub const RFC3339_PATTERN: &str = "%Y-%m-%dT%H:%M:%S%:z";

/// 日期顯示格式，例如 `28 Mar 2023 00:00 WIB`
pub const DATE_PATTERN: &str = "%d %b %Y %H:%M %Z";

/// MySQL DATETIME 格式
pub const MYSQL_PATTERN: &str = "%Y-%m-%d %H:%M:%S";

/// 時間工具配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeUtilsConfig {
    pub format: FormatConfig,
}

impl Validator for TimeUtilsConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        self.format.validate()
    }
}

/// 格式化配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// 未指定時區時使用的 IANA 時區
    pub location: String,
    /// 未指定格式時使用的 strftime 格式
    pub pattern: String,
    /// `format_date` 使用的格式
    pub date_pattern: String,
    /// `format_mysql_date_*` 使用的格式
    pub mysql_pattern: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            location: DEFAULT_LOCATION.to_string(),
            pattern: RFC3339_PATTERN.to_string(),
            date_pattern: DATE_PATTERN.to_string(),
            mysql_pattern: MYSQL_PATTERN.to_string(),
        }
    }
}

impl Validator for FormatConfig {
    fn validate(&self) -> Result<(), ValidationError> {
        ValidationUtils::not_empty(&self.location, "format.location")?;
        ValidationUtils::timezone(&self.location, "format.location")?;
        ValidationUtils::not_empty(&self.pattern, "format.pattern")?;
        ValidationUtils::not_empty(&self.date_pattern, "format.date_pattern")?;
        ValidationUtils::not_empty(&self.mysql_pattern, "format.mysql_pattern")?;

        Ok(())
    }
}
