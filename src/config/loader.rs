use config::{Config, Environment, File};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::types::TimeUtilsConfig;
use crate::config::validation::Validator;
use crate::error::TimeUtilsResult;

/// 配置文件名
pub const CONFIG_FILENAME: &str = "timeutils.toml";

/// 環境變數前綴，例如 `TIMEUTILS__FORMAT__LOCATION`
pub const ENV_PREFIX: &str = "TIMEUTILS";

/// 配置加載器
///
/// 先讀取配置文件（可選），再由環境變數覆蓋。
pub struct ConfigLoader;

impl ConfigLoader {
    /// 配置目錄，優先使用 `CONFIG_DIR` 環境變數
    pub fn config_dir() -> PathBuf {
        PathBuf::from(env::var("CONFIG_DIR").unwrap_or_else(|_| "config".into()))
    }

    /// 從指定目錄載入並驗證配置
    pub fn load_from(dir: &Path) -> TimeUtilsResult<TimeUtilsConfig> {
        let config_path = dir.join(CONFIG_FILENAME);
        debug!("載入時間工具配置: {}", config_path.display());

        let source = Config::builder()
            .add_source(File::from(config_path).required(false))
            // 環境變數優先級高於文件配置
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: TimeUtilsConfig = source.try_deserialize()?;
        config.validate()?;
        debug!("配置驗證通過: {:?}", config);

        Ok(config)
    }

    /// 從預設目錄載入配置
    pub fn load_current() -> TimeUtilsResult<TimeUtilsConfig> {
        Self::load_from(&Self::config_dir())
    }
}
