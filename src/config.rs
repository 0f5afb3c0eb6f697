/// 配置管理模組
///
/// 負責載入與驗證格式化相關的預設值。
/// UTC+7 偏移是編譯期常數，不屬於可配置項目。
pub mod loader;
pub mod types;
pub mod validation;

// 重新導出常用組件
pub use loader::ConfigLoader;
pub use types::*;
pub use validation::{validate_config, ValidationError, ValidationUtils, Validator};
