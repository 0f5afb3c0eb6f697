#![allow(dead_code)]

use chrono::{DateTime, FixedOffset};

/// 解析 RFC 3339 時間字串（測試用）
pub fn parse(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap_or_else(|e| panic!("無效的測試時間戳 {}: {}", s, e))
}

/// 在測試中輸出 trace 級別日誌，重複初始化時忽略
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("jakarta_timeutils=trace")
        .with_test_writer()
        .try_init();
}
