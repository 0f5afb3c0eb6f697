// 模組定義
pub mod bucket;
pub mod calendar;
pub mod config;
pub mod error;
pub mod format;
pub mod range;

pub use bucket::{
    bucket_to_unix, day_diff, day_index, day_index_local, expiration_till_end_of_day, floor_day,
    hour_index, hour_index_local, plus_hours, utc_day_index, utc_hour_index, JAKARTA_OFFSET,
    JAKARTA_OFFSET_SECS,
};
pub use calendar::{combine_date_and_hour, month_range};
pub use error::{TimeUtilsError, TimeUtilsResult};
pub use format::{
    format, format_date, format_mysql_date_jakarta, format_mysql_date_utc, format_with,
    parse_rfc3339, FormatParam,
};
pub use range::{
    evaluate_bound, is_in_day_range, is_in_day_range_of, is_in_hour_range, is_in_minute_range,
    Bound, Side, TimeRange,
};
