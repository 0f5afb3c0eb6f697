// calendar.rs - 日曆輔助函數
//
// 月份範圍與「日期 + 牆上時鐘」組合，皆以 UTC+7 為準。

use chrono::{DateTime, Datelike, NaiveTime, TimeZone, Timelike};
use tracing::warn;

use crate::bucket::{unix_to_datetime, JAKARTA_OFFSET};
use crate::error::{TimeUtilsError, TimeUtilsResult};

/// 計算某個月份在 UTC+7 中的 Unix 秒範圍 `[gte, lte]`（兩端皆包含）
///
/// `gte` 為當月 1 日 00:00:00，`lte` 為下個月 1 日 00:00:00 的前一秒。
pub fn month_range(month: u32, year: i32) -> TimeUtilsResult<(i64, i64)> {
    if !(1..=12).contains(&month) {
        warn!("無效的月份: {}", month);
        return Err(TimeUtilsError::InvalidMonth(month));
    }

    let (next_year, next_month) = if month == 12 {
        let next_year = year.checked_add(1).ok_or_else(|| {
            TimeUtilsError::InvalidTimestamp(format!("{}-{:02}-01", year, month))
        })?;
        (next_year, 1)
    } else {
        (year, month + 1)
    };

    let gte = first_second_of_month(year, month)?;
    let next = first_second_of_month(next_year, next_month)?;

    Ok((gte, next - 1))
}

fn first_second_of_month(year: i32, month: u32) -> TimeUtilsResult<i64> {
    JAKARTA_OFFSET
        .with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .map(|dt| dt.timestamp())
        .ok_or_else(|| TimeUtilsError::InvalidTimestamp(format!("{:04}-{:02}-01", year, month)))
}

/// 解析 `HH:MM:SS` 牆上時鐘，回傳自 00:00:00 起算的秒數
pub fn parse_clock(clock: &str) -> TimeUtilsResult<i64> {
    let time = NaiveTime::parse_from_str(clock, "%H:%M:%S").map_err(|e| {
        warn!("無法解析時鐘字串 {}: {}", clock, e);
        TimeUtilsError::InvalidClock(clock.to_string())
    })?;
    Ok(i64::from(time.num_seconds_from_midnight()))
}

/// 在日期 `d` 的 Unix 秒上加上 `clock` 表示的時間
///
/// `d` 通常是 Jakarta 午夜，例如 `2023-03-28T00:00:00+07:00` 加上
/// `"17:00:00"` 得到 `2023-03-28T17:00:00+07:00`。
pub fn combine_date_and_hour<Tz: TimeZone>(
    d: &DateTime<Tz>,
    clock: &str,
) -> TimeUtilsResult<DateTime<Tz>> {
    let offset = parse_clock(clock)?;
    unix_to_datetime(d.timestamp() + offset, &d.timezone())
}

/// 取得時間點在 Jakarta 日曆中的 (年, 月)
pub fn jakarta_year_month<Tz: TimeZone>(t: &DateTime<Tz>) -> (i32, u32) {
    let local = t.with_timezone(&JAKARTA_OFFSET);
    (local.year(), local.month())
}
