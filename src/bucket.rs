// bucket.rs - 時間分桶轉換
//
// 將絕對時間點（Unix 秒）映射到固定 UTC+7 日曆中的日序號或小時序號，
// 以及反向映射（序號 -> 時間點）。
// 所有分桶都使用向下取整除法，epoch 之前的負時間戳也能落在正確的桶中。

use chrono::{DateTime, FixedOffset, TimeZone};

use crate::error::{TimeUtilsError, TimeUtilsResult};

/// Asia/Jakarta 的固定偏移（UTC+7，無夏令時）
pub const JAKARTA_OFFSET_SECS: i64 = 7 * 3600;

/// Asia/Jakarta 的固定偏移，可直接作為 `TimeZone` 使用
pub const JAKARTA_OFFSET: FixedOffset = match FixedOffset::east_opt(JAKARTA_OFFSET_SECS as i32) {
    Some(offset) => offset,
    None => panic!("UTC+7 必須是有效的固定偏移"),
};

/// 一天的秒數
pub const SECONDS_PER_DAY: i64 = 86_400;

/// 一小時的秒數
pub const SECONDS_PER_HOUR: i64 = 3_600;

/// 一分鐘的秒數
pub const SECONDS_PER_MINUTE: i64 = 60;

#[inline]
fn floor_bucket(secs: i64, width: i64) -> i64 {
    secs.div_euclid(width)
}

//
// UTC 分桶（不做時區偏移）
//

/// 計算 UTC 日曆中的日序號
pub fn utc_day_index<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    floor_bucket(t.timestamp(), SECONDS_PER_DAY)
}

/// 計算 UTC 日曆中的小時序號
pub fn utc_hour_index<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    floor_bucket(t.timestamp(), SECONDS_PER_HOUR)
}

//
// Jakarta 分桶
//

/// 計算時間點在 UTC+7 日曆中的日序號
///
/// `floor((t + 7h) / 86400)`。本地午夜恰好落在新的一天，
/// 前一秒仍屬於前一天。
///
/// ```
/// use chrono::DateTime;
/// use jakarta_timeutils::bucket::day_index;
///
/// let t = DateTime::parse_from_rfc3339("2023-03-28T23:59:59+07:00").unwrap();
/// assert_eq!(day_index(&t), 19444);
/// ```
pub fn day_index<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    floor_bucket(t.timestamp() + JAKARTA_OFFSET_SECS, SECONDS_PER_DAY)
}

/// 計算時間點在 UTC+7 日曆中的小時序號
pub fn hour_index<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    floor_bucket(t.timestamp() + JAKARTA_OFFSET_SECS, SECONDS_PER_HOUR)
}

/// 將主機時間（通常是 `Utc::now()`）視為 Jakarta 牆上時鐘後取日序號
///
/// 先平移 7 小時，再以 UTC 日曆分桶。數值上與 [`day_index`] 相同，
/// 區間判斷中代表「Jakarta 的現在」。
pub fn day_index_local<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    floor_bucket(shift_to_jakarta_wall_clock(t.timestamp()), SECONDS_PER_DAY)
}

/// 將主機時間視為 Jakarta 牆上時鐘後取小時序號
pub fn hour_index_local<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    floor_bucket(shift_to_jakarta_wall_clock(t.timestamp()), SECONDS_PER_HOUR)
}

#[inline]
fn shift_to_jakarta_wall_clock(secs: i64) -> i64 {
    secs + JAKARTA_OFFSET_SECS
}

/// 計算兩個時間點之間相差的 Jakarta 日數（`t2 - t1`）
pub fn day_diff<Tz1: TimeZone, Tz2: TimeZone>(t1: &DateTime<Tz1>, t2: &DateTime<Tz2>) -> i64 {
    day_index(t2) - day_index(t1)
}

//
// 反向映射
//

/// 將日序號（加上日偏移）轉回該日 Jakarta 午夜的 Unix 秒
///
/// `offset_days` 可為負數，用於向前或向後對齊到日邊界。
/// 結果超出 `i64` 時回傳 `None`。
pub fn bucket_to_unix(day_index: i64, offset_days: i64) -> Option<i64> {
    day_index
        .checked_add(offset_days)?
        .checked_mul(SECONDS_PER_DAY)?
        .checked_sub(JAKARTA_OFFSET_SECS)
}

/// 將時間點向下對齊到 Jakarta 午夜，再平移 `d_range` 天
///
/// 這是取整操作，不是精確的反函數：非午夜的時間點會落到當天午夜。
/// 結果沿用輸入的時區。
pub fn floor_day<Tz: TimeZone>(t: &DateTime<Tz>, d_range: i64) -> TimeUtilsResult<DateTime<Tz>> {
    let secs =
        bucket_to_unix(day_index(t), d_range).ok_or(TimeUtilsError::OutOfRange(d_range))?;
    unix_to_datetime(secs, &t.timezone())
}

/// 距離當天 Jakarta 日結束還剩多少秒
///
/// 本地午夜回傳 86400，23:59:59 回傳 1。
pub fn expiration_till_end_of_day<Tz: TimeZone>(t: &DateTime<Tz>) -> i64 {
    (day_index_local(t) + 1) * SECONDS_PER_DAY - t.timestamp() - JAKARTA_OFFSET_SECS
}

/// 將時間點向下對齊到所在的整點，再加上 `n` 小時（`n` 可為負）
pub fn plus_hours<Tz: TimeZone>(t: &DateTime<Tz>, n: i64) -> TimeUtilsResult<DateTime<Tz>> {
    let secs = hour_index(t)
        .checked_add(n)
        .and_then(|hour| hour.checked_mul(SECONDS_PER_HOUR))
        .and_then(|secs| secs.checked_sub(JAKARTA_OFFSET_SECS))
        .ok_or(TimeUtilsError::OutOfRange(n))?;
    unix_to_datetime(secs, &t.timezone())
}

/// 將 Unix 秒轉換為指定時區的 DateTime
pub(crate) fn unix_to_datetime<Tz: TimeZone>(secs: i64, tz: &Tz) -> TimeUtilsResult<DateTime<Tz>> {
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.with_timezone(tz))
        .ok_or(TimeUtilsError::OutOfRange(secs))
}
