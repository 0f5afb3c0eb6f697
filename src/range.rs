// range.rs - 區間包含判斷
//
// 判斷 `now` 是否落在 `[t + min, t + max]` 之內。
// 日粒度比較的是分桶後的日序號，同一天內的時間點一視同仁；
// 小時與分鐘粒度比較的是實際經過的秒數換算成的小數，對秒級差異敏感。

pub mod bound;

use chrono::{DateTime, TimeZone};
use tracing::trace;

use crate::bucket::{day_index, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

pub use bound::{evaluate_bound, Bound, Diff, Side};

/// 起訖時間區間，兩端各自分桶
#[derive(Debug, Clone, PartialEq)]
pub struct TimeRange<Tz: TimeZone> {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

impl<Tz: TimeZone> TimeRange<Tz> {
    pub fn new(start: DateTime<Tz>, end: DateTime<Tz>) -> Self {
        Self { start, end }
    }
}

fn within<D: Diff + std::fmt::Debug>(diff: D, min: &Bound, max: &Bound) -> bool {
    let result = min.admits(diff, Side::Lower) && max.admits(diff, Side::Upper);
    trace!(?diff, ?min, ?max, result, "區間判斷");
    result
}

/// `now` 與 `t` 相差的 Jakarta 日數是否落在 `[min, max]`
pub fn is_in_day_range<Tz1: TimeZone, Tz2: TimeZone>(
    t: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
    min: Bound,
    max: Bound,
) -> bool {
    within(day_index(now) - day_index(t), &min, &max)
}

/// `now` 與 `t` 相差的小時數（含小數）是否落在 `[min, max]`
pub fn is_in_hour_range<Tz1: TimeZone, Tz2: TimeZone>(
    t: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
    min: Bound,
    max: Bound,
) -> bool {
    within(elapsed_in(t, now, SECONDS_PER_HOUR), &min, &max)
}

/// `now` 與 `t` 相差的分鐘數（含小數）是否落在 `[min, max]`
pub fn is_in_minute_range<Tz1: TimeZone, Tz2: TimeZone>(
    t: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
    min: Bound,
    max: Bound,
) -> bool {
    within(elapsed_in(t, now, SECONDS_PER_MINUTE), &min, &max)
}

fn elapsed_in<Tz1: TimeZone, Tz2: TimeZone>(
    t: &DateTime<Tz1>,
    now: &DateTime<Tz2>,
    unit_secs: i64,
) -> f64 {
    (now.timestamp() - t.timestamp()) as f64 / unit_secs as f64
}

/// `now` 的日序號是否落在 `[start + min, end + max]`
///
/// 與 [`is_in_day_range`] 不同，偏移量先加進起訖兩端的日序號，再做比較。
pub fn is_in_day_range_of<Tz1, Tz2>(
    range: &TimeRange<Tz1>,
    now: &DateTime<Tz2>,
    min: Bound,
    max: Bound,
) -> bool
where
    Tz1: TimeZone,
    Tz2: TimeZone,
{
    let start = day_index(&range.start);
    let end = day_index(&range.end);
    let now = day_index(now);

    let result =
        min.admits_against(now, start, Side::Lower) && max.admits_against(now, end, Side::Upper);
    trace!(start, end, now, ?min, ?max, result, "起訖區間判斷");
    result
}
