// range/bound.rs - 單側邊界定義與判斷規則

use serde::{Deserialize, Serialize};

/// 邊界所在的一側
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    /// 下界：`diff >= value`（包含）或 `diff > value`（不包含）
    Lower,
    /// 上界：`diff <= value`（包含）或 `diff < value`（不包含）
    Upper,
}

/// 區間判斷的單側邊界
///
/// `skip = true` 表示這一側不受約束，判斷永遠成立。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Bound {
    /// 偏移值，單位由所用的判斷函數決定（日、小時或分鐘）
    pub value: i64,
    /// 是否包含等號
    pub inclusive: bool,
    /// 是否略過此側檢查
    pub skip: bool,
}

impl Bound {
    /// 建立包含等號的邊界
    pub const fn inclusive(value: i64) -> Self {
        Self {
            value,
            inclusive: true,
            skip: false,
        }
    }

    /// 建立不包含等號的邊界
    pub const fn exclusive(value: i64) -> Self {
        Self {
            value,
            inclusive: false,
            skip: false,
        }
    }

    /// 建立略過檢查的邊界
    pub const fn skip() -> Self {
        Self {
            value: 0,
            inclusive: false,
            skip: true,
        }
    }

    /// 以 `diff` 對比邊界值 `value`
    pub fn admits<D: Diff>(&self, diff: D, side: Side) -> bool {
        if self.skip {
            return true;
        }
        compare(side, self.inclusive, diff, D::from_offset(self.value))
    }

    /// 以 `subject` 對比 `anchor + value`
    ///
    /// 偏移先加進錨點序號，再做包含/不包含的比較。
    /// 溢位時門檻飽和到 `i64::MAX` / `i64::MIN`，日序號不可能達到這兩個值。
    pub fn admits_against(&self, subject: i64, anchor: i64, side: Side) -> bool {
        if self.skip {
            return true;
        }
        compare(side, self.inclusive, subject, anchor.saturating_add(self.value))
    }
}

/// 可與邊界比較的差值類型
pub trait Diff: PartialOrd + Copy {
    /// 將邊界的整數偏移轉成同一種差值
    fn from_offset(value: i64) -> Self;
}

impl Diff for i64 {
    fn from_offset(value: i64) -> Self {
        value
    }
}

impl Diff for f64 {
    fn from_offset(value: i64) -> Self {
        value as f64
    }
}

fn compare<D: PartialOrd>(side: Side, inclusive: bool, lhs: D, rhs: D) -> bool {
    match (side, inclusive) {
        (Side::Lower, true) => lhs >= rhs,
        (Side::Lower, false) => lhs > rhs,
        (Side::Upper, true) => lhs <= rhs,
        (Side::Upper, false) => lhs < rhs,
    }
}

/// 對單側邊界做判斷
pub fn evaluate_bound<D: Diff>(diff: D, bound: &Bound, side: Side) -> bool {
    bound.admits(diff, side)
}
