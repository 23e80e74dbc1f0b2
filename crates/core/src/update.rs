//! # Update Module
//!
//! Partial updates cho Customer và Loan.
//!
//! Mỗi field của một update là `Option`: `None` nghĩa là không cung cấp,
//! `Some(v)` nghĩa là có cung cấp. Giá trị có cung cấp nhưng "rỗng"
//! (chuỗi rỗng, số 0) được xử lý theo [`BlankPolicy`].

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cách xử lý giá trị rỗng (chuỗi rỗng, số 0) trong một update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlankPolicy {
    /// Bỏ qua giá trị rỗng, giữ nguyên field hiện tại
    #[default]
    Skip,
    /// Ghi đè field bằng giá trị rỗng
    Apply,
}

impl BlankPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            BlankPolicy::Skip => "skip",
            BlankPolicy::Apply => "apply",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "skip" => Some(BlankPolicy::Skip),
            "apply" => Some(BlankPolicy::Apply),
            _ => None,
        }
    }

    /// Giá trị có được phép ghi đè field không
    pub fn accepts<T: Blank + ?Sized>(&self, value: &T) -> bool {
        match self {
            BlankPolicy::Skip => !value.is_blank(),
            BlankPolicy::Apply => true,
        }
    }

    /// Lọc một field của update: trả về giá trị cần ghi, hoặc `None` nếu giữ nguyên
    pub fn admit<T: Blank>(&self, value: Option<T>) -> Option<T> {
        value.filter(|v| self.accepts(v))
    }
}

impl fmt::Display for BlankPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Giá trị "rỗng" của một kiểu: chuỗi rỗng, số 0.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for str {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for Decimal {
    fn is_blank(&self) -> bool {
        self.is_zero()
    }
}

impl Blank for i32 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}
