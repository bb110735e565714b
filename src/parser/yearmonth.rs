//! Calendar month identifiers used as the time axis of every view.
//!
//! The upstream tables key months as `"2022-1"`, `"2022-12"`; the
//! zero-padded `"2022-01"` form is accepted too. Ordering is chronological,
//! which plain string ordering is not (`"2022-10" < "2022-2"`).

use crate::utils::error::ParseError;
use chrono::Month;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A year and month, ordered chronologically
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// Returns `None` unless `month` is in `1..=12`
    pub fn new(year: i32, month: u32) -> Option<Self> {
        (1..=12).contains(&month).then_some(Self { year, month })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// The following calendar month, `None` past the last representable year
    pub fn succ(&self) -> Option<Self> {
        if self.month == 12 {
            self.year.checked_add(1).map(|year| Self { year, month: 1 })
        } else {
            Some(Self {
                year: self.year,
                month: self.month + 1,
            })
        }
    }

    /// Number of months from `self` to `later`, negative when `later` is earlier
    pub fn months_until(&self, later: YearMonth) -> i64 {
        later.ordinal() - self.ordinal()
    }

    /// The month `months` away from `self`, `None` outside the representable range
    pub fn offset(&self, months: i64) -> Option<Self> {
        let ordinal = self.ordinal().checked_add(months)?;
        let year = i32::try_from(ordinal.div_euclid(12)).ok()?;
        let month = u32::try_from(ordinal.rem_euclid(12) + 1).ok()?;
        Some(Self { year, month })
    }

    fn ordinal(&self) -> i64 {
        i64::from(self.year) * 12 + i64::from(self.month) - 1
    }

    /// Three-letter English month name used as a table column header
    pub fn short_label(&self) -> String {
        Month::try_from(self.month as u8)
            .map(|m| m.name()[..3].to_string())
            .unwrap_or_else(|_| self.to_string())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseError::InvalidYearMonth(s.to_string());

        let (year, month) = s.trim().split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;

        YearMonth::new(year, month).ok_or_else(invalid)
    }
}

impl TryFrom<String> for YearMonth {
    type Error = ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.to_string()
    }
}
