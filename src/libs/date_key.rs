//! Canonical grouping key for calendar dates.
//!
//! Every place that needs to decide whether two things fall on the same day
//! (task grouping, drop targets, holiday lookup) goes through [`DateKey`].
//! The textual form is `year/month/day` with a zero-based month and no
//! padding, so 15 February 2023 is `2023/1/15`.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey {
    pub year: i32,
    /// Zero-based: January is 0.
    pub month: u32,
    pub day: u32,
}

impl DateKey {
    pub fn new(year: i32, month: u32, day: u32) -> Self {
        DateKey { year, month, day }
    }

    /// Parses the `year/month/day` form. Components must be plain integers;
    /// whether they form a real date is checked by [`DateKey::to_date`].
    pub fn parse(value: &str) -> Option<Self> {
        let mut parts = value.trim().split('/');
        let year = parts.next()?.parse::<i32>().ok()?;
        let month = parts.next()?.parse::<u32>().ok()?;
        let day = parts.next()?.parse::<u32>().ok()?;
        if parts.next().is_some() {
            return None;
        }
        Some(DateKey { year, month, day })
    }

    /// Reconstructs the calendar date this key stands for.
    pub fn to_date(&self) -> Option<NaiveDate> {
        let month = self.month.checked_add(1)?;
        NaiveDate::from_ymd_opt(self.year, month, self.day)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        DateKey {
            year: date.year(),
            month: date.month0(),
            day: date.day(),
        }
    }
}

impl From<&NaiveDate> for DateKey {
    fn from(date: &NaiveDate) -> Self {
        DateKey::from(*date)
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

impl FromStr for DateKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DateKey::parse(s).ok_or_else(|| format!("invalid date key: {}", s))
    }
}
