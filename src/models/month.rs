//! Calendar-month key and month filtering
//!
//! A `Month` is a date truncated to (year, month). It is derived for
//! grouping and filtering, never stored. `MonthFilter` is the
//! user-facing selector: a concrete month or the `ALL` sentinel.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A (year, month) truncation of a calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Month {
    pub year: i32,
    pub month: u32,
}

impl Month {
    /// Create a month key
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// Check if a date falls within this month
    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }
}

impl From<NaiveDate> for Month {
    fn from(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for Month {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (year, month) = s
            .split_once('-')
            .ok_or_else(|| MonthParseError::InvalidFormat(s.to_string()))?;

        let year: i32 = year
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self { year, month })
    }
}

/// Month selector: a concrete month, or all entries regardless of month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MonthFilter {
    /// The `ALL` sentinel: no month restriction
    #[default]
    All,
    /// Restrict to one calendar month
    Month(Month),
}

impl fmt::Display for MonthFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("ALL"),
            Self::Month(m) => m.fmt(f),
        }
    }
}

impl FromStr for MonthFilter {
    type Err = MonthParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse::<Month>().map(Self::Month)
        }
    }
}

/// Error type for month parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => {
                write!(f, "Invalid month '{}' (expected YYYY-MM or ALL)", s)
            }
        }
    }
}

impl std::error::Error for MonthParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_date() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        assert_eq!(Month::from(date), Month::new(2024, 1));
    }

    #[test]
    fn test_contains() {
        let month = Month::new(2024, 1);
        assert!(month.contains(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap()));
        assert!(!month.contains(NaiveDate::from_ymd_opt(2023, 1, 15).unwrap()));
    }

    #[test]
    fn test_parse_month() {
        assert_eq!("2024-01".parse::<Month>().unwrap(), Month::new(2024, 1));
        assert_eq!("1900-12".parse::<Month>().unwrap(), Month::new(1900, 12));
        assert!("2024-13".parse::<Month>().is_err());
        assert!("2024".parse::<Month>().is_err());
        assert!("jan 2024".parse::<Month>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(Month::new(2024, 3).to_string(), "2024-03");
    }

    #[test]
    fn test_filter_parse() {
        assert_eq!("ALL".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!("all".parse::<MonthFilter>().unwrap(), MonthFilter::All);
        assert_eq!(
            "2024-02".parse::<MonthFilter>().unwrap(),
            MonthFilter::Month(Month::new(2024, 2))
        );
        assert!("soon".parse::<MonthFilter>().is_err());
    }

    #[test]
    fn test_filter_display() {
        assert_eq!(MonthFilter::All.to_string(), "ALL");
        assert_eq!(MonthFilter::Month(Month::new(2024, 2)).to_string(), "2024-02");
    }
}
