//! Amount type for expense values
//!
//! A thin newtype over f64. Persisted storage carries plain decimal numbers,
//! so amounts stay in floating point; the one rule the rest of the crate
//! relies on is 2-decimal rounding on load and on display.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// A monetary amount in the user's (single) currency
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, Default)]
#[serde(transparent)]
pub struct Amount(f64);

impl Amount {
    /// Create an amount from a raw value
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self(0.0)
    }

    /// Get the raw value
    pub const fn value(&self) -> f64 {
        self.0
    }

    /// Round to 2 decimal places
    ///
    /// Applied when rehydrating from persisted storage and when formatting
    /// for display. In-memory arithmetic is plain f64 addition.
    pub fn round2(&self) -> Self {
        Self((self.0 * 100.0).round() / 100.0)
    }

    /// Check if the amount is strictly positive
    pub fn is_positive(&self) -> bool {
        self.0 > 0.0
    }

    /// Natural log of the amount, used for bar-height scaling
    ///
    /// Returns `None` for non-positive amounts, whose logarithm is
    /// undefined; callers render no bar for those.
    pub fn log_height(&self) -> Option<f64> {
        if self.is_positive() {
            Some(self.0.ln())
        } else {
            None
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // f.pad keeps width/alignment flags working in table layouts
        f.pad(&format!("{:.2}", self.round2().0))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

impl FromStr for Amount {
    type Err = AmountParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<f64>()
            .map(Amount::new)
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))
    }
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(Amount::new(12.345).round2(), Amount::new(12.35));
        assert_eq!(Amount::new(7.655).round2(), Amount::new(7.65));
        assert_eq!(Amount::new(10.0).round2(), Amount::new(10.0));
        assert_eq!(Amount::new(-1.005).round2(), Amount::new(-1.0));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Amount::new(10.5)), "10.50");
        assert_eq!(format!("{}", Amount::new(12.345)), "12.35");
        assert_eq!(format!("{}", Amount::zero()), "0.00");
        assert_eq!(format!("{}", Amount::new(-3.2)), "-3.20");
    }

    #[test]
    fn test_arithmetic_and_sum() {
        let a = Amount::new(12.35);
        let b = Amount::new(7.65);
        assert_eq!((a + b).value(), 20.0);

        let total: Amount = vec![Amount::new(1.0), Amount::new(2.5), Amount::new(3.5)]
            .into_iter()
            .sum();
        assert_eq!(total.value(), 7.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("10.50".parse::<Amount>().unwrap(), Amount::new(10.50));
        assert_eq!(" 7 ".parse::<Amount>().unwrap(), Amount::new(7.0));
        assert_eq!("-3.25".parse::<Amount>().unwrap(), Amount::new(-3.25));
        assert!("ten".parse::<Amount>().is_err());
    }

    #[test]
    fn test_log_height() {
        let h = Amount::new(std::f64::consts::E).log_height().unwrap();
        assert!((h - 1.0).abs() < 1e-10);
        assert!(Amount::zero().log_height().is_none());
        assert!(Amount::new(-5.0).log_height().is_none());
    }
}
