//! Expense entry model
//!
//! One recorded expense. Entries carry no identifier of their own; identity
//! is the positional index in the ledger, which is not stable across
//! deletions that occur before it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

use super::amount::Amount;
use super::category::Category;
use super::month::Month;

/// A single recorded expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Calendar date of the expense (no time component)
    pub date: NaiveDate,

    /// One of the fixed expense categories
    pub category: Category,

    /// Short free-text description
    pub title: String,

    /// Expense amount
    pub amount: Amount,

    /// Optional free-text notes; a single space when the user left it blank
    #[serde(default = "default_notes")]
    pub notes: String,
}

fn default_notes() -> String {
    " ".to_string()
}

impl Entry {
    /// Create a new entry with blank notes
    pub fn new(date: NaiveDate, category: Category, title: impl Into<String>, amount: Amount) -> Self {
        Self {
            date,
            category,
            title: title.into(),
            amount,
            notes: default_notes(),
        }
    }

    /// Create a new entry with notes; blank notes collapse to a single space
    pub fn with_notes(
        date: NaiveDate,
        category: Category,
        title: impl Into<String>,
        amount: Amount,
        notes: impl Into<String>,
    ) -> Self {
        let notes = notes.into();
        Self {
            notes: if notes.is_empty() { default_notes() } else { notes },
            ..Self::new(date, category, title, amount)
        }
    }

    /// The (year, month) key this entry falls in
    pub fn month(&self) -> Month {
        Month::from(self.date)
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.category,
            self.title,
            self.amount
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_defaults_notes_to_space() {
        let entry = Entry::new(date(2024, 1, 5), Category::Food, "lunch", Amount::new(12.35));
        assert_eq!(entry.notes, " ");
    }

    #[test]
    fn test_with_notes_keeps_non_empty() {
        let entry = Entry::with_notes(
            date(2024, 1, 5),
            Category::Food,
            "lunch",
            Amount::new(12.35),
            "with coworkers",
        );
        assert_eq!(entry.notes, "with coworkers");
    }

    #[test]
    fn test_with_notes_collapses_empty() {
        let entry = Entry::with_notes(date(2024, 1, 5), Category::Food, "lunch", Amount::new(12.35), "");
        assert_eq!(entry.notes, " ");
    }

    #[test]
    fn test_month_key() {
        let entry = Entry::new(date(2024, 1, 5), Category::Food, "lunch", Amount::new(12.35));
        assert_eq!(entry.month(), Month::new(2024, 1));
    }

    #[test]
    fn test_display() {
        let entry = Entry::new(date(2024, 1, 5), Category::Food, "lunch", Amount::new(12.345));
        assert_eq!(entry.to_string(), "2024-01-05 food lunch 12.35");
    }
}
