//! Daily totals
//!
//! Sums expense amounts grouped by exact calendar date. Always recomputed
//! from the entries handed in; there is deliberately no caching, so the
//! result reflects every mutation made before the call.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::{Amount, Entry};

/// Summed spending for one calendar date
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DailyTotal {
    /// The date
    pub date: NaiveDate,
    /// Summed amount across that date's entries
    pub total: Amount,
}

/// Group all entries by exact date and sum their amounts
///
/// The result is ordered by date ascending.
pub fn daily_totals(entries: &[Entry]) -> Vec<DailyTotal> {
    let mut sums: BTreeMap<NaiveDate, Amount> = BTreeMap::new();
    for entry in entries {
        *sums.entry(entry.date).or_default() += entry.amount;
    }

    sums.into_iter()
        .map(|(date, total)| DailyTotal { date, total })
        .collect()
}
