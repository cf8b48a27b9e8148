//! Category totals
//!
//! Sums expense amounts grouped by category, either all-time or restricted
//! to one calendar month. Results are computed fresh from the entries handed
//! in and are never persisted.

use std::collections::HashMap;

use crate::models::{Amount, Category, Entry, MonthFilter};

/// Summed spending for one category
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CategoryTotal {
    /// The category
    pub category: Category,
    /// Summed amount across the grouped entries
    pub total: Amount,
}

impl CategoryTotal {
    /// Bar height for visualization: natural log of the total
    ///
    /// `None` for non-positive totals, which have no defined log height;
    /// the display layer draws no bar for those.
    pub fn bar_height(&self) -> Option<f64> {
        self.total.log_height()
    }
}

/// Group all entries by category and sum their amounts
///
/// Only categories actually present in the data appear in the result, in
/// category display order. An empty slice yields an empty result — callers
/// must treat "no data" distinctly from "category missing".
pub fn category_totals(entries: &[Entry]) -> Vec<CategoryTotal> {
    let mut sums: HashMap<Category, Amount> = HashMap::new();
    for entry in entries {
        *sums.entry(entry.category).or_default() += entry.amount;
    }

    let mut totals: Vec<CategoryTotal> = sums
        .into_iter()
        .map(|(category, total)| CategoryTotal { category, total })
        .collect();
    totals.sort_by_key(|t| t.category);
    totals
}

/// Category totals restricted to one calendar month
///
/// `MonthFilter::All` behaves identically to [`category_totals`]. For a
/// concrete month, entries are filtered to that month before grouping.
///
/// When the requested month matches zero entries — including months that
/// never occur in the data at all — the result falls back to the full
/// all-time totals instead of an empty result. The UI always shows
/// something rather than a blank chart for an empty month; this fallback is
/// part of the external contract and must hold exactly.
pub fn monthly_category_totals(entries: &[Entry], filter: MonthFilter) -> Vec<CategoryTotal> {
    let month = match filter {
        MonthFilter::All => return category_totals(entries),
        MonthFilter::Month(m) => m,
    };

    let in_month: Vec<Entry> = entries
        .iter()
        .filter(|e| month.contains(e.date))
        .cloned()
        .collect();

    if in_month.is_empty() {
        category_totals(entries)
    } else {
        category_totals(&in_month)
    }
}
