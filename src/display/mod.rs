//! Terminal rendering
//!
//! Formats ledger entries and derived views for display. Chart bars are
//! scaled by the natural log of each total, so one huge category does not
//! flatten every other bar; totals without a defined log height (zero or
//! negative) get no bar.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Entry;
use crate::reports::{CategoryTotal, DailyTotal};

/// Widest bar drawn for the largest total
const MAX_BAR_WIDTH: usize = 40;

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    index: usize,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Notes")]
    notes: String,
}

/// Format all entries as an indexed register table
///
/// The index column shows each entry's current positional index, the same
/// value `delete` expects.
pub fn format_entry_register(entries: &[Entry]) -> String {
    if entries.is_empty() {
        return "No entries recorded.\n".to_string();
    }

    let rows: Vec<EntryRow> = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| EntryRow {
            index,
            date: entry.date.format("%Y-%m-%d").to_string(),
            category: entry.category.to_string(),
            title: truncate(&entry.title, 30),
            amount: entry.amount.to_string(),
            notes: truncate(entry.notes.trim(), 30),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::psql());
    format!("{table}\n")
}

/// Format category totals as a horizontal bar chart
pub fn format_category_chart(totals: &[CategoryTotal]) -> String {
    if totals.is_empty() {
        return "No data to chart.\n".to_string();
    }

    let max_height = totals
        .iter()
        .filter_map(|t| t.bar_height())
        .fold(f64::NEG_INFINITY, f64::max);

    let mut output = String::new();
    for total in totals {
        let bar = match total.bar_height() {
            Some(height) => "█".repeat(bar_width(height, max_height)),
            None => String::new(),
        };
        output.push_str(&format!(
            "{:<10} {:<width$} {:>10}\n",
            total.category,
            bar,
            total.total,
            width = MAX_BAR_WIDTH
        ));
    }
    output
}

/// Format daily totals as a date-ordered listing
pub fn format_daily_totals(totals: &[DailyTotal]) -> String {
    if totals.is_empty() {
        return "No entries recorded.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!("{:<12} {:>10}\n", "Date", "Amount"));
    output.push_str(&"-".repeat(23));
    output.push('\n');
    for total in totals {
        output.push_str(&format!(
            "{:<12} {:>10}\n",
            total.date.format("%Y-%m-%d"),
            total.total
        ));
    }
    output
}

/// Scale a log height to a bar width, keeping at least one cell for any
/// total that has a defined height
fn bar_width(height: f64, max_height: f64) -> usize {
    if max_height <= 0.0 {
        // every defined height is <= 0 (totals between 0 and 1)
        return 1;
    }
    let width = (height / max_height * MAX_BAR_WIDTH as f64).round();
    width.max(1.0) as usize
}

/// Truncate a string to a maximum length, appending an ellipsis
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{truncated}…")
    }
}
