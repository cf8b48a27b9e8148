//! CLI command handlers
//!
//! Bridges the clap argument parsing with the ledger, reports, and storage.
//! This layer owns the ledger lifecycle: construct, load (or start empty
//! when nothing is saved yet), serve the command, and save after every
//! mutation.

use chrono::NaiveDate;
use clap::Subcommand;

use crate::config::SpendbookPaths;
use crate::display::{format_category_chart, format_daily_totals, format_entry_register};
use crate::error::SpendbookResult;
use crate::ledger::Ledger;
use crate::models::{Amount, Category, Entry, MonthFilter};
use crate::reports::{daily_totals, monthly_category_totals};
use crate::storage::CsvStore;

/// Top-level subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Record a new expense
    Add {
        /// Expense date (YYYY-MM-DD)
        date: NaiveDate,
        /// Category (living, food, transport, fun, education, savings)
        category: Category,
        /// Short description
        title: String,
        /// Amount spent
        amount: Amount,
        /// Optional notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// Delete the entry at a positional index (see 'list')
    Delete {
        /// Index of the entry to delete
        index: usize,
    },
    /// List all entries with their current indices
    List,
    /// Show category totals as a bar chart
    Chart {
        /// Restrict to one month (YYYY-MM), or ALL
        #[arg(short, long, default_value = "ALL")]
        month: MonthFilter,
    },
    /// Show spending summed per day
    Daily,
    /// List the months that have entries
    Months,
    /// Show resolved configuration paths
    Config,
}

/// Handle a parsed command against the ledger of the given owner
pub fn handle_command(paths: &SpendbookPaths, name: &str, cmd: Commands) -> SpendbookResult<()> {
    let store = CsvStore::for_owner(paths, name);
    let mut ledger = load_or_empty(&store)?;

    match cmd {
        Commands::Add {
            date,
            category,
            title,
            amount,
            notes,
        } => {
            let entry = match notes {
                Some(notes) => Entry::with_notes(date, category, title, amount, notes),
                None => Entry::new(date, category, title, amount),
            };
            ledger.append(entry);
            store.save(ledger.entries())?;
            println!("Added entry (index {}).", ledger.len() - 1);
        }
        Commands::Delete { index } => {
            let removed = ledger.delete(index)?;
            store.save(ledger.entries())?;
            println!("Deleted entry {}: {}", index, removed);
        }
        Commands::List => {
            print!("{}", format_entry_register(ledger.entries()));
        }
        Commands::Chart { month } => {
            let totals = monthly_category_totals(ledger.entries(), month);
            println!("Category totals ({month})");
            print!("{}", format_category_chart(&totals));
        }
        Commands::Daily => {
            print!("{}", format_daily_totals(&daily_totals(ledger.entries())));
        }
        Commands::Months => {
            // ALL is always offered, ahead of the months that carry data
            println!("ALL");
            for month in ledger.months() {
                println!("{month}");
            }
        }
        Commands::Config => {
            println!("Data directory: {}", paths.data_dir().display());
            println!("Ledger file:    {}", store.path().display());
        }
    }

    Ok(())
}

/// Load the saved ledger, treating a missing file as an empty start
fn load_or_empty(store: &CsvStore) -> SpendbookResult<Ledger> {
    match store.load() {
        Ok(entries) => Ok(Ledger::from_entries(entries)),
        Err(err) if err.is_storage_not_found() => {
            eprintln!("No data found for '{}', starting empty.", store.name());
            Ok(Ledger::new())
        }
        Err(err) => Err(err),
    }
}
