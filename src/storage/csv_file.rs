//! CSV persistence for the ledger
//!
//! Reads and writes the flat file holding all entries for one owner name.
//! The format is fixed: a header row and the columns
//! `date,category,title,amount,notes`, dates as ISO calendar dates, amounts
//! as decimal numbers with 2 places.
//!
//! Writes go through a temp file and an atomic rename so the ledger file is
//! either fully replaced or untouched.

use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Deserialize;

use crate::config::SpendbookPaths;
use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{Amount, Category, Entry};

const HEADER: [&str; 5] = ["date", "category", "title", "amount", "notes"];

/// Raw CSV row before date truncation and amount rounding
#[derive(Debug, Deserialize)]
struct CsvRow {
    date: String,
    category: Category,
    title: String,
    amount: f64,
    #[serde(default)]
    notes: Option<String>,
}

/// The persisted CSV file for one owner's ledger
#[derive(Debug, Clone)]
pub struct CsvStore {
    name: String,
    path: PathBuf,
}

impl CsvStore {
    /// Create a store over an explicit file path
    pub fn new(name: impl Into<String>, path: PathBuf) -> Self {
        Self {
            name: name.into(),
            path,
        }
    }

    /// Create a store for an owner name inside the resolved data directory
    pub fn for_owner(paths: &SpendbookPaths, name: &str) -> Self {
        Self::new(name, paths.ledger_file(name))
    }

    /// The owner name this store belongs to
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The backing file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the entries from disk
    ///
    /// Fails with `StorageNotFound` when no file exists for this owner;
    /// callers treat that as "start with an empty ledger". An existing but
    /// empty file loads as zero entries, which is a different outcome.
    ///
    /// Date fields are truncated to their first 10 characters before
    /// parsing, tolerating a trailing time-of-day from older exports.
    /// Amounts are rounded to 2 decimal places on the way in.
    pub fn load(&self) -> SpendbookResult<Vec<Entry>> {
        if !self.path.exists() {
            return Err(SpendbookError::storage_not_found(&self.name));
        }

        let mut reader = csv::Reader::from_path(&self.path).map_err(|e| {
            SpendbookError::Storage(format!("Failed to open {}: {}", self.path.display(), e))
        })?;

        let mut entries = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.map_err(|e| {
                SpendbookError::Storage(format!("Failed to parse {}: {}", self.path.display(), e))
            })?;

            let date_text = row.date.get(..10).unwrap_or(&row.date);
            let date = NaiveDate::parse_from_str(date_text, "%Y-%m-%d").map_err(|e| {
                SpendbookError::Storage(format!("Invalid date '{}': {}", row.date, e))
            })?;

            let notes = row.notes.filter(|n| !n.is_empty());
            entries.push(Entry {
                date,
                category: row.category,
                title: row.title,
                amount: Amount::new(row.amount).round2(),
                notes: notes.unwrap_or_else(|| " ".to_string()),
            });
        }

        Ok(entries)
    }

    /// Save all entries to disk, replacing the previous file atomically
    pub fn save(&self, entries: &[Entry]) -> SpendbookResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SpendbookError::Storage(format!(
                    "Failed to create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        // Temp file in the same directory, required for the atomic rename
        let temp_path = self.path.with_extension("csv.tmp");

        let file = File::create(&temp_path)
            .map_err(|e| SpendbookError::Storage(format!("Failed to create temp file: {}", e)))?;
        let mut writer = csv::Writer::from_writer(file);

        writer
            .write_record(HEADER)
            .map_err(|e| SpendbookError::Storage(format!("Failed to write header: {}", e)))?;

        for entry in entries {
            writer
                .write_record([
                    entry.date.format("%Y-%m-%d").to_string(),
                    entry.category.as_str().to_string(),
                    entry.title.clone(),
                    entry.amount.to_string(),
                    entry.notes.clone(),
                ])
                .map_err(|e| SpendbookError::Storage(format!("Failed to write entry: {}", e)))?;
        }

        let file = writer
            .into_inner()
            .map_err(|e| SpendbookError::Storage(format!("Failed to flush data: {}", e)))?;

        // Sync to disk before rename
        file.sync_all()
            .map_err(|e| SpendbookError::Storage(format!("Failed to sync data: {}", e)))?;

        fs::rename(&temp_path, &self.path).map_err(|e| {
            let _ = fs::remove_file(&temp_path);
            SpendbookError::Storage(format!("Failed to rename temp file: {}", e))
        })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store_in(dir: &TempDir) -> CsvStore {
        CsvStore::new("user", dir.path().join("personal_finance_user.csv"))
    }

    fn entry(date: &str, category: Category, title: &str, amount: f64, notes: &str) -> Entry {
        Entry::with_notes(
            NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            category,
            title,
            Amount::new(amount),
            notes,
        )
    }

    #[test]
    fn test_load_missing_file_is_storage_not_found() {
        let dir = TempDir::new().unwrap();
        let err = store_in(&dir).load().unwrap_err();
        assert!(err.is_storage_not_found());
        assert_eq!(err.to_string(), "No saved ledger found for 'user'");
    }

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        let entries = vec![
            entry("2024-01-05", Category::Food, "lunch", 12.35, ""),
            entry("2024-01-06", Category::Transport, "bus", 2.80, "to work"),
        ];
        store.save(&entries).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, entries);
    }

    #[test]
    fn test_empty_file_loads_as_zero_entries() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store.save(&[]).unwrap();
        let loaded = store.load().unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_amount_rounded_on_load() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(
            store.path(),
            "date,category,title,amount,notes\n2024-01-05,food,lunch,12.345, \n",
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].amount, Amount::new(12.35));
    }

    #[test]
    fn test_date_with_time_component_truncated() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(
            store.path(),
            "date,category,title,amount,notes\n2024-01-05 00:00:00,food,lunch,10.00, \n",
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(
            loaded[0].date,
            NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()
        );
    }

    #[test]
    fn test_blank_notes_become_single_space() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(
            store.path(),
            "date,category,title,amount,notes\n2024-01-05,food,lunch,10.00,\n",
        )
        .unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded[0].notes, " ");
    }

    #[test]
    fn test_written_file_shape() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save(&[entry("2024-01-05", Category::Food, "lunch", 12.345, "")])
            .unwrap();

        let contents = fs::read_to_string(store.path()).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("date,category,title,amount,notes"));
        assert_eq!(lines.next(), Some("2024-01-05,food,lunch,12.35, "));
    }

    #[test]
    fn test_atomic_write_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        store
            .save(&[entry("2024-01-05", Category::Food, "lunch", 10.0, "")])
            .unwrap();

        assert!(store.path().exists());
        assert!(!store.path().with_extension("csv.tmp").exists());
    }

    #[test]
    fn test_unparseable_row_is_storage_error() {
        let dir = TempDir::new().unwrap();
        let store = store_in(&dir);

        fs::write(
            store.path(),
            "date,category,title,amount,notes\n2024-01-05,food,lunch,ten, \n",
        )
        .unwrap();

        let err = store.load().unwrap_err();
        assert!(matches!(err, SpendbookError::Storage(_)));
    }
}
