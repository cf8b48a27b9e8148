//! The in-memory expense ledger (record store)
//!
//! Owns the ordered collection of expense entries. An entry's identity is
//! its positional index: after any deletion the remaining entries compact
//! down so indices are always the dense range `[0, len)`.
//!
//! The ledger is an explicitly constructed value owned by the caller; it is
//! created empty at startup, optionally rehydrated from persisted storage,
//! and saved back after every mutation by whoever drives it.

use crate::error::{SpendbookError, SpendbookResult};
use crate::models::{Entry, Month};

/// Ordered collection of expense entries
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    entries: Vec<Entry>,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a ledger from already-loaded entries, preserving their order
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    /// Append an entry at the end
    ///
    /// No validation happens here; the presentation layer rejects malformed
    /// input before it reaches the ledger.
    pub fn append(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    /// Remove the entry at `index`
    ///
    /// Fails with `IndexNotFound` when `index` is outside `[0, len)` and
    /// leaves the ledger unchanged. On success the remaining entries shift
    /// down, so indices stay dense.
    pub fn delete(&mut self, index: usize) -> SpendbookResult<Entry> {
        if index >= self.entries.len() {
            return Err(SpendbookError::index_not_found(index));
        }
        Ok(self.entries.remove(index))
    }

    /// All entries, in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the ledger holds no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted distinct months present in the data
    ///
    /// Backs the month selector: only months that actually occur are offered.
    pub fn months(&self) -> Vec<Month> {
        let mut months: Vec<Month> = self.entries.iter().map(|e| e.month()).collect();
        months.sort();
        months.dedup();
        months
    }
}
