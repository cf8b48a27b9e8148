//! Core data models for spendbook
//!
//! This module contains the data structures that represent the expense
//! domain: entries, categories, amounts, and month keys.

pub mod amount;
pub mod category;
pub mod entry;
pub mod month;

pub use amount::{Amount, AmountParseError};
pub use category::{Category, CategoryParseError};
pub use entry::Entry;
pub use month::{Month, MonthFilter, MonthParseError};
