//! spendbook - Command-line personal expense ledger
//!
//! This library provides the core functionality for spendbook: an in-memory
//! ledger of dated expense entries, CSV persistence, and derived aggregate
//! views (category totals, month-filtered category totals, daily totals).
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management for the data directory
//! - `error`: Custom error types
//! - `models`: Core data models (entries, categories, amounts, months)
//! - `ledger`: The in-memory record store
//! - `reports`: Derived views computed fresh from the ledger
//! - `storage`: CSV file persistence
//! - `display`: Terminal rendering
//! - `cli`: Command handlers

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod ledger;
pub mod models;
pub mod reports;
pub mod storage;

pub use error::{SpendbookError, SpendbookResult};
pub use ledger::Ledger;
