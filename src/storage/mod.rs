//! Persistence layer
//!
//! One flat CSV file per owner name holds the whole ledger.

pub mod csv_file;

pub use csv_file::CsvStore;
