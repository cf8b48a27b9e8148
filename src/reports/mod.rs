//! Derived views over the ledger
//!
//! All views are pure functions of the entries passed in; none mutate the
//! ledger, and none carry state between calls.

pub mod category;
pub mod daily;

pub use category::{category_totals, monthly_category_totals, CategoryTotal};
pub use daily::{daily_totals, DailyTotal};
