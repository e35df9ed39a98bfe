//! Core abstractions for focusflow.
//!
//! This module provides shared traits and utilities used across features.

mod datetime;
pub mod filter;
mod traits;

pub use datetime::{parse_clock_time, parse_date_from, parse_natural_date};
pub use filter::{filter_items, parse_filter, Condition, FilterExpr, FilterValue, Operator};
pub use traits::{FieldValue, Filterable, Schedulable};
