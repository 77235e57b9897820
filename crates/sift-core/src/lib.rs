//! Core sift library (filter popover model, filter bar, records, config).

pub mod config;
pub mod filter;
pub mod records;
