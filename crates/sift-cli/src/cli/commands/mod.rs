pub mod browse;
pub mod config;
pub mod fields;
pub mod filter;
