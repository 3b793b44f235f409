//! Statistics module for Pastor Planner
//!
//! Currently a single report: how scheduled time splits across the three
//! life-balance categories.

mod balance;

pub use balance::{format_hours, format_percentage, BalanceReport, CategoryBalance};
