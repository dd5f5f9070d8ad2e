//! Structured logging with scan context.
//!
//! Provides logging macros and utilities that include session_id and scan_id
//! in every log message for easy correlation.

pub mod structured;

pub use structured::*;
