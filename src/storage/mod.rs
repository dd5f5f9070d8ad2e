//! Storage module.
//!
//! Scan-history records and the key-value backends they persist to.
//! Only raw scan results are stored; product traces are never persisted.

pub mod history;
pub mod models;
pub mod store;

pub use history::*;
pub use models::*;
pub use store::*;
