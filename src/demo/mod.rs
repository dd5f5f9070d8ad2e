//! Mocked network calls.
//!
//! Every call sleeps for the configured latency and then returns hard-coded
//! data. Nothing here talks to a real service.
//!
//! - `api` - the [`MockApi`] client with latency and failure injection
//! - `catalog` - the demo product record and verification summary
//! - `dashboard` - fixed farmer dashboard analytics
//! - `marketplace` - fixed product listings and the category/search filter

pub mod api;
pub mod catalog;
pub mod dashboard;
pub mod marketplace;

pub use api::*;
pub use catalog::*;
pub use dashboard::*;
pub use marketplace::*;
