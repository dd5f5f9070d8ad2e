//! Scan pipeline orchestration.
//!
//! Coordinates one scan end to end:
//! - Input normalization
//! - Classification and history recording
//! - Product lookup through the mock API
//! - Conversion into a product trace

pub mod context;
pub mod scan_flow;

pub use context::*;
pub use scan_flow::*;
