//! AgriTrace Core - product traceability timeline and simulated scan flow
//!
//! This crate holds the data logic behind the AgriTrace demo: turning a
//! scanned code into a product's supply-chain timeline. All product data is
//! mocked; nothing is verified against a ledger.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//! - `trace` - `ProductTrace` model and the scan payload converter
//! - `scan` - scan classification, detector stub, camera session
//! - `storage` - capped scan history and its key-value backends
//! - `demo` - mock API with artificial latency and failure injection
//! - `pipeline` - end-to-end scan flow with session context
//! - `extraction` - lenient JSON field reading
//! - `config` - environment configuration
//! - `logging` - structured logging with session context
//!
//! With the `python` feature the crate also builds the `agritrace_core`
//! extension module.

pub mod config;
pub mod demo;
pub mod error;
pub mod extraction;
pub mod logging;
pub mod pipeline;
pub mod scan;
pub mod storage;
pub mod trace;

#[cfg(feature = "python")]
mod bindings;

pub use config::Config;
pub use error::{ConfigError, DemoError, ScanError, StorageError};
pub use logging::structured::init_logger;
pub use pipeline::scan_flow::{ScanOutcome, ScanPipeline};
pub use scan::classify::{classify_scan, ScanKind};
pub use storage::history::{ScanHistory, HISTORY_KEY};
pub use trace::converter::{convert_scan_payload, convert_scan_value};
pub use trace::model::{ProductTrace, StageQuality, TraceStage, TraceStatus};

use storage::store::FileStore;

/// Open a scan pipeline persisting history under `config.history_dir`.
pub fn open_pipeline(config: &Config) -> Result<ScanPipeline<FileStore>, ScanError> {
    let store = FileStore::new(&config.history_dir);
    let history = ScanHistory::load_with_limit(store, config.history_limit)?;
    Ok(ScanPipeline::new(history, demo::api::MockApi::from_config(config)))
}
