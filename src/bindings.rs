//! Python extension module (`--features python`).
//!
//! Thin wrappers over the crate API. Values cross the boundary as JSON
//! strings; the process-wide scan history lives behind a mutex and is loaded
//! from `AGRITRACE_HISTORY_DIR` on first use.

use anyhow::Context;
use lazy_static::lazy_static;
use parking_lot::Mutex;
use pyo3::exceptions::PyRuntimeError;
use pyo3::prelude::*;

use crate::config::Config;
use crate::logging::structured::init_logger;
use crate::storage::history::ScanHistory;
use crate::storage::store::FileStore;
use crate::trace::converter::convert_scan_payload;
use crate::trace::payload::ScanPayload;

lazy_static! {
    static ref HISTORY: Mutex<Option<ScanHistory<FileStore>>> = Mutex::new(None);
}

fn with_history<T>(
    f: impl FnOnce(&mut ScanHistory<FileStore>) -> anyhow::Result<T>,
) -> PyResult<T> {
    let mut guard = HISTORY.lock();

    let result = (|| {
        if guard.is_none() {
            let config = Config::from_env().context("loading configuration")?;
            let store = FileStore::new(&config.history_dir);
            let history = ScanHistory::load_with_limit(store, config.history_limit)
                .with_context(|| format!("loading history from {}", config.history_dir.display()))?;
            *guard = Some(history);
        }
        match guard.as_mut() {
            Some(history) => f(history),
            None => Err(anyhow::anyhow!("scan history unavailable")),
        }
    })();

    result.map_err(|e| PyRuntimeError::new_err(format!("{:#}", e)))
}

/// Classify a scanned string ("URL", "Email", "Phone", "Product ID", "Text").
#[pyfunction]
fn classify_scan(data: &str) -> String {
    crate::scan::classify::classify_scan(data).as_str().to_string()
}

/// Convert a scan payload into a product trace.
///
/// Accepts a JSON object; anything else is taken as a bare code.
#[pyfunction]
fn convert_scan_result(payload: &str) -> PyResult<String> {
    init_logger();

    let scan = ScanPayload::from_scan_text(payload);
    let trace = convert_scan_payload(
        &scan,
        chrono::Utc::now().date_naive(),
        &mut rand::thread_rng(),
    );

    serde_json::to_string(&trace).map_err(|e| PyRuntimeError::new_err(e.to_string()))
}

/// Record a scan in the persisted history. Returns the record as JSON.
#[pyfunction]
fn record_scan(result: &str) -> PyResult<String> {
    init_logger();
    with_history(|history| {
        let record = history.record(result).context("recording scan")?;
        Ok(serde_json::to_string(record)?)
    })
}

/// The persisted history as a JSON array, newest first.
#[pyfunction]
fn scan_history() -> PyResult<String> {
    with_history(|history| Ok(serde_json::to_string(history.entries())?))
}

/// Remove every history entry.
#[pyfunction]
fn clear_scan_history() -> PyResult<()> {
    with_history(|history| history.clear().context("clearing history"))
}

/// Python module definition
#[pymodule]
fn agritrace_core(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(classify_scan, m)?)?;
    m.add_function(wrap_pyfunction!(convert_scan_result, m)?)?;
    m.add_function(wrap_pyfunction!(record_scan, m)?)?;
    m.add_function(wrap_pyfunction!(scan_history, m)?)?;
    m.add_function(wrap_pyfunction!(clear_scan_history, m)?)?;
    Ok(())
}
