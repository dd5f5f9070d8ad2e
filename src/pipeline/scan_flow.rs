//! Main scan flow.
//!
//! A scan result, whether typed in, produced by demo mode, or decoded from a
//! frame, goes through the same steps:
//! 1. Trim and reject empty input
//! 2. Classify and prepend to the capped history
//! 3. Fetch the product record from the mock API
//! 4. Convert the record into a product trace
//!
//! History write failures are logged and do not abort the scan.

use chrono::Utc;
use rand::Rng;

use crate::demo::api::MockApi;
use crate::error::ScanError;
use crate::scan::classify::{classify_scan, ScanKind};
use crate::scan::detector::{demo_scan_id, detect_code, Frame};
use crate::storage::history::ScanHistory;
use crate::storage::store::KeyValueStore;
use crate::trace::converter::convert_scan_payload;
use crate::trace::model::ProductTrace;
use crate::trace::payload::ScanPayload;
use crate::{log_debug, log_info, log_warn};

use super::context::SessionContext;

/// Result of a completed scan.
#[derive(Debug, Clone)]
pub struct ScanOutcome {
    pub scan_result: String,
    pub kind: ScanKind,
    pub trace: ProductTrace,
}

/// A scanner session: history, mock backend and session context.
pub struct ScanPipeline<S: KeyValueStore> {
    session: SessionContext,
    history: ScanHistory<S>,
    api: MockApi,
}

impl<S: KeyValueStore> ScanPipeline<S> {
    pub fn new(history: ScanHistory<S>, api: MockApi) -> Self {
        let session = SessionContext::new();
        log_info!(
            session.log_context(),
            "SESSION_OPENED",
            history_entries = history.len()
        );
        Self {
            session,
            history,
            api,
        }
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn history(&self) -> &ScanHistory<S> {
        &self.history
    }

    pub fn clear_history(&mut self) -> Result<(), ScanError> {
        self.history.clear()?;
        Ok(())
    }

    /// Process a manually entered or decoded code.
    pub fn process_scan(&mut self, raw: &str) -> Result<ScanOutcome, ScanError> {
        let scan_result = raw.trim();
        if scan_result.is_empty() {
            log_debug!(self.session.log_context(), "SCAN_REJECTED", reason = "empty");
            return Err(ScanError::EmptyInput);
        }

        let scan_ctx = self.session.scan_context(scan_result);
        let log_ctx = scan_ctx.log_context();
        let kind = classify_scan(scan_result);

        log_info!(log_ctx, "SCAN_RECEIVED", kind = kind.as_str());

        if let Err(e) = self.history.record_at(scan_result, scan_ctx.received_at) {
            log_warn!(log_ctx, "HISTORY_SAVE_FAILED", error = e.to_string());
        }

        let product = self.api.fetch_product(scan_result);
        let trace = convert_scan_payload(
            &ScanPayload::from_value(&product),
            Utc::now().date_naive(),
            &mut rand::thread_rng(),
        );

        log_info!(
            log_ctx,
            "SCAN_COMPLETE",
            product = trace.name.as_str(),
            stages = trace.timeline().len()
        );

        Ok(ScanOutcome {
            scan_result: scan_result.to_string(),
            kind,
            trace,
        })
    }

    /// Demo mode: invent a product id and scan it.
    pub fn simulate_scan<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ScanOutcome, ScanError> {
        let code = demo_scan_id(rng);
        log_debug!(self.session.log_context(), "DEMO_SCAN", code = code.as_str());
        self.process_scan(&code)
    }

    /// Feed a camera frame. Returns `Ok(None)` while nothing is detected.
    pub fn process_frame(&mut self, frame: &Frame) -> Result<Option<ScanOutcome>, ScanError> {
        match detect_code(frame) {
            Some(code) => self.process_scan(&code).map(Some),
            None => Ok(None),
        }
    }
}
