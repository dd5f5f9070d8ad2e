//! Pipeline context management.
//!
//! Provides session and scan context for logging and state tracking.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::logging::structured::LogContext;

/// Context for one scanning session (one scanner view being open).
#[derive(Debug, Clone)]
pub struct SessionContext {
    pub session_id: String,
    pub started_at: DateTime<Utc>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            session_id: format!("session-{}", &Uuid::new_v4().simple().to_string()[..8]),
            started_at: Utc::now(),
        }
    }

    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.session_id)
    }

    /// Create a scan context for this session.
    pub fn scan_context(&self, scan_result: &str) -> ScanContext {
        ScanContext {
            session_id: self.session_id.clone(),
            scan_result: scan_result.to_string(),
            received_at: Utc::now(),
        }
    }
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Context for a single scan within a session.
#[derive(Debug, Clone)]
pub struct ScanContext {
    pub session_id: String,
    pub scan_result: String,
    pub received_at: DateTime<Utc>,
}

impl ScanContext {
    pub fn log_context(&self) -> LogContext {
        LogContext::new(&self.session_id).with_scan(&self.scan_result)
    }
}
