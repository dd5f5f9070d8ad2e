//! Persisted scan-history records.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::scan::classify::{classify_scan, ScanKind};

/// One raw scan result in the history list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanRecord {
    /// Scan time in epoch milliseconds.
    pub id: i64,
    pub result: String,
    /// Scan time as RFC 3339 with millisecond precision.
    pub timestamp: String,
    #[serde(rename = "type")]
    pub kind: ScanKind,
}

impl ScanRecord {
    pub fn new(result: &str, at: DateTime<Utc>) -> Self {
        Self {
            id: at.timestamp_millis(),
            result: result.to_string(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            kind: classify_scan(result),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_shape() {
        let at = Utc.with_ymd_and_hms(2024, 9, 28, 10, 30, 0).unwrap();
        let record = ScanRecord::new("ABC-123456", at);

        assert_eq!(record.id, at.timestamp_millis());
        assert_eq!(record.timestamp, "2024-09-28T10:30:00.000Z");
        assert_eq!(record.kind, ScanKind::ProductId);

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["type"], "Product ID");
        assert_eq!(value["result"], "ABC-123456");
    }
}
