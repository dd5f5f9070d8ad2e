//! Demo product catalog.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Number of trailing scan characters used in the demo batch number.
const BATCH_SUFFIX_LEN: usize = 6;

/// The product record returned for any scanned code.
///
/// The shape matches what the converter reads, including a last stage in
/// status `"current"`.
pub fn demo_product_payload(scan_result: &str) -> Value {
    json!({
        "id": scan_result,
        "name": "Organic Tomatoes",
        "farmer": "Rajesh Kumar",
        "farmLocation": "Maharashtra, India",
        "harvestDate": "2024-09-25",
        "qualityScore": 95,
        "certifications": ["Organic Certified", "Fair Trade", "Pesticide Free"],
        "batchNumber": format!("BATCH-{}", tail(scan_result, BATCH_SUFFIX_LEN)),
        "supplyChain": [
            {
                "stage": "Farm Harvest",
                "location": "Maharashtra, India",
                "date": "2024-09-25",
                "status": "completed"
            },
            {
                "stage": "Quality Check",
                "location": "Processing Unit",
                "date": "2024-09-26",
                "status": "completed"
            },
            {
                "stage": "Packaging",
                "location": "Mumbai Center",
                "date": "2024-09-27",
                "status": "completed"
            },
            {
                "stage": "Distribution",
                "location": "Regional Hub",
                "date": "2024-09-28",
                "status": "current"
            }
        ]
    })
}

/// Last `n` characters of `s` (all of it when shorter).
fn tail(s: &str, n: usize) -> &str {
    let count = s.chars().count();
    if count <= n {
        return s;
    }
    let start = s
        .char_indices()
        .nth(count - n)
        .map(|(idx, _)| idx)
        .unwrap_or(0);
    &s[start..]
}

/// Outcome of the simulated authenticity check.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VerificationSummary {
    pub success: bool,
    pub product_id: String,
    pub scan_time: String,
    pub location: String,
    /// Always true; no ledger is consulted.
    pub blockchain_verified: bool,
    pub trust_score: f64,
}

impl VerificationSummary {
    pub fn demo(product_id: &str, at: DateTime<Utc>) -> Self {
        Self {
            success: true,
            product_id: product_id.to_string(),
            scan_time: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            location: "Mumbai, India".to_string(),
            blockchain_verified: true,
            trust_score: 98.5,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_batch_number_from_scan_tail() {
        let payload = demo_product_payload("PROD-X7K2M9QPL");
        assert_eq!(payload["batchNumber"], "BATCH-2M9QPL");
        assert_eq!(payload["id"], "PROD-X7K2M9QPL");
    }

    #[test]
    fn test_short_scan_uses_whole_code() {
        assert_eq!(demo_product_payload("AB")["batchNumber"], "BATCH-AB");
        assert_eq!(tail("héllo wörld", 5), "wörld");
    }

    #[test]
    fn test_last_stage_is_current() {
        let payload = demo_product_payload("ABC-123456");
        let stages = payload["supplyChain"].as_array().unwrap();
        assert_eq!(stages.len(), 4);
        assert_eq!(stages[3]["status"], "current");
    }
}
