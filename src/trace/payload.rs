//! Loosely-typed scan payloads.
//!
//! A scan payload is whatever the scanner handed over: a record typed by the
//! user, a demo-mode product, or a decoded code. Every field is optional and
//! read leniently; a field of the wrong type is the same as a missing one.

use serde_json::Value;

use crate::extraction::fields::{
    resolve_first, value_to_display, value_to_int, value_to_string_list,
};

/// One raw supply-chain entry as it appears in a payload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SupplyChainEntry {
    pub stage: Option<String>,
    pub location: Option<String>,
    pub date: Option<String>,
    pub status: Option<String>,
}

impl SupplyChainEntry {
    /// Read an entry. Non-object values produce an entry with no fields.
    pub fn from_value(value: &Value) -> Self {
        let text = |keys: &[&str]| resolve_first(value, keys).and_then(value_to_display);

        Self {
            stage: text(&["stage", "name"]),
            location: text(&["location"]),
            date: text(&["date"]),
            status: text(&["status"]),
        }
    }
}

/// The optional fields a scan payload may carry.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanPayload {
    pub id: Option<String>,
    pub name: Option<String>,
    pub farmer: Option<String>,
    pub farm_location: Option<String>,
    pub harvest_date: Option<String>,
    pub quality_score: Option<i64>,
    pub certifications: Option<Vec<String>>,
    pub batch_number: Option<String>,
    pub supply_chain: Vec<SupplyChainEntry>,
}

impl ScanPayload {
    /// Read a payload from JSON.
    ///
    /// Field aliases accepted: `location` for `farmLocation`, `batchId` for
    /// `batchNumber`, `timeline` for `supplyChain`.
    pub fn from_value(value: &Value) -> Self {
        let text = |keys: &[&str]| resolve_first(value, keys).and_then(value_to_display);

        let supply_chain = resolve_first(value, &["supplyChain", "timeline"])
            .and_then(|v| v.as_array())
            .map(|entries| entries.iter().map(SupplyChainEntry::from_value).collect())
            .unwrap_or_default();

        Self {
            id: text(&["id", "productId"]),
            name: text(&["name"]),
            farmer: text(&["farmer"]),
            farm_location: text(&["farmLocation", "location"]),
            harvest_date: text(&["harvestDate"]),
            quality_score: resolve_first(value, &["qualityScore"]).and_then(value_to_int),
            certifications: resolve_first(value, &["certifications"])
                .and_then(value_to_string_list),
            batch_number: text(&["batchNumber", "batchId"]),
            supply_chain,
        }
    }

    /// Payload for a bare scanned string with nothing else known.
    pub fn from_code(code: &str) -> Self {
        let trimmed = code.trim();
        Self {
            id: (!trimmed.is_empty()).then(|| trimmed.to_string()),
            ..Self::default()
        }
    }

    /// Read raw scanned text: a JSON object is a full payload, anything
    /// else (including JSON scalars such as `12345` or `true`) is a bare code.
    pub fn from_scan_text(text: &str) -> Self {
        match serde_json::from_str::<Value>(text) {
            Ok(value) if value.is_object() => Self::from_value(&value),
            _ => Self::from_code(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_payload() {
        let payload = ScanPayload::from_value(&json!({
            "id": "PROD-1",
            "name": "Organic Tomatoes",
            "farmer": "Rajesh Kumar",
            "farmLocation": "Maharashtra, India",
            "harvestDate": "2024-09-25",
            "qualityScore": 95,
            "certifications": ["Organic Certified", "Fair Trade"],
            "batchNumber": "BATCH-ROD-1",
            "supplyChain": [
                {"stage": "Farm Harvest", "location": "Nashik", "date": "2024-09-25", "status": "completed"}
            ]
        }));

        assert_eq!(payload.id.as_deref(), Some("PROD-1"));
        assert_eq!(payload.farmer.as_deref(), Some("Rajesh Kumar"));
        assert_eq!(payload.quality_score, Some(95));
        assert_eq!(payload.certifications.as_ref().map(Vec::len), Some(2));
        assert_eq!(payload.supply_chain.len(), 1);
        assert_eq!(payload.supply_chain[0].stage.as_deref(), Some("Farm Harvest"));
    }

    #[test]
    fn test_wrong_types_read_as_missing() {
        let payload = ScanPayload::from_value(&json!({
            "id": {"nested": true},
            "name": "",
            "qualityScore": "excellent",
            "certifications": "Organic",
            "supplyChain": "none"
        }));

        assert_eq!(payload.id, None);
        assert_eq!(payload.name, None);
        assert_eq!(payload.quality_score, None);
        assert_eq!(payload.certifications, None);
        assert!(payload.supply_chain.is_empty());
    }

    #[test]
    fn test_aliases() {
        let payload = ScanPayload::from_value(&json!({
            "productId": "PRD-2024-001",
            "location": "Pune",
            "batchId": "500 kg",
            "timeline": [{"stage": "Retail"}]
        }));

        assert_eq!(payload.id.as_deref(), Some("PRD-2024-001"));
        assert_eq!(payload.farm_location.as_deref(), Some("Pune"));
        assert_eq!(payload.batch_number.as_deref(), Some("500 kg"));
        assert_eq!(payload.supply_chain.len(), 1);
    }

    #[test]
    fn test_non_object_entries_are_kept() {
        let payload = ScanPayload::from_value(&json!({"supplyChain": ["Farm", 3, null]}));
        assert_eq!(payload.supply_chain.len(), 3);
        assert_eq!(payload.supply_chain[0], SupplyChainEntry::default());
    }

    #[test]
    fn test_from_code() {
        assert_eq!(
            ScanPayload::from_code(" ABC-123456 ").id.as_deref(),
            Some("ABC-123456")
        );
        assert_eq!(ScanPayload::from_code("   ").id, None);
    }

    #[test]
    fn test_blank_primary_falls_back_to_alias() {
        let payload = ScanPayload::from_value(&json!({
            "farmLocation": "",
            "location": "Pune",
            "id": "  ",
            "productId": "PRD-2024-001"
        }));
        assert_eq!(payload.farm_location.as_deref(), Some("Pune"));
        assert_eq!(payload.id.as_deref(), Some("PRD-2024-001"));
    }

    #[test]
    fn test_scan_text_object_is_payload() {
        let payload = ScanPayload::from_scan_text(r#"{"id": "ABC-123456", "name": "Basmati Rice"}"#);
        assert_eq!(payload.id.as_deref(), Some("ABC-123456"));
        assert_eq!(payload.name.as_deref(), Some("Basmati Rice"));
    }

    #[test]
    fn test_scan_text_json_scalars_are_codes() {
        assert_eq!(ScanPayload::from_scan_text("12345").id.as_deref(), Some("12345"));
        assert_eq!(ScanPayload::from_scan_text("true").id.as_deref(), Some("true"));
        assert_eq!(ScanPayload::from_scan_text("null").id.as_deref(), Some("null"));
        assert_eq!(
            ScanPayload::from_scan_text("\"PROD-1\"").id.as_deref(),
            Some("\"PROD-1\"")
        );
        assert_eq!(
            ScanPayload::from_scan_text("ABC-123456").id.as_deref(),
            Some("ABC-123456")
        );
    }
}
