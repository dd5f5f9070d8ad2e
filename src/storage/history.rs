//! Capped scan history.
//!
//! Newest scan first, at most `limit` entries, the oldest evicted when a new
//! scan would exceed the cap. The whole list is stored as one JSON array
//! under [`HISTORY_KEY`].

use chrono::{DateTime, Utc};

use crate::error::StorageError;
use crate::storage::models::ScanRecord;
use crate::storage::store::KeyValueStore;

/// Key the history blob is stored under.
pub const HISTORY_KEY: &str = "qr-scan-history";

/// Default number of scans kept.
pub const DEFAULT_HISTORY_LIMIT: usize = 10;

/// Scan history bound to a persistence backend.
#[derive(Debug)]
pub struct ScanHistory<S: KeyValueStore> {
    store: S,
    entries: Vec<ScanRecord>,
    limit: usize,
}

impl<S: KeyValueStore> ScanHistory<S> {
    /// Load the history with the default cap.
    pub fn load(store: S) -> Result<Self, StorageError> {
        Self::load_with_limit(store, DEFAULT_HISTORY_LIMIT)
    }

    /// Load the history from `store`.
    ///
    /// A missing blob gives an empty history. A blob that is not a JSON array
    /// is logged and treated as empty; it is overwritten by the next record.
    /// Individual entries that do not parse (an unknown `type`, missing
    /// fields) are skipped and the rest are kept.
    pub fn load_with_limit(store: S, limit: usize) -> Result<Self, StorageError> {
        let limit = limit.max(1);
        let mut entries = match store.get(HISTORY_KEY)? {
            Some(blob) => parse_entries(&blob),
            None => Vec::new(),
        };
        entries.truncate(limit);

        log::debug!("HISTORY_LOADED entries={} limit={}", entries.len(), limit);

        Ok(Self {
            store,
            entries,
            limit,
        })
    }

    /// Newest first.
    pub fn entries(&self) -> &[ScanRecord] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn latest(&self) -> Option<&ScanRecord> {
        self.entries.first()
    }

    /// Record a scan at the current time.
    pub fn record(&mut self, result: &str) -> Result<&ScanRecord, StorageError> {
        self.record_at(result, Utc::now())
    }

    /// Record a scan at `at`, evicting the oldest entry past the cap.
    pub fn record_at(
        &mut self,
        result: &str,
        at: DateTime<Utc>,
    ) -> Result<&ScanRecord, StorageError> {
        let record = ScanRecord::new(result, at);

        self.entries.insert(0, record);
        if self.entries.len() > self.limit {
            let evicted = self.entries.len() - self.limit;
            self.entries.truncate(self.limit);
            log::debug!("HISTORY_EVICTED count={}", evicted);
        }

        self.persist()?;

        log::info!(
            "HISTORY_RECORDED type={} entries={}",
            self.entries[0].kind,
            self.entries.len()
        );
        Ok(&self.entries[0])
    }

    /// Drop every entry and remove the stored blob.
    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.entries.clear();
        self.store.remove(HISTORY_KEY)?;
        log::info!("HISTORY_CLEARED key={}", HISTORY_KEY);
        Ok(())
    }

    /// Give back the backend.
    pub fn into_store(self) -> S {
        self.store
    }

    fn persist(&mut self) -> Result<(), StorageError> {
        let blob = serde_json::to_string(&self.entries).map_err(|source| StorageError::Json {
            key: HISTORY_KEY.to_string(),
            source,
        })?;
        self.store.set(HISTORY_KEY, &blob)
    }
}

fn parse_entries(blob: &str) -> Vec<ScanRecord> {
    let raw = match serde_json::from_str::<Vec<serde_json::Value>>(blob) {
        Ok(raw) => raw,
        Err(e) => {
            log::error!("HISTORY_LOAD_FAILED key={} error={}", HISTORY_KEY, e);
            return Vec::new();
        }
    };

    let total = raw.len();
    let entries: Vec<ScanRecord> = raw
        .into_iter()
        .filter_map(|value| serde_json::from_value(value).ok())
        .collect();

    if entries.len() < total {
        log::warn!(
            "HISTORY_ENTRIES_SKIPPED key={} skipped={} kept={}",
            HISTORY_KEY,
            total - entries.len(),
            entries.len()
        );
    }
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::classify::ScanKind;
    use crate::storage::store::MemoryStore;
    use chrono::{Duration, TimeZone};

    fn base_time() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 9, 28, 8, 0, 0).unwrap()
    }

    #[test]
    fn test_eleven_inserts_keep_ten_newest() {
        let mut history = ScanHistory::load(MemoryStore::new()).unwrap();
        for i in 0..11 {
            history
                .record_at(&format!("scan-{}", i), base_time() + Duration::seconds(i))
                .unwrap();
        }

        assert_eq!(history.len(), 10);
        assert_eq!(history.entries()[0].result, "scan-10");
        assert_eq!(history.entries()[9].result, "scan-1");
        assert!(history.entries().iter().all(|r| r.result != "scan-0"));
    }

    #[test]
    fn test_persisted_blob_round_trips() {
        let mut history = ScanHistory::load(MemoryStore::new()).unwrap();
        history.record_at("https://example.com", base_time()).unwrap();
        history.record_at("ABC-123456", base_time()).unwrap();

        let store = history.into_store();
        let blob = store.get(HISTORY_KEY).unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&blob).unwrap();
        assert_eq!(value[0]["type"], "Product ID");
        assert_eq!(value[1]["type"], "URL");

        let reloaded = ScanHistory::load(store).unwrap();
        assert_eq!(reloaded.len(), 2);
        assert_eq!(reloaded.latest().map(|r| r.kind), Some(ScanKind::ProductId));
    }

    #[test]
    fn test_corrupt_blob_loads_empty() {
        let mut store = MemoryStore::new();
        store.set(HISTORY_KEY, "{not json").unwrap();

        let mut history = ScanHistory::load(store).unwrap();
        assert!(history.is_empty());

        history.record_at("hello", base_time()).unwrap();
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_unknown_entry_type_keeps_the_rest() {
        let mut store = MemoryStore::new();
        let blob = r#"[
            {"id": 3, "result": "BEGIN:VCARD", "timestamp": "2024-09-28T08:00:03.000Z", "type": "Contact"},
            {"id": 2, "result": "ABC-123456", "timestamp": "2024-09-28T08:00:02.000Z", "type": "Product ID"},
            {"id": 1, "result": "hello", "timestamp": "2024-09-28T08:00:01.000Z", "type": "Text"},
            {"result": "no id"}
        ]"#;
        store.set(HISTORY_KEY, blob).unwrap();

        let mut history = ScanHistory::load(store).unwrap();
        let results: Vec<&str> = history.entries().iter().map(|r| r.result.as_str()).collect();
        assert_eq!(results, vec!["ABC-123456", "hello"]);

        history.record_at("https://example.com", base_time()).unwrap();
        let reloaded = ScanHistory::load(history.into_store()).unwrap();
        let results: Vec<&str> = reloaded.entries().iter().map(|r| r.result.as_str()).collect();
        assert_eq!(results, vec!["https://example.com", "ABC-123456", "hello"]);
    }

    #[test]
    fn test_oversized_blob_truncated_on_load() {
        let mut store = MemoryStore::new();
        let records: Vec<ScanRecord> = (0..15)
            .map(|i| ScanRecord::new(&format!("scan-{}", i), base_time()))
            .collect();
        store
            .set(HISTORY_KEY, &serde_json::to_string(&records).unwrap())
            .unwrap();

        let history = ScanHistory::load(store).unwrap();
        assert_eq!(history.len(), DEFAULT_HISTORY_LIMIT);
        assert_eq!(history.entries()[0].result, "scan-0");
    }

    #[test]
    fn test_clear_removes_blob() {
        let mut history = ScanHistory::load(MemoryStore::new()).unwrap();
        history.record_at("hello", base_time()).unwrap();
        history.clear().unwrap();

        assert!(history.is_empty());
        assert_eq!(history.into_store().get(HISTORY_KEY).unwrap(), None);
    }

    #[test]
    fn test_custom_limit() {
        let mut history = ScanHistory::load_with_limit(MemoryStore::new(), 3).unwrap();
        for i in 0..5 {
            history.record_at(&format!("scan-{}", i), base_time()).unwrap();
        }
        assert_eq!(history.limit(), 3);
        let results: Vec<&str> = history.entries().iter().map(|r| r.result.as_str()).collect();
        assert_eq!(results, vec!["scan-4", "scan-3", "scan-2"]);
    }
}
