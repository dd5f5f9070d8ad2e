//! Scan result classification.
//!
//! Pure string-pattern rules, evaluated in a fixed order.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Canonical 8-4-4-4-12 UUID, whole string.
    static ref UUID_PATTERN: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    ).unwrap();

    /// Batch code prefix such as `ABC-123456` or `PROD-X7K2M9QPL`.
    static ref BATCH_CODE_PATTERN: Regex = Regex::new(
        r"^[A-Z0-9]{3,}-[A-Z0-9]{6,}"
    ).unwrap();
}

/// What a scanned string looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScanKind {
    #[serde(rename = "URL")]
    Url,
    Email,
    Phone,
    #[serde(rename = "Product ID")]
    ProductId,
    Text,
}

impl ScanKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScanKind::Url => "URL",
            ScanKind::Email => "Email",
            ScanKind::Phone => "Phone",
            ScanKind::ProductId => "Product ID",
            ScanKind::Text => "Text",
        }
    }
}

impl fmt::Display for ScanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a scanned string.
///
/// # Examples
/// ```
/// use agritrace_core::scan::{classify_scan, ScanKind};
/// assert_eq!(classify_scan("https://example.com"), ScanKind::Url);
/// assert_eq!(classify_scan("user@example.com"), ScanKind::Email);
/// assert_eq!(classify_scan("ABC-123456"), ScanKind::ProductId);
/// assert_eq!(classify_scan("hello"), ScanKind::Text);
/// ```
pub fn classify_scan(data: &str) -> ScanKind {
    if data.starts_with("http://") || data.starts_with("https://") {
        ScanKind::Url
    } else if data.contains('@') {
        ScanKind::Email
    } else if data.starts_with("tel:") {
        ScanKind::Phone
    } else if UUID_PATTERN.is_match(data) || BATCH_CODE_PATTERN.is_match(data) {
        ScanKind::ProductId
    } else {
        ScanKind::Text
    }
}
