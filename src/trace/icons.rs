//! Stage icon lookup.

use std::collections::HashMap;

use lazy_static::lazy_static;

/// Glyph used when a stage name has no dedicated icon.
pub const FALLBACK_STAGE_ICON: &str = "📍";

lazy_static! {
    /// Exact, case-sensitive stage name to icon table.
    static ref STAGE_ICONS: HashMap<&'static str, &'static str> = HashMap::from([
        ("Farm", "🌱"),
        ("Processing", "⚙️"),
        ("Distribution", "🚚"),
        ("Retail", "🏪"),
        ("Farm Harvest", "🌾"),
        ("Quality Check", "🔍"),
        ("Packaging", "📦"),
        ("Transport", "🚛"),
        ("Warehouse", "🏭"),
    ]);
}

/// Icon for a stage name, or [`FALLBACK_STAGE_ICON`].
pub fn stage_icon(stage_name: &str) -> &'static str {
    STAGE_ICONS
        .get(stage_name)
        .copied()
        .unwrap_or(FALLBACK_STAGE_ICON)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_stages() {
        assert_eq!(stage_icon("Farm"), "🌱");
        assert_eq!(stage_icon("Farm Harvest"), "🌾");
        assert_eq!(stage_icon("Retail"), "🏪");
        assert_eq!(stage_icon("Warehouse"), "🏭");
    }

    #[test]
    fn test_lookup_is_exact() {
        assert_eq!(stage_icon("farm"), FALLBACK_STAGE_ICON);
        assert_eq!(stage_icon("Farm "), FALLBACK_STAGE_ICON);
        assert_eq!(stage_icon("Cold Chain Transport"), FALLBACK_STAGE_ICON);
        assert_eq!(stage_icon(""), FALLBACK_STAGE_ICON);
    }
}
