//! Lenient field lookup.
//!
//! Reads top-level fields of a loosely-typed JSON payload, trying aliases in
//! order, and coerces the result into display strings or scores. Every helper
//! is lenient: wrong types and blank strings read as absent.

use serde_json::Value;

/// Whether a value carries nothing: null, or a string of only whitespace.
fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

/// Look up the first of several keys that holds a present value.
///
/// Null and blank strings count as absent, so `{"farmLocation": "",
/// "location": "Pune"}` resolves to `"Pune"` for `["farmLocation",
/// "location"]`. Non-object values have no fields.
///
/// # Examples
/// ```
/// use agritrace_core::extraction::resolve_first;
/// use serde_json::json;
/// let data = json!({"id": null, "productId": "PRD-2024-001"});
/// assert_eq!(resolve_first(&data, &["id", "productId"]), Some(&json!("PRD-2024-001")));
/// ```
pub fn resolve_first<'a>(data: &'a Value, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| data.get(*key))
        .find(|value| !is_blank(value))
}

/// Convert a scalar JSON value to a trimmed, non-empty display string.
///
/// Objects, arrays, null and blank strings yield `None`.
pub fn value_to_display(value: &Value) -> Option<String> {
    let text = match value {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };

    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Convert a JSON value to an integer if possible.
///
/// Fractional numbers are rounded; numeric strings are parsed.
pub fn value_to_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.round() as i64)),
        Value::String(s) => {
            let trimmed = s.trim();
            trimmed.parse::<i64>().ok().or_else(|| {
                trimmed
                    .parse::<f64>()
                    .ok()
                    .filter(|f| f.is_finite())
                    .map(|f| f.round() as i64)
            })
        }
        _ => None,
    }
}

/// Collect the display strings of a JSON array, skipping non-scalar items.
///
/// Returns `None` when the value is not an array at all.
pub fn value_to_string_list(value: &Value) -> Option<Vec<String>> {
    value
        .as_array()
        .map(|items| items.iter().filter_map(value_to_display).collect())
}
