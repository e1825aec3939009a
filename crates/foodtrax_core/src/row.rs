//! Labelled database rows.

use serde_json::Value as JsonValue;

/// A single table row keyed by column name.
pub type Row = serde_json::Map<String, JsonValue>;

/// Canonical text form of a scalar column value.
///
/// Integer and string identifiers compare equal through this form, so a
/// `truck_id` stored as `7` in one table and `"7"` in another still join.
/// Returns `None` for null, boolean, array and object values.
///
/// # Examples
///
/// ```
/// use foodtrax_core::value_text;
/// use serde_json::json;
///
/// assert_eq!(value_text(&json!(7)), value_text(&json!("7")));
/// assert_eq!(value_text(&json!(null)), None);
/// ```
pub fn value_text(value: &JsonValue) -> Option<String> {
    match value {
        JsonValue::String(s) => Some(s.clone()),
        JsonValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
