//! Permissive field decoding
//!
//! Site data is hand-edited JSON with no schema. Missing or oddly typed
//! fields degrade to empty values instead of failing the whole record.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Render a scalar as text; `None` for null, objects and arrays
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text for a field that may be a scalar or a list of scalars
pub(crate) fn joined_text(value: &Value) -> Option<String> {
    match value {
        Value::Array(items) => Some(
            items
                .iter()
                .filter_map(scalar_text)
                .collect::<Vec<_>>()
                .join(", "),
        ),
        other => scalar_text(other),
    }
}

/// List of strings from an array, or a one-item list from a lone scalar
pub(crate) fn text_list(value: &Value) -> Option<Vec<String>> {
    match value {
        Value::Array(items) => Some(items.iter().filter_map(scalar_text).collect()),
        other => scalar_text(other).map(|s| vec![s]),
    }
}

pub(crate) fn de_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(joined_text(&value).unwrap_or_default())
}

pub(crate) fn de_text_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(text_list(&value).unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars_render_as_text() {
        assert_eq!(scalar_text(&json!("web")), Some("web".to_string()));
        assert_eq!(scalar_text(&json!(3)), Some("3".to_string()));
        assert_eq!(scalar_text(&json!(null)), None);
        assert_eq!(scalar_text(&json!({"a": 1})), None);
    }

    #[test]
    fn arrays_join_with_commas() {
        assert_eq!(
            joined_text(&json!(["Rust", "Tokio", {"skip": true}])),
            Some("Rust, Tokio".to_string())
        );
    }

    #[test]
    fn lone_scalar_becomes_single_item_list() {
        assert_eq!(text_list(&json!("one")), Some(vec!["one".to_string()]));
        assert_eq!(text_list(&json!(null)), None);
    }
}
