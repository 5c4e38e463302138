//! Catalog records
//!
//! A catalog resource is either a JSON array of project records or a JSON
//! object keyed by project id. Both decode to an ordered `Vec<ProjectRecord>`.

use crate::error::ModelError;
use crate::lenient::{de_text, de_text_list, scalar_text};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Project identifier as it appears in links (`?id=...`)
///
/// Catalog files use both numeric and string ids, so the id is kept in its
/// textual form and parsed on demand.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    /// Create id from text
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Id as text
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, when the id is an unsigned integer
    #[inline]
    #[must_use]
    pub fn as_number(&self) -> Option<u64> {
        self.0.parse().ok()
    }

    /// Whether the id is blank
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for ProjectId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for ProjectId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProjectId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Ok(Self(scalar_text(&value).unwrap_or_default()))
    }
}

/// Summary record shown as a card in the catalog grid
///
/// Every field is optional in the source data; absent fields decode as
/// empty strings or empty lists.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectRecord {
    /// Identifier used in the detail link
    #[serde(default)]
    pub id: ProjectId,
    /// Card heading
    #[serde(default, deserialize_with = "de_text")]
    pub title: String,
    /// Line under the heading
    #[serde(default, deserialize_with = "de_text")]
    pub subtitle: String,
    /// Short blurb
    #[serde(default, deserialize_with = "de_text")]
    pub description: String,
    /// Thumbnail URL
    #[serde(default, deserialize_with = "de_text")]
    pub image: String,
    /// Category labels
    #[serde(default, deserialize_with = "de_text_list")]
    pub categories: Vec<String>,
    /// Technologies shown as badges
    #[serde(default, deserialize_with = "de_text_list")]
    pub software: Vec<String>,
    /// Client name
    #[serde(default, deserialize_with = "de_text")]
    pub client: String,
    /// Raw date, usually `YYYY-MM-DD`
    #[serde(default, deserialize_with = "de_text")]
    pub date: String,
    /// Filter key; compared verbatim against filter tokens
    #[serde(rename = "type", default, deserialize_with = "de_text")]
    pub kind: String,
}

impl ProjectRecord {
    /// Create a record with an id and filter type
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<ProjectId>, kind: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: kind.into(),
            ..Self::default()
        }
    }

    /// With title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// With description
    #[inline]
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// With categories
    #[inline]
    #[must_use]
    pub fn with_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// With software list
    #[inline]
    #[must_use]
    pub fn with_software<I, S>(mut self, software: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.software = software.into_iter().map(Into::into).collect();
        self
    }
}

/// Decoded catalog resource, in document order
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogDocument {
    /// `[ {...}, {...} ]`
    List(Vec<Value>),
    /// `{ "id": {...}, ... }`
    Keyed(IndexMap<String, Value>),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogShape {
    List(Vec<Value>),
    Keyed(IndexMap<String, Value>),
    Other(Value),
}

impl CatalogDocument {
    /// Parse catalog text
    ///
    /// # Errors
    /// - `ModelError::Json` when the text is not JSON
    /// - `ModelError::Shape` when the root is neither an array nor an object
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        match serde_json::from_str::<CatalogShape>(text)? {
            CatalogShape::List(items) => Ok(Self::List(items)),
            CatalogShape::Keyed(map) => Ok(Self::Keyed(map)),
            CatalogShape::Other(other) => Err(ModelError::Shape {
                expected: "array or object",
                found: value_kind(&other),
            }),
        }
    }

    /// Number of entries in the document, including undecodable ones
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::List(items) => items.len(),
            Self::Keyed(map) => map.len(),
        }
    }

    /// Whether the document has no entries
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Decode entries into records
    ///
    /// Entries that are not JSON objects are dropped. In the keyed form a
    /// record without its own id takes the key as id.
    #[must_use]
    pub fn into_records(self) -> Vec<ProjectRecord> {
        match self {
            Self::List(items) => items.into_iter().filter_map(record_from).collect(),
            Self::Keyed(map) => map
                .into_iter()
                .filter_map(|(key, value)| {
                    record_from(value).map(|mut record| {
                        if record.id.is_empty() {
                            record.id = ProjectId::new(key);
                        }
                        record
                    })
                })
                .collect(),
        }
    }
}

fn record_from(value: Value) -> Option<ProjectRecord> {
    if !value.is_object() {
        return None;
    }
    serde_json::from_value(value).ok()
}

/// Short name of a JSON value's type, for diagnostics
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_array_catalog() {
        let doc = CatalogDocument::parse(
            r#"[
                {"id": 1, "title": "EcoBikes", "type": "web", "categories": ["Web"], "software": ["Laravel"]},
                {"id": "viaz", "title": "Via-Z", "type": "app"}
            ]"#,
        )
        .unwrap();

        let records = doc.into_records();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_number(), Some(1));
        assert_eq!(records[0].kind, "web");
        assert_eq!(records[0].categories, vec!["Web".to_string()]);
        assert_eq!(records[1].id.as_str(), "viaz");
        assert!(records[1].software.is_empty());
    }

    #[test]
    fn keyed_catalog_keeps_document_order_and_fills_ids() {
        let doc = CatalogDocument::parse(
            r#"{"zeta": {"title": "Z", "type": "web"}, "alpha": {"id": 7, "type": "app"}}"#,
        )
        .unwrap();

        let records = doc.into_records();
        let ids: Vec<_> = records.iter().map(|r| r.id.to_string()).collect();
        assert_eq!(ids, vec!["zeta", "7"]);
    }

    #[test]
    fn missing_and_odd_fields_degrade_to_empty() {
        let doc = CatalogDocument::parse(
            r#"[{"title": null, "categories": "Solo", "type": 2}, "not a record"]"#,
        )
        .unwrap();
        assert_eq!(doc.len(), 2);

        let records = doc.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "");
        assert_eq!(records[0].categories, vec!["Solo".to_string()]);
        assert_eq!(records[0].kind, "2");
        assert!(records[0].id.is_empty());
    }

    #[test]
    fn scalar_root_is_a_shape_error() {
        let err = CatalogDocument::parse("42").unwrap_err();
        assert!(matches!(
            err,
            ModelError::Shape {
                found: "number",
                ..
            }
        ));
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(
            CatalogDocument::parse("{oops").unwrap_err(),
            ModelError::Json(_)
        ));
    }

    #[test]
    fn record_builder() {
        let record = ProjectRecord::new(3u64, "web")
            .with_title("Gesgan")
            .with_categories(["ERP"])
            .with_software(["Rust"]);
        assert_eq!(record.id.as_number(), Some(3));
        assert_eq!(record.title, "Gesgan");
        assert_eq!(record.categories, vec!["ERP".to_string()]);
    }
}
