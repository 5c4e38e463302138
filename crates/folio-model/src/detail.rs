//! Project detail records
//!
//! The detail resource maps project id to a record. Each field of a record is
//! extracted on its own: a malformed `gallery` leaves `gallery` as `None`
//! without affecting `title` or `results`.

use crate::error::ModelError;
use crate::lenient::{joined_text, scalar_text, text_list};
use crate::project::value_kind;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Detail resource: project id to raw record
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailDocument {
    entries: IndexMap<String, Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DetailShape {
    Keyed(IndexMap<String, Value>),
    Other(Value),
}

impl DetailDocument {
    /// Parse detail resource text
    ///
    /// # Errors
    /// - `ModelError::Json` when the text is not JSON
    /// - `ModelError::Shape` when the root is not an object
    pub fn parse(text: &str) -> Result<Self, ModelError> {
        match serde_json::from_str::<DetailShape>(text)? {
            DetailShape::Keyed(entries) => Ok(Self { entries }),
            DetailShape::Other(other) => Err(ModelError::Shape {
                expected: "object",
                found: value_kind(&other),
            }),
        }
    }

    /// Look up a project by id (exact key match)
    #[must_use]
    pub fn lookup(&self, id: &str) -> Option<ProjectDetail> {
        self.entries.get(id).map(ProjectDetail::from_value)
    }

    /// Known project ids, in document order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Number of projects
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the document is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One project's detail page content
///
/// `None` means the field was absent or unusable; the matching page region
/// is then left as the template has it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    /// Page heading
    pub title: Option<String>,
    /// Image URLs in display order
    pub gallery: Option<Vec<String>>,
    /// Category, lists joined with commas
    pub category: Option<String>,
    /// Technologies, lists joined with commas
    pub technologies: Option<String>,
    /// Services provided
    pub services: Option<String>,
    /// Client name
    pub client: Option<String>,
    /// Delivery date as written
    pub date: Option<String>,
    /// Project status
    pub status: Option<String>,
    /// Live site link (`demoUrl`)
    pub demo_url: Option<String>,
    /// Area of operation
    pub scope: Option<String>,
    /// Kinds of service (`serviceTypes`)
    pub service_types: Option<String>,
    /// Description paragraphs
    pub description: Option<Vec<String>>,
    /// Challenge statement
    pub challenge: Option<String>,
    /// Solution statement
    pub solution: Option<String>,
    /// Result statements
    pub results: Option<Vec<String>>,
    /// Previous project link (`prevProject`)
    pub prev_project: Option<String>,
    /// Next project link (`nextProject`)
    pub next_project: Option<String>,
}

impl ProjectDetail {
    /// Extract a detail record from a raw JSON value
    ///
    /// Never fails: a non-object value yields a record with every field unset.
    #[must_use]
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let text = |key: &str| obj.get(key).and_then(joined_text);
        let scalar = |key: &str| obj.get(key).and_then(scalar_text);
        let list = |key: &str| obj.get(key).and_then(text_list);

        Self {
            title: scalar("title"),
            gallery: list("gallery"),
            category: text("category"),
            technologies: text("technologies"),
            services: text("services"),
            client: text("client"),
            date: scalar("date"),
            status: scalar("status"),
            demo_url: scalar("demoUrl"),
            scope: text("scope"),
            service_types: text("serviceTypes"),
            description: list("description"),
            challenge: scalar("challenge"),
            solution: scalar("solution"),
            results: list("results"),
            prev_project: scalar("prevProject"),
            next_project: scalar("nextProject"),
        }
    }

    /// With title
    #[inline]
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
