//! Testing utilities for the Folio workspace
//!
//! Shared fetchers, fixtures, and site builders.

#![allow(missing_docs)]

use async_trait::async_trait;
use folio_fetch::{FetchError, ResourceFetcher};
use folio_model::ProjectRecord;
use parking_lot::Mutex;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::path::Path;

/// In-memory site that records every path requested
#[derive(Debug, Default)]
pub struct MemoryFetcher {
    files: HashMap<String, String>,
    broken: HashMap<String, u16>,
    requests: Mutex<Vec<String>>,
}

impl MemoryFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve `body` at exactly `path`
    pub fn with_file(mut self, path: &str, body: impl Into<String>) -> Self {
        self.files.insert(path.to_string(), body.into());
        self
    }

    /// Answer `path` with an HTTP error status
    pub fn with_status(mut self, path: &str, status: u16) -> Self {
        self.broken.insert(path.to_string(), status);
        self
    }

    /// Paths requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

#[async_trait]
impl ResourceFetcher for MemoryFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        self.requests.lock().push(path.to_string());

        if let Some(status) = self.broken.get(path) {
            return Err(FetchError::Status {
                path: path.to_string(),
                status: *status,
            });
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| FetchError::NotFound {
                path: path.to_string(),
            })
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// `count` records of type `kind`, numbered from `first_id`
pub fn records(kind: &str, first_id: u64, count: u64) -> Vec<ProjectRecord> {
    (first_id..first_id + count)
        .map(|id| {
            ProjectRecord::new(id, kind)
                .with_title(format!("Project {id}"))
                .with_categories([format!("Cat {id}")])
        })
        .collect()
}

/// Catalog JSON array for the given records
pub fn catalog_json(records: &[ProjectRecord]) -> String {
    serde_json::to_string(records).expect("records serialize")
}

/// A complete detail record for `slug`
pub fn detail_record(slug: &str) -> Value {
    json!({
        "title": format!("{slug} title"),
        "gallery": [format!("assets/img/{slug}-1.jpg"), format!("assets/img/{slug}-2.jpg")],
        "category": "Web",
        "technologies": ["Laravel", "Vue"],
        "services": "Desarrollo a medida",
        "client": "Cliente SpA",
        "date": "2024",
        "status": "En producción",
        "demoUrl": format!("https://{slug}.example"),
        "scope": "Nacional",
        "serviceTypes": "Plataforma",
        "description": ["Primer párrafo.", "Segundo párrafo."],
        "challenge": "El reto.",
        "solution": "La solución.",
        "results": ["Resultado uno", "Resultado dos"],
        "prevProject": "project-details.html?id=viaz",
        "nextProject": "project-details.html?id=gesgan"
    })
}

/// Detail document JSON with complete records for `slugs`
pub fn detail_json(slugs: &[&str]) -> String {
    let map: serde_json::Map<String, Value> = slugs
        .iter()
        .map(|slug| ((*slug).to_string(), detail_record(slug)))
        .collect();
    Value::Object(map).to_string()
}

/// Write `files` (relative path, body) under `root`, creating directories
pub fn write_site(root: &Path, files: &[(&str, &str)]) {
    for (path, body) in files {
        let full = root.join(path);
        if let Some(parent) = full.parent() {
            std::fs::create_dir_all(parent).expect("create site dir");
        }
        std::fs::write(full, body).expect("write site file");
    }
}
