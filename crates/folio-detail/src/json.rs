//! JSON-backed detail page
//!
//! The page's identifier is looked up in a single id → record document and
//! each field is written to its own region. Regions are independent: a
//! missing or malformed field leaves only its own region untouched.

use crate::config::DetailConfig;
use crate::error::DetailError;
use folio_fetch::ResourceFetcher;
use folio_model::markup::escape_attr;
use folio_model::{escape_html, DetailDocument, Page, PageQuery, ProjectDetail, Region};
use std::fmt::Write as _;

/// How a detail page load ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DetailOutcome {
    /// Record found and written
    Rendered {
        /// Identifier looked up
        id: String,
    },
    /// Document loaded but has no such identifier
    NotFound {
        /// Identifier looked up
        id: String,
    },
    /// Document could not be fetched or read
    Failed {
        /// Identifier looked up
        id: String,
        /// Failure description
        message: String,
    },
}

impl DetailOutcome {
    /// Whether the record was written
    #[inline]
    #[must_use]
    pub fn is_rendered(&self) -> bool {
        matches!(self, Self::Rendered { .. })
    }
}

/// Loader for the JSON detail page
#[derive(Debug)]
pub struct JsonDetailLoader<F> {
    fetcher: F,
    config: DetailConfig,
}

impl<F: ResourceFetcher> JsonDetailLoader<F> {
    /// Create a loader
    ///
    /// # Errors
    /// `DetailError::InvalidConfig` if the configuration is unusable
    pub fn new(fetcher: F, config: DetailConfig) -> Result<Self, DetailError> {
        config.validate()?;
        Ok(Self { fetcher, config })
    }

    /// Identifier named by the page URL, or the configured default
    #[must_use]
    pub fn project_id<'q>(&'q self, query: &'q PageQuery) -> &'q str {
        query.get_or(&self.config.id_param, &self.config.default_project_id)
    }

    /// Fetch and parse the detail document
    ///
    /// # Errors
    /// `DetailError::Fetch` or `DetailError::Model` when the document cannot
    /// be obtained
    pub async fn fetch_document(&self) -> Result<DetailDocument, DetailError> {
        let body = self.fetcher.fetch_text(&self.config.data_path).await?;
        Ok(DetailDocument::parse(&body)?)
    }

    /// Run the page-load sequence, writing into `page`
    pub async fn load(&self, query: &PageQuery, page: &mut Page) -> DetailOutcome {
        let id = self.project_id(query).to_string();

        let document = match self.fetch_document().await {
            Ok(document) => document,
            Err(e) => {
                tracing::error!(path = %self.config.data_path, error = %e, "detail document unavailable");
                page.set_markup(
                    Region::ProjectStatus,
                    status_markup("No se pudieron cargar los datos del proyecto."),
                );
                return DetailOutcome::Failed {
                    id,
                    message: e.to_string(),
                };
            }
        };

        match document.lookup(&id) {
            Some(detail) => {
                tracing::info!(id = %id, "project loaded");
                render_detail(&detail, page);
                DetailOutcome::Rendered { id }
            }
            None => {
                tracing::warn!(id = %id, known = document.len(), "project not found");
                page.set_markup(
                    Region::ProjectStatus,
                    status_markup(&format!(
                        "Proyecto no encontrado: <strong>{}</strong>",
                        escape_html(&id)
                    )),
                );
                DetailOutcome::NotFound { id }
            }
        }
    }
}

fn status_markup(message: &str) -> String {
    format!(
        r#"<div class="container py-5">
    <h2>Proyecto no disponible</h2>
    <p>{message}</p>
</div>
"#
    )
}

/// Write every present field of `detail` into its region
///
/// Absent fields leave their regions as they were.
pub fn render_detail(detail: &ProjectDetail, page: &mut Page) {
    if let Some(gallery) = &detail.gallery {
        page.set_markup(Region::ProjectGallery, gallery_markup(gallery));
    }
    if let Some(info) = info_markup(detail) {
        page.set_markup(Region::ProjectInfo, info);
    }
    if let Some(title) = &detail.title {
        page.set_text(Region::ProjectTitle, title.as_str());
    }
    if let Some(paragraphs) = &detail.description {
        page.set_markup(
            Region::ProjectDescription,
            paragraphs_markup(paragraphs, "sec-text mt-30"),
        );
    }
    if let Some(challenge) = &detail.challenge {
        page.set_text(Region::ProjectChallenge, challenge.as_str());
    }
    if let Some(solution) = &detail.solution {
        page.set_text(Region::ProjectSolution, solution.as_str());
    }
    if let Some(results) = &detail.results {
        page.set_markup(Region::ProjectResults, paragraphs_markup(results, "sec-text mb-n1"));
    }
    if let Some(prev) = &detail.prev_project {
        page.set_href(Region::NavPrev, prev.as_str());
    }
    if let Some(next) = &detail.next_project {
        page.set_href(Region::NavNext, next.as_str());
    }
}

fn gallery_markup(images: &[String]) -> String {
    images
        .iter()
        .map(|src| {
            format!(
                r#"<div class="col-xl-12">
    <div class="project-inner-thumb mb-80 wow img-custom-anim-top">
        <img class="w-100" src="{}" alt="Imagen del proyecto">
    </div>
</div>
"#,
                escape_attr(src)
            )
        })
        .collect()
}

fn paragraphs_markup(paragraphs: &[String], class: &str) -> String {
    paragraphs
        .iter()
        .map(|text| format!(r#"<p class="{class}">{}</p>"#, escape_html(text)))
        .collect()
}

/// Key-value list; `None` when the record has none of the info fields
fn info_markup(detail: &ProjectDetail) -> Option<String> {
    let mut out = String::new();
    let mut item = |label: &str, value: String| {
        let _ = writeln!(out, "<li><span>{label}:</span> {value}</li>");
    };

    let plain = |value: &Option<String>| value.as_deref().map(escape_html);

    if let Some(v) = plain(&detail.category) {
        item("Categoría", v);
    }
    if let Some(v) = plain(&detail.technologies) {
        item("Tecnologías", v);
    }
    if let Some(v) = plain(&detail.services) {
        item("Servicios", v);
    }
    if let Some(v) = plain(&detail.client) {
        item("Cliente", v);
    }
    if let Some(v) = plain(&detail.date) {
        item("Fecha", v);
    }
    if let Some(v) = plain(&detail.status) {
        item("Estado", format!(r#"<strong style="color:#0cc067;">{v}</strong>"#));
    }
    if let Some(url) = &detail.demo_url {
        item(
            "Demo",
            format!(
                r#"<a href="{}" target="_blank">Visitar plataforma</a>"#,
                escape_attr(url)
            ),
        );
    }
    if let Some(v) = plain(&detail.scope) {
        item("Ámbito de operación", v);
    }
    if let Some(v) = plain(&detail.service_types) {
        item("Tipo de servicios", v);
    }

    (!out.is_empty()).then_some(out)
}
