//! Fragment-backed detail page
//!
//! The page identifier is resolved through the alias table to a canonical
//! slug, and `<fragment_dir>/<slug>.html` is injected verbatim into the
//! content region.
//!
//! Fragments are same-origin files written by the site's authors, so they are
//! inserted without sanitizing. [`TrustedMarkup`] can only be produced here,
//! from the site fetcher; any other source of markup has to go through
//! escaping instead.

use crate::config::DetailConfig;
use crate::error::DetailError;
use folio_fetch::{FetchError, ResourceFetcher};
use folio_model::{escape_html, AliasTable, Page, PageQuery, Region};
use futures::future::join_all;

/// Markup fetched from the site's own fragment directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrustedMarkup(String);

impl TrustedMarkup {
    fn from_site(body: String) -> Self {
        Self(body)
    }

    /// Borrow the markup
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Take the markup
    #[inline]
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Path of a slug's fragment inside `dir`
#[must_use]
pub fn fragment_path(dir: &str, slug: &str) -> String {
    let dir = dir.trim_end_matches('/');
    if dir.is_empty() {
        format!("{slug}.html")
    } else {
        format!("{dir}/{slug}.html")
    }
}

/// Visible error naming the slug that could not be loaded
#[must_use]
pub fn error_markup(slug: &str) -> String {
    format!(
        r#"<div class="container py-5">
    <h2>Error al cargar el proyecto</h2>
    <p>No se pudo cargar: <strong>{}</strong></p>
</div>
"#,
        escape_html(slug)
    )
}

/// How a fragment page load ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FragmentOutcome {
    /// Fragment injected
    Injected {
        /// Canonical slug
        slug: String,
        /// Fragment path fetched
        path: String,
    },
    /// Fragment unavailable; the error block was shown
    Failed {
        /// Canonical slug
        slug: String,
        /// Fragment path attempted
        path: String,
        /// Failure description
        message: String,
    },
}

/// Availability of one canonical slug's fragment
#[derive(Debug)]
pub struct FragmentCheck {
    /// Canonical slug
    pub slug: String,
    /// Fragment path
    pub path: String,
    /// Why the fragment could not be fetched
    pub error: Option<FetchError>,
}

impl FragmentCheck {
    /// Whether the fragment was fetched
    #[inline]
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Loader for the fragment detail page
#[derive(Debug)]
pub struct FragmentLoader<F> {
    fetcher: F,
    config: DetailConfig,
    aliases: AliasTable,
}

impl<F: ResourceFetcher> FragmentLoader<F> {
    /// Create a loader using the built-in alias table
    ///
    /// # Errors
    /// `DetailError::InvalidConfig` if the configuration is unusable
    pub fn new(fetcher: F, config: DetailConfig) -> Result<Self, DetailError> {
        config.validate()?;
        Ok(Self {
            fetcher,
            config,
            aliases: AliasTable::builtin().clone(),
        })
    }

    /// Replace the alias table
    ///
    /// # Errors
    /// `DetailError::Model` if an alias targets a non-canonical slug
    pub fn with_aliases(mut self, aliases: AliasTable) -> Result<Self, DetailError> {
        aliases.validate()?;
        self.aliases = aliases;
        Ok(self)
    }

    /// Alias table in use
    #[inline]
    #[must_use]
    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Canonical slug for the page URL
    ///
    /// The URL identifier (or the configured default) is looked up exactly;
    /// unknown identifiers are used as they are.
    #[must_use]
    pub fn resolve<'q>(&'q self, query: &'q PageQuery) -> &'q str {
        let id = query.get_or(&self.config.id_param, &self.config.default_project_id);
        self.aliases.resolve(id)
    }

    /// Fragment path for a canonical slug
    #[must_use]
    pub fn path_for(&self, slug: &str) -> String {
        fragment_path(&self.config.fragment_dir, slug)
    }

    /// Fetch a slug's fragment
    ///
    /// # Errors
    /// `DetailError::Fetch` when the fragment is missing or unreachable
    pub async fn fetch_fragment(&self, slug: &str) -> Result<TrustedMarkup, DetailError> {
        let path = self.path_for(slug);
        let body = self.fetcher.fetch_text(&path).await?;
        Ok(TrustedMarkup::from_site(body))
    }

    /// Run the page-load sequence, writing into `page`
    pub async fn load(&self, query: &PageQuery, page: &mut Page) -> FragmentOutcome {
        let slug = self.resolve(query).to_string();
        let path = self.path_for(&slug);

        match self.fetch_fragment(&slug).await {
            Ok(markup) => {
                tracing::info!(slug = %slug, path = %path, "fragment loaded");
                page.set_markup(Region::ProjectContent, markup.into_inner());
                FragmentOutcome::Injected { slug, path }
            }
            Err(e) => {
                tracing::error!(slug = %slug, path = %path, error = %e, "fragment unavailable");
                page.set_markup(Region::ProjectContent, error_markup(&slug));
                FragmentOutcome::Failed {
                    slug,
                    path,
                    message: e.to_string(),
                }
            }
        }
    }

    /// Fetch every canonical slug's fragment concurrently
    ///
    /// Results come back in slug order.
    pub async fn check_fragments(&self) -> Vec<FragmentCheck> {
        let checks = self.aliases.canonical_slugs().into_iter().map(move |slug| async move {
            let path = self.path_for(slug);
            let error = self.fetcher.fetch_text(&path).await.err();
            if let Some(e) = &error {
                tracing::warn!(slug = %slug, error = %e, "fragment missing");
            }
            FragmentCheck {
                slug: slug.to_string(),
                path,
                error,
            }
        });
        join_all(checks).await
    }
}
