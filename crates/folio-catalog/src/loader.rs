//! Catalog loader: fetch through the fallback chain, then drive the page

use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::render::render;
use crate::state::{reduce, CatalogAction, CatalogState};
use crate::view::CatalogView;
use folio_fetch::{Fetched, ResourceFetcher, SourceChain};
use folio_model::{CatalogDocument, Page, PageQuery, ProjectRecord, FILTER_ALL};

/// Loads the catalog and hands back an interactive session
#[derive(Debug)]
pub struct CatalogLoader<F> {
    fetcher: F,
    config: CatalogConfig,
}

impl<F: ResourceFetcher> CatalogLoader<F> {
    /// Create a loader
    ///
    /// # Errors
    /// `CatalogError::InvalidConfig` if the configuration is unusable
    pub fn new(fetcher: F, config: CatalogConfig) -> Result<Self, CatalogError> {
        config.validate()?;
        Ok(Self { fetcher, config })
    }

    /// Loader configuration
    #[inline]
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// Primary path followed by the configured fallbacks
    #[must_use]
    pub fn chain(&self) -> SourceChain {
        SourceChain::new(self.config.path.as_str()).with_fallbacks(self.config.fallbacks.iter().cloned())
    }

    /// Filter token requested by the page URL, `all` when absent
    #[must_use]
    pub fn initial_filter<'q>(&self, query: &'q PageQuery) -> &'q str {
        query.get_or(&self.config.filter_param, FILTER_ALL)
    }

    /// Fetch and decode the catalog from the first working source
    ///
    /// # Errors
    /// `CatalogError::Fetch` when no source yields a decodable catalog
    pub async fn fetch_catalog(&self) -> Result<Fetched<Vec<ProjectRecord>>, CatalogError> {
        let fetched = self
            .chain()
            .fetch_first_with(&self.fetcher, CatalogDocument::parse)
            .await?;

        Ok(Fetched {
            path: fetched.path,
            attempt: fetched.attempt,
            value: fetched.value.into_records(),
        })
    }

    /// Run the page-load sequence
    ///
    /// Never fails: a catalog that cannot be fetched ends in the terminal
    /// error state, rendered into the grid.
    pub async fn load(&self, query: &PageQuery) -> CatalogSession {
        let mut session = CatalogSession::new(self.config.clone());
        session.dispatch(CatalogAction::StartLoading);

        match self.fetch_catalog().await {
            Ok(fetched) => {
                tracing::info!(
                    path = %fetched.path,
                    projects = fetched.value.len(),
                    "catalog loaded"
                );
                session.dispatch(CatalogAction::Loaded(fetched.value));
                session.dispatch(CatalogAction::SetFilter(self.initial_filter(query).to_string()));
            }
            Err(e) => {
                tracing::error!(
                    fetcher = %self.fetcher.describe(),
                    error = %e,
                    "catalog unavailable"
                );
                session.dispatch(CatalogAction::LoadFailed(format!(
                    "No se pudo cargar {} desde ninguna ruta.",
                    self.config.file_name()
                )));
            }
        }

        session
    }
}

/// A loaded catalog page
///
/// Every dispatched action is reduced into a new state and the page is
/// re-rendered from it.
#[derive(Debug, Clone)]
pub struct CatalogSession {
    state: CatalogState,
    page: Page,
    config: CatalogConfig,
}

impl CatalogSession {
    /// Fresh session with nothing loaded
    #[must_use]
    pub fn new(config: CatalogConfig) -> Self {
        Self {
            state: CatalogState::new(config.page_size),
            page: Page::new(),
            config,
        }
    }

    /// Apply an action and redraw
    pub fn dispatch(&mut self, action: CatalogAction) {
        tracing::trace!(?action, "dispatch");
        self.state = reduce(&self.state, action);
        render(&self.state, &mut self.page, self.config.animation_delay());
    }

    /// Current state
    #[inline]
    #[must_use]
    pub fn state(&self) -> &CatalogState {
        &self.state
    }

    /// Current page
    #[inline]
    #[must_use]
    pub fn page(&self) -> &Page {
        &self.page
    }

    /// Derived view of the current state
    #[inline]
    #[must_use]
    pub fn view(&self) -> CatalogView<'_> {
        self.state.view()
    }

    /// Give up the session, keeping the page
    #[must_use]
    pub fn into_page(self) -> Page {
        self.page
    }
}
