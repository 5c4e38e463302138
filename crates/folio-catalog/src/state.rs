//! Catalog render state and its reducer
//!
//! All catalog interaction is expressed as [`CatalogAction`]s folded into an
//! immutable [`CatalogState`] by [`reduce`]. Rendering is a separate pass over
//! the resulting state (see [`crate::render`]), so every transition can be
//! tested without a page.

use crate::view::CatalogView;
use folio_model::{ProjectRecord, FILTER_ALL};
use std::sync::Arc;

/// Where the catalog fetch stands
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadPhase {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Fetch in flight
    Loading,
    /// Catalog available
    Ready,
    /// Every source failed; terminal for this page load
    Failed {
        /// User-facing message
        message: String,
    },
}

/// Inputs to the catalog state machine
#[derive(Debug, Clone, PartialEq)]
pub enum CatalogAction {
    /// Fetch started
    StartLoading,
    /// Catalog fetched
    Loaded(Vec<ProjectRecord>),
    /// Catalog unavailable
    LoadFailed(String),
    /// Filter button (or URL parameter) selected a token
    SetFilter(String),
    /// "Load more" activated
    LoadMore,
    /// Free-text search within the current filter
    Search(String),
    /// Reset filter and search
    ClearFilters,
}

/// Snapshot of the catalog page's state
///
/// Cheap to clone: the full catalog is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogState {
    projects: Arc<Vec<ProjectRecord>>,
    filter: String,
    page: usize,
    page_size: usize,
    search: Option<String>,
    phase: LoadPhase,
}

impl CatalogState {
    /// Empty state showing `all`, page 1
    ///
    /// A `page_size` of zero is treated as 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            projects: Arc::new(Vec::new()),
            filter: FILTER_ALL.to_string(),
            page: 1,
            page_size: page_size.max(1),
            search: None,
            phase: LoadPhase::Idle,
        }
    }

    /// Full, unfiltered catalog
    #[inline]
    #[must_use]
    pub fn projects(&self) -> &[ProjectRecord] {
        &self.projects
    }

    /// Active filter token
    #[inline]
    #[must_use]
    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// Current page, 1-based
    #[inline]
    #[must_use]
    pub fn page(&self) -> usize {
        self.page
    }

    /// Cards per page
    #[inline]
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Active search text, if any
    #[inline]
    #[must_use]
    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    /// Fetch phase
    #[inline]
    #[must_use]
    pub fn phase(&self) -> &LoadPhase {
        &self.phase
    }

    /// Derived view: filtered set and visible window
    #[inline]
    #[must_use]
    pub fn view(&self) -> CatalogView<'_> {
        CatalogView::new(self)
    }
}

/// Apply one action, producing the next state
///
/// - Any filter, search or clear resets the page to 1.
/// - `LoadMore` advances the page only while the load-more control would be
///   shown; otherwise the state is returned unchanged.
/// - A blank search removes the search and re-applies the current filter.
#[must_use]
pub fn reduce(state: &CatalogState, action: CatalogAction) -> CatalogState {
    let mut next = state.clone();
    match action {
        CatalogAction::StartLoading => {
            next.phase = LoadPhase::Loading;
        }
        CatalogAction::Loaded(projects) => {
            next.projects = Arc::new(projects);
            next.phase = LoadPhase::Ready;
            next.page = 1;
        }
        CatalogAction::LoadFailed(message) => {
            next.phase = LoadPhase::Failed { message };
        }
        CatalogAction::SetFilter(token) => {
            next.filter = token;
            next.search = None;
            next.page = 1;
        }
        CatalogAction::LoadMore => {
            if state.view().load_more_visible() {
                next.page += 1;
            }
        }
        CatalogAction::Search(text) => {
            let text = text.trim();
            next.search = (!text.is_empty()).then(|| text.to_string());
            next.page = 1;
        }
        CatalogAction::ClearFilters => {
            next.filter = FILTER_ALL.to_string();
            next.search = None;
            next.page = 1;
        }
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded(records: Vec<ProjectRecord>) -> CatalogState {
        reduce(&CatalogState::new(6), CatalogAction::Loaded(records))
    }

    fn mixed() -> Vec<ProjectRecord> {
        (1..=8u64)
            .map(|id| ProjectRecord::new(id, if id <= 5 { "web" } else { "app" }))
            .collect()
    }

    #[test]
    fn new_state_defaults() {
        let state = CatalogState::new(0);
        assert_eq!(state.filter(), "all");
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 1);
        assert_eq!(state.phase(), &LoadPhase::Idle);
    }

    #[test]
    fn loading_then_loaded() {
        let state = reduce(&CatalogState::new(6), CatalogAction::StartLoading);
        assert_eq!(state.phase(), &LoadPhase::Loading);

        let state = reduce(&state, CatalogAction::Loaded(mixed()));
        assert_eq!(state.phase(), &LoadPhase::Ready);
        assert_eq!(state.projects().len(), 8);
    }

    #[test]
    fn load_failure_is_recorded() {
        let state = reduce(
            &CatalogState::new(6),
            CatalogAction::LoadFailed("sin datos".to_string()),
        );
        assert_eq!(
            state.phase(),
            &LoadPhase::Failed {
                message: "sin datos".to_string()
            }
        );
    }

    #[test]
    fn filter_change_resets_page() {
        let many = (1..=20u64).map(|id| ProjectRecord::new(id, "web")).collect();
        let state = reduce(&loaded(many), CatalogAction::LoadMore);
        assert_eq!(state.page(), 2);

        let state = reduce(&state, CatalogAction::SetFilter("web".to_string()));
        assert_eq!(state.page(), 1);
        assert_eq!(state.filter(), "web");
    }

    #[test]
    fn load_more_is_noop_on_last_page() {
        let state = reduce(&loaded(mixed()), CatalogAction::SetFilter("web".to_string()));
        let after = reduce(&state, CatalogAction::LoadMore);
        assert_eq!(after, state);
    }

    #[test]
    fn reduce_does_not_mutate_input() {
        let state = loaded(mixed());
        let before = state.clone();
        let _ = reduce(&state, CatalogAction::SetFilter("app".to_string()));
        assert_eq!(state, before);
    }

    #[test]
    fn blank_search_clears_search() {
        let state = reduce(&loaded(mixed()), CatalogAction::Search("Proj".to_string()));
        assert_eq!(state.search(), Some("Proj"));

        let state = reduce(&state, CatalogAction::Search("   ".to_string()));
        assert_eq!(state.search(), None);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn set_filter_drops_search() {
        let state = reduce(&loaded(mixed()), CatalogAction::Search("x".to_string()));
        let state = reduce(&state, CatalogAction::SetFilter("app".to_string()));
        assert_eq!(state.search(), None);
    }

    #[test]
    fn clear_filters_restores_all() {
        let state = reduce(&loaded(mixed()), CatalogAction::SetFilter("app".to_string()));
        let state = reduce(&state, CatalogAction::Search("x".to_string()));
        let state = reduce(&state, CatalogAction::ClearFilters);
        assert_eq!(state.filter(), "all");
        assert_eq!(state.search(), None);
        assert_eq!(state.page(), 1);
    }
}
