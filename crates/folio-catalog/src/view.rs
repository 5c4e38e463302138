//! Derived catalog view
//!
//! The filtered set is a single-predicate partition of the full catalog on
//! the `type` field (narrowed further by an active search). The visible window
//! is its first `page * page_size` records.

use crate::state::{CatalogState, LoadPhase};
use folio_model::{ProjectRecord, FILTER_ALL};

/// Whether a record passes a filter token
///
/// `all` passes everything; any other token must equal the record's type
/// exactly (case-sensitive, no trimming).
#[inline]
#[must_use]
pub fn matches_filter(record: &ProjectRecord, token: &str) -> bool {
    token == FILTER_ALL || record.kind == token
}

/// Whether a record matches a lower-cased search needle
///
/// Looks in title, description, categories and software.
#[must_use]
pub fn matches_search(record: &ProjectRecord, needle: &str) -> bool {
    let hit = |s: &str| s.to_lowercase().contains(needle);
    hit(&record.title)
        || hit(&record.description)
        || record.categories.iter().any(|c| hit(c))
        || record.software.iter().any(|s| hit(s))
}

/// What the catalog page shows for a given state
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogView<'a> {
    state: &'a CatalogState,
    filtered: Vec<&'a ProjectRecord>,
    window: usize,
}

impl<'a> CatalogView<'a> {
    /// Compute the view for a state
    #[must_use]
    pub fn new(state: &'a CatalogState) -> Self {
        let needle = state.search().map(str::to_lowercase);
        let filtered: Vec<_> = state
            .projects()
            .iter()
            .filter(|record| matches_filter(record, state.filter()))
            .filter(|record| needle.as_deref().map_or(true, |n| matches_search(record, n)))
            .collect();
        let window = state
            .page()
            .saturating_mul(state.page_size())
            .min(filtered.len());

        Self {
            state,
            filtered,
            window,
        }
    }

    /// State this view was derived from
    #[inline]
    #[must_use]
    pub fn state(&self) -> &'a CatalogState {
        self.state
    }

    /// Every record passing the filter (and search)
    #[inline]
    #[must_use]
    pub fn filtered(&self) -> &[&'a ProjectRecord] {
        &self.filtered
    }

    /// Records currently rendered
    #[inline]
    #[must_use]
    pub fn visible(&self) -> &[&'a ProjectRecord] {
        &self.filtered[..self.window]
    }

    /// `min(page * page_size, filtered count)`
    #[inline]
    #[must_use]
    pub fn window_len(&self) -> usize {
        self.window
    }

    /// Shown iff the window is strictly smaller than the filtered set
    #[inline]
    #[must_use]
    pub fn load_more_visible(&self) -> bool {
        self.window < self.filtered.len()
    }

    /// Whether the no-results state applies
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    /// Whether the catalog is available to render
    #[inline]
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self.state.phase(), LoadPhase::Ready)
    }
}
