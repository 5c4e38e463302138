//! Error types for the catalog

use folio_fetch::FetchError;

/// Catalog errors
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Configuration rejected before loading
    #[error("invalid catalog configuration: {0}")]
    InvalidConfig(String),

    /// Catalog could not be fetched from any source
    #[error("catalog unavailable: {0}")]
    Fetch(#[from] FetchError),
}

impl CatalogError {
    /// Whether the error came from fetching rather than configuration
    #[inline]
    #[must_use]
    pub fn is_fetch(&self) -> bool {
        matches!(self, Self::Fetch(_))
    }
}
