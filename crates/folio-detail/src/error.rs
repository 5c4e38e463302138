//! Error types for the detail loaders

use folio_fetch::FetchError;
use folio_model::ModelError;

/// Detail loader errors
#[derive(Debug, thiserror::Error)]
pub enum DetailError {
    /// Configuration rejected before loading
    #[error("invalid detail configuration: {0}")]
    InvalidConfig(String),

    /// Resource could not be fetched
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// Detail document could not be interpreted
    #[error("detail document unreadable: {0}")]
    Model(#[from] ModelError),
}

impl DetailError {
    /// Whether the resource simply does not exist
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Fetch(e) if e.is_not_found())
    }
}
