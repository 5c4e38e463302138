//! Error types for the Folio model

/// Errors raised while decoding site resources or building lookup tables
#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    /// Resource is not valid JSON
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Resource parsed but has the wrong top-level shape
    #[error("unexpected document shape: expected {expected}, found {found}")]
    Shape {
        /// Shape the decoder needed
        expected: &'static str,
        /// Shape that was present
        found: &'static str,
    },

    /// Alias points at something that is not a canonical slug
    #[error("alias `{alias}` targets `{target}`, which is not a canonical slug")]
    InvalidAlias {
        /// Alias key
        alias: String,
        /// Offending target
        target: String,
    },
}

impl ModelError {
    /// Whether the resource body itself was unreadable (as opposed to a table error)
    #[inline]
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Json(_) | Self::Shape { .. })
    }
}
