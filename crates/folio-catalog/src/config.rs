//! Catalog page configuration

use crate::error::CatalogError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Catalog loader configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Primary catalog location, relative to the page
    pub path: String,
    /// Alternates tried in order after the primary fails
    pub fallbacks: Vec<String>,
    /// Cards per page; the visible window grows by this much per "load more"
    pub page_size: usize,
    /// Per-card insertion delay for the cascade effect
    pub animation_delay_ms: u64,
    /// Query parameter holding the initial filter token
    pub filter_param: String,
}

impl CatalogConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With page size
    #[inline]
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// With primary path
    #[inline]
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// With fallback paths (replacing the defaults)
    #[must_use]
    pub fn with_fallbacks<I, S>(mut self, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fallbacks = fallbacks.into_iter().map(Into::into).collect();
        self
    }

    /// With filter query parameter name
    #[inline]
    #[must_use]
    pub fn with_filter_param(mut self, param: impl Into<String>) -> Self {
        self.filter_param = param.into();
        self
    }

    /// Cascade delay as a duration
    #[inline]
    #[must_use]
    pub fn animation_delay(&self) -> Duration {
        Duration::from_millis(self.animation_delay_ms)
    }

    /// File name of the catalog, for user-facing messages
    #[must_use]
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }

    /// Check invariants
    ///
    /// # Errors
    /// `CatalogError::InvalidConfig` for a zero page size or empty path
    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.page_size == 0 {
            return Err(CatalogError::InvalidConfig(
                "page_size must be at least 1".to_string(),
            ));
        }
        if self.path.trim().is_empty() {
            return Err(CatalogError::InvalidConfig(
                "catalog path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            path: "assets/data/projects.json".to_string(),
            fallbacks: vec![
                "./assets/data/projects.json".to_string(),
                "../assets/data/projects.json".to_string(),
                "/assets/data/projects.json".to_string(),
            ],
            page_size: 6,
            animation_delay_ms: 100,
            filter_param: "category".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_site_layout() {
        let config = CatalogConfig::default();
        assert_eq!(config.page_size, 6);
        assert_eq!(config.fallbacks.len(), 3);
        assert_eq!(config.file_name(), "projects.json");
        assert_eq!(config.animation_delay(), Duration::from_millis(100));
        config.validate().unwrap();
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = CatalogConfig::new().with_page_size(0).validate().unwrap_err();
        assert!(err.to_string().contains("page_size"));
    }

    #[test]
    fn missing_fields_take_defaults() {
        let config: CatalogConfig =
            serde_json::from_str(r#"{"page_size": 9, "filter_param": "project_type"}"#).unwrap();
        assert_eq!(config.page_size, 9);
        assert_eq!(config.filter_param, "project_type");
        assert_eq!(config.path, "assets/data/projects.json");
    }
}
