//! Detail page configuration

use crate::error::DetailError;
use serde::{Deserialize, Serialize};

/// Configuration shared by both detail loaders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetailConfig {
    /// Location of the id → detail mapping
    pub data_path: String,
    /// Directory holding one `<slug>.html` fragment per project
    pub fragment_dir: String,
    /// Project shown when the page URL names none
    pub default_project_id: String,
    /// Query parameter holding the project identifier
    pub id_param: String,
}

impl DetailConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// With detail document path
    #[inline]
    #[must_use]
    pub fn with_data_path(mut self, path: impl Into<String>) -> Self {
        self.data_path = path.into();
        self
    }

    /// With fragment directory
    #[inline]
    #[must_use]
    pub fn with_fragment_dir(mut self, dir: impl Into<String>) -> Self {
        self.fragment_dir = dir.into();
        self
    }

    /// With default project
    #[inline]
    #[must_use]
    pub fn with_default_project(mut self, id: impl Into<String>) -> Self {
        self.default_project_id = id.into();
        self
    }

    /// Check invariants
    ///
    /// # Errors
    /// `DetailError::InvalidConfig` for an empty default id, data path or
    /// query parameter name
    pub fn validate(&self) -> Result<(), DetailError> {
        let required = [
            ("default_project_id", &self.default_project_id),
            ("data_path", &self.data_path),
            ("id_param", &self.id_param),
        ];
        for (name, value) in required {
            if value.trim().is_empty() {
                return Err(DetailError::InvalidConfig(format!("{name} must not be empty")));
            }
        }
        Ok(())
    }
}

impl Default for DetailConfig {
    fn default() -> Self {
        Self {
            data_path: "assets/data/projects.json".to_string(),
            fragment_dir: "projects".to_string(),
            default_project_id: "ecobikes".to_string(),
            id_param: "id".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DetailConfig::default();
        assert_eq!(config.default_project_id, "ecobikes");
        assert_eq!(config.fragment_dir, "projects");
        config.validate().unwrap();
    }

    #[test]
    fn empty_default_id_is_rejected() {
        let err = DetailConfig::new().with_default_project("  ").validate().unwrap_err();
        assert!(err.to_string().contains("default_project_id"));
    }
}
