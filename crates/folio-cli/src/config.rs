//! Site configuration file

use anyhow::Context;
use folio_catalog::CatalogConfig;
use folio_detail::DetailConfig;
use folio_model::AliasTable;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Configuration for every loader on the site
///
/// Sections and keys left out of the file keep their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Catalog page
    pub catalog: CatalogConfig,
    /// Detail pages
    pub detail: DetailConfig,
    /// Aliases layered over the built-in table
    pub aliases: BTreeMap<String, String>,
}

impl SiteConfig {
    /// Create default configuration
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse TOML text
    ///
    /// # Errors
    /// Fails on malformed TOML or mistyped keys
    pub fn from_toml(text: &str) -> anyhow::Result<Self> {
        toml::from_str(text).context("invalid site configuration")
    }

    /// Read and parse a TOML file
    ///
    /// # Errors
    /// Fails if the file cannot be read or parsed
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_toml(&text).with_context(|| format!("in {}", path.display()))
    }

    /// With catalog section
    #[inline]
    #[must_use]
    pub fn with_catalog(mut self, catalog: CatalogConfig) -> Self {
        self.catalog = catalog;
        self
    }

    /// With detail section
    #[inline]
    #[must_use]
    pub fn with_detail(mut self, detail: DetailConfig) -> Self {
        self.detail = detail;
        self
    }

    /// With an extra alias
    #[must_use]
    pub fn with_alias(mut self, alias: impl Into<String>, slug: impl Into<String>) -> Self {
        self.aliases.insert(alias.into(), slug.into());
        self
    }

    /// Built-in alias table with this file's aliases merged in
    ///
    /// # Errors
    /// Fails if an alias points at something other than a canonical slug
    pub fn alias_table(&self) -> anyhow::Result<AliasTable> {
        AliasTable::builtin()
            .merged(self.aliases.iter().map(|(k, v)| (k.as_str(), v.as_str())))
            .context("invalid [aliases] table")
    }
}
