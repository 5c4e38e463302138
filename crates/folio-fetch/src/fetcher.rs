//! The fetch seam shared by all loaders

use crate::error::FetchError;
use async_trait::async_trait;
use std::sync::Arc;

/// Read-only access to site resources by page-relative path
///
/// Paths follow browser URL resolution relative to the current page:
/// `assets/x.json`, `./assets/x.json`, `../assets/x.json` and
/// `/assets/x.json` are all accepted.
#[async_trait]
pub trait ResourceFetcher: Send + Sync {
    /// Fetch a resource body as text
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError>;

    /// Human-readable site root, for logs
    fn describe(&self) -> String;
}

#[async_trait]
impl<T> ResourceFetcher for Arc<T>
where
    T: ResourceFetcher + ?Sized,
{
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        (**self).fetch_text(path).await
    }

    fn describe(&self) -> String {
        (**self).describe()
    }
}
