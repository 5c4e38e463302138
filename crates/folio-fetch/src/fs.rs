//! Filesystem fetcher for a site checked out on disk

use crate::error::FetchError;
use crate::fetcher::ResourceFetcher;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use url::Url;

/// Origin used to normalize paths the way a browser would
const VIRTUAL_ORIGIN: &str = "http://site.invalid/";

/// Serves resources from a directory treated as the site's web root
///
/// Paths resolve against a page directory inside the root (the root itself by
/// default). `..` cannot climb above the root, and `/x` means `<root>/x`,
/// matching how the same paths behave on the deployed site.
#[derive(Debug, Clone)]
pub struct FileFetcher {
    root: PathBuf,
    page_dir: String,
}

impl FileFetcher {
    /// Create fetcher serving `root`, with the page at the root
    #[inline]
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            page_dir: String::new(),
        }
    }

    /// Place the page in a subdirectory of the root (e.g. `blog/`)
    #[must_use]
    pub fn with_page_dir(mut self, dir: impl Into<String>) -> Self {
        let mut dir = dir.into();
        if !dir.is_empty() && !dir.ends_with('/') {
            dir.push('/');
        }
        self.page_dir = dir;
        self
    }

    /// Site root
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Filesystem location for a page-relative path
    ///
    /// # Errors
    /// `FetchError::InvalidPath` if the path cannot be normalized or the root
    /// cannot be expressed as a file URL
    pub fn resolve(&self, path: &str) -> Result<PathBuf, FetchError> {
        let invalid = |reason: String| FetchError::InvalidPath {
            path: path.to_string(),
            reason,
        };

        let site_path = Url::parse(VIRTUAL_ORIGIN)
            .and_then(|origin| origin.join(&self.page_dir))
            .and_then(|page| page.join(path))
            .map_err(|e| invalid(e.to_string()))?;

        let root = if self.root.is_absolute() {
            self.root.clone()
        } else {
            std::env::current_dir()
                .map_err(|e| invalid(e.to_string()))?
                .join(&self.root)
        };
        let root_url = Url::from_directory_path(&root)
            .map_err(|()| invalid(format!("{} is not a usable directory", root.display())))?;

        let relative = site_path.path().trim_start_matches('/');
        root_url
            .join(&format!("./{relative}"))
            .map_err(|e| invalid(e.to_string()))?
            .to_file_path()
            .map_err(|()| invalid("not a local file path".to_string()))
    }
}

#[async_trait]
impl ResourceFetcher for FileFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let file = self.resolve(path)?;
        tracing::debug!(file = %file.display(), "read");

        tokio::fs::read_to_string(&file).await.map_err(|source| {
            if source.kind() == std::io::ErrorKind::NotFound {
                FetchError::NotFound {
                    path: path.to_string(),
                }
            } else {
                FetchError::Io {
                    path: path.to_string(),
                    source,
                }
            }
        })
    }

    fn describe(&self) -> String {
        self.root.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_forms_resolve_inside_root() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FileFetcher::new(dir.path());
        let expected = dir.path().join("assets/data/projects.json");

        for path in [
            "assets/data/projects.json",
            "./assets/data/projects.json",
            "../assets/data/projects.json",
            "/assets/data/projects.json",
        ] {
            assert_eq!(fetcher.resolve(path).unwrap(), expected, "{path}");
        }
    }

    #[test]
    fn page_dir_changes_relative_base() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FileFetcher::new(dir.path()).with_page_dir("blog");

        assert_eq!(
            fetcher.resolve("assets/x.json").unwrap(),
            dir.path().join("blog/assets/x.json")
        );
        assert_eq!(
            fetcher.resolve("../assets/x.json").unwrap(),
            dir.path().join("assets/x.json")
        );
    }

    #[test]
    fn percent_encoded_names_are_decoded() {
        let dir = tempfile::tempdir().unwrap();
        let fetcher = FileFetcher::new(dir.path());
        assert_eq!(
            fetcher.resolve("projects/técnicos.html").unwrap(),
            dir.path().join("projects/técnicos.html")
        );
    }

    #[tokio::test]
    async fn reads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("projects")).unwrap();
        std::fs::write(dir.path().join("projects/viaz.html"), "<h1>Via-Z</h1>").unwrap();

        let body = FileFetcher::new(dir.path())
            .fetch_text("projects/viaz.html")
            .await
            .unwrap();
        assert_eq!(body, "<h1>Via-Z</h1>");
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileFetcher::new(dir.path())
            .fetch_text("projects/nope.html")
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
