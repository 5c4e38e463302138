//! Choosing where site resources come from

use anyhow::Context;
use folio_fetch::{FileFetcher, HttpFetcher, ResourceFetcher};
use std::path::PathBuf;
use std::sync::Arc;

/// Where the site lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteSource {
    /// Local directory, with the page served from `page_dir` inside it
    Dir {
        /// Site root
        root: PathBuf,
        /// Directory of the page, relative to the root
        page_dir: String,
    },
    /// Page URL; resources are resolved against it
    Url(String),
}

impl SiteSource {
    /// Build the fetcher for this source
    ///
    /// # Errors
    /// Fails if the URL cannot be parsed
    pub fn fetcher(&self) -> anyhow::Result<Arc<dyn ResourceFetcher>> {
        match self {
            Self::Dir { root, page_dir } => {
                Ok(Arc::new(FileFetcher::new(root.clone()).with_page_dir(page_dir.as_str())))
            }
            Self::Url(url) => {
                let fetcher =
                    HttpFetcher::parse(url).with_context(|| format!("bad base URL {url}"))?;
                Ok(Arc::new(fetcher))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_source_describes_page() {
        let source = SiteSource::Url("https://example.com/portfolio/".to_string());
        let fetcher = source.fetcher().unwrap();
        assert_eq!(fetcher.describe(), "https://example.com/portfolio/");
    }

    #[test]
    fn bad_url_is_rejected() {
        assert!(SiteSource::Url("not a url".to_string()).fetcher().is_err());
    }
}
