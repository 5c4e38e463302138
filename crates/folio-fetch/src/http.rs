//! HTTP fetcher using [`reqwest`]

use crate::error::FetchError;
use crate::fetcher::ResourceFetcher;
use async_trait::async_trait;
use url::Url;

/// Fetches resources over HTTP relative to a page URL
///
/// The page URL plays the role of `window.location`: a directory-style URL
/// (`https://example.com/portfolio/`) or a page (`.../portfolio/index.html`).
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
    page_url: Url,
}

impl HttpFetcher {
    /// Create fetcher with a fresh client
    #[inline]
    #[must_use]
    pub fn new(page_url: Url) -> Self {
        Self::with_client(reqwest::Client::new(), page_url)
    }

    /// Create fetcher reusing an existing client
    #[inline]
    #[must_use]
    pub fn with_client(client: reqwest::Client, page_url: Url) -> Self {
        Self { client, page_url }
    }

    /// Parse the page URL and create a fetcher
    ///
    /// # Errors
    /// `FetchError::InvalidPath` if `page_url` is not an absolute URL
    pub fn parse(page_url: &str) -> Result<Self, FetchError> {
        let url = Url::parse(page_url).map_err(|e| FetchError::InvalidPath {
            path: page_url.to_string(),
            reason: e.to_string(),
        })?;
        Ok(Self::new(url))
    }

    /// Absolute URL for a page-relative path
    ///
    /// # Errors
    /// `FetchError::InvalidPath` if the path cannot be joined
    pub fn resolve(&self, path: &str) -> Result<Url, FetchError> {
        self.page_url.join(path).map_err(|e| FetchError::InvalidPath {
            path: path.to_string(),
            reason: e.to_string(),
        })
    }

    fn ensure_success(
        path: &str,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, FetchError> {
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(FetchError::Status {
                path: path.to_string(),
                status: status.as_u16(),
            })
        }
    }
}

#[async_trait]
impl ResourceFetcher for HttpFetcher {
    async fn fetch_text(&self, path: &str) -> Result<String, FetchError> {
        let url = self.resolve(path)?;
        tracing::debug!(%url, "GET");

        let request_failed = |source| FetchError::Request {
            path: path.to_string(),
            source,
        };

        let response = self.client.get(url).send().await.map_err(request_failed)?;
        let response = Self::ensure_success(path, response)?;
        response.text().await.map_err(request_failed)
    }

    fn describe(&self) -> String {
        self.page_url.to_string()
    }
}
