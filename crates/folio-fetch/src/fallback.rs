//! Ordered fallback sources
//!
//! A [`SourceChain`] holds a primary path followed by alternates. Fetching
//! tries them strictly in order; attempt N+1 starts only after attempt N has
//! failed. The first success wins. If every path fails, the result is
//! [`FetchError::Exhausted`] carrying each attempt's failure.
//!
//! A body that arrives but fails to decode counts as a failed attempt, so a
//! stale or truncated copy at the primary path does not stop the search.

use crate::error::{FailedAttempt, FetchError};
use crate::fetcher::ResourceFetcher;
use std::fmt::Display;

/// Result of a successful chain fetch
#[derive(Debug, Clone, PartialEq)]
pub struct Fetched<T> {
    /// Path that succeeded
    pub path: String,
    /// Zero-based position of that path in the chain
    pub attempt: usize,
    /// Decoded body
    pub value: T,
}

/// Primary path plus ordered alternates
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceChain {
    paths: Vec<String>,
}

impl SourceChain {
    /// Chain with only a primary path
    #[inline]
    #[must_use]
    pub fn new(primary: impl Into<String>) -> Self {
        Self {
            paths: vec![primary.into()],
        }
    }

    /// Append alternates, tried after everything already in the chain
    #[must_use]
    pub fn with_fallbacks<I, S>(mut self, fallbacks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.paths.extend(fallbacks.into_iter().map(Into::into));
        self
    }

    /// Paths in attempt order
    #[inline]
    #[must_use]
    pub fn paths(&self) -> &[String] {
        &self.paths
    }

    /// Fetch the first path that yields a body
    ///
    /// # Errors
    /// `FetchError::Exhausted` when every path fails
    pub async fn fetch_first<F>(&self, fetcher: &F) -> Result<Fetched<String>, FetchError>
    where
        F: ResourceFetcher + ?Sized,
    {
        self.fetch_first_with(fetcher, |body| Ok::<_, std::convert::Infallible>(body.to_string()))
            .await
    }

    /// Fetch and decode the first path whose body decodes
    ///
    /// # Errors
    /// `FetchError::Exhausted` when every path fails to fetch or decode
    pub async fn fetch_first_with<F, T, E, D>(
        &self,
        fetcher: &F,
        decode: D,
    ) -> Result<Fetched<T>, FetchError>
    where
        F: ResourceFetcher + ?Sized,
        D: Fn(&str) -> Result<T, E>,
        E: Display,
    {
        let mut attempts = Vec::with_capacity(self.paths.len());

        for (index, path) in self.paths.iter().enumerate() {
            tracing::debug!(path = %path, attempt = index + 1, "trying source");

            let error = match fetcher.fetch_text(path).await {
                Ok(body) => match decode(&body) {
                    Ok(value) => {
                        if index > 0 {
                            tracing::info!(path = %path, "loaded from fallback source");
                        }
                        return Ok(Fetched {
                            path: path.clone(),
                            attempt: index,
                            value,
                        });
                    }
                    Err(e) => FetchError::Decode {
                        path: path.clone(),
                        message: e.to_string(),
                    },
                },
                Err(e) => e,
            };

            tracing::warn!(path = %path, error = %error, "source failed");
            attempts.push(FailedAttempt {
                path: path.clone(),
                error,
            });
        }

        Err(FetchError::Exhausted { attempts })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_preserves_order() {
        let chain = SourceChain::new("a.json").with_fallbacks(["b.json", "c.json"]);
        assert_eq!(chain.paths(), &["a.json", "b.json", "c.json"]);
    }

    #[test]
    fn empty_fallbacks_keep_primary_only() {
        let chain = SourceChain::new("a.json").with_fallbacks(Vec::<String>::new());
        assert_eq!(chain.paths().len(), 1);
    }
}
