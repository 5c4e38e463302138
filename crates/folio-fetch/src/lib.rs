//! Folio Fetch
//!
//! Read-only access to a portfolio site's resources:
//! - [`ResourceFetcher`]: the async seam every loader fetches through
//! - [`HttpFetcher`]: a deployed site, over HTTP
//! - [`FileFetcher`]: a site directory on disk
//! - [`SourceChain`]: ordered fallback paths, first success wins
//!
//! There are no retries beyond the fallback list and no timeouts beyond the
//! transport's defaults.
//!
//! # Example
//!
//! ```rust,ignore
//! use folio_fetch::{FileFetcher, SourceChain};
//!
//! # async fn example() -> Result<(), folio_fetch::FetchError> {
//! let fetcher = FileFetcher::new("site");
//! let chain = SourceChain::new("assets/data/projects.json")
//!     .with_fallbacks(["../assets/data/projects.json", "/assets/data/projects.json"]);
//!
//! let fetched = chain.fetch_first(&fetcher).await?;
//! println!("loaded {} bytes from {}", fetched.value.len(), fetched.path);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

pub mod error;
pub mod fallback;
pub mod fetcher;
pub mod fs;
pub mod http;

pub use error::{FailedAttempt, FetchError};
pub use fallback::{Fetched, SourceChain};
pub use fetcher::ResourceFetcher;
pub use fs::FileFetcher;
pub use http::HttpFetcher;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
