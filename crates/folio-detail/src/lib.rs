//! Folio Detail
//!
//! Project detail pages, in two flavours:
//! - [`JsonDetailLoader`] looks the page's identifier up in a JSON mapping
//!   and writes each field into its own region.
//! - [`FragmentLoader`] resolves the identifier through the alias table and
//!   injects the project's pre-built HTML fragment.
//!
//! Neither loader fails the page: every outcome ends in written regions plus
//! a log line.

#![warn(unreachable_pub)]

pub mod config;
pub mod error;
pub mod fragment;
pub mod json;

pub use config::DetailConfig;
pub use error::DetailError;
pub use fragment::{fragment_path, FragmentCheck, FragmentLoader, FragmentOutcome, TrustedMarkup};
pub use json::{render_detail, DetailOutcome, JsonDetailLoader};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
