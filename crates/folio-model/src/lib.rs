//! Folio Model
//!
//! Shared data types for the portfolio loaders:
//! - Catalog records and the catalog document (array or keyed object)
//! - Project detail records with per-field tolerant extraction
//! - The page model: named regions a loader writes into
//! - Query-string access for page parameters
//! - The static slug alias table
//!
//! # Example
//!
//! ```rust
//! use folio_model::{AliasTable, PageQuery};
//!
//! let query = PageQuery::parse("?id=reparacion");
//! let slug = AliasTable::builtin().resolve(query.get("id").unwrap_or("ecobikes"));
//! assert_eq!(slug, "tecnicos");
//! ```

#![warn(unreachable_pub)]
#![allow(missing_docs)]

pub mod alias;
pub mod detail;
pub mod error;
pub mod markup;
pub mod page;
pub mod project;
pub mod query;

mod lenient;

pub use alias::AliasTable;
pub use detail::{DetailDocument, ProjectDetail};
pub use error::ModelError;
pub use markup::escape_html;
pub use page::{Content, Page, Region, RegionState};
pub use project::{CatalogDocument, ProjectId, ProjectRecord};
pub use query::PageQuery;

/// Filter token that selects the whole catalog
pub const FILTER_ALL: &str = "all";

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
