//! Folio Catalog
//!
//! The project grid of the portfolio site:
//! - Fetch the catalog through an ordered chain of fallback paths
//! - Filter by project type, narrow by free-text search
//! - Reveal the filtered set a page at a time behind "load more"
//! - Render cards, the empty state and the terminal error state
//!
//! State changes go through [`reduce`]; [`render`] redraws the page from the
//! resulting state.
//!
//! # Example
//!
//! ```rust
//! use folio_catalog::{reduce, CatalogAction, CatalogState};
//! use folio_model::ProjectRecord;
//!
//! let records = (1..=14u64).map(|id| ProjectRecord::new(id, "web")).collect();
//! let state = reduce(&CatalogState::new(6), CatalogAction::Loaded(records));
//! assert_eq!(state.view().window_len(), 6);
//!
//! let state = reduce(&state, CatalogAction::LoadMore);
//! assert_eq!(state.view().window_len(), 12);
//! ```

#![warn(unreachable_pub)]

pub mod card;
pub mod config;
pub mod error;
pub mod loader;
pub mod render;
pub mod state;
pub mod view;

pub use card::{card_markup, card_slots, format_date, CardSlot};
pub use config::CatalogConfig;
pub use error::CatalogError;
pub use loader::{CatalogLoader, CatalogSession};
pub use render::render;
pub use state::{reduce, CatalogAction, CatalogState, LoadPhase};
pub use view::{matches_filter, matches_search, CatalogView};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
