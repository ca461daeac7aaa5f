//! Ecosystem Directory Core Library
//!
//! Catalog model and listing pipeline for the ecosystem directory.
//!
//! ## Overview
//!
//! The directory shows a static catalog of projects filtered by category
//! tag and deployment status, sorted by name and loaded one page at a time
//! as the user scrolls. This crate holds everything that does not depend on
//! rendering:
//!
//! - [`Catalog`]: the validated tag and project records
//! - [`derive_listing`]: the filter, sort, paginate and enrich pipeline
//! - [`ListingState`]: filters, pagination cursor, expanded card and the
//!   infinite-scroll observer handshake
//! - [`Translations`]: localized page texts and tag labels
//!
//! ## Quick Start
//!
//! ```
//! use ecodir_core::{Catalog, ListingState, Status};
//!
//! let catalog = Catalog::bundled().unwrap();
//! let mut state = ListingState::new(10);
//! state.select_status(Status::Live);
//!
//! let listing = state.view(&catalog);
//! assert!(listing.len() <= 10);
//! assert!(listing.items.iter().all(|d| d.project.is_live));
//! ```

pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod listing;
pub mod selection;
pub mod state;
pub mod types;

// Re-exports
pub use catalog::Catalog;
pub use config::{DirectoryConfig, DEFAULT_PAGE_SIZE};
pub use error::{CatalogError, ConfigError, DirectoryError, Result, TranslationError};
pub use i18n::{CommonStrings, Translations};
pub use listing::{derive_listing, Listing, ListingQuery, NameOrder};
pub use selection::TagSelection;
pub use state::{ListingState, ListingView, ObserveTicket};
pub use types::*;
