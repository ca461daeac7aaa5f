//! Directory context for the component tree.
//!
//! The catalog and translations are loaded once in `main` and provided to
//! every component through `use_context`.
//!
//! ## Usage
//!
//! ```ignore
//! // In child components
//! let catalog = use_catalog();
//! let t = use_translations();
//! ```

use std::sync::Arc;

use dioxus::prelude::*;
use ecodir_core::{Catalog, Translations};

/// Read-only data shared by all components.
#[derive(Clone, Debug)]
pub struct Directory {
    pub catalog: Arc<Catalog>,
    pub translations: Arc<Translations>,
    /// Projects loaded per scroll step
    pub page_size: usize,
}

impl Default for Directory {
    /// Bundled English directory, used if `main` did not load one
    fn default() -> Self {
        let catalog = Catalog::bundled().unwrap_or_else(|e| {
            tracing::error!("Bundled catalog is invalid: {}", e);
            Catalog {
                tags: vec![ecodir_core::Tag::all()],
                projects: Vec::new(),
            }
        });
        Self {
            catalog: Arc::new(catalog),
            translations: Arc::new(Translations::bundled("en")),
            page_size: ecodir_core::DEFAULT_PAGE_SIZE,
        }
    }
}

/// Get the directory loaded at startup, or the bundled one.
pub fn get_directory() -> Directory {
    crate::get_directory().unwrap_or_default()
}

/// Hook to access the catalog from context.
pub fn use_catalog() -> Arc<Catalog> {
    use_context::<Directory>().catalog
}

/// Hook to access the translations from context.
pub fn use_translations() -> Arc<Translations> {
    use_context::<Directory>().translations
}

/// Hook to access the configured page size.
pub fn use_page_size() -> usize {
    use_context::<Directory>().page_size
}
