//! Directory configuration.
//!
//! Catalog and translations are resolved in this order:
//! 1. explicit path (command line)
//! 2. `<config dir>/ecodir/catalog.json` or `<config dir>/ecodir/<locale>.json`
//! 3. bundled data

use std::path::{Path, PathBuf};

use crate::catalog::Catalog;
use crate::error::{ConfigError, Result};
use crate::i18n::Translations;

/// Number of projects loaded per page
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Runtime settings for the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryConfig {
    pub page_size: usize,
    pub locale: String,
    pub catalog_path: Option<PathBuf>,
    pub translations_path: Option<PathBuf>,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            locale: "en".to_string(),
            catalog_path: None,
            translations_path: None,
        }
    }
}

impl DirectoryConfig {
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.locale.trim().is_empty() {
            return Err(ConfigError::EmptyLocale);
        }
        Ok(())
    }

    /// Per-user override directory, if the platform has one
    pub fn user_dir() -> Option<PathBuf> {
        dirs::config_dir().map(|d| d.join("ecodir"))
    }

    pub fn resolve_catalog(&self) -> Result<Catalog> {
        self.resolve_catalog_in(Self::user_dir().as_deref())
    }

    pub fn resolve_translations(&self) -> Result<Translations> {
        self.resolve_translations_in(Self::user_dir().as_deref())
    }

    fn resolve_catalog_in(&self, user_dir: Option<&Path>) -> Result<Catalog> {
        if let Some(path) = &self.catalog_path {
            return Ok(Catalog::load(path)?);
        }
        if let Some(path) = existing(user_dir, "catalog.json") {
            tracing::info!("Using catalog override {:?}", path);
            return Ok(Catalog::load(path)?);
        }
        Ok(Catalog::bundled()?)
    }

    fn resolve_translations_in(&self, user_dir: Option<&Path>) -> Result<Translations> {
        if let Some(path) = &self.translations_path {
            return Ok(Translations::load(path)?);
        }
        if let Some(path) = existing(user_dir, &format!("{}.json", self.locale)) {
            tracing::info!("Using translations override {:?}", path);
            return Ok(Translations::load(path)?);
        }
        Ok(Translations::bundled(&self.locale))
    }
}

fn existing(dir: Option<&Path>, file: &str) -> Option<PathBuf> {
    dir.map(|d| d.join(file)).filter(|p| p.is_file())
}
