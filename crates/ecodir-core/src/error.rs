//! Error types for Ecosystem Directory

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading or validating a catalog
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Catalog file could not be read
    #[error("Failed to read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Catalog JSON is malformed
    #[error("Invalid catalog JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The first tag must be the "all" sentinel
    #[error("Catalog tag list must start with the \"all\" tag")]
    MissingSentinel,

    /// Two tags share the same identifier
    #[error("Duplicate tag identifier: {0}")]
    DuplicateTag(String),

    /// A project lists the "all" sentinel among its tags
    #[error("Project '{0}' lists the \"all\" tag, which is reserved for the UI")]
    SentinelInProject(String),
}

/// Errors raised while loading translations
#[derive(Error, Debug)]
pub enum TranslationError {
    #[error("Failed to read translations {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid translations JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Invalid directory configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Page size of zero would never load anything
    #[error("Page size must be at least 1")]
    ZeroPageSize,

    /// Locale identifier is empty
    #[error("Locale must not be empty")]
    EmptyLocale,
}

/// Main error type for Ecosystem Directory operations
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Translation(#[from] TranslationError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Result type alias for Ecosystem Directory operations
pub type Result<T> = std::result::Result<T, DirectoryError>;
