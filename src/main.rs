#![allow(non_snake_case)]

mod app;
mod components;
mod context;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use ecodir_core::{DirectoryConfig, DEFAULT_PAGE_SIZE};

use crate::context::Directory;

/// Catalog and translations, loaded before the window opens
static DIRECTORY: OnceLock<Directory> = OnceLock::new();

/// Get the directory loaded at startup
pub fn get_directory() -> Option<Directory> {
    DIRECTORY.get().cloned()
}

/// Ecosystem Directory - browse projects by category and status
#[derive(Parser, Debug)]
#[command(name = "ecodir-desktop")]
#[command(about = "Ecosystem Directory - browse projects by category and status")]
struct Args {
    /// Catalog JSON file (defaults to the user override, then the bundled catalog)
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Locale for page texts and tag labels
    #[arg(short, long, default_value = "en")]
    locale: String,

    /// Translations JSON file (overrides --locale lookup)
    #[arg(short, long)]
    translations: Option<PathBuf>,

    /// Number of projects loaded per scroll step
    #[arg(short, long, default_value_t = DEFAULT_PAGE_SIZE)]
    page_size: usize,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn to_config(&self) -> DirectoryConfig {
        DirectoryConfig {
            page_size: self.page_size,
            locale: self.locale.clone(),
            catalog_path: self.catalog.clone(),
            translations_path: self.translations.clone(),
        }
    }
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn,ecodir=info,ecodir_core=info",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let config = args.to_config();
    config.validate().context("Invalid configuration")?;

    let catalog = config.resolve_catalog().context("Failed to load catalog")?;
    let translations = config
        .resolve_translations()
        .with_context(|| format!("Failed to load translations for '{}'", config.locale))?;

    tracing::info!(
        "Starting with {} projects, locale '{}', page size {}",
        catalog.projects.len(),
        config.locale,
        config.page_size
    );

    let _ = DIRECTORY.set(Directory {
        catalog: Arc::new(catalog),
        translations: Arc::new(translations),
        page_size: config.page_size,
    });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Ecosystem Directory")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
