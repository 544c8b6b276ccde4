//! Catalog location and display defaults

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Environment variable overriding the catalog location
pub const CATALOG_ENV: &str = "CHRONICLE_CATALOG";

/// Posts revealed per "load more" step
pub const DEFAULT_PAGE_SIZE: usize = 6;

/// Search results shown at once
pub const SEARCH_LIMIT: usize = 5;

/// Related posts shown under an article
pub const RELATED_LIMIT: usize = 3;

/// Tag chips offered in the filter bar
pub const TAG_CHIP_LIMIT: usize = 8;

/// Catalog path relative to the site root, as fetched by the pages
pub const SITE_CATALOG_PATH: &str = "data/posts.json";

/// Get the per-user catalog location
/// - macOS: ~/Library/Application Support/chronicle/posts.json
/// - Linux: ~/.local/share/chronicle/posts.json
/// - Windows: %APPDATA%/chronicle/posts.json
pub fn user_catalog_path() -> Result<PathBuf> {
    let data = dirs::data_dir().context("Could not determine data directory")?;
    Ok(data.join("chronicle").join("posts.json"))
}

/// Resolve which catalog file to read
///
/// An explicit path wins. Otherwise the site layout under `site_root` is
/// tried before the per-user location.
pub fn resolve_catalog_path(explicit: Option<&Path>, site_root: &Path) -> Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path.to_path_buf());
    }

    let site_catalog = site_root.join(SITE_CATALOG_PATH);
    if site_catalog.exists() {
        return Ok(site_catalog);
    }

    user_catalog_path()
}
