//! Shared utilities for commands

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::path::Path;

use chronicle::catalog::Catalog;
use chronicle::config;

/// Short date used on cards: `Jan 5, 2024`
pub fn format_date_short(date: &DateTime<Utc>) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Long date used on the article page: `January 5, 2024`
pub fn format_date_long(date: &DateTime<Utc>) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Resolve and load the catalog for a command
pub fn load_catalog(explicit: Option<&Path>) -> Result<Catalog> {
    let cwd = std::env::current_dir().context("Failed to get current directory")?;
    let path = config::resolve_catalog_path(explicit, &cwd)
        .context("Failed to determine catalog location")?;

    Catalog::load(&path).with_context(|| format!("Failed to load catalog: {}", path.display()))
}

/// Truncate to `max` chars, appending an ellipsis when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let cut: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}
