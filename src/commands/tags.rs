//! Tags command - Show catalog statistics and available tag filters

use anyhow::Result;
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::path::Path;

use chronicle::catalog::stats::{format_views, tag_counts};
use chronicle::catalog::{Catalog, CatalogStats};
use chronicle::config;

use super::utils;

/// Execute the tags command and return formatted output
pub fn execute(catalog_path: Option<&Path>, all: bool) -> Result<String> {
    let catalog = utils::load_catalog(catalog_path)?;
    Ok(render(&catalog, all))
}

/// Render the stats header and the tag table
///
/// Only the first [`config::TAG_CHIP_LIMIT`] tags are listed unless `all`.
pub fn render(catalog: &Catalog, all: bool) -> String {
    let stats = CatalogStats::collect(catalog);

    let mut lines = vec![];
    lines.push(format!("Posts: {}", stats.post_count));
    lines.push(format!("Total Reads: {}", format_views(stats.total_views)));
    lines.push(format!("Tags: {}", stats.tag_count));

    let counts = tag_counts(catalog);
    let shown = if all {
        counts.len()
    } else {
        counts.len().min(config::TAG_CHIP_LIMIT)
    };

    if shown > 0 {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![Cell::new("Tag"), Cell::new("Posts")]);
        for (tag, count) in &counts[..shown] {
            table.add_row(vec![Cell::new(tag), Cell::new(count)]);
        }

        lines.push(String::new());
        lines.push(table.to_string());
    }

    if shown < counts.len() {
        lines.push(format!(
            "Showing {} of {} tags (use --all to list every tag)",
            shown,
            counts.len()
        ));
    }

    lines.join("\n")
}
