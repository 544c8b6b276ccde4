//! Show command - Display a single post and its related posts

use anyhow::{bail, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use std::path::Path;

use chronicle::catalog::{related_posts, Catalog};

use super::utils;

/// Execute the show command and return formatted output
pub fn execute(catalog_path: Option<&Path>, slug: &str, related: usize) -> Result<String> {
    let catalog = utils::load_catalog(catalog_path)?;
    render(&catalog, slug, related)
}

/// Render the article header and related posts for `slug`
pub fn render(catalog: &Catalog, slug: &str, related: usize) -> Result<String> {
    let Some(post) = catalog.find_by_slug(slug) else {
        bail!("No post with slug '{}'", slug);
    };

    let mut lines = vec![];

    lines.push(post.title.clone());
    lines.push("=".repeat(post.title.chars().count()));

    let mut meta = vec![];
    if !post.author.name.is_empty() {
        meta.push(post.author.name.clone());
    }
    meta.push(utils::format_date_long(&post.date));
    if let Some(read_time) = &post.read_time {
        meta.push(read_time.clone());
    }
    meta.push(format!("{} words", post.word_count()));
    lines.push(meta.join(" · "));

    if !post.tags.is_empty() {
        lines.push(format!("Tags: {}", post.tags.join(", ")));
    }

    if !post.excerpt.is_empty() {
        lines.push(String::new());
        lines.push(post.excerpt.clone());
    }

    let related = related_posts(catalog, post, related);
    if !related.is_empty() {
        let mut table = Table::new();
        table
            .load_preset(UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec![
            Cell::new("Tag"),
            Cell::new("Title"),
            Cell::new("Date"),
            Cell::new("Slug"),
        ]);
        for p in &related {
            table.add_row(vec![
                Cell::new(p.primary_tag().unwrap_or("-")),
                Cell::new(utils::truncate(&p.title, 48)),
                Cell::new(utils::format_date_long(&p.date)),
                Cell::new(&p.slug),
            ]);
        }

        lines.push(String::new());
        lines.push("Related posts".to_string());
        lines.push(table.to_string());
    }

    Ok(lines.join("\n"))
}
