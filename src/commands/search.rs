//! Search command - Find posts by title, excerpt or tag

use anyhow::Result;
use owo_colors::OwoColorize;
use std::path::Path;

use chronicle::catalog::{search, Catalog, Highlighted, SearchOutcome};

use super::utils;

/// Execute the search command and return formatted output
pub fn execute(catalog_path: Option<&Path>, query: &str) -> Result<String> {
    let catalog = utils::load_catalog(catalog_path)?;
    Ok(render(&catalog, query, true))
}

/// Render search results; `color` marks matches in reverse video
pub fn render(catalog: &Catalog, query: &str, color: bool) -> String {
    match search(catalog, query) {
        SearchOutcome::EmptyQuery => "Start typing to search...".to_string(),
        SearchOutcome::NoResults => "No posts found".to_string(),
        SearchOutcome::Matches(hits) => {
            let mut lines = vec![];
            for hit in &hits {
                let title = mark(&hit.title, color);
                lines.push(if color { title.bold().to_string() } else { title });
                if !hit.excerpt.segments().is_empty() {
                    lines.push(format!("  {}", mark(&hit.excerpt, color)));
                }
                lines.push(format!("  {}", dim(&hit.post.slug, color)));
                lines.push(String::new());
            }
            lines.pop();
            lines.join("\n")
        }
    }
}

fn dim(text: &str, color: bool) -> String {
    if color {
        text.dimmed().to_string()
    } else {
        text.to_string()
    }
}

fn mark(text: &Highlighted<'_>, color: bool) -> String {
    if color {
        text.segments()
            .iter()
            .map(|s| {
                if s.matched {
                    s.text.reversed().to_string()
                } else {
                    s.text.to_string()
                }
            })
            .collect()
    } else {
        text.render_with("[", "]")
    }
}
