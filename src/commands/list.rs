//! List command - Show the post grid for a tag filter and sort order

use anyhow::{Context, Result};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::path::Path;
use url::Url;

use chronicle::catalog::stats::format_views;
use chronicle::catalog::{filter_and_sort, paginate, Catalog, FilterState, SortOrder, TagFilter};

use super::utils;

/// Options for the list command
pub struct ListOptions {
    /// Only show posts with this tag ("all" for every post)
    pub tag: Option<String>,
    /// Sort order
    pub sort: SortOrder,
    /// Number of "load more" pages to reveal
    pub page: usize,
    /// Posts per page
    pub page_size: usize,
    /// Page URL whose `tag` query parameter seeds the filter
    pub url: Option<String>,
}

/// Build the filter state the way the listing page does on load
pub fn build_state(options: &ListOptions) -> Result<FilterState> {
    let mut state = FilterState::new(options.page_size);

    if let Some(ref raw) = options.url {
        let url = Url::parse(raw).with_context(|| format!("Invalid URL: {}", raw))?;
        state.seed_from_url(&url);
    }
    if let Some(ref tag) = options.tag {
        state.set_tag(TagFilter::parse(tag));
    }
    state.set_sort(options.sort);
    state.set_page(options.page);

    Ok(state)
}

/// Execute the list command and return formatted output
pub fn execute(catalog_path: Option<&Path>, options: ListOptions) -> Result<String> {
    let catalog = utils::load_catalog(catalog_path)?;
    let state = build_state(&options)?;
    Ok(render(&catalog, &state))
}

/// Render the hero line, the visible grid and the footer
pub fn render(catalog: &Catalog, state: &FilterState) -> String {
    let posts = filter_and_sort(catalog, state);
    let page = paginate(&posts, state.page(), state.page_size());

    let mut output = String::new();

    if let Some(featured) = catalog.featured() {
        output.push_str(&format!(
            "{} {} ({})\n\n",
            "Featured:".bold(),
            featured.title,
            featured.slug
        ));
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        Cell::new("#"),
        Cell::new("Tag"),
        Cell::new("Title"),
        Cell::new("Date"),
        Cell::new("Read"),
        Cell::new("Views"),
        Cell::new("Slug"),
    ]);

    for (i, post) in page.visible.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("{:02}", i + 1)),
            Cell::new(post.primary_tag().unwrap_or("-")),
            Cell::new(&post.title),
            Cell::new(utils::format_date_short(&post.date)),
            Cell::new(post.read_time.as_deref().unwrap_or("-")),
            Cell::new(format_views(post.views)),
            Cell::new(&post.slug),
        ]);
    }

    output.push_str(&table.to_string());

    let total = posts.len();
    output.push_str(&format!(
        "\n\nTag: {} · Sort: {}\n",
        state.active_tag(),
        state.sort()
    ));
    if page.has_more {
        output.push_str(&format!(
            "Showing {} of {} posts (use --page {} to load more)",
            page.visible.len(),
            total,
            state.page() + 1
        ));
    } else {
        output.push_str(&format!("{} posts found", total));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "posts": [
            { "id": 1, "slug": "easing", "title": "Easing Curves", "date": "2024-01-01", "tags": ["Motion"], "views": 10 },
            { "id": 2, "slug": "grids", "title": "Grid Systems", "date": "2024-02-01", "tags": ["Layout", "CSS"], "views": 2500 },
            { "id": 3, "slug": "hero", "title": "Hero Post", "date": "2023-12-01", "tags": ["Motion"], "featured": true },
            { "id": 4, "slug": "scroll", "title": "Scroll Reveals", "date": "2024-03-01", "tags": ["Motion", "CSS"], "views": 40 }
        ]
    }"#;

    fn options() -> ListOptions {
        ListOptions {
            tag: None,
            sort: SortOrder::Latest,
            page: 1,
            page_size: 6,
            url: None,
        }
    }

    #[test]
    fn test_build_state_from_url() {
        let opts = ListOptions {
            url: Some("https://example.com/blog/?tag=CSS".to_string()),
            page: 3,
            ..options()
        };
        let state = build_state(&opts).unwrap();
        assert_eq!(state.active_tag(), &TagFilter::Tag("CSS".to_string()));
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_explicit_tag_overrides_url() {
        let opts = ListOptions {
            url: Some("https://example.com/blog/?tag=CSS".to_string()),
            tag: Some("all".to_string()),
            ..options()
        };
        let state = build_state(&opts).unwrap();
        assert_eq!(state.active_tag(), &TagFilter::All);
    }

    #[test]
    fn test_build_state_invalid_url() {
        let opts = ListOptions {
            url: Some("not a url".to_string()),
            ..options()
        };
        assert!(build_state(&opts).is_err());
    }

    #[test]
    fn test_render_lists_grid_without_featured() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let output = render(&catalog, &build_state(&options()).unwrap());

        assert!(output.contains("Hero Post"));
        assert!(output.contains("Scroll Reveals"));
        assert!(output.contains("2.5k"));
        assert!(output.contains("3 posts found"));
        // Latest first
        let scroll = output.find("Scroll Reveals").unwrap();
        let grids = output.find("Grid Systems").unwrap();
        assert!(scroll < grids);
    }

    #[test]
    fn test_render_reports_more() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let opts = ListOptions {
            page_size: 2,
            ..options()
        };
        let output = render(&catalog, &build_state(&opts).unwrap());
        assert!(output.contains("Showing 2 of 3 posts"));
        assert!(output.contains("--page 2"));
        assert!(!output.contains("Easing Curves"));
    }

    #[test]
    fn test_render_tag_filter() {
        let catalog = Catalog::from_json(SAMPLE).unwrap();
        let opts = ListOptions {
            tag: Some("Layout".to_string()),
            ..options()
        };
        let output = render(&catalog, &build_state(&opts).unwrap());
        assert!(output.contains("Grid Systems"));
        assert!(!output.contains("Scroll Reveals"));
        assert!(output.contains("1 posts found"));
    }
}
