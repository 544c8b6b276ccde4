//! Catalog-wide counts for the listing header and tag bar

use std::collections::HashSet;

use super::Catalog;

/// Headline numbers for a catalog
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CatalogStats {
    /// Number of posts, featured included
    pub post_count: usize,

    /// Sum of all post views
    pub total_views: u64,

    /// Number of distinct tags
    pub tag_count: usize,
}

impl CatalogStats {
    pub fn collect(catalog: &Catalog) -> Self {
        Self {
            post_count: catalog.len(),
            total_views: catalog.posts().iter().map(|p| p.views).sum(),
            tag_count: unique_tags(catalog).len(),
        }
    }
}

/// Distinct tags in order of first appearance
pub fn unique_tags(catalog: &Catalog) -> Vec<&str> {
    let mut seen = HashSet::new();
    catalog
        .posts()
        .iter()
        .flat_map(|p| p.tags.iter().map(String::as_str))
        .filter(|tag| seen.insert(*tag))
        .collect()
}

/// Distinct tags with the number of posts carrying each
pub fn tag_counts(catalog: &Catalog) -> Vec<(&str, usize)> {
    unique_tags(catalog)
        .into_iter()
        .map(|tag| {
            let count = catalog.posts().iter().filter(|p| p.has_tag(tag)).count();
            (tag, count)
        })
        .collect()
}

/// Compact view count: `12.3k` above a thousand
pub fn format_views(views: u64) -> String {
    if views > 1000 {
        format!("{:.1}k", views as f64 / 1000.0)
    } else {
        views.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::fixtures::{catalog, post};

    fn sample() -> Catalog {
        catalog(vec![
            post(1, &["rust", "cli"], "2024-01-01", 1200, false),
            post(2, &["design"], "2024-01-02", 300, true),
            post(3, &["cli", "rust", "web"], "2024-01-03", 45, false),
            post(4, &[], "2024-01-04", 0, false),
        ])
    }

    #[test]
    fn test_unique_tags_first_seen_order() {
        let catalog = sample();
        assert_eq!(unique_tags(&catalog), vec!["rust", "cli", "design", "web"]);
    }

    #[test]
    fn test_collect_stats() {
        let stats = CatalogStats::collect(&sample());
        assert_eq!(
            stats,
            CatalogStats {
                post_count: 4,
                total_views: 1545,
                tag_count: 4,
            }
        );
    }

    #[test]
    fn test_stats_default() {
        let stats = CatalogStats::collect(&Catalog::default());
        assert_eq!(stats, CatalogStats::default());
    }

    #[test]
    fn test_tag_counts() {
        let catalog = sample();
        assert_eq!(
            tag_counts(&catalog),
            vec![("rust", 2), ("cli", 2), ("design", 1), ("web", 1)]
        );
    }

    #[test]
    fn test_format_views() {
        assert_eq!(format_views(0), "0");
        assert_eq!(format_views(1000), "1000");
        assert_eq!(format_views(1545), "1.5k");
        assert_eq!(format_views(12_340), "12.3k");
    }
}
