//! Related-post ranking for the post page

use std::collections::HashSet;

use super::{Catalog, Post};

/// Rank other posts by how many tags they share with `current`
///
/// Ties keep catalog order. Posts sharing no tags still qualify, so a
/// catalog with few overlaps fills the slots with the earliest posts.
pub fn related_posts<'a>(catalog: &'a Catalog, current: &Post, limit: usize) -> Vec<&'a Post> {
    let current_tags: HashSet<&str> = current.tags.iter().map(String::as_str).collect();

    let mut scored: Vec<(usize, &Post)> = catalog
        .posts()
        .iter()
        .filter(|p| p.id != current.id)
        .map(|p| {
            let score = p
                .tags
                .iter()
                .map(String::as_str)
                .collect::<HashSet<_>>()
                .intersection(&current_tags)
                .count();
            (score, p)
        })
        .collect();

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    scored.into_iter().take(limit).map(|(_, p)| p).collect()
}
