//! Post catalog and the pure derivations over it
//!
//! A [`Catalog`] is loaded once from the site's `posts.json` and then only
//! read. Listing, search and related-post views are recomputed from scratch
//! on every user action.

pub mod error;
pub mod filter;
pub mod post;
pub mod related;
pub mod search;
pub mod stats;

pub use error::CatalogError;
pub use filter::{filter_and_sort, paginate, FilterState, Page, SortOrder, TagFilter};
pub use post::{Author, Post, PostId};
pub use related::related_posts;
pub use search::{highlight, search, Highlighted, SearchHit, SearchOutcome};
pub use stats::{unique_tags, CatalogStats};

use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

/// The full, read-only collection of posts for a site
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    posts: Vec<Post>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate slugs
    pub fn new(posts: Vec<Post>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(posts.len());
        for post in &posts {
            if !seen.insert(post.slug.as_str()) {
                return Err(CatalogError::DuplicateSlug(post.slug.clone()));
            }
        }
        Ok(Self { posts })
    }

    /// Parse a catalog from JSON text
    ///
    /// Accepts `{ "posts": [...] }` as served to the site, or a bare array.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let mut doc: Value = serde_json::from_str(json)?;
        let posts = match doc.get_mut("posts").map(Value::take) {
            Some(posts) => posts,
            None => doc,
        };
        Self::new(serde_json::from_value(posts)?)
    }

    /// Read and parse a catalog file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Self::from_json(&content)?;
        log::debug!("Loaded {} posts from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// All posts in catalog order
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// Look up a post by slug
    pub fn find_by_slug(&self, slug: &str) -> Option<&Post> {
        self.posts.iter().find(|p| p.slug == slug)
    }

    /// The hero post: first one flagged `featured`, else the first post
    pub fn featured(&self) -> Option<&Post> {
        self.posts
            .iter()
            .find(|p| p.featured)
            .or_else(|| self.posts.first())
    }
}
