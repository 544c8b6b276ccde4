//! Tag filter, sort order and "load more" pagination for the post grid

use std::fmt;
use std::str::FromStr;
use url::Url;

use super::{Catalog, Post};
use crate::config;

/// Which tag the grid is restricted to
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    /// Parse a filter value; the literal `all` selects every post
    pub fn parse(s: &str) -> Self {
        match s {
            "all" => Self::All,
            tag => Self::Tag(tag.to_string()),
        }
    }

    fn matches(&self, post: &Post) -> bool {
        match self {
            Self::All => true,
            Self::Tag(tag) => post.has_tag(tag),
        }
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Tag(tag) => write!(f, "{}", tag),
        }
    }
}

/// Grid sort order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Most recent first
    #[default]
    Latest,
    /// Most viewed first
    Popular,
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "latest" => Ok(Self::Latest),
            "popular" => Ok(Self::Popular),
            other => Err(format!(
                "unknown sort order '{}' (expected latest or popular)",
                other
            )),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Latest => write!(f, "latest"),
            Self::Popular => write!(f, "popular"),
        }
    }
}

/// Filter state owned by the listing view
///
/// Changing the tag or the sort order starts over from the first page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    active_tag: TagFilter,
    sort: SortOrder,
    page: usize,
    page_size: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(config::DEFAULT_PAGE_SIZE)
    }
}

impl FilterState {
    /// Fresh state on the first page; a zero page size is raised to 1
    pub fn new(page_size: usize) -> Self {
        Self {
            active_tag: TagFilter::All,
            sort: SortOrder::Latest,
            page: 1,
            page_size: page_size.max(1),
        }
    }

    pub fn active_tag(&self) -> &TagFilter {
        &self.active_tag
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_tag(&mut self, tag: TagFilter) {
        self.active_tag = tag;
        self.page = 1;
    }

    pub fn set_sort(&mut self, sort: SortOrder) {
        self.sort = sort;
        self.page = 1;
    }

    /// Reveal one more page
    pub fn load_more(&mut self) {
        self.page = self.page.saturating_add(1);
    }

    /// Jump straight to `page` (1-based, clamped to at least 1)
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Seed the tag filter from a page URL's `tag` query parameter
    ///
    /// Returns `true` if the URL carried a non-empty tag.
    pub fn seed_from_url(&mut self, url: &Url) -> bool {
        let tag = url
            .query_pairs()
            .find(|(key, _)| key == "tag")
            .map(|(_, value)| value.into_owned())
            .filter(|value| !value.is_empty());

        match tag {
            Some(tag) => {
                log::debug!("Seeding tag filter from URL: {}", tag);
                self.set_tag(TagFilter::parse(&tag));
                true
            }
            None => false,
        }
    }

    /// Number of posts that should currently be visible
    pub fn visible_limit(&self) -> usize {
        self.page.saturating_mul(self.page_size)
    }
}

/// Derive the full grid sequence (before pagination)
///
/// Featured posts are excluded since the hero card shows them. Both sort
/// orders are stable, so ties keep catalog order.
pub fn filter_and_sort<'a>(catalog: &'a Catalog, state: &FilterState) -> Vec<&'a Post> {
    let mut posts: Vec<&Post> = catalog
        .posts()
        .iter()
        .filter(|p| !p.featured)
        .filter(|p| state.active_tag.matches(p))
        .collect();

    match state.sort {
        SortOrder::Latest => posts.sort_by(|a, b| b.date.cmp(&a.date)),
        SortOrder::Popular => posts.sort_by(|a, b| b.views.cmp(&a.views)),
    }

    log::debug!(
        "Filtered {} of {} posts (tag: {}, sort: {})",
        posts.len(),
        catalog.len(),
        state.active_tag,
        state.sort
    );

    posts
}

/// A visible prefix of the grid sequence
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'s, 'a> {
    pub visible: &'s [&'a Post],
    /// More posts remain beyond the visible prefix
    pub has_more: bool,
}

/// Take the first `page * page_size` posts of `posts`
///
/// Pages accumulate: page 2 shows pages 1 and 2 together. Requests past the
/// end show everything.
pub fn paginate<'s, 'a>(posts: &'s [&'a Post], page: usize, page_size: usize) -> Page<'s, 'a> {
    let end = page.saturating_mul(page_size).min(posts.len());
    Page {
        visible: &posts[..end],
        has_more: end < posts.len(),
    }
}
