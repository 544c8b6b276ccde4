//! Free-text search over titles, excerpts and tags

use regex::{Regex, RegexBuilder};
use std::fmt;

use super::{Catalog, Post};
use crate::config;

/// Result of a search, distinguishing "nothing typed" from "nothing found"
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome<'a> {
    /// The query was empty or whitespace only
    EmptyQuery,
    /// The query matched no post
    NoResults,
    /// Matching posts in catalog order, at most [`config::SEARCH_LIMIT`]
    Matches(Vec<SearchHit<'a>>),
}

/// A matching post with its title and excerpt highlighted
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit<'a> {
    pub post: &'a Post,
    pub title: Highlighted<'a>,
    pub excerpt: Highlighted<'a>,
}

/// Search the catalog for `query`
///
/// Matching is a case-insensitive substring test against the title, the
/// excerpt and each tag. Featured posts are searchable too. The same
/// pattern drives both the hit test and the highlighting.
pub fn search<'a>(catalog: &'a Catalog, query: &str) -> SearchOutcome<'a> {
    let query = query.trim();
    if query.is_empty() {
        return SearchOutcome::EmptyQuery;
    }

    let Some(pattern) = query_pattern(query) else {
        return SearchOutcome::NoResults;
    };

    let hits: Vec<SearchHit<'a>> = catalog
        .posts()
        .iter()
        .filter(|p| post_matches(p, &pattern))
        .take(config::SEARCH_LIMIT)
        .map(|post| SearchHit {
            post,
            title: highlight_with(&post.title, &pattern),
            excerpt: highlight_with(&post.excerpt, &pattern),
        })
        .collect();

    log::debug!("Search '{}' matched {} posts", query, hits.len());

    if hits.is_empty() {
        SearchOutcome::NoResults
    } else {
        SearchOutcome::Matches(hits)
    }
}

/// Literal, case-insensitive pattern for `query`
fn query_pattern(query: &str) -> Option<Regex> {
    match RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => Some(re),
        Err(e) => {
            log::warn!("Unusable search query '{}': {}", query, e);
            None
        }
    }
}

fn post_matches(post: &Post, pattern: &Regex) -> bool {
    pattern.is_match(&post.title)
        || pattern.is_match(&post.excerpt)
        || post.tags.iter().any(|t| pattern.is_match(t))
}

/// Piece of a highlighted string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub matched: bool,
}

/// Text split into plain and matched segments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Highlighted<'a> {
    segments: Vec<Segment<'a>>,
}

impl<'a> Highlighted<'a> {
    pub fn segments(&self) -> &[Segment<'a>] {
        &self.segments
    }

    /// Iterate over only the matched pieces
    pub fn matches(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.segments.iter().filter(|s| s.matched).map(|s| s.text)
    }

    /// Render with each match wrapped by `open`/`close`
    pub fn render_with(&self, open: &str, close: &str) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            if segment.matched {
                out.push_str(open);
                out.push_str(segment.text);
                out.push_str(close);
            } else {
                out.push_str(segment.text);
            }
        }
        out
    }
}

/// Plain text, markers dropped
impl fmt::Display for Highlighted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            f.write_str(segment.text)?;
        }
        Ok(())
    }
}

/// Mark every case-insensitive occurrence of `query` in `text`
///
/// Occurrences do not overlap; scanning resumes after each match. An empty
/// query marks nothing.
pub fn highlight<'a>(text: &'a str, query: &str) -> Highlighted<'a> {
    if query.is_empty() {
        return plain(text);
    }
    match query_pattern(query) {
        Some(pattern) => highlight_with(text, &pattern),
        None => plain(text),
    }
}

fn plain(text: &str) -> Highlighted<'_> {
    let segments = if text.is_empty() {
        Vec::new()
    } else {
        vec![Segment {
            text,
            matched: false,
        }]
    };
    Highlighted { segments }
}

fn highlight_with<'a>(text: &'a str, pattern: &Regex) -> Highlighted<'a> {
    let mut segments = Vec::new();
    let mut plain_start = 0;

    for m in pattern.find_iter(text) {
        if plain_start < m.start() {
            segments.push(Segment {
                text: &text[plain_start..m.start()],
                matched: false,
            });
        }
        segments.push(Segment {
            text: m.as_str(),
            matched: true,
        });
        plain_start = m.end();
    }

    if plain_start < text.len() {
        segments.push(Segment {
            text: &text[plain_start..],
            matched: false,
        });
    }

    Highlighted { segments }
}
