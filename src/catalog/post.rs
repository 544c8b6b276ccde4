//! Post records as published in the site's `posts.json`

use chrono::{DateTime, NaiveDate, Utc};
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::LazyLock;

static MARKUP_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Post identifier
///
/// The catalog has used both numeric and string ids over time, so either
/// form is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PostId {
    Number(u64),
    Text(String),
}

impl fmt::Display for PostId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<u64> for PostId {
    fn from(n: u64) -> Self {
        Self::Number(n)
    }
}

/// Post author
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,

    /// Avatar image reference (URL or site-relative path)
    #[serde(default, deserialize_with = "null_as_default")]
    pub avatar: String,
}

/// A single blog post
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: PostId,

    /// Unique URL-safe key used for lookup and linking
    pub slug: String,

    pub title: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub excerpt: String,

    /// Post body (HTML)
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub tags: Vec<String>,

    /// Publication timestamp
    #[serde(deserialize_with = "deserialize_date")]
    pub date: DateTime<Utc>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub views: u64,

    /// Rendered separately as the hero post on the listing page
    #[serde(default, deserialize_with = "null_as_default")]
    pub featured: bool,

    #[serde(default, deserialize_with = "null_as_default")]
    pub author: Author,

    /// Cover image reference
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,

    /// Display string such as "5 min read"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_time: Option<String>,
}

impl Post {
    /// Whether the post carries `tag` (exact match)
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// First tag, shown as the card label
    pub fn primary_tag(&self) -> Option<&str> {
        self.tags.first().map(String::as_str)
    }

    /// Words in the body, markup excluded
    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }
}

/// Count whitespace-separated words in HTML, treating each tag as a space
///
/// A `<` with no closing `>` is ordinary text.
pub fn word_count(html: &str) -> usize {
    MARKUP_RE.replace_all(html, " ").split_whitespace().count()
}

/// Parse a post date
///
/// Accepts a plain calendar date (`2024-01-31`, taken as midnight UTC) or a
/// full RFC 3339 timestamp.
pub fn parse_date(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Missing and `null` both fall back to the default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn deserialize_date<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    parse_date(&raw).ok_or_else(|| serde::de::Error::custom(format!("invalid date: {}", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_parse_plain_date() {
        let dt = parse_date("2024-02-01").unwrap();
        assert_eq!((dt.year(), dt.month(), dt.day()), (2024, 2, 1));
        assert_eq!(dt.hour(), 0);
    }

    #[test]
    fn test_parse_rfc3339_date() {
        let dt = parse_date("2024-02-01T10:30:00+02:00").unwrap();
        assert_eq!(dt.hour(), 8);
    }

    #[test]
    fn test_parse_invalid_date() {
        assert!(parse_date("yesterday").is_none());
        assert!(parse_date("2024-13-01").is_none());
    }

    #[test]
    fn test_deserialize_minimal_post() {
        // Only the required fields; everything else falls back to defaults
        let post: Post = serde_json::from_str(
            r#"{ "id": 7, "slug": "hello", "title": "Hello", "date": "2024-01-01" }"#,
        )
        .unwrap();
        assert_eq!(post.id, PostId::Number(7));
        assert!(post.tags.is_empty());
        assert_eq!(post.views, 0);
        assert!(!post.featured);
        assert_eq!(post.author, Author::default());
        assert!(post.primary_tag().is_none());
    }

    #[test]
    fn test_deserialize_full_post() {
        let post: Post = serde_json::from_str(
            r#"{
                "id": "p-1",
                "slug": "motion-design",
                "title": "Motion Design",
                "excerpt": "On easing",
                "content": "<p>Body</p>",
                "tags": ["Design", "Motion"],
                "date": "2024-03-10T12:00:00Z",
                "views": 1520,
                "featured": true,
                "author": { "name": "Ada", "avatar": "img/ada.jpg" },
                "image": "img/cover.jpg",
                "readTime": "6 min read"
            }"#,
        )
        .unwrap();
        assert_eq!(post.id, PostId::Text("p-1".to_string()));
        assert_eq!(post.read_time.as_deref(), Some("6 min read"));
        assert_eq!(post.author.name, "Ada");
        assert!(post.has_tag("Motion"));
        assert!(!post.has_tag("motion"));
        assert_eq!(post.primary_tag(), Some("Design"));
    }

    #[test]
    fn test_deserialize_rejects_bad_date() {
        let result: Result<Post, _> = serde_json::from_str(
            r#"{ "id": 1, "slug": "x", "title": "X", "date": "soon" }"#,
        );
        let err = result.unwrap_err().to_string();
        assert!(err.contains("invalid date"));
    }

    #[test]
    fn test_word_count_strips_markup() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count("<p>Hello <em>brave</em> new world</p>"), 4);
        // Adjacent block elements must not glue words together
        assert_eq!(word_count("<h2>Intro</h2><p>Body text</p>"), 3);
        assert_eq!(word_count("<img src=\"a.png\" alt=\"many words here\">"), 0);
    }

    #[test]
    fn test_word_count_unclosed_angle_bracket() {
        assert_eq!(word_count("a < b and more"), 5);
    }

    #[test]
    fn test_deserialize_null_fields() {
        let post: Post = serde_json::from_str(
            r#"{
                "id": 1, "slug": "x", "title": "X", "date": "2024-01-01",
                "tags": null, "excerpt": null, "content": null, "views": null,
                "featured": null, "author": { "name": null, "avatar": null }
            }"#,
        )
        .unwrap();
        assert!(post.tags.is_empty());
        assert!(post.excerpt.is_empty());
        assert_eq!(post.views, 0);
        assert!(!post.featured);
        assert_eq!(post.author, Author::default());

        let post: Post = serde_json::from_str(
            r#"{ "id": 2, "slug": "y", "title": "Y", "date": "2024-01-01", "author": null }"#,
        )
        .unwrap();
        assert_eq!(post.author, Author::default());
    }

    #[test]
    fn test_post_id_display() {
        assert_eq!(PostId::Number(3).to_string(), "3");
        assert_eq!(PostId::Text("abc".to_string()).to_string(), "abc");
    }
}
