//! Typed post records for the search boundary
//!
//! The upstream query layer returns loosely shaped rows (nullable columns,
//! nullable join results). This module pins them to explicit types with
//! named optional fields and validates them on ingress, so everything past
//! the boundary works with known shapes.

use crate::error::{ContentError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Category reference as selected by list queries (name + slug only).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRef {
    pub name: String,
    pub slug: String,
}

/// Tag reference as selected by list queries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagRef {
    pub name: String,
    pub slug: String,
}

/// Raw post/tag join row: the joined tag is null when the tag row is gone.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostTagRow {
    pub tags: Option<TagRef>,
}

/// The column set the search endpoint selects for each candidate post.
///
/// `id`, `title` and `slug` are required; everything else is optional or
/// defaulted because upstream rows may omit them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostSummary {
    pub id: String,
    pub title: String,
    pub slug: String,
    #[serde(default)]
    pub excerpt: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub is_featured: bool,
    #[serde(default)]
    pub view_count: u64,
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub category: Option<CategoryRef>,
    #[serde(default)]
    pub tags: Vec<TagRef>,
}

impl PostSummary {
    /// Check the boundary contract: `id`, `title` and `slug` must be
    /// non-empty after trimming.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [("id", &self.id), ("title", &self.title), ("slug", &self.slug)] {
            if value.trim().is_empty() {
                return Err(ContentError::InvalidRecord(format!(
                    "field `{field}` is empty"
                )));
            }
        }
        Ok(())
    }
}

/// Parse a JSON array of upstream rows into validated post records.
///
/// Fails on the first malformed or contract-violating record; a partial
/// batch is never returned.
pub fn parse_post_batch(payload: &str) -> Result<Vec<PostSummary>> {
    let posts: Vec<PostSummary> = serde_json::from_str(payload)?;
    for post in &posts {
        post.validate()?;
    }
    Ok(posts)
}

/// Extract the tags from post/tag join rows, dropping null joins.
pub fn collect_tags(rows: &[PostTagRow]) -> Vec<TagRef> {
    rows.iter().filter_map(|row| row.tags.clone()).collect()
}

/// Order posts newest-first by `published_at`; unpublished posts sort last.
///
/// This is the ordering callers apply *before* filtering, mirroring the
/// upstream query's `ORDER BY published_at DESC`.
pub fn sort_recent_first(posts: &mut [PostSummary]) {
    posts.sort_by(|a, b| match (&b.published_at, &a.published_at) {
        (Some(b_at), Some(a_at)) => b_at.cmp(a_at),
        (Some(_), None) => std::cmp::Ordering::Greater,
        (None, Some(_)) => std::cmp::Ordering::Less,
        (None, None) => std::cmp::Ordering::Equal,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn post(id: &str, title: &str) -> PostSummary {
        PostSummary {
            id: id.to_string(),
            title: title.to_string(),
            slug: id.to_string(),
            excerpt: None,
            thumbnail_url: None,
            is_featured: false,
            view_count: 0,
            published_at: None,
            category: None,
            tags: Vec::new(),
        }
    }

    #[test]
    fn test_parse_minimal_record() {
        let posts =
            parse_post_batch(r#"[{"id": "p1", "title": "한글", "slug": "hangul"}]"#).unwrap();
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].title, "한글");
        assert!(posts[0].excerpt.is_none());
        assert!(posts[0].tags.is_empty());
        assert_eq!(posts[0].view_count, 0);
    }

    #[test]
    fn test_parse_full_record() {
        let payload = r#"[{
            "id": "p1",
            "title": "React 리액트 입문",
            "slug": "react-intro",
            "excerpt": "리액트 기초",
            "thumbnail_url": "https://example.com/t.png",
            "is_featured": true,
            "view_count": 42,
            "published_at": "2024-03-01T09:00:00Z",
            "category": {"name": "개발", "slug": "dev"},
            "tags": [{"name": "React", "slug": "react"}]
        }]"#;
        let posts = parse_post_batch(payload).unwrap();
        assert!(posts[0].is_featured);
        assert_eq!(posts[0].tags[0].slug, "react");
        assert_eq!(posts[0].category.as_ref().unwrap().slug, "dev");
        assert!(posts[0].published_at.is_some());
    }

    #[test]
    fn test_parse_rejects_empty_required_field() {
        let err = parse_post_batch(r#"[{"id": "p1", "title": "  ", "slug": "s"}]"#).unwrap_err();
        assert!(matches!(err, ContentError::InvalidRecord(_)));
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_parse_rejects_malformed_json() {
        let err = parse_post_batch("not json").unwrap_err();
        assert!(matches!(err, ContentError::Malformed(_)));
    }

    #[test]
    fn test_collect_tags_drops_null_joins() {
        let rows = vec![
            PostTagRow {
                tags: Some(TagRef {
                    name: "Rust".to_string(),
                    slug: "rust".to_string(),
                }),
            },
            PostTagRow { tags: None },
            PostTagRow {
                tags: Some(TagRef {
                    name: "검색".to_string(),
                    slug: "search".to_string(),
                }),
            },
        ];
        let tags = collect_tags(&rows);
        assert_eq!(tags.len(), 2);
        assert_eq!(tags[0].slug, "rust");
        assert_eq!(tags[1].slug, "search");
    }

    #[test]
    fn test_sort_recent_first() {
        let mut posts = vec![post("a", "old"), post("b", "new"), post("c", "draft")];
        posts[0].published_at = Some(Utc.with_ymd_and_hms(2023, 1, 1, 0, 0, 0).unwrap());
        posts[1].published_at = Some(Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap());
        // posts[2] stays unpublished

        sort_recent_first(&mut posts);
        assert_eq!(posts[0].id, "b");
        assert_eq!(posts[1].id, "a");
        assert_eq!(posts[2].id, "c");
    }
}
