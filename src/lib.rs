//! Korean-aware fuzzy search toolkit.
//!
//! This crate re-exports the public API of the workspace with a clean
//! surface:
//!
//! - [`matches`] — the three-strategy fuzzy predicate (plain substring,
//!   choseong, decomposed jamo)
//! - [`jamo`] — Hangul decomposition primitives
//! - Post records, ingress parsing and batch filtering from the content
//!   layer
//!
//! # Example
//!
//! ```
//! use kosearch::{matches, search_posts, parse_post_batch, RESULT_LIMIT};
//!
//! assert!(matches("한글", "ㅎㄱ"));
//!
//! let posts = parse_post_batch(
//!     r#"[{"id": "p1", "title": "한글 검색", "slug": "hangul-search"}]"#,
//! ).unwrap();
//! let hits = search_posts(&posts, "ㄱㅅ", RESULT_LIMIT);
//! assert_eq!(hits.len(), 1);
//! ```

// ============================================================================
// Public API - these are what users should use
// ============================================================================

// Matching predicate and Hangul primitives
pub use kosearch_hangul::jamo;
pub use kosearch_hangul::matches;

// Content boundary types and operations
pub use kosearch_content::{
    collect_tags, estimate_read_time, format_read_time, parse_post_batch, post_matches,
    search_posts, sort_recent_first, CategoryRef, ContentError, PostSummary, PostTagRow, TagRef,
    CANDIDATE_FETCH_LIMIT, RESULT_LIMIT,
};
