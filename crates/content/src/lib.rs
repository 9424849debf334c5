//! Content-side collaborators for the search pipeline
//!
//! This crate contains:
//! - `post`: Typed post records for the search boundary, ingress validation
//! - `read_time`: Markdown-aware reading-time estimation
//! - `search`: Batch filtering over a pre-fetched candidate set
//! - `error`: The crate error type
//!
//! Records arrive as arbitrary JSON rows from an upstream query layer; this
//! crate turns them into explicit typed values at the boundary and applies
//! the pure matching/estimation logic from `kosearch-hangul`.

pub mod error;
pub mod post;
pub mod read_time;
pub mod search;

pub use error::ContentError;
pub use post::{collect_tags, parse_post_batch, sort_recent_first, CategoryRef, PostSummary, PostTagRow, TagRef};
pub use read_time::{estimate_read_time, format_read_time};
pub use search::{post_matches, search_posts, CANDIDATE_FETCH_LIMIT, RESULT_LIMIT};
