//! Batch search filtering over pre-fetched posts
//!
//! The surrounding system fetches a bounded, recency-ordered batch of
//! published posts from its query layer and hands it to `search_posts`.
//! Filtering is a pure predicate per post (title, then excerpt); no scoring
//! or re-ordering happens here.

use crate::post::PostSummary;
use kosearch_hangul::matcher;
use tracing::debug;

/// Upper bound on the candidate batch callers fetch upstream.
pub const CANDIDATE_FETCH_LIMIT: usize = 50;

/// Display truncation applied to the filtered results.
pub const RESULT_LIMIT: usize = 20;

/// Does a post match the query on its searchable fields?
///
/// Title is always tested; the excerpt only when present.
pub fn post_matches(post: &PostSummary, query: &str) -> bool {
    matcher::matches(&post.title, query)
        || post
            .excerpt
            .as_deref()
            .is_some_and(|excerpt| matcher::matches(excerpt, query))
}

/// Filter a pre-fetched batch of posts against `query`.
///
/// An empty or whitespace-only query yields no results: at this layer "no
/// query" means "no search performed", unlike the matcher's vacuous true.
/// Input order is preserved (callers pre-sort by recency) and the result is
/// truncated to `limit`.
pub fn search_posts<'a>(
    posts: &'a [PostSummary],
    query: &str,
    limit: usize,
) -> Vec<&'a PostSummary> {
    if query.trim().is_empty() {
        return Vec::new();
    }

    let hits: Vec<&PostSummary> = posts
        .iter()
        .filter(|post| post_matches(post, query))
        .take(limit)
        .collect();

    debug!(
        candidates = posts.len(),
        hits = hits.len(),
        limit,
        "search batch filtered"
    );

    hits
}
