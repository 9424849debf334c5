//! Reading-time estimation for markdown/MDX post content
//!
//! Pipeline: strip markdown syntax → count Hangul syllables and Latin words
//!           → convert to minutes at per-script reading rates → ceil, min 1
//!
//! Rates: Hangul reads at roughly 450 syllables per minute, Latin prose at
//! roughly 225 words per minute. Code blocks are stripped entirely and
//! contribute nothing to the estimate.

use once_cell::sync::Lazy;
use regex::Regex;

/// Hangul syllables read per minute.
const HANGUL_CHARS_PER_MINUTE: f64 = 450.0;
/// Latin words read per minute.
const LATIN_WORDS_PER_MINUTE: f64 = 225.0;

static FENCED_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```.*?```").unwrap());
static INLINE_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"`[^`]+`").unwrap());
static HTML_TAG: Lazy<Regex> = Lazy::new(|| Regex::new(r"<[^>]+>").unwrap());
// Images before links: an image is a link with a `!` prefix and its alt
// text is not prose.
static IMAGE: Lazy<Regex> = Lazy::new(|| Regex::new(r"!\[[^\]]*\]\([^)]+\)").unwrap());
static LINK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static HEADING_MARKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}\s+").unwrap());
static EMPHASIS_MARKS: Lazy<Regex> = Lazy::new(|| Regex::new(r"[*_~]").unwrap());
static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Strip markdown/MDX syntax down to readable prose.
fn strip_markdown(content: &str) -> String {
    let text = FENCED_CODE.replace_all(content, " ");
    let text = INLINE_CODE.replace_all(&text, " ");
    let text = HTML_TAG.replace_all(&text, "");
    let text = IMAGE.replace_all(&text, "");
    let text = LINK.replace_all(&text, "$1");
    let text = HEADING_MARKS.replace_all(&text, "");
    let text = EMPHASIS_MARKS.replace_all(&text, "");
    let text = WHITESPACE_RUN.replace_all(&text, " ");
    text.trim().to_string()
}

/// Estimate reading time in whole minutes for markdown content.
///
/// Hangul syllables and Latin words are counted separately and summed at
/// their respective rates. Always at least 1 minute.
///
/// # Examples
///
/// ```
/// use kosearch_content::read_time::estimate_read_time;
///
/// assert_eq!(estimate_read_time("짧은 글"), 1);
/// ```
pub fn estimate_read_time(content: &str) -> u32 {
    let text = strip_markdown(content);

    let hangul_chars = text.chars().filter(|c| ('가'..='힣').contains(c)).count();
    let latin_words = text
        .split(|c: char| !c.is_ascii_alphabetic())
        .filter(|w| !w.is_empty())
        .count();

    let minutes = hangul_chars as f64 / HANGUL_CHARS_PER_MINUTE
        + latin_words as f64 / LATIN_WORDS_PER_MINUTE;

    (minutes.ceil() as u32).max(1)
}

/// Korean display form of a reading time, e.g. `5분`.
pub fn format_read_time(minutes: u32) -> String {
    format!("{minutes}분")
}
