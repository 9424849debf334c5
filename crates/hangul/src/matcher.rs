//! Korean-aware fuzzy matching predicate
//!
//! Pipeline: trim query → vacuous match on empty → lowercase both sides
//!           → plain substring → choseong substring → decomposed-jamo substring
//!
//! The predicate is boolean only; it produces no score. Callers that need an
//! ordering apply one (recency) before filtering.

use crate::jamo;

/// Does `candidate` match the free-text `query`?
///
/// Three strategies, tried in order:
///
/// 1. **Plain substring** — lowercased candidate contains the lowercased,
///    trimmed query. Covers exact and partial matches in any script.
/// 2. **Choseong** — only when every character of the trimmed query is a
///    consonant jamo (ㄱ..=ㅎ). The query is tested against the string of
///    leading consonants extracted from the candidate ("한글" → "ㅎㄱ").
///    A consonant-only query is decided here: no fall-through to strategy 3.
///    Mixed queries ("한ㄱ") skip this strategy entirely, which keeps a
///    choseong string from spuriously matching partially composed input.
/// 3. **Decomposed jamo** — both sides expand to full jamo sequences and the
///    query is tested as a substring. This is what makes live typing work:
///    "한ㄱ" matches "한글" because "ㅎㅏㄴㄱㅡㄹ" contains "ㅎㅏㄴㄱ".
///
/// An empty or whitespace-only query matches everything (no filter applied).
/// Total over any two strings; never panics; holds no state between calls.
///
/// # Examples
///
/// ```
/// use kosearch_hangul::matcher::matches;
///
/// assert!(matches("한글", "ㅎㄱ"));
/// assert!(matches("한글", "한ㄱ"));
/// assert!(matches("Hello World", "hello"));
/// assert!(matches("anything", "  "));
/// assert!(!matches("안녕", "ㅎㄱ"));
/// ```
pub fn matches(candidate: &str, query: &str) -> bool {
    let query = query.trim();
    if query.is_empty() {
        return true;
    }

    let query = query.to_lowercase();
    let candidate_folded = candidate.to_lowercase();

    // 1. Plain substring
    if candidate_folded.contains(&query) {
        return true;
    }

    // 2. Choseong (query is consonant jamo only)
    if query.chars().all(jamo::is_choseong_jamo) {
        return jamo::choseong(candidate).contains(&query);
    }

    // 3. Decomposed jamo (partial syllable input)
    jamo::disassemble(&candidate_folded).contains(&jamo::disassemble(&query))
}
