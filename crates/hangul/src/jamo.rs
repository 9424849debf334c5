//! Hangul syllable decomposition (no external dependencies)
//!
//! Precomposed Hangul syllables occupy U+AC00..=U+D7A3, one code point per
//! (lead, vowel, trail) combination:
//!
//! ```text
//! offset = code - 0xAC00
//! lead   = offset / 588        (588 = 21 vowels x 28 trails)
//! vowel  = (offset % 588) / 28
//! trail  = offset % 28         (0 = no trailing consonant)
//! ```
//!
//! Decomposition targets the *compatibility jamo* block (U+3131..), which is
//! what keyboards produce for isolated letters and what incremental search
//! queries contain. Compound letters expand to their components (ㅘ → ㅗㅏ,
//! ㄳ → ㄱㅅ) so that partially composed input lines up with finished text.

const SYLLABLE_BASE: u32 = 0xAC00;
const SYLLABLE_LAST: u32 = 0xD7A3;
const VOWELS_PER_LEAD: u32 = 588;
const TRAILS_PER_VOWEL: u32 = 28;

/// Leading consonants by lead index (19 entries).
const LEADS: [char; 19] = [
    'ㄱ', 'ㄲ', 'ㄴ', 'ㄷ', 'ㄸ', 'ㄹ', 'ㅁ', 'ㅂ', 'ㅃ', 'ㅅ', 'ㅆ', 'ㅇ', 'ㅈ', 'ㅉ', 'ㅊ',
    'ㅋ', 'ㅌ', 'ㅍ', 'ㅎ',
];

/// Vowels by vowel index (21 entries), compounds expanded.
const VOWELS: [&str; 21] = [
    "ㅏ", "ㅐ", "ㅑ", "ㅒ", "ㅓ", "ㅔ", "ㅕ", "ㅖ", "ㅗ", "ㅗㅏ", "ㅗㅐ", "ㅗㅣ", "ㅛ", "ㅜ",
    "ㅜㅓ", "ㅜㅔ", "ㅜㅣ", "ㅠ", "ㅡ", "ㅡㅣ", "ㅣ",
];

/// Trailing consonants by trail index (28 entries, 0 = none), clusters expanded.
const TRAILS: [&str; 28] = [
    "", "ㄱ", "ㄲ", "ㄱㅅ", "ㄴ", "ㄴㅈ", "ㄴㅎ", "ㄷ", "ㄹ", "ㄹㄱ", "ㄹㅁ", "ㄹㅂ", "ㄹㅅ",
    "ㄹㅌ", "ㄹㅍ", "ㄹㅎ", "ㅁ", "ㅂ", "ㅂㅅ", "ㅅ", "ㅆ", "ㅇ", "ㅈ", "ㅊ", "ㅋ", "ㅌ", "ㅍ",
    "ㅎ",
];

/// Is `c` a precomposed Hangul syllable block?
#[inline]
pub fn is_syllable(c: char) -> bool {
    (SYLLABLE_BASE..=SYLLABLE_LAST).contains(&(c as u32))
}

/// Is `c` a compatibility-jamo consonant (ㄱ..=ㅎ)?
///
/// The range U+3131..=U+314E is contiguous and covers every consonant letter
/// a Korean keyboard can produce in isolation, compound consonants included
/// (ㄲ, ㄳ, ...). Vowels start at U+314F and are excluded.
#[inline]
pub fn is_choseong_jamo(c: char) -> bool {
    ('ㄱ'..='ㅎ').contains(&c)
}

/// Decompose one syllable into (lead, vowel, trail) indices.
///
/// Returns `None` for anything that is not a precomposed syllable.
#[inline]
fn syllable_indices(c: char) -> Option<(usize, usize, usize)> {
    if !is_syllable(c) {
        return None;
    }
    let offset = c as u32 - SYLLABLE_BASE;
    let lead = offset / VOWELS_PER_LEAD;
    let vowel = (offset % VOWELS_PER_LEAD) / TRAILS_PER_VOWEL;
    let trail = offset % TRAILS_PER_VOWEL;
    Some((lead as usize, vowel as usize, trail as usize))
}

/// Expansion for standalone compound compatibility jamo appearing in text.
///
/// A user can type these directly (ㄳ, ㅘ, ...); they expand to the same
/// component sequence the syllable tables produce so substring containment
/// works across both forms.
fn compound_expansion(c: char) -> Option<&'static str> {
    let expanded = match c {
        'ㄳ' => "ㄱㅅ",
        'ㄵ' => "ㄴㅈ",
        'ㄶ' => "ㄴㅎ",
        'ㄺ' => "ㄹㄱ",
        'ㄻ' => "ㄹㅁ",
        'ㄼ' => "ㄹㅂ",
        'ㄽ' => "ㄹㅅ",
        'ㄾ' => "ㄹㅌ",
        'ㄿ' => "ㄹㅍ",
        'ㅀ' => "ㄹㅎ",
        'ㅄ' => "ㅂㅅ",
        'ㅘ' => "ㅗㅏ",
        'ㅙ' => "ㅗㅐ",
        'ㅚ' => "ㅗㅣ",
        'ㅝ' => "ㅜㅓ",
        'ㅞ' => "ㅜㅔ",
        'ㅟ' => "ㅜㅣ",
        'ㅢ' => "ㅡㅣ",
        _ => return None,
    };
    Some(expanded)
}

/// Extract the leading consonant of every syllable in `text`.
///
/// Characters that are not precomposed syllables contribute nothing, so the
/// result has exactly one jamo per syllable of the input.
///
/// # Examples
///
/// ```
/// use kosearch_hangul::jamo::choseong;
///
/// assert_eq!(choseong("한글"), "ㅎㄱ");
/// assert_eq!(choseong("React 리액트"), "ㄹㅇㅌ");
/// ```
pub fn choseong(text: &str) -> String {
    text.chars()
        .filter_map(|c| syllable_indices(c).map(|(lead, _, _)| LEADS[lead]))
        .collect()
}

/// Expand `text` into its full jamo sequence.
///
/// Each syllable becomes lead + vowel + optional trail; compound vowels and
/// trail clusters expand to components; standalone compound jamo expand the
/// same way; everything else passes through unchanged.
///
/// # Examples
///
/// ```
/// use kosearch_hangul::jamo::disassemble;
///
/// assert_eq!(disassemble("한글"), "ㅎㅏㄴㄱㅡㄹ");
/// assert_eq!(disassemble("값"), "ㄱㅏㅂㅅ");
/// assert_eq!(disassemble("한ㄱ"), "ㅎㅏㄴㄱ");
/// ```
pub fn disassemble(text: &str) -> String {
    // Worst case a syllable expands to 6 jamo (compound vowel + cluster).
    let mut out = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        if let Some((lead, vowel, trail)) = syllable_indices(c) {
            out.push(LEADS[lead]);
            out.push_str(VOWELS[vowel]);
            out.push_str(TRAILS[trail]);
        } else if let Some(expanded) = compound_expansion(c) {
            out.push_str(expanded);
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_syllable_bounds() {
        assert!(is_syllable('가'));
        assert!(is_syllable('힣'));
        assert!(!is_syllable('ㄱ'));
        assert!(!is_syllable('a'));
    }

    #[test]
    fn test_is_choseong_jamo() {
        assert!(is_choseong_jamo('ㄱ'));
        assert!(is_choseong_jamo('ㅎ'));
        assert!(is_choseong_jamo('ㄲ'));
        // compound consonants sit inside the range
        assert!(is_choseong_jamo('ㄳ'));
        // vowels are past ㅎ
        assert!(!is_choseong_jamo('ㅏ'));
        assert!(!is_choseong_jamo('한'));
        assert!(!is_choseong_jamo('h'));
    }

    #[test]
    fn test_choseong_basic() {
        assert_eq!(choseong("한글"), "ㅎㄱ");
        assert_eq!(choseong("안녕하세요"), "ㅇㄴㅎㅅㅇ");
    }

    #[test]
    fn test_choseong_skips_non_syllables() {
        assert_eq!(choseong("React 리액트"), "ㄹㅇㅌ");
        assert_eq!(choseong("abc 123"), "");
        // lone jamo are not syllables
        assert_eq!(choseong("ㅎㄱ"), "");
    }

    #[test]
    fn test_choseong_one_per_syllable() {
        let text = "블로그 검색 기능";
        let syllables = text.chars().filter(|c| is_syllable(*c)).count();
        assert_eq!(choseong(text).chars().count(), syllables);
    }

    #[test]
    fn test_disassemble_simple_syllables() {
        assert_eq!(disassemble("한글"), "ㅎㅏㄴㄱㅡㄹ");
        assert_eq!(disassemble("가"), "ㄱㅏ");
    }

    #[test]
    fn test_disassemble_trail_cluster() {
        assert_eq!(disassemble("값"), "ㄱㅏㅂㅅ");
        assert_eq!(disassemble("닭"), "ㄷㅏㄹㄱ");
    }

    #[test]
    fn test_disassemble_compound_vowel() {
        assert_eq!(disassemble("과"), "ㄱㅗㅏ");
        assert_eq!(disassemble("의"), "ㅇㅡㅣ");
    }

    #[test]
    fn test_disassemble_standalone_compound_jamo() {
        assert_eq!(disassemble("ㅘ"), "ㅗㅏ");
        assert_eq!(disassemble("ㅄ"), "ㅂㅅ");
    }

    #[test]
    fn test_disassemble_passthrough() {
        assert_eq!(disassemble("abc 123!"), "abc 123!");
        assert_eq!(disassemble("한a글"), "ㅎㅏㄴaㄱㅡㄹ");
        // lone simple jamo are left as-is
        assert_eq!(disassemble("ㄱ"), "ㄱ");
    }

    #[test]
    fn test_disassemble_empty() {
        assert_eq!(disassemble(""), "");
        assert_eq!(choseong(""), "");
    }

    #[test]
    fn test_disassemble_never_shrinks() {
        for text in ["한글", "값있는 글", "mixed 한글 text", "ㅎㄱ"] {
            assert!(disassemble(text).chars().count() >= text.chars().count());
        }
    }
}
