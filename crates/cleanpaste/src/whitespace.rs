//! Shared character classification for the normalizer and the highlighter.
//!
//! Both consumers must agree exactly on what counts as removable, so the
//! exotic-whitespace set and the run-detection regexes live here and nowhere
//! else.

use regex::Regex;
use std::sync::LazyLock;

/// Runs of 2+ plain spaces (U+0020 only; tabs and exotic spaces excluded).
pub(crate) static MULTI_SPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" {2,}").unwrap());

/// Runs of 4+ newlines, i.e. 3+ fully blank lines.
pub(crate) static EXCESS_NEWLINES_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{4,}").unwrap());

/// Check if a character is an exotic space: renders as a space-like gap but
/// is not the ordinary U+0020 space.
#[inline]
pub fn is_exotic_whitespace(c: char) -> bool {
    matches!(
        c,
        '\u{00a0}' | // No-break space
        '\u{202f}' | // Narrow no-break space
        '\u{2007}' | // Figure space
        '\u{200b}' | // Zero-width space
        '\u{2060}' | // Word joiner
        '\u{180e}' | // Mongolian vowel separator
        '\u{2000}'..='\u{200a}' | // En quad through hair space
        '\u{205f}' | // Medium mathematical space
        '\u{3000}' | // Ideographic space
        '\u{feff}' // BOM / zero-width no-break space
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nbsp_is_exotic() {
        assert!(is_exotic_whitespace('\u{00a0}'));
        assert!(is_exotic_whitespace('\u{202f}'));
        assert!(is_exotic_whitespace('\u{feff}'));
    }

    #[test]
    fn test_general_punctuation_space_range() {
        for c in '\u{2000}'..='\u{200a}' {
            assert!(is_exotic_whitespace(c), "{:?} should be exotic", c);
        }
    }

    #[test]
    fn test_plain_whitespace_is_not_exotic() {
        assert!(!is_exotic_whitespace(' '));
        assert!(!is_exotic_whitespace('\t'));
        assert!(!is_exotic_whitespace('\n'));
        assert!(!is_exotic_whitespace('\r'));
    }

    #[test]
    fn test_space_run_regex() {
        assert!(MULTI_SPACE_RE.is_match("a  b"));
        assert!(!MULTI_SPACE_RE.is_match("a b"));
        assert!(!MULTI_SPACE_RE.is_match("a\t\tb"));
    }

    #[test]
    fn test_newline_run_regex() {
        assert!(EXCESS_NEWLINES_RE.is_match("a\n\n\n\nb"));
        assert!(!EXCESS_NEWLINES_RE.is_match("a\n\n\nb"));
    }
}
