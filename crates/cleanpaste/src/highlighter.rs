use crate::types::Segment;
use crate::whitespace::{is_exotic_whitespace, EXCESS_NEWLINES_RE, MULTI_SPACE_RE};

/// Glyph standing in for one removed space-like character.
const SPACE_GLYPH: char = '\u{2022}'; // •
/// Glyph standing in for one removed newline.
const NEWLINE_GLYPH: char = '\u{21b5}'; // ↵

/// Build the diagnostic view of `text`: an ordered list of segments marking
/// which spans the normalizer would remove or collapse.
///
/// One removed glyph is emitted per removed input character, so run lengths
/// are recoverable from the segment text. Deliberately fence-blind: runs
/// inside fenced code blocks are flagged even though [`crate::normalize`]
/// leaves them alone.
pub fn highlight(text: &str) -> Vec<Segment> {
    let chars: Vec<char> = text.chars().collect();
    let mut segments = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        if is_exotic_whitespace(c) {
            segments.push(Segment::removed(SPACE_GLYPH.to_string()));
            i += 1;
        } else if c == ' ' && chars.get(i + 1) == Some(&' ') {
            let start = i;
            while i < chars.len() && chars[i] == ' ' {
                i += 1;
            }
            // First space survives collapsing, the rest go.
            segments.push(Segment::kept(" "));
            segments.push(Segment::removed(
                SPACE_GLYPH.to_string().repeat(i - start - 1),
            ));
        } else if c == '\n' {
            let start = i;
            while i < chars.len() && chars[i] == '\n' {
                i += 1;
            }
            let run = i - start;
            if run >= 4 {
                segments.push(Segment::kept("\n\n\n"));
                segments.push(Segment::removed(NEWLINE_GLYPH.to_string().repeat(run - 3)));
            } else {
                segments.push(Segment::kept("\n".repeat(run)));
            }
        } else {
            let start = i;
            while i < chars.len() {
                let c = chars[i];
                if is_exotic_whitespace(c)
                    || c == '\n'
                    || (c == ' ' && chars.get(i + 1) == Some(&' '))
                {
                    break;
                }
                i += 1;
            }
            segments.push(Segment::kept(chars[start..i].iter().collect::<String>()));
        }
    }

    segments
}

/// True iff `text` contains something [`crate::normalize`] would remove: an
/// exotic space-like character, a run of 2+ plain spaces, or a run of 4+
/// newlines. Callers use this to decide whether the diagnostic view is
/// worth offering.
pub fn has_removable_content(text: &str) -> bool {
    text.chars().any(is_exotic_whitespace)
        || MULTI_SPACE_RE.is_match(text)
        || EXCESS_NEWLINES_RE.is_match(text)
}
