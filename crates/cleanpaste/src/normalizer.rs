use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;

use crate::whitespace::{is_exotic_whitespace, EXCESS_NEWLINES_RE, MULTI_SPACE_RE};

/// Maximal fenced code blocks: three backticks up to the next three
/// backticks, non-greedy, spanning newlines. An unclosed fence never
/// matches and its content is cleaned as ordinary text.
static FENCE_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)```.*?```").unwrap());

/// Clean pasted text of whitespace artifacts while leaving fenced code
/// blocks untouched.
///
/// Pipeline (fixed order):
/// 1. `\r\n` and lone `\r` become `\n`.
/// 2. Exotic space-like code points fold to plain spaces. This happens
///    before fences are located, so it applies inside fences too.
/// 3. Fenced spans are copied through verbatim; the remaining stages run
///    only on the text between them.
/// 4. Runs of 2+ spaces collapse to one.
/// 5. Each line loses leading and trailing whitespace.
/// 6. Runs of 4+ newlines cap at 3 (at most 2 blank lines).
///
/// Capping runs after the trim so that a whitespace-only line merging two
/// newline runs still lands under the cap; this keeps `normalize`
/// idempotent.
pub fn normalize(text: &str) -> String {
    let unified = to_lf(text);
    let folded = fold_exotic_whitespace(&unified);

    // Fence spans are copied through verbatim; the cleanup passes only
    // ever see the gap text between them.
    let mut out = String::with_capacity(folded.len());
    let mut cursor = 0;
    for fence in FENCE_RE.find_iter(&folded) {
        scrub_gap(&folded[cursor..fence.start()], cursor == 0, false, &mut out);
        out.push_str(fence.as_str());
        cursor = fence.end();
    }
    scrub_gap(&folded[cursor..], cursor == 0, true, &mut out);
    out
}

/// Canonicalize `\r\n` and lone `\r` to `\n`.
fn to_lf(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }
    Cow::Owned(out)
}

/// Fold every exotic space-like code point to a plain U+0020.
fn fold_exotic_whitespace(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_exotic_whitespace) {
        return Cow::Borrowed(text);
    }
    Cow::Owned(
        text.chars()
            .map(|c| if is_exotic_whitespace(c) { ' ' } else { c })
            .collect(),
    )
}

/// Run the collapse/trim/cap stages on one stretch of non-fence text and
/// append the result to `out`.
///
/// A gap edge that abuts a fence is part of the fence's line, so it is only
/// trimmed when the line boundary falls inside the gap itself: the first
/// fragment has no leading trim unless the gap starts the text, and the
/// last fragment has no trailing trim unless the gap ends it.
fn scrub_gap(gap: &str, at_text_start: bool, at_text_end: bool, out: &mut String) {
    if gap.is_empty() {
        return;
    }

    let collapsed = MULTI_SPACE_RE.replace_all(gap, " ");

    let fragments: Vec<&str> = collapsed.split('\n').collect();
    let last = fragments.len() - 1;
    let mut trimmed = String::with_capacity(collapsed.len());
    for (i, fragment) in fragments.iter().enumerate() {
        let mut s = *fragment;
        if i > 0 || at_text_start {
            s = s.trim_start();
        }
        if i < last || at_text_end {
            s = s.trim_end();
        }
        if i > 0 {
            trimmed.push('\n');
        }
        trimmed.push_str(s);
    }

    out.push_str(&EXCESS_NEWLINES_RE.replace_all(&trimmed, "\n\n\n"));
}
