/// One span of the diagnostic view produced by [`crate::highlight`].
///
/// Segments are maximal runs: adjacent kept segments of the same kind are
/// merged before emission. For removed segments `text` holds display glyphs
/// ("•" per removed space-like char, "↵" per removed newline), one glyph per
/// removed input character, so the original run length is recoverable from
/// the glyph count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    /// Original text for kept segments, replacement glyphs for removed ones.
    pub text: String,
    /// Whether normalization would remove/collapse this span.
    pub is_removed: bool,
}

impl Segment {
    pub(crate) fn kept(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_removed: false,
        }
    }

    pub(crate) fn removed(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_removed: true,
        }
    }
}
