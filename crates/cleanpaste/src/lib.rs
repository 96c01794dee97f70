//! Cleanpaste — whitespace cleanup primitives for pasted text.
//!
//! Pure Rust library providing:
//! - Whitespace normalization (exotic-space folding + run collapsing, fence-aware)
//! - Diagnostic highlighting (segments marking what normalization would remove)
//! - Removable-content detection (cheap predicate for gating the diagnostic view)

pub mod highlighter;
pub mod normalizer;
pub mod types;
pub mod whitespace;

// Re-export main entry points at crate root for convenience
pub use highlighter::{has_removable_content, highlight};
pub use normalizer::normalize;
pub use types::Segment;
