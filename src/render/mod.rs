//! Rendering of alignments.
//!
//! Both renderers consume an [`Alignment`](crate::algo::Alignment) and never
//! re-run the diff:
//!
//! ```text
//! align(left, right) -> Alignment
//!       |
//!       +-> render_transcript(alignment, ignore) -> Transcript { text, equivalent }
//!       +-> render_summary(alignment, config)    -> String
//! ```

mod summary;
mod transcript;

pub use summary::{render_summary, SummaryConfig, DEFAULT_INDENT_MARKER};
pub use transcript::{render_transcript, Transcript};

/// Marker for unchanged lines, and for changes an ignore policy waved through.
pub const CONTEXT_MARKER: &str = "    ";
/// Marker for inserted lines.
pub const INSERT_MARKER: &str = " +  ";
/// Marker for deleted lines.
pub const DELETE_MARKER: &str = " -  ";
/// Marker for the old half of a replacement.
pub const REPLACE_OLD_MARKER: &str = "(-) ";
/// Marker for the new half of a replacement.
pub const REPLACE_NEW_MARKER: &str = "(+) ";
