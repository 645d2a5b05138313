//! Summary rendering for structured dumps such as API surface listings.
//!
//! Lines that start with the indent marker belong to the nearest preceding
//! top-level line. In collapsed mode only top-level regions that contain a
//! change are printed, each led by its top-level header when there is one.

use compact_str::CompactString;

use super::{CONTEXT_MARKER, DELETE_MARKER, INSERT_MARKER, REPLACE_NEW_MARKER, REPLACE_OLD_MARKER};
use crate::algo::{Alignment, DiffOp};

/// Indent marker used by [`SummaryConfig::full`] and [`SummaryConfig::changes_only`].
pub const DEFAULT_INDENT_MARKER: &str = "\t";

// =============================================================================
// SummaryConfig
// =============================================================================

/// Options for [`render_summary`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryConfig {
    /// Print only regions with changes.
    /// Default: false
    pub collapse_unchanged: bool,
    /// Prefix marking a line as nested under the previous top-level line.
    /// `None` makes every line top-level.
    /// Default: `Some("\t")`
    pub indent_marker: Option<CompactString>,
}

impl SummaryConfig {
    /// Print every line.
    pub fn full() -> Self {
        Self {
            collapse_unchanged: false,
            indent_marker: Some(CompactString::const_new(DEFAULT_INDENT_MARKER)),
        }
    }

    /// Print only changed regions.
    pub fn changes_only() -> Self {
        Self {
            collapse_unchanged: true,
            ..Self::full()
        }
    }

    pub fn with_collapse(mut self, collapse: bool) -> Self {
        self.collapse_unchanged = collapse;
        self
    }

    pub fn with_indent_marker(mut self, marker: impl Into<CompactString>) -> Self {
        self.indent_marker = Some(marker.into());
        self
    }

    pub fn without_indent_marker(mut self) -> Self {
        self.indent_marker = None;
        self
    }

    fn is_top_level(&self, line: &str) -> bool {
        self.indent_marker
            .as_deref()
            .is_none_or(|marker| marker.is_empty() || !line.starts_with(marker))
    }
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self::full()
    }
}

// =============================================================================
// Renderer
// =============================================================================

/// Render an alignment as a marked-up listing.
pub fn render_summary(alignment: &Alignment<'_>, config: &SummaryConfig) -> String {
    let mut writer = SummaryWriter::new(config);
    for op in alignment {
        writer.op(op);
    }
    writer.finish()
}

struct SummaryWriter<'c> {
    config: &'c SummaryConfig,
    out: String,
    /// Lines of the current region, not yet known to be worth printing
    buffer: String,
    has_changes: bool,
}

impl<'c> SummaryWriter<'c> {
    fn new(config: &'c SummaryConfig) -> Self {
        Self {
            config,
            out: String::new(),
            buffer: String::new(),
            has_changes: false,
        }
    }

    fn op(&mut self, op: &DiffOp<'_>) {
        match *op {
            DiffOp::Match { left, .. } => {
                if !self.config.collapse_unchanged {
                    self.push(CONTEXT_MARKER, left.text);
                } else if self.config.is_top_level(left.text) {
                    self.start_region();
                    self.push(CONTEXT_MARKER, left.text);
                }
            }
            DiffOp::Insert { right } => {
                self.start_change(right.text);
                self.push(INSERT_MARKER, right.text);
            }
            DiffOp::Delete { left } => {
                self.start_change(left.text);
                self.push(DELETE_MARKER, left.text);
            }
            DiffOp::Replace { left, right } => {
                self.start_change(left.text);
                self.push(REPLACE_OLD_MARKER, left.text);
                self.push(REPLACE_NEW_MARKER, right.text);
            }
        }
    }

    /// A top-level change opens its own region; pending changes are kept.
    fn start_change(&mut self, line: &str) {
        if self.config.collapse_unchanged && self.config.is_top_level(line) {
            self.start_region();
        }
        self.has_changes = true;
    }

    fn start_region(&mut self) {
        if self.has_changes {
            self.out.push_str(&self.buffer);
            self.has_changes = false;
        }
        self.buffer.clear();
    }

    fn push(&mut self, marker: &str, line: &str) {
        self.buffer.push_str(marker);
        self.buffer.push_str(line);
        self.buffer.push('\n');
    }

    fn finish(mut self) -> String {
        if !self.config.collapse_unchanged || self.has_changes {
            self.out.push_str(&self.buffer);
        }
        self.out
    }
}
