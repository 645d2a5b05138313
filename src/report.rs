//! Comparison helpers built on the engine.
//!
//! - [`compare`] / [`assert_equivalent`] / [`assert_equivalent_with`] /
//!   [`assert_files_equivalent`]:
//!   equivalence checks for generated source code
//! - [`ApiReport`]: labelled summary of two API surface dumps
//! - `compare_batch` (feature `parallel`): many independent comparisons

use std::path::Path;
use std::sync::Arc;

use compact_str::CompactString;
use tracing::debug;

use crate::algo::{align, AlignConfig};
use crate::error::{DiffError, DiffResult};
use crate::ignore::{BlankAfterNormalize, SharedIgnorePolicy};
use crate::line::split_lines;
use crate::render::{render_summary, render_transcript, SummaryConfig, Transcript};

// =============================================================================
// Equivalence checks
// =============================================================================

/// Policies for an equivalence check.
#[derive(Clone)]
pub struct CompareOptions {
    pub align: AlignConfig,
    /// Decides which inserted/deleted lines do not break equivalence.
    pub ignore: SharedIgnorePolicy,
}

impl CompareOptions {
    /// Build options whose ignore policy shares the alignment normalizer.
    pub fn new(align: AlignConfig) -> Self {
        let ignore = Arc::new(BlankAfterNormalize::new(align.normalizer.clone()));
        Self { align, ignore }
    }

    pub fn with_ignore(mut self, ignore: SharedIgnorePolicy) -> Self {
        self.ignore = ignore;
        self
    }

    /// Check the alignment config. See [`AlignConfig::validate`].
    pub fn validate(&self) -> DiffResult<()> {
        self.align.validate()
    }
}

impl Default for CompareOptions {
    fn default() -> Self {
        Self::new(AlignConfig::code())
    }
}

impl std::fmt::Debug for CompareOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompareOptions")
            .field("align", &self.align)
            .finish_non_exhaustive()
    }
}

/// Split both texts into lines, align them and render the transcript.
///
/// The options are used as given; [`assert_equivalent_with`] validates them
/// first.
pub fn compare(expected: &str, actual: &str, options: &CompareOptions) -> Transcript {
    let left = split_lines(expected);
    let right = split_lines(actual);
    let alignment = align(&left, &right, &options.align);
    let transcript = render_transcript(&alignment, &*options.ignore);
    debug!(
        left = left.len(),
        right = right.len(),
        changes = alignment.stats.change_count(),
        equivalent = transcript.equivalent,
        "compared texts"
    );
    transcript
}

/// Check two code texts for equivalence with the default options.
///
/// On failure the error carries the full transcript.
pub fn assert_equivalent(expected: &str, actual: &str) -> DiffResult<()> {
    assert_equivalent_with(expected, actual, &CompareOptions::default())
}

/// Check two texts for equivalence under custom options.
///
/// Fails with [`DiffError::InvalidConfig`] before comparing anything if the
/// options do not validate.
pub fn assert_equivalent_with(
    expected: &str,
    actual: &str,
    options: &CompareOptions,
) -> DiffResult<()> {
    options.validate()?;
    let transcript = compare(expected, actual, options);
    if transcript.equivalent {
        Ok(())
    } else {
        Err(DiffError::NotEquivalent {
            transcript: transcript.text,
        })
    }
}

/// Read two files and check their contents for equivalence.
pub fn assert_files_equivalent(
    expected: impl AsRef<Path>,
    actual: impl AsRef<Path>,
) -> DiffResult<()> {
    let expected = read(expected.as_ref())?;
    let actual = read(actual.as_ref())?;
    assert_equivalent(&expected, &actual)
}

fn read(path: &Path) -> DiffResult<String> {
    std::fs::read_to_string(path).map_err(|e| DiffError::io(path, e))
}

/// Compare many independent text pairs in parallel.
///
/// Results are in input order.
#[cfg(feature = "parallel")]
pub fn compare_batch<E, A>(pairs: &[(E, A)], options: &CompareOptions) -> Vec<Transcript>
where
    E: AsRef<str> + Sync,
    A: AsRef<str> + Sync,
{
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|(expected, actual)| compare(expected.as_ref(), actual.as_ref(), options))
        .collect()
}

// =============================================================================
// ApiReport
// =============================================================================

/// Labelled summary diff of two API surface dumps.
///
/// Dumps are compared byte-exact, one member per line, nested members
/// prefixed with the summary indent marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiReport {
    pub base_label: CompactString,
    pub other_label: CompactString,
    pub summary: SummaryConfig,
}

impl ApiReport {
    pub fn new(base_label: impl Into<CompactString>, other_label: impl Into<CompactString>) -> Self {
        Self {
            base_label: base_label.into(),
            other_label: other_label.into(),
            summary: SummaryConfig::full(),
        }
    }

    /// Exchange base and other. Pass the dumps to [`render`](Self::render) in
    /// the swapped order as well.
    pub fn swapped(mut self) -> Self {
        std::mem::swap(&mut self.base_label, &mut self.other_label);
        self
    }

    /// Toggle between showing only changed regions and showing everything.
    pub fn with_collapse(mut self, collapse: bool) -> Self {
        self.summary.collapse_unchanged = collapse;
        self
    }

    pub fn with_summary(mut self, summary: SummaryConfig) -> Self {
        self.summary = summary;
        self
    }

    /// Render the header followed by the summary of `base` against `other`.
    pub fn render<B, O>(&self, base: &[B], other: &[O]) -> String
    where
        B: AsRef<str>,
        O: AsRef<str>,
    {
        let alignment = align(base, other, &AlignConfig::exact());
        debug!(
            base = %self.base_label,
            other = %self.other_label,
            changes = alignment.stats.change_count(),
            "rendered api report"
        );

        let mut out = format!(
            "Base version:\t{}\nOther version:\t{}\n\n",
            self.base_label, self.other_label
        );
        out.push_str(&render_summary(&alignment, &self.summary));
        out
    }
}
