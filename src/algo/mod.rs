//! Alignment algorithms.
//!
//! - `myers`: Myers LCS over interned line ids
//! - `sections`: folding the LCS into match runs and diff gaps
//! - `align`: similarity pairing inside gaps, producing [`DiffOp`]s

mod align;
mod myers;
mod sections;

use std::fmt;
use std::sync::Arc;

pub use align::{align, AlignStats, Alignment, DiffOp};
pub use myers::{lcs, LcsPair};
pub use sections::{fold_sections, Section};

use crate::compare::LineComparer;
use crate::error::{DiffError, DiffResult};
use crate::normalize::{CodeNormalizer, IdentityNormalizer, Normalize, SharedNormalizer};
use crate::similarity::{EditDistanceSimilarity, SharedSimilarity, Similarity};

/// Default minimum score (exclusive) for pairing a Delete with an Insert.
const DEFAULT_REPLACE_THRESHOLD: f64 = 0.0;

/// Default maximum `K * L` for similarity pairing inside one gap.
const DEFAULT_MAX_GAP_CELLS: usize = 1 << 16;

// =============================================================================
// AlignConfig
// =============================================================================

/// Policies and limits for the alignment engine.
///
/// Policies are shared handles, so a config is cheap to clone and can be used
/// from several threads at once.
#[derive(Clone)]
pub struct AlignConfig {
    /// Maps lines to comparison keys.
    pub normalizer: SharedNormalizer,
    /// Scores gap candidates for Replace pairing.
    pub similarity: SharedSimilarity,
    /// A candidate pair must score strictly above this to become a Replace.
    /// Default: 0.0
    pub replace_threshold: f64,
    /// Gaps with more than this many `(left, right)` candidates skip pairing
    /// and are reported as Deletes followed by Inserts.
    /// Default: 65536
    pub max_gap_cells: usize,
}

impl AlignConfig {
    /// Config for source code: [`CodeNormalizer`] and edit-distance scoring.
    pub fn code() -> Self {
        Self {
            normalizer: Arc::new(CodeNormalizer::new()),
            similarity: Arc::new(EditDistanceSimilarity),
            replace_threshold: DEFAULT_REPLACE_THRESHOLD,
            max_gap_cells: DEFAULT_MAX_GAP_CELLS,
        }
    }

    /// Config for byte-exact comparison, e.g. API surface dumps.
    pub fn exact() -> Self {
        Self {
            normalizer: Arc::new(IdentityNormalizer),
            ..Self::code()
        }
    }

    /// Replace the normalizer.
    pub fn with_normalizer(mut self, normalizer: impl Normalize + Send + Sync + 'static) -> Self {
        self.normalizer = Arc::new(normalizer);
        self
    }

    /// Replace the similarity scorer.
    pub fn with_similarity(mut self, similarity: impl Similarity + Send + Sync + 'static) -> Self {
        self.similarity = Arc::new(similarity);
        self
    }

    /// Set the Replace pairing threshold.
    pub fn with_replace_threshold(mut self, threshold: f64) -> Self {
        self.replace_threshold = threshold;
        self
    }

    /// Set the pairing size limit per gap.
    pub fn with_max_gap_cells(mut self, cells: usize) -> Self {
        self.max_gap_cells = cells;
        self
    }

    /// Check that the threshold is a number in `[0, 1)`.
    ///
    /// A threshold of 1.0 or more could never pair anything, which is almost
    /// certainly a mistake; use `with_max_gap_cells(0)` to disable pairing.
    pub fn validate(&self) -> DiffResult<()> {
        let t = self.replace_threshold;
        if t.is_nan() || !(0.0..1.0).contains(&t) {
            return Err(DiffError::invalid_config(format!(
                "replace threshold must be in [0, 1), got {t}"
            )));
        }
        Ok(())
    }

    /// Equivalence comparer using this config's normalizer.
    pub fn comparer(&self) -> LineComparer<'_> {
        LineComparer::new(&*self.normalizer)
    }
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self::code()
    }
}

impl fmt::Debug for AlignConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlignConfig")
            .field("replace_threshold", &self.replace_threshold)
            .field("max_gap_cells", &self.max_gap_cells)
            .finish_non_exhaustive()
    }
}
