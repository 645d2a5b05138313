//! Prelude module for common imports.
//!
//! ```
//! use linealign::prelude::*;
//! ```

// Lines
pub use crate::line::{number_lines, split_lines, Line};

// Policies
pub use crate::ignore::{BlankAfterNormalize, IgnorePolicy, NeverIgnore, SharedIgnorePolicy};
pub use crate::normalize::{CodeNormalizer, IdentityNormalizer, Normalize, SharedNormalizer};
pub use crate::similarity::{EditDistanceSimilarity, Similarity, TokenSimilarity};

// Algorithms
pub use crate::algo::{align, AlignConfig, AlignStats, Alignment, DiffOp};

// Rendering
pub use crate::render::{render_summary, render_transcript, SummaryConfig, Transcript};

// Helpers
pub use crate::natural::{natural_cmp, sort_natural};
pub use crate::report::{
    assert_equivalent, assert_equivalent_with, compare, ApiReport, CompareOptions,
};

// Error
pub use crate::error::{DiffError, DiffResult};
