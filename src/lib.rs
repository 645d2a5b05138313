//! linealign - Line-oriented alignment and diff rendering
//!
//! Aligns two sequences of text lines into an ordered list of
//! Match / Insert / Delete / Replace operations and renders the result.
//!
//! ## Core Concepts
//!
//! **Normalized equivalence**: lines are compared by a normalized key
//! (by default: trimmed, trailing `//` comment cut, `#` directives blanked),
//! so formatting and comment churn do not count as changes.
//!
//! **Gap pairing**: between LCS matches, deleted and inserted lines that look
//! alike are paired into Replace operations by a similarity score.
//!
//! ## Modules
//! - `normalize` / `compare`: normalized keys and line equality
//! - `similarity`: scores for Replace pairing
//! - `algo`: Myers LCS, sections and gap pairing (`align`)
//! - `render`: equivalence transcript and summary listing
//! - `report`: `compare`, `assert_equivalent`, `ApiReport`
//! - `natural`: natural string order for sorting dumps
//!
//! ## Usage
//!
//! ```
//! use linealign::{align, render_transcript, AlignConfig, BlankAfterNormalize};
//!
//! let expected = ["int x = 1; // old", "return x;"];
//! let actual = ["int x = 1; // new", "", "return x;"];
//!
//! let alignment = align(&expected, &actual, &AlignConfig::code());
//! let transcript = render_transcript(&alignment, &BlankAfterNormalize::default());
//! assert!(transcript.equivalent);
//! ```

// =============================================================================
// Core modules
// =============================================================================

/// Error types
pub mod error;

/// Stable hashing (blake3)
pub mod hash;

/// Line records and input splitting
pub mod line;

/// Normalizers and normalized keys
pub mod normalize;

/// Line equality and key interning
pub mod compare;

/// Similarity scorers for Replace pairing
pub mod similarity;

/// Ignore policies for the equivalence verdict
pub mod ignore;

/// Algorithms: myers, sections, align
pub mod algo;

/// Transcript and summary rendering
pub mod render;

/// Comparison helpers and API reports
pub mod report;

/// Natural string order
pub mod natural;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Lines
pub use line::{number_lines, split_lines, Line};

// Policies
pub use ignore::{BlankAfterNormalize, IgnorePolicy, NeverIgnore, SharedIgnorePolicy};
pub use normalize::{
    CodeNormalizer, IdentityNormalizer, Normalize, NormalizedKey, SharedNormalizer,
};
pub use similarity::{EditDistanceSimilarity, SharedSimilarity, Similarity, TokenSimilarity};

// Comparison
pub use compare::{KeyInterner, LineComparer, LineId};

// Algorithms
pub use algo::{align, AlignConfig, AlignStats, Alignment, DiffOp};
pub use hash::StableHasher;

// Rendering
pub use render::{render_summary, render_transcript, SummaryConfig, Transcript};

// Helpers
pub use natural::{natural_cmp, sort_natural};
#[cfg(feature = "parallel")]
pub use report::compare_batch;
pub use report::{
    assert_equivalent, assert_equivalent_with, assert_files_equivalent, compare, ApiReport,
    CompareOptions,
};

// Error types
pub use error::{DiffError, DiffResult};

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use static_assertions::assert_impl_all;

    assert_impl_all!(AlignConfig: Send, Sync, Clone);
    assert_impl_all!(CompareOptions: Send, Sync, Clone);
    assert_impl_all!(SummaryConfig: Send, Sync, Clone);
    assert_impl_all!(CodeNormalizer: Send, Sync);
    assert_impl_all!(BlankAfterNormalize: Send, Sync);
    assert_impl_all!(EditDistanceSimilarity: Send, Sync);
    assert_impl_all!(TokenSimilarity: Send, Sync);
    assert_impl_all!(DiffError: Send, Sync, std::error::Error);
    assert_impl_all!(Alignment<'static>: Send, Sync);

    #[test]
    fn test_root_reexports() {
        let left = split_lines("a\nbx\n");
        let right = split_lines("a\ncx\n");
        let alignment = align(&left, &right, &AlignConfig::exact());
        assert_eq!(alignment.stats.replaced, 1);
        assert_eq!(
            render_summary(&alignment, &SummaryConfig::full()),
            "    a\n(-) bx\n(+) cx\n"
        );
    }
}
