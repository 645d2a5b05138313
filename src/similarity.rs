//! Similarity scoring between non-equivalent lines.
//!
//! The aligner calls the scorer with *normalized keys*, never raw text, so
//! a score of 1.0 means the two lines are equal under the comparer.
//! Scores decide which deleted/inserted lines inside a gap are reported as
//! a single replacement.

use std::sync::Arc;

use rustc_hash::FxHashSet;

/// Upper bound for [`TokenSimilarity`] when the token sets coincide but the
/// keys differ (e.g. reordered tokens).
const NEAR_IDENTICAL: f64 = 0.99;

/// Continuous similarity in `[0, 1]`.
///
/// Implementations must be symmetric, return 1.0 iff the keys are equal and
/// score lower as more characters or tokens differ. Gap pairing calls this
/// once per (left, right) candidate, so it should stay cheap.
pub trait Similarity {
    fn similarity(&self, a: &str, b: &str) -> f64;
}

impl<F> Similarity for F
where
    F: Fn(&str, &str) -> f64,
{
    fn similarity(&self, a: &str, b: &str) -> f64 {
        self(a, b)
    }
}

/// Shared, thread-safe scorer handle carried in configs.
pub type SharedSimilarity = Arc<dyn Similarity + Send + Sync>;

// =============================================================================
// Edit distance
// =============================================================================

/// `1 - levenshtein(a, b) / max(len(a), len(b))`, counted in chars.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EditDistanceSimilarity;

impl Similarity for EditDistanceSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        strsim::normalized_levenshtein(a, b)
    }
}

// =============================================================================
// Token overlap
// =============================================================================

/// Jaccard index over token sets.
///
/// Tokens are runs of alphanumerics/underscores; every other non-whitespace
/// char is a token of its own. Useful for signatures, where renaming one
/// parameter should not outweigh the rest of the line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TokenSimilarity;

impl Similarity for TokenSimilarity {
    fn similarity(&self, a: &str, b: &str) -> f64 {
        if a == b {
            return 1.0;
        }
        let ta = tokens(a);
        let tb = tokens(b);
        let union = ta.union(&tb).count();
        if union == 0 {
            return 0.0;
        }
        let shared = ta.intersection(&tb).count();
        (shared as f64 / union as f64).min(NEAR_IDENTICAL)
    }
}

fn tokens(s: &str) -> FxHashSet<&str> {
    let mut out = FxHashSet::default();
    let mut start: Option<usize> = None;

    for (i, c) in s.char_indices() {
        let is_word = c.is_alphanumeric() || c == '_';
        if is_word {
            if start.is_none() {
                start = Some(i);
            }
            continue;
        }
        if let Some(s0) = start.take() {
            out.insert(&s[s0..i]);
        }
        if !c.is_whitespace() {
            out.insert(&s[i..i + c.len_utf8()]);
        }
    }
    if let Some(s0) = start {
        out.insert(&s[s0..]);
    }
    out
}
