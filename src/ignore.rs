//! Ignore policies for inserted and deleted lines.
//!
//! An ignore policy only ever sees the unmatched line of an Insert or Delete.
//! Replacements are always real changes and never reach the policy.

use std::sync::Arc;

use crate::normalize::{CodeNormalizer, Normalize, SharedNormalizer};

/// Decides whether an inserted/deleted line is inconsequential.
pub trait IgnorePolicy {
    fn is_ignorable(&self, line: &str) -> bool;
}

impl<F> IgnorePolicy for F
where
    F: Fn(&str) -> bool,
{
    fn is_ignorable(&self, line: &str) -> bool {
        self(line)
    }
}

/// Shared, thread-safe ignore policy handle.
pub type SharedIgnorePolicy = Arc<dyn IgnorePolicy + Send + Sync>;

/// Ignores lines that normalize to the empty string.
///
/// With the default [`CodeNormalizer`] this covers blank lines, comment-only
/// lines and preprocessor directives.
#[derive(Clone)]
pub struct BlankAfterNormalize {
    normalizer: SharedNormalizer,
}

impl BlankAfterNormalize {
    pub fn new(normalizer: SharedNormalizer) -> Self {
        Self { normalizer }
    }
}

impl Default for BlankAfterNormalize {
    fn default() -> Self {
        Self::new(Arc::new(CodeNormalizer::new()))
    }
}

impl IgnorePolicy for BlankAfterNormalize {
    fn is_ignorable(&self, line: &str) -> bool {
        self.normalizer.normalize(line).is_empty()
    }
}

impl std::fmt::Debug for BlankAfterNormalize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BlankAfterNormalize").finish_non_exhaustive()
    }
}

/// Every change counts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverIgnore;

impl IgnorePolicy for NeverIgnore {
    #[inline]
    fn is_ignorable(&self, _line: &str) -> bool {
        false
    }
}
