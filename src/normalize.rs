//! Line normalization.
//!
//! A normalizer maps a raw line to the key it is compared by. Normalizers are
//! plain values: the built-in [`CodeNormalizer`] and [`IdentityNormalizer`],
//! or any `Fn(&str) -> String` closure.

use std::borrow::{Borrow, Cow};
use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use compact_str::CompactString;

/// Default line-comment marker for [`CodeNormalizer`].
pub const DEFAULT_COMMENT_MARKER: &str = "//";

/// Default directive marker for [`CodeNormalizer`].
pub const DEFAULT_DIRECTIVE_MARKER: &str = "#";

/// Maps a raw line to its comparison key.
///
/// Implementations must be pure and total: the same input always yields the
/// same key, and no input panics.
pub trait Normalize {
    fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str>;
}

impl<F> Normalize for F
where
    F: Fn(&str) -> String,
{
    fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        Cow::Owned(self(line))
    }
}

/// Shared, thread-safe normalizer handle carried in configs.
pub type SharedNormalizer = Arc<dyn Normalize + Send + Sync>;

// =============================================================================
// Built-in normalizers
// =============================================================================

/// Normalizer for source code.
///
/// Trims the line, cuts it at the first line-comment marker, and blanks lines
/// that start with a directive marker. The text before a comment is not
/// trimmed again, so `"x = 1 // a"` normalizes to `"x = 1 "`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeNormalizer {
    /// Line-comment marker; `None` keeps comments.
    pub comment_marker: Option<CompactString>,
    /// Directive marker; `None` keeps directive lines.
    pub directive_marker: Option<CompactString>,
}

impl CodeNormalizer {
    /// Create a normalizer with the default `//` and `#` markers.
    pub fn new() -> Self {
        Self {
            comment_marker: Some(CompactString::new(DEFAULT_COMMENT_MARKER)),
            directive_marker: Some(CompactString::new(DEFAULT_DIRECTIVE_MARKER)),
        }
    }

    /// Use a different line-comment marker.
    pub fn with_comment_marker(mut self, marker: impl Into<CompactString>) -> Self {
        self.comment_marker = Some(marker.into());
        self
    }

    /// Use a different directive marker.
    pub fn with_directive_marker(mut self, marker: impl Into<CompactString>) -> Self {
        self.directive_marker = Some(marker.into());
        self
    }

    /// Compare comments too.
    pub fn keep_comments(mut self) -> Self {
        self.comment_marker = None;
        self
    }

    /// Compare directive lines too.
    pub fn keep_directives(mut self) -> Self {
        self.directive_marker = None;
        self
    }
}

impl Default for CodeNormalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalize for CodeNormalizer {
    fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        let trimmed = line.trim();

        let comment_at = self
            .comment_marker
            .as_deref()
            .filter(|m| !m.is_empty())
            .and_then(|m| trimmed.find(m));
        if let Some(idx) = comment_at {
            return Cow::Borrowed(&trimmed[..idx]);
        }

        let is_directive = self
            .directive_marker
            .as_deref()
            .is_some_and(|m| !m.is_empty() && trimmed.starts_with(m));
        if is_directive {
            return Cow::Borrowed("");
        }

        Cow::Borrowed(trimmed)
    }
}

/// Normalizer that compares lines byte-for-byte.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdentityNormalizer;

impl Normalize for IdentityNormalizer {
    #[inline]
    fn normalize<'a>(&self, line: &'a str) -> Cow<'a, str> {
        Cow::Borrowed(line)
    }
}

// =============================================================================
// NormalizedKey
// =============================================================================

/// Owned comparison key derived from a line.
///
/// Keys are never written back onto lines; they exist only while comparing.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedKey(CompactString);

impl NormalizedKey {
    /// Normalize a line into an owned key.
    pub fn of(normalizer: &(impl Normalize + ?Sized), line: &str) -> Self {
        Self::from(&*normalizer.normalize(line))
    }

    /// Get the key as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NormalizedKey {
    fn from(key: &str) -> Self {
        Self(CompactString::from(key))
    }
}

impl Deref for NormalizedKey {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for NormalizedKey {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NormalizedKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_normalizer_trims() {
        let n = CodeNormalizer::new();
        assert_eq!(n.normalize("   return x;\t"), "return x;");
    }

    #[test]
    fn test_code_normalizer_strips_comment() {
        let n = CodeNormalizer::new();
        assert_eq!(n.normalize("x = 1 // old"), "x = 1 ");
        assert_eq!(n.normalize("x = 1 // new"), "x = 1 ");
        assert_eq!(n.normalize("  // only a comment"), "");
    }

    #[test]
    fn test_code_normalizer_blanks_directives() {
        let n = CodeNormalizer::new();
        assert_eq!(n.normalize("#region Helpers"), "");
        assert_eq!(n.normalize("   #if DEBUG"), "");
    }

    #[test]
    fn test_comment_wins_over_directive() {
        // "#x // y" is cut at the comment, not blanked
        let n = CodeNormalizer::new();
        assert_eq!(n.normalize("#x // y"), "#x ");
    }

    #[test]
    fn test_custom_markers() {
        let n = CodeNormalizer::new()
            .with_comment_marker("--")
            .keep_directives();
        assert_eq!(n.normalize("select 1 -- note"), "select 1 ");
        assert_eq!(n.normalize("#pragma"), "#pragma");
        assert_eq!(n.normalize("a // b"), "a // b");
    }

    #[test]
    fn test_empty_marker_is_ignored() {
        let n = CodeNormalizer::new().with_comment_marker("");
        assert_eq!(n.normalize(" abc "), "abc");
    }

    #[test]
    fn test_identity_normalizer() {
        assert_eq!(IdentityNormalizer.normalize("  a // b "), "  a // b ");
    }

    #[test]
    fn test_closure_normalizer() {
        let lower = |line: &str| line.to_ascii_lowercase();
        assert_eq!(lower.normalize("ABC"), "abc");

        let shared: SharedNormalizer = Arc::new(lower);
        assert_eq!(shared.normalize("XyZ"), "xyz");
    }

    #[test]
    fn test_normalized_key() {
        let key = NormalizedKey::of(&CodeNormalizer::new(), "  foo(); // call");
        assert_eq!(key.as_str(), "foo(); ");
        assert_eq!(&*key, "foo(); ");
    }
}
