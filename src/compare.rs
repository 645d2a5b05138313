//! Line equivalence.
//!
//! Two lines are equal when their normalized keys are equal under ordinal
//! (byte-exact) comparison. Locale never enters into it, so a diff computed
//! on one machine is reproduced exactly on another.

use rustc_hash::FxHashMap;

use crate::hash::hash_key;
use crate::normalize::{Normalize, NormalizedKey};

/// Equivalence comparer over raw lines.
#[derive(Clone, Copy)]
pub struct LineComparer<'n> {
    normalizer: &'n dyn Normalize,
}

impl<'n> LineComparer<'n> {
    pub fn new(normalizer: &'n dyn Normalize) -> Self {
        Self { normalizer }
    }

    /// Owned comparison key for a line.
    pub fn key(&self, line: &str) -> NormalizedKey {
        NormalizedKey::of(self.normalizer, line)
    }

    /// Whether two lines are the same for diff purposes.
    pub fn equal(&self, a: &str, b: &str) -> bool {
        self.normalizer.normalize(a) == self.normalizer.normalize(b)
    }

    /// Stable hash consistent with [`equal`](Self::equal).
    pub fn hash(&self, line: &str) -> u64 {
        hash_key(&self.normalizer.normalize(line))
    }

    pub fn normalizer(&self) -> &'n dyn Normalize {
        self.normalizer
    }
}

impl std::fmt::Debug for LineComparer<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LineComparer").finish_non_exhaustive()
    }
}

// =============================================================================
// Interning
// =============================================================================

/// Dense identifier for an equivalence class of lines.
///
/// Two lines get the same id iff the comparer considers them equal, so the
/// LCS can compare integers instead of strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(u32);

impl LineId {
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    #[inline]
    pub const fn as_raw(self) -> u32 {
        self.0
    }
}

/// Maps normalized keys to [`LineId`]s, shared across both sequences.
pub struct KeyInterner<'n> {
    comparer: LineComparer<'n>,
    ids: FxHashMap<NormalizedKey, LineId>,
}

impl<'n> KeyInterner<'n> {
    pub fn new(comparer: LineComparer<'n>) -> Self {
        Self {
            comparer,
            ids: FxHashMap::default(),
        }
    }

    /// Id for a single line, allocating a new one for unseen keys.
    pub fn intern(&mut self, line: &str) -> LineId {
        let key = self.comparer.normalizer().normalize(line);
        if let Some(&id) = self.ids.get(&*key) {
            return id;
        }
        let id = LineId(self.ids.len() as u32);
        self.ids.insert(NormalizedKey::from(&*key), id);
        id
    }

    /// Ids for a whole sequence.
    pub fn intern_all<S: AsRef<str>>(&mut self, lines: &[S]) -> Vec<LineId> {
        lines.iter().map(|l| self.intern(l.as_ref())).collect()
    }

    /// Number of distinct keys seen so far.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::{CodeNormalizer, IdentityNormalizer};

    #[test]
    fn test_equal_uses_normalizer() {
        let n = CodeNormalizer::new();
        let cmp = LineComparer::new(&n);
        assert!(cmp.equal("x = 1 // old", "x = 1 // new"));
        assert!(cmp.equal("  foo();", "foo();   "));
        assert!(!cmp.equal("foo();", "bar();"));
    }

    #[test]
    fn test_equal_is_ordinal() {
        let cmp = LineComparer::new(&IdentityNormalizer);
        assert!(!cmp.equal("Straße", "STRASSE"));
        assert!(!cmp.equal("e\u{301}", "\u{e9}"));
    }

    #[test]
    fn test_hash_consistent_with_equal() {
        let n = CodeNormalizer::new();
        let cmp = LineComparer::new(&n);
        assert_eq!(cmp.hash("  a; // x"), cmp.hash("a; // y"));
        assert_eq!(cmp.hash("#if DEBUG"), cmp.hash(""));
        assert_ne!(cmp.hash("a;"), cmp.hash("b;"));
    }

    #[test]
    fn test_interner_shares_ids_across_sequences() {
        let n = CodeNormalizer::new();
        let mut interner = KeyInterner::new(LineComparer::new(&n));
        let left = interner.intern_all(&["a", " b", "c"]);
        let right = interner.intern_all(&["b// note", "d", "a"]);

        assert_eq!(left[0], right[2]);
        assert_eq!(left[1], right[0]);
        assert_ne!(left[2], right[1]);
        assert_eq!(interner.len(), 4);
    }

    #[test]
    fn test_key() {
        let n = CodeNormalizer::new();
        let cmp = LineComparer::new(&n);
        assert_eq!(cmp.key("  #pragma once").as_str(), "");
    }
}
