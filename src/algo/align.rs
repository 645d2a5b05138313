//! Line alignment: LCS sections plus similarity pairing inside gaps.
//!
//! # Architecture
//!
//! ```text
//! lines ─ intern ─> LineId ─ myers::lcs ─> pairs ─ fold ─> Section*
//!                                                            │
//!            Match run ── DiffOp::Match ─────────────────────┤
//!            Gap ──────── pair_gap (similarity) ─> Replace / Delete / Insert
//! ```
//!
//! # Gap pairing
//!
//! Every `(left, right)` candidate inside a gap is scored. Candidates are
//! visited best score first, ties broken by earliest left then earliest
//! right position. A candidate becomes a Replace when both lines are still
//! free, the score beats the threshold, and it does not cross a pair that
//! was already accepted. Not crossing keeps the operations in order on both
//! sides. This is greedy, not a minimum-cost matching, which is fine for the
//! gaps of a few dozen lines seen in practice.

use std::collections::BTreeMap;
use std::ops::Range;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::myers::lcs;
use super::sections::{fold_sections, Section};
use super::AlignConfig;
use crate::compare::KeyInterner;
use crate::hash::StableHasher;
use crate::line::{number_lines, Line};
use crate::normalize::Normalize;
use crate::similarity::Similarity;

// =============================================================================
// Public Types
// =============================================================================

/// One step of the edit script.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiffOp<'a> {
    /// Line present on both sides (equal under the comparer)
    Match { left: Line<'a>, right: Line<'a> },
    /// Line only in the right sequence
    Insert { right: Line<'a> },
    /// Line only in the left sequence
    Delete { left: Line<'a> },
    /// Left line replaced by a similar right line
    Replace { left: Line<'a>, right: Line<'a> },
}

impl<'a> DiffOp<'a> {
    /// The left-sequence line this op consumes, if any.
    pub fn left(&self) -> Option<Line<'a>> {
        match *self {
            DiffOp::Match { left, .. } | DiffOp::Delete { left } | DiffOp::Replace { left, .. } => {
                Some(left)
            }
            DiffOp::Insert { .. } => None,
        }
    }

    /// The right-sequence line this op consumes, if any.
    pub fn right(&self) -> Option<Line<'a>> {
        match *self {
            DiffOp::Match { right, .. } | DiffOp::Insert { right } | DiffOp::Replace { right, .. } => {
                Some(right)
            }
            DiffOp::Delete { .. } => None,
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, DiffOp::Match { .. })
    }

    /// Whether this op is an Insert/Delete/Replace.
    pub fn is_change(&self) -> bool {
        !self.is_match()
    }

    fn tag(&self) -> u8 {
        match self {
            DiffOp::Match { .. } => b'=',
            DiffOp::Insert { .. } => b'+',
            DiffOp::Delete { .. } => b'-',
            DiffOp::Replace { .. } => b'~',
        }
    }
}

/// Counts per operation kind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AlignStats {
    pub matched: usize,
    pub inserted: usize,
    pub deleted: usize,
    pub replaced: usize,
    /// Number of diff gaps between match runs
    pub gaps: usize,
}

impl AlignStats {
    pub fn change_count(&self) -> usize {
        self.inserted + self.deleted + self.replaced
    }

    pub fn is_empty(&self) -> bool {
        self.change_count() == 0
    }
}

/// Ordered edit script between two line sequences.
///
/// Left lines of all ops, in order, are exactly the left sequence; the same
/// holds for the right side.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct Alignment<'a> {
    pub ops: Vec<DiffOp<'a>>,
    pub stats: AlignStats,
}

impl<'a> Alignment<'a> {
    /// Left-sequence lines in order.
    pub fn left_lines(&self) -> impl Iterator<Item = Line<'a>> + '_ {
        self.ops.iter().filter_map(DiffOp::left)
    }

    /// Right-sequence lines in order.
    pub fn right_lines(&self) -> impl Iterator<Item = Line<'a>> + '_ {
        self.ops.iter().filter_map(DiffOp::right)
    }

    pub fn has_changes(&self) -> bool {
        !self.stats.is_empty()
    }

    pub fn len(&self) -> usize {
        self.ops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DiffOp<'a>> {
        self.ops.iter()
    }

    /// Deterministic hash of the edit script, stable across processes.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = StableHasher::for_fingerprint().update_usize(self.ops.len());
        for op in &self.ops {
            hasher = hasher.update_tag(op.tag());
            for line in [op.left(), op.right()].into_iter().flatten() {
                hasher = hasher.update_usize(line.number).update_str(line.text);
            }
        }
        hasher.finish()
    }
}

impl<'a, 'b> IntoIterator for &'b Alignment<'a> {
    type Item = &'b DiffOp<'a>;
    type IntoIter = std::slice::Iter<'b, DiffOp<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.ops.iter()
    }
}

// =============================================================================
// Main API
// =============================================================================

/// Align two line sequences.
///
/// Total over any inputs: an empty side yields all Inserts or all Deletes,
/// identical sides yield all Matches.
///
/// The config is used as given. A threshold of 1.0 or more, or NaN, pairs
/// nothing; call [`AlignConfig::validate`] first to reject such configs.
pub fn align<'a, L, R>(left: &'a [L], right: &'a [R], config: &AlignConfig) -> Alignment<'a>
where
    L: AsRef<str>,
    R: AsRef<str>,
{
    let left = number_lines(left);
    let right = number_lines(right);

    let mut interner = KeyInterner::new(config.comparer());
    let left_ids: Vec<_> = left.iter().map(|l| interner.intern(l.text)).collect();
    let right_ids: Vec<_> = right.iter().map(|l| interner.intern(l.text)).collect();

    let pairs = lcs(&left_ids, &right_ids);
    let sections = fold_sections(&pairs, left.len(), right.len());
    debug!(
        left = left.len(),
        right = right.len(),
        distinct_keys = interner.len(),
        common = pairs.len(),
        sections = sections.len(),
        "computed alignment sections"
    );

    let mut builder = OpBuilder {
        left: &left,
        right: &right,
        config,
        alignment: Alignment::default(),
    };
    for section in sections {
        match section {
            Section::Match { left, right } => builder.push_matches(left, right),
            Section::Gap { left, right } => builder.push_gap(left, right),
        }
    }

    let alignment = builder.alignment;
    debug!(
        matched = alignment.stats.matched,
        inserted = alignment.stats.inserted,
        deleted = alignment.stats.deleted,
        replaced = alignment.stats.replaced,
        gaps = alignment.stats.gaps,
        "aligned"
    );
    alignment
}

// =============================================================================
// Op construction
// =============================================================================

struct OpBuilder<'a, 'c> {
    left: &'c [Line<'a>],
    right: &'c [Line<'a>],
    config: &'c AlignConfig,
    alignment: Alignment<'a>,
}

impl<'a> OpBuilder<'a, '_> {
    fn push_matches(&mut self, left: Range<usize>, right: Range<usize>) {
        for (i, j) in left.zip(right) {
            self.alignment.ops.push(DiffOp::Match {
                left: self.left[i],
                right: self.right[j],
            });
            self.alignment.stats.matched += 1;
        }
    }

    fn push_deletes(&mut self, left: Range<usize>) {
        for i in left {
            self.alignment.ops.push(DiffOp::Delete { left: self.left[i] });
            self.alignment.stats.deleted += 1;
        }
    }

    fn push_inserts(&mut self, right: Range<usize>) {
        for j in right {
            self.alignment.ops.push(DiffOp::Insert { right: self.right[j] });
            self.alignment.stats.inserted += 1;
        }
    }

    fn push_gap(&mut self, left: Range<usize>, right: Range<usize>) {
        self.alignment.stats.gaps += 1;

        if left.is_empty() || right.is_empty() {
            self.push_deletes(left);
            self.push_inserts(right);
            return;
        }

        let cells = left.len().saturating_mul(right.len());
        if cells > self.config.max_gap_cells {
            debug!(
                left_start = left.start + 1,
                right_start = right.start + 1,
                cells,
                limit = self.config.max_gap_cells,
                "gap too large for similarity pairing"
            );
            self.push_deletes(left);
            self.push_inserts(right);
            return;
        }

        let pairs = self.pair_gap(&left, &right);

        let (mut li, mut ri) = (left.start, right.start);
        for (pi, pj) in pairs {
            let (pi, pj) = (left.start + pi, right.start + pj);
            self.push_deletes(li..pi);
            self.push_inserts(ri..pj);
            self.alignment.ops.push(DiffOp::Replace {
                left: self.left[pi],
                right: self.right[pj],
            });
            self.alignment.stats.replaced += 1;
            li = pi + 1;
            ri = pj + 1;
        }
        self.push_deletes(li..left.end);
        self.push_inserts(ri..right.end);
    }

    /// Greedy non-crossing pairing; returns gap-relative pairs in left order.
    fn pair_gap(&self, left: &Range<usize>, right: &Range<usize>) -> SmallVec<[(usize, usize); 8]> {
        let normalizer = &*self.config.normalizer;
        let similarity = &*self.config.similarity;
        let threshold = self.config.replace_threshold;

        let left_keys: Vec<_> = self.left[left.clone()]
            .iter()
            .map(|l| normalizer.normalize(l.text))
            .collect();
        let right_keys: Vec<_> = self.right[right.clone()]
            .iter()
            .map(|l| normalizer.normalize(l.text))
            .collect();

        let mut candidates = Vec::with_capacity(left_keys.len() * right_keys.len());
        for (i, a) in left_keys.iter().enumerate() {
            for (j, b) in right_keys.iter().enumerate() {
                let score = similarity.similarity(a, b);
                if score > threshold {
                    candidates.push((score, i, j));
                }
            }
        }
        candidates.sort_by(|a, b| {
            b.0.total_cmp(&a.0)
                .then_with(|| a.1.cmp(&b.1))
                .then_with(|| a.2.cmp(&b.2))
        });

        let mut accepted: BTreeMap<usize, usize> = BTreeMap::new();
        for (score, i, j) in candidates {
            if accepted.contains_key(&i) {
                continue;
            }
            let after_prev = accepted.range(..i).next_back().is_none_or(|(_, &pj)| pj < j);
            let before_next = accepted.range(i + 1..).next().is_none_or(|(_, &nj)| j < nj);
            if !(after_prev && before_next) {
                continue;
            }
            trace!(
                left = self.left[left.start + i].number,
                right = self.right[right.start + j].number,
                score,
                "paired replace"
            );
            accepted.insert(i, j);
            if accepted.len() == left_keys.len().min(right_keys.len()) {
                break;
            }
        }

        accepted.into_iter().collect()
    }
}

// =============================================================================
// Tests
// =============================================================================
