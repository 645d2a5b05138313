//! Folding an LCS into match runs and diff gaps.

use std::ops::Range;

use super::myers::LcsPair;

/// A maximal run of the alignment.
///
/// Ranges are zero-based indices into the left and right sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Section {
    /// Both sequences advance together; `left.len() == right.len()`.
    Match { left: Range<usize>, right: Range<usize> },
    /// Unmatched lines on either side; never empty on both.
    Gap { left: Range<usize>, right: Range<usize> },
}

impl Section {
    pub fn is_match(&self) -> bool {
        matches!(self, Section::Match { .. })
    }

    pub fn left(&self) -> &Range<usize> {
        match self {
            Section::Match { left, .. } | Section::Gap { left, .. } => left,
        }
    }

    pub fn right(&self) -> &Range<usize> {
        match self {
            Section::Match { right, .. } | Section::Gap { right, .. } => right,
        }
    }
}

/// Build sections from LCS pairs over sequences of length `n` and `m`.
///
/// Sections tile both sequences in order: concatenating their left ranges
/// yields `0..n`, their right ranges `0..m`.
pub fn fold_sections(pairs: &[LcsPair], n: usize, m: usize) -> Vec<Section> {
    let mut sections = Vec::new();
    let (mut x, mut y) = (0, 0);
    let mut i = 0;

    while i < pairs.len() {
        let (px, py) = pairs[i];
        if px > x || py > y {
            sections.push(Section::Gap { left: x..px, right: y..py });
        }

        // Extend the run while pairs stay on the same diagonal
        let mut len = 1;
        while i + len < pairs.len() && pairs[i + len] == (px + len, py + len) {
            len += 1;
        }
        sections.push(Section::Match {
            left: px..px + len,
            right: py..py + len,
        });

        x = px + len;
        y = py + len;
        i += len;
    }

    if x < n || y < m {
        sections.push(Section::Gap { left: x..n, right: y..m });
    }
    sections
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_pairs() {
        assert!(fold_sections(&[], 0, 0).is_empty());
        assert_eq!(
            fold_sections(&[], 0, 2),
            vec![Section::Gap { left: 0..0, right: 0..2 }]
        );
    }

    #[test]
    fn test_all_match() {
        let pairs = [(0, 0), (1, 1), (2, 2)];
        assert_eq!(
            fold_sections(&pairs, 3, 3),
            vec![Section::Match { left: 0..3, right: 0..3 }]
        );
    }

    #[test]
    fn test_gaps_between_runs() {
        // a b X c  vs  a b c Y Z
        let pairs = [(0, 0), (1, 1), (3, 2)];
        let sections = fold_sections(&pairs, 4, 5);
        assert_eq!(
            sections,
            vec![
                Section::Match { left: 0..2, right: 0..2 },
                Section::Gap { left: 2..3, right: 2..2 },
                Section::Match { left: 3..4, right: 2..3 },
                Section::Gap { left: 4..4, right: 3..5 },
            ]
        );
    }

    #[test]
    fn test_leading_one_sided_gap() {
        let pairs = [(1, 0), (2, 1)];
        let sections = fold_sections(&pairs, 3, 2);
        assert_eq!(sections[0], Section::Gap { left: 0..1, right: 0..0 });
        assert!(sections[1].is_match());
        assert_eq!(sections.len(), 2);
    }

    #[test]
    fn test_sections_tile_both_sides() {
        let pairs = [(1, 2), (2, 3), (5, 4)];
        let sections = fold_sections(&pairs, 7, 6);
        let mut x = 0;
        let mut y = 0;
        for s in &sections {
            assert_eq!(s.left().start, x);
            assert_eq!(s.right().start, y);
            x = s.left().end;
            y = s.right().end;
        }
        assert_eq!((x, y), (7, 6));
    }
}
