//! Myers diff over interned line ids.
//!
//! Computes the longest common subsequence of two [`LineId`] sequences with
//! the linear-space variant of Myers: find the middle snake of the edit
//! graph by searching forward and backward at once, then recurse on both
//! halves.
//!
//! # Cost
//!
//! | Path | Time | Space | Used when |
//! |------|------|-------|-----------|
//! | DP | O(n*m) | O(n*m) | both middles have at most 8 lines |
//! | Myers | O((n+m)*d) | O(n+m) | otherwise |
//!
//! `n` and `m` count only the middle left after stripping the common prefix
//! and suffix. Recursion depth is O(log d), since each middle snake splits
//! the edit distance in half.
//!
//! # References
//!
//! - Myers, E.W. "An O(ND) Difference Algorithm and Its Variations" (1986),
//!   section 4b

use std::ops::{Index, IndexMut, Range};

use crate::compare::LineId;

/// Middles up to this size use the plain DP table.
const SMALL_DP_LIMIT: usize = 8;

/// A matched pair of zero-based indices `(left, right)`.
pub type LcsPair = (usize, usize);

/// Compute the LCS of two id sequences.
///
/// Pairs are strictly increasing in both components.
pub fn lcs(old: &[LineId], new: &[LineId]) -> Vec<LcsPair> {
    let max_d = max_d(old.len(), new.len());
    let mut search = Search {
        old,
        new,
        forward: V::new(max_d),
        backward: V::new(max_d),
        pairs: Vec::new(),
    };
    search.conquer(0..old.len(), 0..new.len());
    search.pairs
}

/// Largest `d` the middle snake search can need for sides of `n` and `m`.
fn max_d(n: usize, m: usize) -> usize {
    (n + m + 1) / 2 + 1
}

/// Furthest-reaching x per diagonal `k = x - y`, indexed by signed `k`.
struct V {
    offset: isize,
    v: Vec<usize>,
}

impl V {
    fn new(max_d: usize) -> Self {
        Self {
            offset: max_d as isize,
            v: vec![0; 2 * max_d + 1],
        }
    }
}

impl Index<isize> for V {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.v[(k + self.offset) as usize]
    }
}

impl IndexMut<isize> for V {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.v[(k + self.offset) as usize]
    }
}

/// Search state shared by the whole recursion; `V` buffers are reused.
struct Search<'s> {
    old: &'s [LineId],
    new: &'s [LineId],
    forward: V,
    backward: V,
    pairs: Vec<LcsPair>,
}

impl Search<'_> {
    /// Emit the LCS of `old[left]` and `new[right]` in order.
    fn conquer(&mut self, mut left: Range<usize>, mut right: Range<usize>) {
        let prefix = left
            .clone()
            .zip(right.clone())
            .take_while(|&(i, j)| self.old[i] == self.new[j])
            .count();
        self.pairs
            .extend((0..prefix).map(|i| (left.start + i, right.start + i)));
        left.start += prefix;
        right.start += prefix;

        let suffix = left
            .clone()
            .rev()
            .zip(right.clone().rev())
            .take_while(|&(i, j)| self.old[i] == self.new[j])
            .count();
        left.end -= suffix;
        right.end -= suffix;

        if !left.is_empty() && !right.is_empty() {
            if left.len() <= SMALL_DP_LIMIT && right.len() <= SMALL_DP_LIMIT {
                let mid = small_lcs_dp(&self.old[left.clone()], &self.new[right.clone()]);
                self.pairs
                    .extend(mid.into_iter().map(|(i, j)| (left.start + i, right.start + j)));
            } else if let Some((x, y)) = self.middle_snake(left.clone(), right.clone()) {
                self.conquer(left.start..x, right.start..y);
                self.conquer(x..left.end, y..right.end);
            }
        }

        self.pairs
            .extend((0..suffix).map(|i| (left.end + i, right.end + i)));
    }

    /// Start of a snake on some shortest edit path through the two ranges,
    /// in absolute coordinates.
    ///
    /// Both ranges are non-empty and differ at their first and last lines.
    fn middle_snake(&mut self, left: Range<usize>, right: Range<usize>) -> Option<(usize, usize)> {
        let n = left.len();
        let m = right.len();
        let delta = n as isize - m as isize;
        let odd = delta & 1 == 1;
        let old = &self.old[left.clone()];
        let new = &self.new[right.clone()];
        let (vf, vb) = (&mut self.forward, &mut self.backward);

        vf[1] = 0;
        vb[1] = 0;

        for d in 0..max_d(n, m) as isize {
            for k in (-d..=d).rev().step_by(2) {
                // At k=-d we can only have come down from k+1 (insert), at
                // k=d only across from k-1 (delete); otherwise the further one.
                let mut x = if k == -d || (k != d && vf[k - 1] < vf[k + 1]) {
                    vf[k + 1]
                } else {
                    vf[k - 1] + 1
                };
                let mut y = (x as isize - k) as usize;
                let (x0, y0) = (x, y);

                while x < n && y < m && old[x] == new[y] {
                    x += 1;
                    y += 1;
                }
                vf[k] = x;

                if odd && (k - delta).abs() <= d - 1 && vf[k] + vb[delta - k] >= n {
                    return Some((left.start + x0, right.start + y0));
                }
            }

            // Backward search runs on the reversed sequences
            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && vb[k - 1] < vb[k + 1]) {
                    vb[k + 1]
                } else {
                    vb[k - 1] + 1
                };
                let mut y = (x as isize - k) as usize;

                while x < n && y < m && old[n - x - 1] == new[m - y - 1] {
                    x += 1;
                    y += 1;
                }
                vb[k] = x;

                if !odd && (k - delta).abs() <= d && vb[k] + vf[delta - k] >= n {
                    return Some((left.start + n - x, right.start + m - y));
                }
            }
        }

        None
    }
}

/// O(n*m) DP for tiny middles.
fn small_lcs_dp(old: &[LineId], new: &[LineId]) -> Vec<LcsPair> {
    let n = old.len();
    let m = new.len();

    let mut dp = [[0u8; SMALL_DP_LIMIT + 1]; SMALL_DP_LIMIT + 1];
    for i in 1..=n {
        for j in 1..=m {
            dp[i][j] = if old[i - 1] == new[j - 1] {
                dp[i - 1][j - 1] + 1
            } else {
                dp[i - 1][j].max(dp[i][j - 1])
            };
        }
    }

    let mut pairs = Vec::with_capacity(dp[n][m] as usize);
    let (mut i, mut j) = (n, m);
    while i > 0 && j > 0 {
        if old[i - 1] == new[j - 1] {
            pairs.push((i - 1, j - 1));
            i -= 1;
            j -= 1;
        } else if dp[i - 1][j] >= dp[i][j - 1] {
            i -= 1;
        } else {
            j -= 1;
        }
    }

    pairs.reverse();
    pairs
}
