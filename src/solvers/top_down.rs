//! Memoized top-down LCS.
//!
//! The memo table covers only the cells `0..n × 0..m`; the exhausted
//! boundary (`i == n` or `j == m`) is handled by the base case and never
//! stored. Recursion depth grows by one per call and each call advances `i`
//! or `j`, so the deepest chain is at most `n + m + 1` frames.

use super::LcsSolver;
use crate::table::{DpTable, UNSET};

/// Stack reserved per recursion frame when sizing a sweep thread.
///
/// Unoptimized builds use noticeably larger frames than release builds;
/// this bound covers both.
const FRAME_BYTES: usize = 256;

/// Baseline stack for everything outside the recursion.
const BASE_STACK_BYTES: usize = 8 * 1024 * 1024;

/// LCS length of the suffixes `s1[i..]` and `s2[j..]`.
///
/// `memo` must have at least `s1.len()` rows and `s2.len()` columns and every
/// cell reachable from `(i, j)` must either be [`UNSET`] or hold the correct
/// value for its suffix pair.
pub fn lcs_top_down(s1: &[u8], s2: &[u8], i: usize, j: usize, memo: &mut DpTable) -> u32 {
    if i == s1.len() || j == s2.len() {
        return 0;
    }
    if memo.get(i, j) == UNSET {
        let value = if s1[i] == s2[j] {
            1 + lcs_top_down(s1, s2, i + 1, j + 1, memo)
        } else {
            let down = lcs_top_down(s1, s2, i + 1, j, memo);
            let right = lcs_top_down(s1, s2, i, j + 1, memo);
            down.max(right)
        };
        memo.set(i, j, value);
    }
    memo.get(i, j)
}

/// Conservative stack size for running [`lcs_top_down`] on an `n × m` input.
pub fn required_stack_bytes(n: usize, m: usize) -> usize {
    n.saturating_add(m)
        .saturating_add(1)
        .saturating_mul(FRAME_BYTES)
        .saturating_add(BASE_STACK_BYTES)
}

/// [`LcsSolver`] that allocates a fresh `n × m` memo table per call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TopDown;

impl LcsSolver for TopDown {
    const NAME: &'static str = "TD";

    fn solve(&self, s1: &[u8], s2: &[u8]) -> u32 {
        let mut memo = DpTable::unset(s1.len(), s2.len());
        lcs_top_down(s1, s2, 0, 0, &mut memo)
    }
}
