//! Bottom-up LCS tabulation.
//!
//! Fills an `(n+1) × (m+1)` table. Row `n` and column `m` are the exhausted
//! boundary and hold 0; the interior is filled with decreasing `i` and `j`,
//! so `(i+1, j+1)`, `(i+1, j)` and `(i, j+1)` are always computed before
//! `(i, j)`.

use super::LcsSolver;
use crate::table::DpTable;

/// LCS length of `s1` and `s2`.
pub fn lcs_bottom_up(s1: &[u8], s2: &[u8]) -> u32 {
    let n = s1.len();
    let m = s2.len();
    let mut table = DpTable::unset(n + 1, m + 1);
    for i in 0..=n {
        table.set(i, m, 0);
    }
    for j in 0..m {
        table.set(n, j, 0);
    }

    for i in (0..n).rev() {
        for j in (0..m).rev() {
            let value = if s1[i] == s2[j] {
                1 + table.get(i + 1, j + 1)
            } else {
                table.get(i + 1, j).max(table.get(i, j + 1))
            };
            table.set(i, j, value);
        }
    }

    table.get(0, 0)
}

/// [`LcsSolver`] wrapper around [`lcs_bottom_up`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BottomUp;

impl LcsSolver for BottomUp {
    const NAME: &'static str = "BU";

    fn solve(&self, s1: &[u8], s2: &[u8]) -> u32 {
        lcs_bottom_up(s1, s2)
    }
}
