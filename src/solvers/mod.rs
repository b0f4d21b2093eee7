//! The two LCS formulations under benchmark.
//!
//! - [`top_down`]  : recursion over suffix indices with a lazily filled memo table.
//! - [`bottom_up`] : iterative fill of the full table from the exhausted boundary inward.
//!
//! Both compute the same recurrence over suffix pairs `(s1[i..], s2[j..])`:
//!
//! ```text
//! L(i, j) = 0                                   if i == n or j == m
//!         = 1 + L(i+1, j+1)                     if s1[i] == s2[j]
//!         = max(L(i+1, j), L(i, j+1))           otherwise
//! ```

pub mod bottom_up;
pub mod top_down;

pub use bottom_up::{lcs_bottom_up, BottomUp};
pub use top_down::{lcs_top_down, required_stack_bytes, TopDown};

/// A strategy for computing the LCS length of two byte sequences.
///
/// Implementors allocate whatever working memory they need inside
/// [`solve`](LcsSolver::solve), so every call starts from a fresh table.
pub trait LcsSolver {
    /// Short column label used in benchmark output.
    const NAME: &'static str;

    /// Length of the longest common subsequence of `s1` and `s2`.
    fn solve(&self, s1: &[u8], s2: &[u8]) -> u32;
}
