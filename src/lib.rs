//! Top-down vs. bottom-up dynamic programming for Longest Common Subsequence.
//!
//! This crate times two textbook formulations of the LCS recurrence against
//! each other across a grid of input sizes:
//! - [`solvers::top_down`]: recursion over suffix indices with a memo table
//!   that is filled lazily, only where the recursion actually goes.
//! - [`solvers::bottom_up`]: an iterative fill of the whole table from the
//!   exhausted boundary inward.
//!
//! ## Core idea
//! 1. Generate a synthetic [`Instance`] engineered to hit the worst or best
//!    case of the memoized recursion.
//! 2. Time each [`LcsSolver`] with [`timing::mean_millis`], allocating fresh
//!    working memory in every timed run.
//! 3. Let [`Sweep`] walk the `(n, m)` grid and stream one CSV row per cell.
//!
//! On worst-case inputs both solvers touch all n·m cells. On best-case inputs
//! the recursion follows a single diagonal of length min(n, m) while the
//! tabulation still fills every cell, which is what the sweep makes visible.
//!
//! ## Quick start
//! ```
//! use lcs_dp_bench::{BottomUp, Instance, InstanceKind, LcsSolver, TopDown};
//!
//! assert_eq!(TopDown.solve(b"ABCBDAB", b"BDCABA"), 4);
//! assert_eq!(BottomUp.solve(b"ABCBDAB", b"BDCABA"), 4);
//!
//! let inst = Instance::generate(3, 4, InstanceKind::WorstCase);
//! assert_eq!(inst.s1, b"AAA");
//! assert_eq!(TopDown.solve(&inst.s1, &inst.s2), 0);
//! ```

pub mod builder;
pub mod error;
pub mod instance;
pub mod memory;
pub mod solvers;
pub mod sweep;
pub mod table;
pub mod timing;
pub mod utils;

pub use crate::builder::SweepBuilder;
pub use crate::error::{BenchError, Result};
pub use crate::instance::{Instance, InstanceKind};
pub use crate::solvers::{BottomUp, LcsSolver, TopDown};
pub use crate::sweep::{BenchRow, Sweep, SweepConfig, CSV_HEADER};
pub use crate::table::DpTable;
