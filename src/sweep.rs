//! Benchmark driver: times both solvers across a grid of input sizes.
//!
//! For every `n` in `step..=max_n` and `m` in `step..=max_m` (both in
//! increments of `step`) the sweep:
//! 1. generates one [`Instance`] of the configured kind,
//! 2. times `repetitions` runs of [`TopDown`], each allocating its own memo
//!    table inside the timed region,
//! 3. times `repetitions` runs of [`BottomUp`],
//! 4. writes one CSV row `instance,n,m,TD,BU`.
//!
//! Typical usage:
//! ```
//! use lcs_dp_bench::{InstanceKind, SweepBuilder};
//!
//! let sweep = SweepBuilder::new()
//!     .max_n(200)
//!     .max_m(100)
//!     .kind(InstanceKind::WorstCase)
//!     .repetitions(2)
//!     .build()
//!     .unwrap();
//! let mut out = Vec::new();
//! let rows = sweep.run(&mut out).unwrap();
//! assert_eq!(rows.len(), 2);
//! assert!(String::from_utf8(out).unwrap().starts_with("instance,n,m,TD,BU\n"));
//! ```

use std::hint::black_box;
use std::io::Write;

use crate::error::{BenchError, Result};
use crate::instance::{Instance, InstanceKind};
use crate::memory::MemoryProbe;
use crate::solvers::{BottomUp, LcsSolver, TopDown};
use crate::timing::mean_millis;
use crate::utils::{grid_cells, size_grid};

/// Header line written before any data row.
pub const CSV_HEADER: &str = "instance,n,m,TD,BU";

pub const DEFAULT_MAX_LEN: usize = 1000;
pub const DEFAULT_STEP: usize = 100;
pub const DEFAULT_REPETITIONS: usize = 100;

/// Parameters of one sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepConfig {
    /// Largest length of the first sequence.
    pub max_n: usize,
    /// Largest length of the second sequence.
    pub max_m: usize,
    pub kind: InstanceKind,
    /// Grid spacing for both dimensions; the first size is `step` itself.
    pub step: usize,
    /// Timed runs per solver per grid cell.
    pub repetitions: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            max_n: DEFAULT_MAX_LEN,
            max_m: DEFAULT_MAX_LEN,
            kind: InstanceKind::WorstCase,
            step: DEFAULT_STEP,
            repetitions: DEFAULT_REPETITIONS,
        }
    }
}

impl SweepConfig {
    /// Reject parameters that cannot produce a meaningful sweep.
    ///
    /// Upper bounds below `step` are accepted and simply yield no rows.
    pub fn validate(&self) -> Result<()> {
        if self.step == 0 {
            return Err(BenchError::InvalidConfig(
                "grid step must be positive".to_string(),
            ));
        }
        if self.repetitions == 0 {
            return Err(BenchError::InvalidConfig(
                "repetitions must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Mean time and result of one solver on one instance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverTiming {
    pub mean_ms: f64,
    /// LCS length returned by the last timed run.
    pub lcs_len: u32,
}

/// Time `repetitions` calls of `solver` on `instance`.
pub fn time_solver<S: LcsSolver>(solver: &S, instance: &Instance, repetitions: usize) -> SolverTiming {
    let mut lcs_len = 0;
    let mean_ms = mean_millis(repetitions, || {
        lcs_len = black_box(solver.solve(black_box(&instance.s1), black_box(&instance.s2)));
    });
    SolverTiming { mean_ms, lcs_len }
}

/// Measurements for one `(n, m)` grid cell.
#[derive(Debug, Clone, PartialEq)]
pub struct BenchRow {
    /// Zero-based position of the cell in sweep order.
    pub instance: usize,
    pub n: usize,
    pub m: usize,
    pub top_down: SolverTiming,
    pub bottom_up: SolverTiming,
    /// Growth of the process RSS across the cell; 0 when unavailable.
    pub rss_delta_kib: u64,
}

impl BenchRow {
    /// Write the row as `instance,n,m,TD,BU`.
    pub fn write_csv<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(
            out,
            "{},{},{},{},{}",
            self.instance, self.n, self.m, self.top_down.mean_ms, self.bottom_up.mean_ms
        )
    }
}

/// A validated sweep ready to run.
#[derive(Debug, Clone)]
pub struct Sweep {
    config: SweepConfig,
}

impl Sweep {
    pub fn new(config: SweepConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SweepConfig {
        &self.config
    }

    /// Number of rows [`run`](Self::run) will produce.
    pub fn num_cells(&self) -> usize {
        grid_cells(self.config.max_n, self.config.max_m, self.config.step)
    }

    /// Generate the `(n, m)` instance and time both solvers on it.
    pub fn measure_cell(
        &self,
        instance: usize,
        n: usize,
        m: usize,
        probe: &mut MemoryProbe,
    ) -> BenchRow {
        let reps = self.config.repetitions;
        let rss_before = probe.rss_kib();
        let input = Instance::generate(n, m, self.config.kind);
        let top_down = time_solver(&TopDown, &input, reps);
        let bottom_up = time_solver(&BottomUp, &input, reps);
        let rss_after = probe.rss_kib();

        BenchRow {
            instance,
            n,
            m,
            top_down,
            bottom_up,
            rss_delta_kib: rss_after.saturating_sub(rss_before),
        }
    }

    /// Run the whole grid, streaming CSV to `out`.
    ///
    /// The header is written first and every row is written as soon as its
    /// cell has been measured. `out` is flushed before returning.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<BenchRow>> {
        let SweepConfig {
            max_n,
            max_m,
            kind,
            step,
            ..
        } = self.config;

        #[cfg(feature = "tracing")]
        let span = tracing::info_span!("sweep", max_n, max_m, kind = kind.label(), step);
        #[cfg(feature = "tracing")]
        let _enter = span.enter();
        #[cfg(not(feature = "tracing"))]
        let _ = kind;

        let total = self.num_cells();
        let mut probe = MemoryProbe::new();
        let mut rows = Vec::with_capacity(total);

        writeln!(out, "{CSV_HEADER}")?;
        for n in size_grid(max_n, step) {
            for m in size_grid(max_m, step) {
                let row = self.measure_cell(rows.len(), n, m, &mut probe);

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    instance = row.instance,
                    total,
                    n,
                    m,
                    td_ms = row.top_down.mean_ms,
                    bu_ms = row.bottom_up.mean_ms,
                    lcs = row.bottom_up.lcs_len,
                    rss_delta_kib = row.rss_delta_kib,
                    "cell measured"
                );

                row.write_csv(out)?;
                rows.push(row);
            }
        }
        out.flush()?;

        #[cfg(feature = "tracing")]
        tracing::info!(rows = rows.len(), "sweep finished");

        Ok(rows)
    }
}
