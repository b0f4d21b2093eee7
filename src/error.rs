//! Error type shared by the sweep driver and the binary.

use thiserror::Error;

/// Failures a benchmark sweep can report.
///
/// The solvers themselves are infallible; errors only arise from an
/// ill-formed [`SweepConfig`](crate::sweep::SweepConfig) or from the output
/// sink.
#[derive(Debug, Error)]
pub enum BenchError {
    /// Writing the CSV stream failed (closed pipe, full disk, ...).
    #[error("failed to write benchmark output: {0}")]
    Io(#[from] std::io::Error),

    /// The sweep parameters cannot describe a terminating grid.
    #[error("invalid sweep configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, BenchError>;
