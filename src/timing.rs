//! Repeated wall-clock timing.

use std::time::Instant;

/// Run `block` `repetitions` times and return the mean duration in milliseconds.
///
/// Each run is timed on its own with the monotonic [`Instant`] clock, and runs
/// execute strictly one after another. The harness shares nothing between
/// runs: a block that needs fresh working memory must allocate it itself.
///
/// Returns `0.0` without calling `block` when `repetitions` is zero.
pub fn mean_millis<F>(repetitions: usize, mut block: F) -> f64
where
    F: FnMut(),
{
    if repetitions == 0 {
        return 0.0;
    }
    let mut total_ms = 0.0;
    for _ in 0..repetitions {
        let start = Instant::now();
        block();
        total_ms += start.elapsed().as_secs_f64() * 1000.0;
    }
    total_ms / repetitions as f64
}
