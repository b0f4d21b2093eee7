//! Assorted helpers for laying out the size sweep.

/// Sizes `step, 2·step, ...` up to and including `max`.
///
/// Yields nothing when `max < step`. A `step` of zero also yields nothing;
/// [`SweepConfig::validate`](crate::sweep::SweepConfig::validate) rejects it
/// before a sweep starts.
#[inline]
pub fn size_grid(max: usize, step: usize) -> impl Iterator<Item = usize> + Clone {
    let count = if step == 0 { 0 } else { max / step };
    (1..=count).map(move |k| k * step)
}

/// Number of `(n, m)` cells a sweep over `max_n × max_m` visits.
#[inline]
pub fn grid_cells(max_n: usize, max_m: usize, step: usize) -> usize {
    size_grid(max_n, step).count() * size_grid(max_m, step).count()
}

#[cfg(test)]
mod tests {
    use super::{grid_cells, size_grid};

    #[test]
    fn inclusive_of_multiple_endpoints() {
        assert_eq!(size_grid(1000, 100).collect::<Vec<_>>().len(), 10);
        assert_eq!(size_grid(200, 100).collect::<Vec<_>>(), vec![100, 200]);
        assert_eq!(size_grid(100, 100).collect::<Vec<_>>(), vec![100]);
    }

    #[test]
    fn truncates_non_multiple_endpoints() {
        assert_eq!(size_grid(250, 100).collect::<Vec<_>>(), vec![100, 200]);
        assert_eq!(size_grid(99, 100).count(), 0);
    }

    #[test]
    fn degenerate_bounds_are_empty() {
        assert_eq!(size_grid(0, 100).count(), 0);
        assert_eq!(size_grid(500, 0).count(), 0);
        assert_eq!(grid_cells(0, 1000, 100), 0);
    }

    #[test]
    fn cell_count_is_product() {
        assert_eq!(grid_cells(200, 100, 100), 2);
        assert_eq!(grid_cells(1000, 1000, 100), 100);
    }

    #[test]
    fn strictly_increasing() {
        let sizes: Vec<_> = size_grid(5_000, 100).collect();
        for w in sizes.windows(2) {
            assert!(w[1] > w[0], "{} !> {}", w[1], w[0]);
        }
    }
}
