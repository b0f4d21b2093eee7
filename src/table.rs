//! Rectangular DP tables used by both LCS solvers.
//!
//! A [`DpTable`] is a flat row-major grid of `u32` cells. Cells that have not
//! been computed yet hold [`UNSET`]; the memoized solver relies on this to
//! tell visited subproblems from fresh ones.

/// Sentinel stored in cells whose value has not been computed.
pub const UNSET: u32 = u32::MAX;

/// Row-major `rows × cols` grid of LCS lengths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DpTable {
    rows: usize,
    cols: usize,
    cells: Vec<u32>,
}

impl DpTable {
    /// Allocate a table with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: u32) -> Self {
        Self {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// Allocate a table with every cell set to [`UNSET`].
    pub fn unset(rows: usize, cols: usize) -> Self {
        Self::filled(rows, cols, UNSET)
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Value stored at `(i, j)`.
    ///
    /// # Panics
    /// Panics if `(i, j)` lies outside the table.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> u32 {
        self.cells[self.offset(i, j)]
    }

    /// Store `value` at `(i, j)`.
    ///
    /// A computed cell may only be rewritten with the value it already holds.
    ///
    /// # Panics
    /// Panics if `(i, j)` lies outside the table.
    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: u32) {
        let at = self.offset(i, j);
        debug_assert!(
            self.cells[at] == UNSET || self.cells[at] == value,
            "cell ({i}, {j}) overwritten: {} -> {value}",
            self.cells[at]
        );
        self.cells[at] = value;
    }

    /// Whether `(i, j)` holds a computed value.
    #[inline]
    pub fn is_set(&self, i: usize, j: usize) -> bool {
        self.get(i, j) != UNSET
    }

    /// Number of computed cells.
    pub fn filled_cells(&self) -> usize {
        self.cells.iter().filter(|&&c| c != UNSET).count()
    }

    #[inline]
    fn offset(&self, i: usize, j: usize) -> usize {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} table",
            self.rows,
            self.cols
        );
        i * self.cols + j
    }
}
