//! Flat row-major storage for filled DP tables.
//!
//! A `Table` is written once by the engine and read-only afterwards, so any
//! number of tracebacks can borrow it at the same time.

/// Contiguous `rows × width` buffer indexed by `(row, col)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table<C> {
    cells: Vec<C>,
    rows: usize,
    width: usize,
}

impl<C: Copy> Table<C> {
    pub(crate) fn from_cells(cells: Vec<C>, width: usize) -> Self {
        debug_assert!(width > 0, "table rows must be non-empty");
        debug_assert_eq!(cells.len() % width, 0, "ragged table buffer");
        let rows = cells.len() / width;
        Self { cells, rows, width }
    }

    /// Number of rows (`layers + 1`).
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of cells per row.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Cell at `(row, col)`.
    ///
    /// # Panics
    /// Panics if either coordinate is out of range.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> C {
        assert!(col < self.width, "column {col} out of range");
        self.cells[row * self.width + col]
    }

    /// Borrow a whole row.
    #[inline]
    pub fn row(&self, row: usize) -> &[C] {
        let start = row * self.width;
        &self.cells[start..start + self.width]
    }

    /// Borrow the final row (all items considered).
    #[inline]
    pub fn last_row(&self) -> &[C] {
        self.row(self.rows - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::Table;

    #[test]
    fn indexes_row_major() {
        let t = Table::from_cells(vec![0, 1, 2, 10, 11, 12], 3);
        assert_eq!(t.rows(), 2);
        assert_eq!(t.width(), 3);
        assert_eq!(t.get(0, 2), 2);
        assert_eq!(t.get(1, 0), 10);
        assert_eq!(t.row(1), &[10, 11, 12]);
        assert_eq!(t.last_row(), t.row(1));
    }

    #[test]
    #[should_panic]
    fn column_overflow_does_not_wrap_into_next_row() {
        let t = Table::from_cells(vec![0u8; 4], 2);
        let _ = t.get(0, 2);
    }
}
