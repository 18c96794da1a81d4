//! Core trait definition for layered knapsack tables.
//!
//! Both knapsack formulations share the same shape: layer `i` holds the
//! optimal values over the first `i` items, and layer `i + 1` depends only on
//! layer `i`. To plug a recurrence into [`crate::engine::fill_table`],
//! implement [`LayeredTable`] for a struct that captures the instance data
//! (weights, profits, axis bound).
//!
//! Within a layer every cell is independent of its neighbours once the
//! previous layer is final, so the engine is free to compute a row's cells in
//! any order (or in parallel with the `parallel` feature).

/// A dynamic program whose table is filled one layer at a time.
///
/// Semantics:
/// - There are `num_layers()` transitions; the table has `num_layers() + 1` rows.
/// - Every row has exactly `width()` cells, indexed by the second coordinate
///   (residual capacity or target profit).
/// - Row 0 is produced by [`init_cell`](Self::init_cell); row `i + 1` is
///   produced cell by cell by [`step_cell`](Self::step_cell) from row `i`.
pub trait LayeredTable {
    /// Value stored in every table cell.
    type Cell: Copy + Send + Sync;

    /// Number of transitions (items).
    fn num_layers(&self) -> usize;

    /// Number of cells per row.
    fn width(&self) -> usize;

    /// Value of cell `col` in row 0.
    fn init_cell(&self, col: usize) -> Self::Cell;

    /// Value of cell `col` in row `layer + 1`, given the complete row `layer`.
    ///
    /// Must only depend on `prev` and fixed problem data.
    fn step_cell(&self, layer: usize, col: usize, prev: &[Self::Cell]) -> Self::Cell;
}
