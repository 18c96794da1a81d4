//! Generic layered table-filling engine.
//!
//! Rows are computed strictly in order because row `i + 1` reads row `i`.
//! Cells inside a row are independent; with the `parallel` feature they are
//! computed with rayon, otherwise sequentially. Either way the result is the
//! same flat [`Table`], which is immutable once this function returns.

use crate::table::Table;
use crate::traits::LayeredTable;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Fill the complete `(num_layers + 1) × width` table for `problem`.
///
/// Typical usage:
/// ```
/// use kp_optima::{engine::fill_table, Instance};
/// use kp_optima::problems::weight_indexed::WeightIndexedProblem;
///
/// let instance = Instance::new(Some(6), vec![6, 3, 2, 4], vec![6, 3, 3, 1]).unwrap();
/// let problem = WeightIndexedProblem::new(&instance, 6);
/// let table = fill_table(&problem);
/// assert_eq!(table.rows(), 5);
/// assert_eq!(table.get(4, 6).profit, 6);
/// assert_eq!(table.get(4, 6).count, 2);
/// ```
pub fn fill_table<P>(problem: &P) -> Table<P::Cell>
where
    P: LayeredTable + Sync,
{
    let layers = problem.num_layers();
    let width = problem.width();

    #[cfg(feature = "tracing")]
    let span = tracing::debug_span!("fill_table", layers, width);
    #[cfg(feature = "tracing")]
    let _enter = span.enter();

    let mut cells = Vec::with_capacity((layers + 1) * width);
    cells.extend((0..width).map(|col| problem.init_cell(col)));

    let mut next = Vec::with_capacity(width);
    for layer in 0..layers {
        let prev = &cells[layer * width..(layer + 1) * width];
        fill_row(problem, layer, prev, &mut next);
        cells.extend_from_slice(&next);
    }

    Table::from_cells(cells, width)
}

#[cfg(feature = "parallel")]
fn fill_row<P>(problem: &P, layer: usize, prev: &[P::Cell], next: &mut Vec<P::Cell>)
where
    P: LayeredTable + Sync,
{
    (0..prev.len())
        .into_par_iter()
        .map(|col| problem.step_cell(layer, col, prev))
        .collect_into_vec(next);
}

#[cfg(not(feature = "parallel"))]
fn fill_row<P>(problem: &P, layer: usize, prev: &[P::Cell], next: &mut Vec<P::Cell>)
where
    P: LayeredTable + Sync,
{
    next.clear();
    next.extend((0..prev.len()).map(|col| problem.step_cell(layer, col, prev)));
}
