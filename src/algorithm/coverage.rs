//! Exact-cover verification and cell-count feasibility
//!
//! Verification rebuilds occupancy from the placement list alone, so it checks
//! the search's bookkeeping rather than trusting the occupancy grid.

use bitvec::prelude::*;

use crate::algorithm::board::Board;
use crate::io::error::{NominoError, Result};
use crate::spatial::shape::Catalog;

/// Confirm that the placements cover every cell exactly once
///
/// # Errors
///
/// Returns [`NominoError::Coverage`] at the first cell that lies outside the
/// grid, is covered twice, or is left uncovered.
pub fn verify_tiling(board: &Board) -> Result<()> {
    let rows = board.rows();
    let columns = board.columns();
    let mut covered = bitvec![0; board.cell_count()];

    for placement in board.placements() {
        for (row, column) in placement.cells() {
            if row >= rows || column >= columns {
                return Err(NominoError::Coverage {
                    row,
                    column,
                    reason: "placement extends outside the grid",
                });
            }
            let index = row * columns + column;
            if covered.replace(index, true) {
                return Err(NominoError::Coverage {
                    row,
                    column,
                    reason: "cell covered by more than one placement",
                });
            }
        }
    }

    match covered.first_zero() {
        Some(index) => Err(NominoError::Coverage {
            row: index / columns,
            column: index % columns,
            reason: "cell left uncovered",
        }),
        None => Ok(()),
    }
}

/// Total cells covered by the board's placements
pub fn covered_cells(board: &Board) -> usize {
    board
        .placements()
        .iter()
        .map(|placement| placement.piece().cell_count())
        .sum()
}

/// Whether some multiset of catalog shape sizes sums to `cells`
///
/// Unbounded subset-sum over the distinct sizes. A `false` answer proves the
/// grid has no tiling; `true` does not prove one exists.
pub fn is_cell_count_reachable(catalog: &Catalog, cells: usize) -> bool {
    let sizes = catalog.cell_counts();
    let mut reachable = bitvec![0; cells + 1];
    reachable.set(0, true);

    for total in 1..=cells {
        let hit = sizes
            .iter()
            .filter(|&&size| size > 0 && size <= total)
            .any(|&size| reachable.get(total - size).as_deref() == Some(&true));
        reachable.set(total, hit);
    }

    reachable.last().as_deref() == Some(&true)
}
