//! Backtracking enumeration of complete tilings
//!
//! The search scans holes row-major. At each hole every orientation of every
//! catalog shape is tried in catalog then rotation order, and every piece that
//! fits opens a child board. Results from earlier candidates always precede
//! results from later ones, whichever entry point is used.

use std::sync::Arc;

use log::debug;
use rayon::prelude::*;

use crate::algorithm::board::Board;
use crate::algorithm::coverage::is_cell_count_reachable;
use crate::io::error::{NominoError, Result};
use crate::spatial::orientation::OrientedPiece;
use crate::spatial::shape::Catalog;

/// Lazy, depth-first stream of complete tilings
///
/// Backed by an explicit stack of pending boards instead of recursion. Children
/// are pushed in reverse candidate order so the first candidate's subtree is
/// exhausted first, reproducing the recursive result order exactly.
#[derive(Debug, Clone)]
pub struct Tilings {
    stack: Vec<Board>,
    pieces: Vec<Arc<OrientedPiece>>,
    explored: usize,
    budget: Option<usize>,
    exhausted: bool,
}

impl Tilings {
    /// Resume the search from an arbitrary board
    pub fn from_board(board: Board, pieces: Vec<Arc<OrientedPiece>>) -> Self {
        Self {
            stack: vec![board],
            pieces,
            explored: 0,
            budget: None,
            exhausted: false,
        }
    }

    /// Stop the stream once `max_boards` boards have been expanded
    #[must_use]
    pub const fn with_budget(mut self, max_boards: usize) -> Self {
        self.budget = Some(max_boards);
        self
    }

    /// Whether the stream ended because the budget ran out
    pub const fn budget_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Number of boards expanded so far
    pub const fn explored(&self) -> usize {
        self.explored
    }

    /// Boards still waiting to be expanded
    pub fn pending(&self) -> usize {
        self.stack.len()
    }
}

impl Iterator for Tilings {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        while let Some(board) = self.stack.pop() {
            let Some((row, column)) = board.next_hole() else {
                return Some(board);
            };

            if self.budget.is_some_and(|budget| self.explored >= budget) {
                self.exhausted = true;
                self.stack.clear();
                return None;
            }

            self.explored += 1;
            let children = expand(&board, &self.pieces, row, column);
            self.stack.extend(children.into_iter().rev());
        }
        None
    }
}

// Children of `board` at its hole, in candidate order
fn expand(
    board: &Board,
    pieces: &[Arc<OrientedPiece>],
    row: usize,
    column: usize,
) -> Vec<Board> {
    pieces
        .iter()
        .filter(|piece| piece.fits(board, row, column))
        .map(|piece| board.with_placement(piece, row, column))
        .collect()
}

/// Lazily enumerate every complete tiling of a `rows` x `columns` grid
///
/// Grids whose cell count no combination of catalog sizes can reach produce an
/// empty stream without exploring anything.
///
/// # Errors
///
/// Returns [`NominoError::InvalidDimensions`] if either dimension is zero or
/// the grid is too large to address.
pub fn enumerate_tilings(rows: usize, columns: usize, catalog: &Catalog) -> Result<Tilings> {
    let board = Board::empty(rows, columns)?;
    let cells = board.cell_count();
    let mut tilings = Tilings::from_board(board, catalog.pieces());

    if !is_cell_count_reachable(catalog, cells) {
        debug!("{rows}x{columns}: cell count unreachable by catalog sizes, skipping search");
        tilings.stack.clear();
    }

    Ok(tilings)
}

/// Enumerate every tiling, exploring first-hole subtrees on the rayon pool
///
/// Output is identical, order included, to collecting [`enumerate_tilings`].
///
/// # Errors
///
/// Returns [`NominoError::InvalidDimensions`] if either dimension is zero.
pub fn enumerate_tilings_parallel(
    rows: usize,
    columns: usize,
    catalog: &Catalog,
) -> Result<Vec<Board>> {
    let root = Board::empty(rows, columns)?;
    if !is_cell_count_reachable(catalog, root.cell_count()) {
        return Ok(Vec::new());
    }

    let pieces = catalog.pieces();
    let Some((row, column)) = root.next_hole() else {
        return Ok(vec![root]);
    };
    let branches = expand(&root, &pieces, row, column);
    debug!(
        "{rows}x{columns}: splitting search into {} branches",
        branches.len()
    );

    // collect() on an ordered parallel iterator keeps branch order
    Ok(branches
        .into_par_iter()
        .flat_map_iter(|branch| Tilings::from_board(branch, pieces.clone()))
        .collect())
}

/// Enumerate every tiling, giving up after `max_boards` expansions
///
/// # Errors
///
/// Returns [`NominoError::InvalidDimensions`] for a zero dimension and
/// [`NominoError::SearchBudgetExceeded`] once the budget is spent.
pub fn enumerate_tilings_bounded(
    rows: usize,
    columns: usize,
    catalog: &Catalog,
    max_boards: usize,
) -> Result<Vec<Board>> {
    let mut tilings = enumerate_tilings(rows, columns, catalog)?.with_budget(max_boards);
    let found: Vec<Board> = tilings.by_ref().collect();

    if tilings.budget_exhausted() {
        debug!(
            "{rows}x{columns}: budget of {max_boards} boards spent after {} tilings",
            found.len()
        );
        return Err(NominoError::SearchBudgetExceeded { limit: max_boards });
    }
    Ok(found)
}
