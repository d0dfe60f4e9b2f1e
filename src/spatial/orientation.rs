//! A single rotation of a shape and its placement geometry

use ndarray::Array2;

use crate::algorithm::board::Board;
use crate::spatial::shape::ShapeId;

/// One rotation of a shape, ready to be anchored against a grid hole
///
/// Identity is the parent shape's [`ShapeId`]; the rotation index is kept for
/// rendering and diagnostics only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrientedPiece {
    shape: ShapeId,
    rotation: usize,
    footprint: Array2<u8>,
    anchor_offset: usize,
}

impl OrientedPiece {
    /// Pair a rotated footprint with its anchor column
    pub const fn new(
        shape: ShapeId,
        rotation: usize,
        footprint: Array2<u8>,
        anchor_offset: usize,
    ) -> Self {
        Self {
            shape,
            rotation,
            footprint,
            anchor_offset,
        }
    }

    /// Identity of the parent shape
    pub const fn shape(&self) -> ShapeId {
        self.shape
    }

    /// Rotation index this piece was derived from
    pub const fn rotation(&self) -> usize {
        self.rotation
    }

    /// Rotated cell pattern (nonzero = filled)
    pub const fn footprint(&self) -> &Array2<u8> {
        &self.footprint
    }

    /// Column of the top row aligned with the target hole
    pub const fn anchor_offset(&self) -> usize {
        self.anchor_offset
    }

    /// Footprint height
    pub fn rows(&self) -> usize {
        self.footprint.nrows()
    }

    /// Footprint width
    pub fn columns(&self) -> usize {
        self.footprint.ncols()
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.footprint.iter().filter(|&&cell| cell != 0).count()
    }

    /// Whether the piece can be anchored at `(target_row, target_column)`
    ///
    /// Bounds are checked before the occupancy grid is read, so an
    /// out-of-range request is rejected without touching grid memory.
    pub fn fits(&self, board: &Board, target_row: usize, target_column: usize) -> bool {
        let Some(left) = target_column.checked_sub(self.anchor_offset) else {
            return false;
        };
        if left + self.columns() > board.columns() {
            return false;
        }
        if target_row + self.rows() > board.rows() {
            return false;
        }

        let occupancy = board.occupancy();
        self.footprint
            .indexed_iter()
            .all(|((row, column), &piece)| {
                piece == 0
                    || occupancy
                        .get((target_row + row, left + column))
                        .is_some_and(|&cell| cell == 0)
            })
    }

    /// Full-size grid holding only this piece's cells at the anchored offset
    ///
    /// Callers must have checked [`Self::fits`] for the same target; the
    /// piece is clipped rather than panicking if they did not.
    pub fn stamp(
        &self,
        rows: usize,
        columns: usize,
        target_row: usize,
        target_column: usize,
    ) -> Array2<u8> {
        let mut grid = Array2::zeros((rows, columns));
        let left = target_column.saturating_sub(self.anchor_offset);
        for ((row, column), &cell) in self.footprint.indexed_iter() {
            if cell == 0 {
                continue;
            }
            if let Some(target) = grid.get_mut((target_row + row, left + column)) {
                *target = cell;
            }
        }
        grid
    }

    /// Grid coordinates covered when anchored at `(target_row, target_column)`
    pub fn cells_at(
        &self,
        target_row: usize,
        target_column: usize,
    ) -> impl Iterator<Item = (usize, usize)> + '_ {
        let left = target_column.saturating_sub(self.anchor_offset);
        self.footprint
            .indexed_iter()
            .filter(|&(_, &cell)| cell != 0)
            .map(move |((row, column), _)| (target_row + row, left + column))
    }
}
