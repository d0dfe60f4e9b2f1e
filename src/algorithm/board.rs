//! Immutable grid state with placement history
//!
//! Every placement produces a new board: the parent's occupancy and
//! placement list are copied and extended, never mutated. Branches of the
//! search therefore share nothing and can be explored independently.

use std::sync::Arc;

use ndarray::Array2;

use crate::io::error::{NominoError, Result};
use crate::spatial::orientation::OrientedPiece;
use crate::spatial::shape::ShapeId;

/// An oriented piece anchored at the hole it filled
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    piece: Arc<OrientedPiece>,
    row: usize,
    column: usize,
}

impl Placement {
    /// The placed orientation
    pub fn piece(&self) -> &OrientedPiece {
        &self.piece
    }

    /// Shape identity of the placed piece
    pub fn shape(&self) -> ShapeId {
        self.piece.shape()
    }

    /// Row of the hole this piece was anchored at
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Column of the hole this piece was anchored at
    pub const fn column(&self) -> usize {
        self.column
    }

    /// Grid cells covered by this placement
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.piece.cells_at(self.row, self.column)
    }
}

/// Grid occupancy plus the ordered placements that produced it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    occupancy: Array2<u8>,
    placements: Vec<Placement>,
    cursor: Option<(usize, usize)>,
}

impl Board {
    /// Create an empty board
    ///
    /// # Errors
    ///
    /// Returns [`NominoError::InvalidDimensions`] if either dimension is zero
    /// or the grid is too large to address.
    pub fn empty(rows: usize, columns: usize) -> Result<Self> {
        if rows == 0 || columns == 0 || !is_addressable(rows, columns) {
            return Err(NominoError::InvalidDimensions { rows, columns });
        }
        Ok(Self {
            rows,
            columns,
            occupancy: Array2::zeros((rows, columns)),
            placements: Vec::new(),
            cursor: None,
        })
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn columns(&self) -> usize {
        self.columns
    }

    /// Number of grid cells
    pub fn cell_count(&self) -> usize {
        self.occupancy.len()
    }

    /// Occupancy grid, 0 for empty cells
    pub const fn occupancy(&self) -> &Array2<u8> {
        &self.occupancy
    }

    /// Placements in the order they were made
    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    /// Most recently filled hole, `None` before the first placement
    pub const fn cursor(&self) -> Option<(usize, usize)> {
        self.cursor
    }

    /// First empty cell at or after the cell following the cursor
    ///
    /// Scans row-major with the column varying fastest. `None` means every
    /// cell is covered and the board is a complete tiling.
    pub fn next_hole(&self) -> Option<(usize, usize)> {
        let (mut row, mut column) = self
            .cursor
            .map_or((0, 0), |(row, column)| (row, column + 1));
        loop {
            if column >= self.columns {
                column = 0;
                row += 1;
            }
            if row >= self.rows {
                return None;
            }
            if self.occupancy.get((row, column)).copied().unwrap_or(0) == 0 {
                return Some((row, column));
            }
            column += 1;
        }
    }

    /// Whether every cell is covered
    pub fn is_complete(&self) -> bool {
        self.next_hole().is_none()
    }

    /// New board with `piece` anchored at the hole `(row, column)`
    ///
    /// The caller must have checked [`OrientedPiece::fits`]; this board is
    /// left untouched.
    #[must_use]
    pub fn with_placement(&self, piece: &Arc<OrientedPiece>, row: usize, column: usize) -> Self {
        let footprint = piece.stamp(self.rows, self.columns, row, column);
        let mut placements = Vec::with_capacity(self.placements.len() + 1);
        placements.extend_from_slice(&self.placements);
        placements.push(Placement {
            piece: Arc::clone(piece),
            row,
            column,
        });

        Self {
            rows: self.rows,
            columns: self.columns,
            occupancy: &self.occupancy + &footprint,
            placements,
            cursor: Some((row, column)),
        }
    }

    /// Canonical signature: shape identities in placement order
    pub fn signature(&self) -> Vec<ShapeId> {
        self.placements.iter().map(Placement::shape).collect()
    }

    /// Whether two tilings are equivalent under shape-name comparison
    ///
    /// Rotation and footprint geometry are ignored.
    pub fn same_signature(&self, other: &Self) -> bool {
        self.placements.len() == other.placements.len()
            && self
                .placements
                .iter()
                .zip(&other.placements)
                .all(|(a, b)| a.shape() == b.shape())
    }

    /// Grid of 1-based placement indices, 0 where nothing is placed
    pub fn placement_map(&self) -> Array2<usize> {
        let mut map = Array2::zeros((self.rows, self.columns));
        for (index, placement) in self.placements.iter().enumerate() {
            for cell in placement.cells() {
                if let Some(slot) = map.get_mut(cell) {
                    *slot = index + 1;
                }
            }
        }
        map
    }
}

// Every per-cell grid, the usize placement map included, must fit in isize bytes
fn is_addressable(rows: usize, columns: usize) -> bool {
    rows.checked_mul(columns)
        .and_then(|cells| cells.checked_mul(std::mem::size_of::<usize>()))
        .is_some_and(|bytes| isize::try_from(bytes).is_ok())
}
