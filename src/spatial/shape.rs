//! Polyomino shape definitions and the ordered catalog handed to the search
//!
//! A shape is a base cell pattern in its canonical orientation together with
//! the number of distinct quarter-turn rotations and, for each rotation, the
//! anchor column used to align its top row against a grid hole.

use std::fmt;
use std::num::NonZeroU8;
use std::sync::Arc;

use ndarray::{Array2, Axis, array};

use crate::io::configuration::DEFAULT_FILL_MARKER;
use crate::io::error::{Result, invalid_parameter, invalid_shape};
use crate::spatial::orientation::OrientedPiece;

/// Identity of a polyomino, ignoring rotation
///
/// This is the key tilings are deduplicated on. Level tokens spell it with
/// [`ShapeId::token_name`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeId {
    /// Single cell
    Monomino,
    /// Two cells in a line
    Domino,
    /// Three cells bent into an L
    TrominoL,
    /// Three cells in a line
    TrominoStraight,
    /// T tetromino
    TetrominoT,
    /// 2x2 square tetromino
    TetrominoSquare,
    /// S-shaped skew tetromino
    TetrominoSkew,
    /// Z-shaped skew tetromino
    TetrominoSkewMirrored,
    /// L tetromino
    TetrominoL,
    /// J tetromino
    TetrominoLMirrored,
    /// Four cells in a line
    TetrominoStraight,
}

impl ShapeId {
    /// Identifier used when listing tilings
    pub const fn name(self) -> &'static str {
        match self {
            Self::Monomino => "Monomino",
            Self::Domino => "Domino",
            Self::TrominoL => "TrominoL",
            Self::TrominoStraight => "TrominoStraight",
            Self::TetrominoT => "TetrominoT",
            Self::TetrominoSquare => "TetrominoSquare",
            Self::TetrominoSkew => "TetrominoSkew",
            Self::TetrominoSkewMirrored => "TetrominoSkewMirrored",
            Self::TetrominoL => "TetrominoL",
            Self::TetrominoLMirrored => "TetrominoLMirrored",
            Self::TetrominoStraight => "TetrominoStraight",
        }
    }

    /// Shape as written inside a level token
    ///
    /// Mirrored shapes are spelled as their base shape followed by a
    /// `Mirrored` argument, which is the form the runtime `piece!` macro
    /// accepts.
    pub const fn token_name(self) -> &'static str {
        match self {
            Self::TetrominoSkewMirrored => "TetrominoSkew, Mirrored",
            Self::TetrominoLMirrored => "TetrominoL, Mirrored",
            _ => self.name(),
        }
    }
}

impl fmt::Display for ShapeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A polyomino in its canonical orientation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    id: ShapeId,
    pattern: Array2<u8>,
    rotation_count: usize,
    anchor_offsets: Vec<usize>,
}

impl Shape {
    /// Build a validated shape
    ///
    /// `pattern` cells are filled when nonzero. `rotation_count` must be 1, 2
    /// or 4 and `anchor_offsets` must hold one entry per rotation.
    ///
    /// # Errors
    ///
    /// Returns [`crate::NominoError::InvalidShape`] if the pattern is empty,
    /// the rotation count is unsupported, the anchor list has the wrong
    /// length, or an anchor is not the leftmost filled cell of its rotation's
    /// top row.
    pub fn new(
        id: ShapeId,
        pattern: Array2<u8>,
        rotation_count: usize,
        anchor_offsets: Vec<usize>,
    ) -> Result<Self> {
        let shape = Self::from_parts(id, pattern, rotation_count, anchor_offsets);
        shape.validate()?;
        Ok(shape)
    }

    const fn from_parts(
        id: ShapeId,
        pattern: Array2<u8>,
        rotation_count: usize,
        anchor_offsets: Vec<usize>,
    ) -> Self {
        Self {
            id,
            pattern,
            rotation_count,
            anchor_offsets,
        }
    }

    /// Check the catalog invariants for this shape
    ///
    /// # Errors
    ///
    /// Returns [`crate::NominoError::InvalidShape`] describing the first
    /// violated invariant.
    pub fn validate(&self) -> Result<()> {
        let name = self.id.name();

        if !self.pattern.iter().any(|&cell| cell != 0) {
            return Err(invalid_shape(name, &"pattern has no filled cells"));
        }

        if !matches!(self.rotation_count, 1 | 2 | 4) {
            return Err(invalid_shape(
                name,
                &format!("rotation count {} is not 1, 2 or 4", self.rotation_count),
            ));
        }

        if self.anchor_offsets.len() != self.rotation_count {
            return Err(invalid_shape(
                name,
                &format!(
                    "{} anchor offsets for {} rotations",
                    self.anchor_offsets.len(),
                    self.rotation_count
                ),
            ));
        }

        for (rotation, &anchor) in self.anchor_offsets.iter().enumerate() {
            let rotated = self.rotated(rotation);
            let leftmost = rotated
                .index_axis(Axis(0), 0)
                .iter()
                .position(|&cell| cell != 0);
            if leftmost != Some(anchor) {
                return Err(invalid_shape(
                    name,
                    &format!(
                        "anchor {anchor} of rotation {rotation} is not the leftmost filled top-row cell"
                    ),
                ));
            }
        }

        Ok(())
    }

    /// Shape identity
    pub const fn id(&self) -> ShapeId {
        self.id
    }

    /// Base pattern in canonical orientation
    pub const fn pattern(&self) -> &Array2<u8> {
        &self.pattern
    }

    /// Number of distinct quarter-turn rotations
    pub const fn rotation_count(&self) -> usize {
        self.rotation_count
    }

    /// Anchor column for each rotation
    pub fn anchor_offsets(&self) -> &[usize] {
        &self.anchor_offsets
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.pattern.iter().filter(|&&cell| cell != 0).count()
    }

    /// Base pattern rotated counter-clockwise `quarter_turns` times
    pub fn rotated(&self, quarter_turns: usize) -> Array2<u8> {
        let mut rotated = self.pattern.clone();
        for _ in 0..quarter_turns % 4 {
            rotated = rotate_counter_clockwise(&rotated);
        }
        rotated
    }

    /// One oriented piece per rotation index, in rotation order
    pub fn orientations(&self) -> Vec<OrientedPiece> {
        self.anchor_offsets
            .iter()
            .enumerate()
            .map(|(rotation, &anchor)| {
                OrientedPiece::new(self.id, rotation, self.rotated(rotation), anchor)
            })
            .collect()
    }
}

// Transposing then flipping rows turns the grid a quarter counter-clockwise
fn rotate_counter_clockwise(grid: &Array2<u8>) -> Array2<u8> {
    let mut view = grid.t();
    view.invert_axis(Axis(0));
    view.to_owned()
}

/// Ordered list of shapes explored at every hole
///
/// The order is observable: tilings found through earlier shapes are reported
/// before tilings found through later ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    shapes: Vec<Shape>,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard(default_fill())
    }
}

impl Catalog {
    /// Trominoes and tetrominoes in level-generation order, without the domino
    pub fn standard(fill: NonZeroU8) -> Self {
        let x = fill.get();
        let shapes = vec![
            Shape::from_parts(ShapeId::TrominoL, array![[0, x], [x, x]], 4, vec![1, 0, 0, 0]),
            Shape::from_parts(ShapeId::TrominoStraight, array![[x], [x], [x]], 2, vec![0, 0]),
            Shape::from_parts(
                ShapeId::TetrominoT,
                array![[x, 0], [x, x], [x, 0]],
                4,
                vec![0, 1, 1, 0],
            ),
            Shape::from_parts(ShapeId::TetrominoSquare, array![[x, x], [x, x]], 1, vec![0]),
            Shape::from_parts(
                ShapeId::TetrominoSkew,
                array![[x, x, 0], [0, x, x]],
                2,
                vec![0, 1],
            ),
            Shape::from_parts(
                ShapeId::TetrominoSkewMirrored,
                array![[0, x, x], [x, x, 0]],
                2,
                vec![1, 0],
            ),
            Shape::from_parts(
                ShapeId::TetrominoL,
                array![[x, 0], [x, 0], [x, x]],
                4,
                vec![0, 2, 0, 0],
            ),
            Shape::from_parts(
                ShapeId::TetrominoLMirrored,
                array![[0, x], [0, x], [x, x]],
                4,
                vec![1, 0, 0, 0],
            ),
            Shape::from_parts(
                ShapeId::TetrominoStraight,
                array![[x], [x], [x], [x]],
                2,
                vec![0, 0],
            ),
        ];
        Self { shapes }
    }

    /// The standard catalog with the domino tried first
    pub fn with_domino(fill: NonZeroU8) -> Self {
        let mut catalog = Self::standard(fill);
        catalog.shapes.insert(0, domino(fill));
        catalog
    }

    /// Build a catalog from explicit shapes, keeping their order
    ///
    /// # Errors
    ///
    /// Returns [`crate::NominoError::InvalidParameter`] for an empty list and
    /// [`crate::NominoError::InvalidShape`] for any shape that fails validation.
    pub fn from_shapes(shapes: Vec<Shape>) -> Result<Self> {
        if shapes.is_empty() {
            return Err(invalid_parameter(
                "catalog",
                &"[]",
                &"at least one shape is required",
            ));
        }
        for shape in &shapes {
            shape.validate()?;
        }
        Ok(Self { shapes })
    }

    /// Shapes in search order
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Every orientation of every shape, in catalog then rotation order
    pub fn pieces(&self) -> Vec<Arc<OrientedPiece>> {
        self.shapes
            .iter()
            .flat_map(Shape::orientations)
            .map(Arc::new)
            .collect()
    }

    /// Distinct shape sizes, ascending
    pub fn cell_counts(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.shapes.iter().map(Shape::cell_count).collect();
        counts.sort_unstable();
        counts.dedup();
        counts
    }
}

/// The 2-cell shape left out of [`Catalog::standard`]
pub fn domino(fill: NonZeroU8) -> Shape {
    let x = fill.get();
    Shape::from_parts(ShapeId::Domino, array![[x], [x]], 2, vec![0, 0])
}

/// The 1-cell shape, handy for alternate catalogs
pub fn monomino(fill: NonZeroU8) -> Shape {
    Shape::from_parts(ShapeId::Monomino, array![[fill.get()]], 1, vec![0])
}

/// Shorthand for the configured default marker
pub const fn default_fill() -> NonZeroU8 {
    match NonZeroU8::new(DEFAULT_FILL_MARKER) {
        Some(fill) => fill,
        None => NonZeroU8::MIN,
    }
}
