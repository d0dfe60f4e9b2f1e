//! Polyomino geometry
//!
//! This module contains the shape-related functionality:
//! - Shape identities, base patterns and the ordered catalog
//! - Oriented pieces with fit and stamp operations

/// Single rotations of a shape and their placement geometry
pub mod orientation;
/// Shape definitions and the search catalog
pub mod shape;

pub use orientation::OrientedPiece;
pub use shape::{Catalog, Shape, ShapeId};
