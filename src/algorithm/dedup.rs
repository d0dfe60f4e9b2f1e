//! Canonicalization of tilings by shape-name sequence

use log::debug;

use crate::algorithm::board::Board;
use crate::algorithm::search::enumerate_tilings;
use crate::io::error::Result;
use crate::spatial::shape::{Catalog, ShapeId};

/// Drop tilings whose shape sequence was already seen, keeping first-seen order
///
/// Two tilings match when they have the same number of placements and the
/// same shape at every position; rotation and geometry are ignored. Every
/// candidate is compared against the accepted list, which is quadratic but
/// fine for the small grids this targets.
pub fn dedupe(tilings: Vec<Board>) -> Vec<Board> {
    let mut unique: Vec<Board> = Vec::new();
    for tiling in tilings {
        if !unique.iter().any(|kept| kept.same_signature(&tiling)) {
            unique.push(tiling);
        }
    }
    unique
}

/// Distinct shape sequences that tile a `rows` x `columns` grid
///
/// # Errors
///
/// Returns [`crate::NominoError::InvalidDimensions`] if either dimension is
/// zero.
pub fn unique_tilings(rows: usize, columns: usize, catalog: &Catalog) -> Result<Vec<Vec<ShapeId>>> {
    let tilings: Vec<Board> = enumerate_tilings(rows, columns, catalog)?.collect();
    let total = tilings.len();
    let unique: Vec<Vec<ShapeId>> = dedupe(tilings).iter().map(Board::signature).collect();
    debug!(
        "{rows}x{columns}: {total} tilings, {} unique",
        unique.len()
    );
    Ok(unique)
}

/// [`unique_tilings`] rendered as shape names
///
/// # Errors
///
/// Returns [`crate::NominoError::InvalidDimensions`] if either dimension is
/// zero.
pub fn unique_tiling_names(
    rows: usize,
    columns: usize,
    catalog: &Catalog,
) -> Result<Vec<Vec<&'static str>>> {
    Ok(unique_tilings(rows, columns, catalog)?
        .into_iter()
        .map(|signature| signature.into_iter().map(ShapeId::name).collect())
        .collect())
}
