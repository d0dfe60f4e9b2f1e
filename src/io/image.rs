//! PNG export of tilings with outlined placements

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};
use ndarray::Array2;

use crate::algorithm::board::Board;
use crate::assembly::token::NominoColor;
use crate::io::configuration::{BORDER_COLOR, CELL_PIXEL_SIZE, PLACEMENT_BORDER_PIXELS};
use crate::io::error::{NominoError, Result, WithPath, invalid_parameter};

// Placement index owning a cell, treating outside the grid as unowned
fn owner(map: &Array2<usize>, row: Option<usize>, column: Option<usize>) -> usize {
    match (row, column) {
        (Some(row), Some(column)) => map.get((row, column)).copied().unwrap_or(0),
        _ => 0,
    }
}

/// Draw a board with one palette color per placement
///
/// Placements cycle through `palette` in placement order. Edges between cells
/// owned by different placements (and the grid boundary) are outlined;
/// uncovered cells stay transparent.
///
/// # Errors
///
/// Returns [`NominoError::InvalidParameter`] if the palette is empty.
pub fn render_tiling(board: &Board, palette: &[NominoColor]) -> Result<RgbaImage> {
    if palette.is_empty() {
        return Err(invalid_parameter(
            "palette",
            &"[]",
            &"at least one color is required",
        ));
    }

    let map = board.placement_map();
    let cell = CELL_PIXEL_SIZE;
    let border = PLACEMENT_BORDER_PIXELS.min(cell / 2);
    let width = board.columns() as u32 * cell;
    let height = board.rows() as u32 * cell;

    let image = ImageBuffer::from_fn(width, height, |x, y| {
        let row = (y / cell) as usize;
        let column = (x / cell) as usize;
        let index = owner(&map, Some(row), Some(column));
        if index == 0 {
            return Rgba([0, 0, 0, 0]);
        }

        let (dy, dx) = (y % cell, x % cell);
        let differs = |r: Option<usize>, c: Option<usize>| owner(&map, r, c) != index;
        let on_border = (dy < border && differs(row.checked_sub(1), Some(column)))
            || (dy >= cell - border && differs(Some(row + 1), Some(column)))
            || (dx < border && differs(Some(row), column.checked_sub(1)))
            || (dx >= cell - border && differs(Some(row), Some(column + 1)));

        if on_border {
            Rgba(BORDER_COLOR)
        } else {
            let color = palette
                .get((index - 1) % palette.len())
                .copied()
                .unwrap_or(NominoColor::Red);
            Rgba(color.rgba())
        }
    });

    Ok(image)
}

/// Render a board and save it as PNG, creating parent directories
///
/// # Errors
///
/// Returns an error if:
/// - The palette is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_tiling_as_png(board: &Board, palette: &[NominoColor], output_path: &Path) -> Result<()> {
    let image = render_tiling(board, palette)?;

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).with_path(parent, "create directory")?;
    }

    image
        .save(output_path)
        .map_err(|source| NominoError::ImageExport {
            path: output_path.to_path_buf(),
            source,
        })
}
