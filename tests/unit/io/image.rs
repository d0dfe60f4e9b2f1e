//! Tests for PNG rendering of tilings including borders and file creation

#[cfg(test)]
mod tests {
    use nominofill::NominoError;
    use nominofill::algorithm::board::Board;
    use nominofill::algorithm::search::enumerate_tilings;
    use nominofill::assembly::token::NominoColor;
    use nominofill::io::configuration::{BORDER_COLOR, CELL_PIXEL_SIZE};
    use nominofill::io::image::{export_tiling_as_png, render_tiling};
    use nominofill::spatial::shape::Catalog;
    use tempfile::TempDir;

    fn first_row_tiling() -> Board {
        let Ok(mut tilings) = enumerate_tilings(1, 7, &Catalog::default()) else {
            unreachable!("dimensions are positive");
        };
        let Some(board) = tilings.next() else {
            unreachable!("1x7 has tilings");
        };
        board
    }

    // Tests image dimensions follow the grid
    // Verified by swapping rows and columns
    #[test]
    fn test_render_dimensions() {
        let board = first_row_tiling();
        let Ok(image) = render_tiling(&board, &[NominoColor::Red]) else {
            unreachable!("palette is not empty");
        };

        assert_eq!(image.width(), 7 * CELL_PIXEL_SIZE);
        assert_eq!(image.height(), CELL_PIXEL_SIZE);
    }

    // Tests cell interiors take the palette color and edges the border color
    // Verified by skipping the border test on the grid boundary
    #[test]
    fn test_render_colors_and_borders() {
        let board = first_row_tiling();
        let palette = [NominoColor::Red, NominoColor::Blue];
        let Ok(image) = render_tiling(&board, &palette) else {
            unreachable!("palette is not empty");
        };
        let center = CELL_PIXEL_SIZE / 2;

        assert_eq!(image.get_pixel(center, center).0, NominoColor::Red.rgba());
        assert_eq!(
            image.get_pixel(3 * CELL_PIXEL_SIZE + center, center).0,
            NominoColor::Blue.rgba()
        );
        assert_eq!(image.get_pixel(0, 0).0, BORDER_COLOR);
        assert_eq!(
            image.get_pixel(3 * CELL_PIXEL_SIZE - 1, center).0,
            BORDER_COLOR
        );
        assert_eq!(
            image.get_pixel(CELL_PIXEL_SIZE, center).0,
            NominoColor::Red.rgba()
        );
    }

    // Tests uncovered cells stay transparent
    // Verified by filling uncovered cells with the first color
    #[test]
    fn test_render_uncovered_transparent() {
        let Ok(board) = Board::empty(2, 2) else {
            unreachable!("dimensions are positive");
        };
        let Ok(image) = render_tiling(&board, &[NominoColor::Gold]) else {
            unreachable!("palette is not empty");
        };

        assert!(image.pixels().all(|pixel| pixel.0 == [0, 0, 0, 0]));
    }

    // Tests an empty palette is rejected
    // Verified by defaulting to a single color
    #[test]
    fn test_render_rejects_empty_palette() {
        assert!(matches!(
            render_tiling(&first_row_tiling(), &[]),
            Err(NominoError::InvalidParameter {
                parameter: "palette",
                ..
            })
        ));
    }

    // Tests PNG export creates missing directories and the file
    // Verified by disabling directory creation
    #[test]
    fn test_export_creates_file() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temporary directory can be created");
        };
        let path = dir.path().join("nested/deeper/tiling.png");

        let result = export_tiling_as_png(&first_row_tiling(), &[NominoColor::Green], &path);

        assert!(result.is_ok(), "PNG export should succeed");
        assert!(path.exists());
    }

    // Tests export failures carry the offending path
    // Verified by discarding the path in the error
    #[test]
    fn test_export_reports_unwritable_path() {
        let Ok(dir) = TempDir::new() else {
            unreachable!("temporary directory can be created");
        };
        let blocker = dir.path().join("blocker");
        assert!(std::fs::write(&blocker, b"file").is_ok());
        let path = blocker.join("tiling.png");

        let result = export_tiling_as_png(&first_row_tiling(), &[NominoColor::Green], &path);

        assert!(matches!(
            result,
            Err(NominoError::FileSystem { path: ref failed, .. }) if failed == &blocker
        ));
    }
}
