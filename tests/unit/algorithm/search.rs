//! Tests for lazy, parallel and bounded tiling enumeration

#[cfg(test)]
mod tests {
    use nominofill::NominoError;
    use nominofill::algorithm::board::Board;
    use nominofill::algorithm::coverage::verify_tiling;
    use nominofill::algorithm::search::{
        Tilings, enumerate_tilings, enumerate_tilings_bounded, enumerate_tilings_parallel,
    };
    use nominofill::spatial::shape::{Catalog, ShapeId, default_fill, domino};

    fn domino_only() -> Catalog {
        let Ok(catalog) = Catalog::from_shapes(vec![domino(default_fill())]) else {
            unreachable!("domino is a valid shape");
        };
        catalog
    }

    fn signatures(boards: &[Board]) -> Vec<Vec<ShapeId>> {
        boards.iter().map(Board::signature).collect()
    }

    // Tests a single-row domino grid has exactly one tiling
    // Verified by dropping the horizontal rotation
    #[test]
    fn test_domino_row() {
        let Ok(tilings) = enumerate_tilings(1, 2, &domino_only()) else {
            unreachable!("dimensions are positive");
        };
        let boards: Vec<Board> = tilings.collect();

        assert_eq!(signatures(&boards), vec![vec![ShapeId::Domino]]);
    }

    // Tests a 2x2 grid yields both domino pairings in candidate order
    // Verified by pushing children without reversing them
    #[test]
    fn test_domino_square_order() {
        let Ok(tilings) = enumerate_tilings(2, 2, &domino_only()) else {
            unreachable!("dimensions are positive");
        };
        let boards: Vec<Board> = tilings.collect();

        assert_eq!(boards.len(), 2);
        let rotations: Vec<usize> = boards
            .iter()
            .filter_map(|board| board.placements().first())
            .map(|placement| placement.piece().rotation())
            .collect();
        assert_eq!(rotations, vec![0, 1]);
    }

    // Tests straight pieces tile a single row in both orders
    // Verified by trying shapes in reverse catalog order
    #[test]
    fn test_single_row_straights() {
        let Ok(tilings) = enumerate_tilings(1, 7, &Catalog::default()) else {
            unreachable!("dimensions are positive");
        };
        let boards: Vec<Board> = tilings.collect();

        assert_eq!(
            signatures(&boards),
            vec![
                vec![ShapeId::TrominoStraight, ShapeId::TetrominoStraight],
                vec![ShapeId::TetrominoStraight, ShapeId::TrominoStraight],
            ]
        );
    }

    // Tests every yielded board is an exact cover
    // Verified by yielding boards that still have holes
    #[test]
    fn test_results_are_exact_covers() {
        let Ok(tilings) = enumerate_tilings(3, 4, &Catalog::default()) else {
            unreachable!("dimensions are positive");
        };
        let mut count = 0;
        for board in tilings {
            assert!(verify_tiling(&board).is_ok());
            count += 1;
        }
        assert!(count > 0);
    }

    // Tests the stream is lazy and can stop after the first tiling
    // Verified by expanding the whole tree before yielding
    #[test]
    fn test_stream_is_lazy() {
        let Ok(mut tilings) = enumerate_tilings(3, 4, &Catalog::default()) else {
            unreachable!("dimensions are positive");
        };
        let first = tilings.next();

        assert!(first.is_some());
        assert!(tilings.pending() > 0);
    }

    // Tests unreachable cell counts skip the search entirely
    // Verified by removing the cell-count check
    #[test]
    fn test_unreachable_cell_count_skips_search() {
        let Ok(mut tilings) = enumerate_tilings(1, 5, &Catalog::default()) else {
            unreachable!("dimensions are positive");
        };

        assert_eq!(tilings.pending(), 0);
        assert!(tilings.next().is_none());
        assert_eq!(tilings.explored(), 0);
    }

    // Tests zero dimensions surface as errors
    // Verified by returning an empty stream
    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            enumerate_tilings(0, 4, &Catalog::default()),
            Err(NominoError::InvalidDimensions { .. })
        ));
        assert!(matches!(
            enumerate_tilings_parallel(3, 0, &Catalog::default()),
            Err(NominoError::InvalidDimensions { .. })
        ));
    }

    // Tests the explored counter on a fully known search tree
    // Verified by counting complete boards as expansions
    #[test]
    fn test_explored_counts_expansions() {
        let Ok(mut tilings) = enumerate_tilings(1, 7, &Catalog::default()) else {
            unreachable!("dimensions are positive");
        };
        let found = tilings.by_ref().count();

        assert_eq!(found, 2);
        assert_eq!(tilings.explored(), 4);
        assert!(!tilings.budget_exhausted());
    }

    // Tests resuming from a partial board only explores its subtree
    // Verified by restarting from an empty board
    #[test]
    fn test_from_board_resumes() {
        let catalog = Catalog::default();
        let pieces = catalog.pieces();
        let Some(straight) = pieces
            .iter()
            .find(|piece| piece.shape() == ShapeId::TetrominoStraight && piece.rows() == 1)
        else {
            unreachable!("horizontal straight tetromino exists");
        };
        let Ok(root) = Board::empty(1, 7) else {
            unreachable!("dimensions are positive");
        };
        let partial = root.with_placement(straight, 0, 0);

        let boards: Vec<Board> = Tilings::from_board(partial, pieces).collect();

        assert_eq!(
            signatures(&boards),
            vec![vec![ShapeId::TetrominoStraight, ShapeId::TrominoStraight]]
        );
    }

    // Tests the parallel search matches the sequential one, order included
    // Verified by collecting branches with an unordered reduction
    #[test]
    fn test_parallel_matches_sequential() {
        let catalog = Catalog::default();
        let Ok(tilings) = enumerate_tilings(3, 4, &catalog) else {
            unreachable!("dimensions are positive");
        };
        let sequential: Vec<Board> = tilings.collect();
        let Ok(parallel) = enumerate_tilings_parallel(3, 4, &catalog) else {
            unreachable!("dimensions are positive");
        };

        assert_eq!(parallel, sequential);
    }

    // Tests the parallel search also skips unreachable cell counts
    // Verified by searching regardless of the cell count
    #[test]
    fn test_parallel_unreachable_is_empty() {
        let result = enumerate_tilings_parallel(1, 5, &Catalog::default());
        assert!(matches!(result, Ok(boards) if boards.is_empty()));
    }

    // Tests a sufficient budget returns the full result
    // Verified by checking the budget before popping complete boards
    #[test]
    fn test_bounded_within_budget() {
        let result = enumerate_tilings_bounded(1, 7, &Catalog::default(), 4);

        let Ok(boards) = result else {
            unreachable!("budget of 4 covers the whole tree");
        };
        assert_eq!(boards.len(), 2);
    }

    // Tests an insufficient budget reports exhaustion
    // Verified by returning partial results instead of an error
    #[test]
    fn test_bounded_exceeded() {
        let result = enumerate_tilings_bounded(1, 7, &Catalog::default(), 3);

        assert!(matches!(
            result,
            Err(NominoError::SearchBudgetExceeded { limit: 3 })
        ));
    }

    // Tests an exhausted stream stays exhausted
    // Verified by leaving the stack intact after the budget runs out
    #[test]
    fn test_budget_exhaustion_is_final() {
        let Ok(tilings) = enumerate_tilings(3, 4, &Catalog::default()) else {
            unreachable!("dimensions are positive");
        };
        let mut tilings = tilings.with_budget(1);
        while tilings.next().is_some() {}

        assert!(tilings.budget_exhausted());
        assert_eq!(tilings.pending(), 0);
        assert!(tilings.next().is_none());
    }
}
