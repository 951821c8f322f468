use skillboard::{Board, BoardError, CellState, Orientation, Ship, ShipType, BOARD_SIZE};

const CRUISER: ShipType = ShipType::new("Cruiser", 3);

#[test]
fn test_orientations_lay_out_cells() -> Result<(), BoardError> {
    let cases = [
        (Orientation::Horizontal, 2, 1, vec![(2, 1), (2, 2), (2, 3)]),
        (Orientation::Vertical, 5, 7, vec![(5, 7), (6, 7), (7, 7)]),
        (Orientation::Diagonal, 0, 0, vec![(0, 0), (1, 1), (2, 2)]),
        (Orientation::AntiDiagonal, 0, 9, vec![(0, 9), (1, 8), (2, 7)]),
    ];
    for (orientation, row, col, expected) in cases {
        let ship = Ship::<u128, BOARD_SIZE>::new(CRUISER, orientation, row, col)?;
        assert_eq!(ship.cells().collect::<Vec<_>>(), expected, "{:?}", orientation);
        assert_eq!(ship.origin(), (row, col));
        assert_eq!(ship.orientation(), orientation);
    }
    Ok(())
}

#[test]
fn test_out_of_bounds() {
    let cases = [
        (Orientation::Horizontal, 0, 8),
        (Orientation::Vertical, 8, 0),
        (Orientation::Diagonal, 8, 2),
        (Orientation::Diagonal, 2, 8),
        (Orientation::AntiDiagonal, 0, 1),
    ];
    for (orientation, row, col) in cases {
        let err = Ship::<u128, BOARD_SIZE>::new(CRUISER, orientation, row, col).unwrap_err();
        assert_eq!(err, BoardError::ShipOutOfBounds, "{:?} at ({}, {})", orientation, row, col);
    }
}

#[test]
fn test_place_and_overlap() -> Result<(), BoardError> {
    let mut board = Board::<BOARD_SIZE>::new();
    let horizontal = Ship::new(CRUISER, Orientation::Horizontal, 2, 1)?;
    assert!(board.can_place(&horizontal));
    board.place(&horizontal)?;
    assert_eq!(board.count(CellState::Ship), 3);

    let diagonal = Ship::new(CRUISER, Orientation::Diagonal, 0, 0)?;
    assert!(!board.can_place(&diagonal));
    let before = board;
    assert_eq!(
        board.place(&diagonal).unwrap_err(),
        BoardError::ShipOverlaps { row: 2, col: 2 }
    );
    assert_eq!(board, before);
    Ok(())
}

#[test]
fn test_cannot_place_on_area_effect() -> Result<(), BoardError> {
    let mut board = Board::<BOARD_SIZE>::new();
    board.apply(&skillboard::SkillMask::cross()?, skillboard::Origin::new(5, 5));
    let ship = Ship::new(CRUISER, Orientation::Vertical, 4, 5)?;
    assert!(matches!(board.place(&ship), Err(BoardError::ShipOverlaps { .. })));
    Ok(())
}

#[test]
fn test_small_board() -> Result<(), BoardError> {
    let ship = Ship::<u16, 4>::new(ShipType::new("Destroyer", 2), Orientation::AntiDiagonal, 1, 1)?;
    assert!(ship.contains(1, 1));
    assert!(ship.contains(2, 0));
    assert!(!ship.contains(0, 2));
    Ok(())
}
