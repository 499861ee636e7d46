//! The placement rule chain: each failure mode and the contract that the
//! first violated rule in the fixed order is the one reported.

use broadside::{Board, Coord, GameError, Orientation, Placement, PlacementError, ShipKind};

fn place(board: &mut Board, kind: ShipKind, x: u8, y: u8, orientation: Orientation) {
    board
        .place(&Placement::new(kind, Coord::new(x, y), orientation))
        .unwrap();
}

fn validate_err(board: &Board, placement: &Placement) -> PlacementError {
    placement.validate(board).unwrap_err()
}

#[test]
fn test_derived_runs() {
    let p = Placement::new(ShipKind::Destroyer, Coord::new(0, 0), Orientation::Horizontal);
    assert_eq!(
        p.cells().collect::<Vec<_>>(),
        vec![Coord::new(0, 0), Coord::new(1, 0)]
    );

    let p = Placement::new(ShipKind::Cruiser, Coord::new(7, 3), Orientation::Vertical);
    assert_eq!(
        p.cells().collect::<Vec<_>>(),
        vec![Coord::new(7, 3), Coord::new(7, 4), Coord::new(7, 5)]
    );
}

#[test]
fn test_duplicate_ship_type() {
    let mut board = Board::new();
    place(&mut board, ShipKind::Carrier, 0, 0, Orientation::Horizontal);

    let again = Placement::new(ShipKind::Carrier, Coord::new(0, 5), Orientation::Horizontal);
    assert_eq!(validate_err(&board, &again), PlacementError::DuplicateShipType);
}

#[test]
fn test_out_of_bounds() {
    let board = Board::new();

    // run extends past the right edge
    let p = Placement::new(ShipKind::Destroyer, Coord::new(9, 0), Orientation::Horizontal);
    assert_eq!(validate_err(&board, &p), PlacementError::OutOfBounds);

    // run extends past the bottom edge
    let p = Placement::new(ShipKind::Carrier, Coord::new(0, 6), Orientation::Vertical);
    assert_eq!(validate_err(&board, &p), PlacementError::OutOfBounds);

    // anchor itself is off the grid
    let p = Placement::new(ShipKind::Submarine, Coord::new(12, 12), Orientation::Horizontal);
    assert_eq!(validate_err(&board, &p), PlacementError::OutOfBounds);
}

#[test]
fn test_invalid_shape_wrong_length() {
    let board = Board::new();
    let p = Placement::from_cells(
        ShipKind::Cruiser,
        Orientation::Horizontal,
        vec![Coord::new(0, 0), Coord::new(1, 0)],
    );
    assert_eq!(validate_err(&board, &p), PlacementError::InvalidShape);
}

#[test]
fn test_invalid_shape_gap() {
    let board = Board::new();
    let p = Placement::from_cells(
        ShipKind::Cruiser,
        Orientation::Horizontal,
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(3, 0)],
    );
    assert_eq!(validate_err(&board, &p), PlacementError::InvalidShape);
}

#[test]
fn test_invalid_shape_bent() {
    let board = Board::new();
    let p = Placement::from_cells(
        ShipKind::Cruiser,
        Orientation::Horizontal,
        vec![Coord::new(0, 0), Coord::new(1, 0), Coord::new(1, 1)],
    );
    assert_eq!(validate_err(&board, &p), PlacementError::InvalidShape);
}

#[test]
fn test_invalid_shape_wrong_orientation() {
    let board = Board::new();
    // a vertical run declared horizontal is malformed
    let p = Placement::from_cells(
        ShipKind::Cruiser,
        Orientation::Horizontal,
        vec![Coord::new(2, 2), Coord::new(2, 3), Coord::new(2, 4)],
    );
    assert_eq!(validate_err(&board, &p), PlacementError::InvalidShape);
}

#[test]
fn test_overlap() {
    let mut board = Board::new();
    place(&mut board, ShipKind::Carrier, 2, 2, Orientation::Horizontal);

    let crossing = Placement::new(ShipKind::Battleship, Coord::new(4, 0), Orientation::Vertical);
    assert_eq!(validate_err(&board, &crossing), PlacementError::Overlap);
}

#[test]
fn test_too_close_orthogonal() {
    // Destroyer at (0,0) horizontal occupies (0,0),(1,0); a Submarine
    // anchored at (0,1) horizontal touches it from below
    let mut board = Board::new();
    place(&mut board, ShipKind::Destroyer, 0, 0, Orientation::Horizontal);

    let p = Placement::new(ShipKind::Submarine, Coord::new(0, 1), Orientation::Horizontal);
    assert_eq!(validate_err(&board, &p), PlacementError::TooClose);
}

#[test]
fn test_too_close_diagonal() {
    let mut board = Board::new();
    place(&mut board, ShipKind::Destroyer, 0, 0, Orientation::Horizontal);

    // (2,1) is corner-to-corner with (1,0); diagonal touches are banned too
    let p = Placement::new(ShipKind::Cruiser, Coord::new(2, 1), Orientation::Horizontal);
    assert_eq!(validate_err(&board, &p), PlacementError::TooClose);
}

#[test]
fn test_one_cell_gap_is_legal() {
    let mut board = Board::new();
    place(&mut board, ShipKind::Destroyer, 0, 0, Orientation::Horizontal);

    // row 2 leaves a full empty row between the ships
    let p = Placement::new(ShipKind::Cruiser, Coord::new(0, 2), Orientation::Horizontal);
    assert!(p.validate(&board).is_ok());
}

#[test]
fn test_rule_order_duplicate_before_bounds() {
    let mut board = Board::new();
    place(&mut board, ShipKind::Carrier, 0, 0, Orientation::Horizontal);

    // candidate is both a duplicate and out of bounds; uniqueness is checked first
    let p = Placement::new(ShipKind::Carrier, Coord::new(9, 9), Orientation::Horizontal);
    assert_eq!(validate_err(&board, &p), PlacementError::DuplicateShipType);
}

#[test]
fn test_rule_order_bounds_before_shape() {
    let board = Board::new();
    // malformed footprint that also leaves the grid; bounds is checked first
    let p = Placement::from_cells(
        ShipKind::Cruiser,
        Orientation::Horizontal,
        vec![Coord::new(9, 0), Coord::new(10, 0)],
    );
    assert_eq!(validate_err(&board, &p), PlacementError::OutOfBounds);
}

#[test]
fn test_rule_order_overlap_before_too_close() {
    let mut board = Board::new();
    place(&mut board, ShipKind::Carrier, 2, 2, Orientation::Horizontal);

    // candidate both coincides with and touches the carrier; overlap wins
    let p = Placement::new(ShipKind::Destroyer, Coord::new(3, 2), Orientation::Horizontal);
    assert_eq!(validate_err(&board, &p), PlacementError::Overlap);
}

#[test]
fn test_failed_validation_mutates_nothing() {
    let mut board = Board::new();
    place(&mut board, ShipKind::Destroyer, 0, 0, Orientation::Horizontal);

    let bad = Placement::new(ShipKind::Submarine, Coord::new(1, 1), Orientation::Horizontal);
    assert_eq!(
        board.place(&bad).unwrap_err(),
        GameError::Placement(PlacementError::TooClose)
    );
    assert!(!board.has_ship(ShipKind::Submarine));
    assert_eq!(board.ship_map().count_ones(), ShipKind::Destroyer.length());
}
