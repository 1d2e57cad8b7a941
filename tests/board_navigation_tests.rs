use chess_tui::core::{Board, Coordinate, InputKey, Piece, PieceColor, PieceKind, apply};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn direction() -> impl Strategy<Value = InputKey> {
    prop_oneof![
        Just(InputKey::Up),
        Just(InputKey::Down),
        Just(InputKey::Left),
        Just(InputKey::Right),
    ]
}

fn any_key() -> impl Strategy<Value = InputKey> {
    prop_oneof![
        direction(),
        Just(InputKey::Select),
        Just(InputKey::Quit),
        Just(InputKey::Unknown),
    ]
}

fn piece_kind() -> impl Strategy<Value = PieceKind> {
    proptest::sample::select(PieceKind::ALL.to_vec())
}

fn piece_color() -> impl Strategy<Value = PieceColor> {
    proptest::sample::select(PieceColor::ALL.to_vec())
}

fn expected_letter(kind: PieceKind) -> char {
    match kind {
        PieceKind::Pawn => 'P',
        PieceKind::Rook => 'R',
        PieceKind::Knight => 'N',
        PieceKind::Bishop => 'B',
        PieceKind::Queen => 'Q',
        PieceKind::King => 'K',
        PieceKind::Unknown => '?',
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Fresh boards are empty with the cursor home and nothing selected
    #[test]
    fn new_board_is_empty(width in 1usize..24, height in 1usize..24) {
        let board = Board::new(width, height).unwrap();
        prop_assert_eq!(board.cells().count(), width * height);
        prop_assert!(board.cells().all(|(_, cell)| !cell.is_occupied()));
        prop_assert_eq!(board.cursor(), Coordinate::new(0, 0));
        prop_assert_eq!(board.selection(), None);
    }

    /// Any key sequence keeps the cursor and selection on the board
    #[test]
    fn keys_never_leave_the_board(
        width in 1usize..12,
        height in 1usize..12,
        keys in proptest::collection::vec(any_key(), 0..64),
    ) {
        let mut board = Board::new(width, height).unwrap();
        for key in keys {
            apply(&mut board, key);
            prop_assert!(board.contains(board.cursor()));
            if let Some(selection) = board.selection() {
                prop_assert!(board.contains(selection));
            }
        }
        board.assert_integrity();
    }

    /// Moving into an edge leaves the cursor where it was
    #[test]
    fn movement_clamps_at_edges(width in 1usize..12, height in 1usize..12) {
        let mut board = Board::new(width, height).unwrap();

        apply(&mut board, InputKey::Left);
        apply(&mut board, InputKey::Up);
        prop_assert_eq!(board.cursor(), Coordinate::new(0, 0));

        let corner = Coordinate::new(width - 1, height - 1);
        board.set_cursor(corner);
        apply(&mut board, InputKey::Right);
        apply(&mut board, InputKey::Down);
        prop_assert_eq!(board.cursor(), corner);
    }

    /// One Select marks the cursor cell, a second one clears it
    #[test]
    fn select_toggles(
        moves in proptest::collection::vec(direction(), 0..32),
    ) {
        let mut board = Board::standard().unwrap();
        for key in moves {
            apply(&mut board, key);
        }
        let cursor = board.cursor();

        prop_assert!(apply(&mut board, InputKey::Select));
        prop_assert_eq!(board.selection(), Some(cursor));
        prop_assert!(apply(&mut board, InputKey::Select));
        prop_assert_eq!(board.selection(), None);
    }

    /// Glyphs depend on the piece kind only
    #[test]
    fn glyph_matches_kind(
        kind in piece_kind(),
        color in piece_color(),
        column in 0usize..8,
        row in 0usize..8,
    ) {
        let mut board = Board::new(8, 8).unwrap();
        let coord = Coordinate::new(column, row);
        board.cell_at_mut(coord).place(Piece::new(kind, color));
        prop_assert_eq!(board.glyph_at(coord), expected_letter(kind));
    }
}

// ============================================================================
// Opening Layout
// ============================================================================

#[test]
fn test_opening_layout_occupancy() {
    let board = Board::standard().unwrap();
    let occupied: Vec<Coordinate> = board
        .cells()
        .filter(|(_, cell)| cell.is_occupied())
        .map(|(coord, _)| coord)
        .collect();

    assert_eq!(occupied.len(), 32);
    assert!(occupied.iter().all(|c| matches!(c.row, 0 | 1 | 6 | 7)));

    for (coord, cell) in board.cells() {
        if let Some(piece) = cell.piece() {
            let expected = if coord.row < 2 {
                PieceColor::Black
            } else {
                PieceColor::White
            };
            assert_eq!(piece.color, expected, "{coord}");
        }
    }
}

#[test]
fn test_destroy_consumes_board() {
    let board = Board::standard().unwrap();
    board.destroy();
}
