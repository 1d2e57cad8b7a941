//! # Board
//!
//! The board owns a dense, row-major grid of cells plus the player's cursor
//! and optional selection.
//!
//! ```text
//!           column 0   1   2        width-1
//! row 0     [0]       [1] [2]  ...  [w-1]
//! row 1     [w]       [w+1]    ...
//! ...
//! index = width * row + column
//! ```
//!
//! The cursor is always in range. The selection is either absent or in range;
//! a half-set selection is not representable.

use log::debug;
use std::collections::TryReserveError;
use std::fmt;

use crate::core::piece::{Piece, PieceColor, PieceKind};

/// Side length of a standard chess board.
pub const STANDARD_SIZE: usize = 8;

/// Back rank, from column `a` to column `h`.
const BACK_RANK: [PieceKind; STANDARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

// ============================================================================
// Coordinate
// ============================================================================

/// A `(column, row)` pair identifying one cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Coordinate {
    pub column: usize,
    pub row: usize,
}

impl Coordinate {
    pub const fn new(column: usize, row: usize) -> Self {
        Self { column, row }
    }

    /// Chess notation for this coordinate on a board `height` rows tall.
    ///
    /// Row 0 is the top of the screen, where black starts, so on an 8x8 board
    /// `(0, 0)` is `a8` and `(4, 7)` is `e1`. Returns `None` when the column
    /// has no letter or the row lies outside the board.
    pub fn algebraic(&self, height: usize) -> Option<String> {
        if self.column >= 26 || self.row >= height {
            return None;
        }
        let file = (b'a' + self.column as u8) as char;
        let rank = height - self.row;
        Some(format!("{file}{rank}"))
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.column, self.row)
    }
}

// ============================================================================
// Cell
// ============================================================================

/// One grid position. Empty unless a piece has been placed on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    piece: Option<Piece>,
}

impl Cell {
    pub const EMPTY: Cell = Cell { piece: None };

    pub fn with_piece(piece: Piece) -> Self {
        Self { piece: Some(piece) }
    }

    pub fn is_occupied(&self) -> bool {
        self.piece.is_some()
    }

    pub fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn place(&mut self, piece: Piece) {
        self.piece = Some(piece);
    }

    pub fn clear(&mut self) {
        self.piece = None;
    }

    /// Display character: the piece letter, or a space for an empty cell.
    pub fn glyph(&self) -> char {
        self.piece.map_or(' ', |p| p.glyph())
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum BoardError {
    /// Width or height was zero.
    EmptyBoard { width: usize, height: usize },
    /// `width * height` does not fit in `usize`.
    TooLarge { width: usize, height: usize },
    /// Cell storage could not be reserved.
    Allocation(TryReserveError),
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::EmptyBoard { width, height } => {
                write!(f, "board dimensions must be positive, got {width}x{height}")
            }
            BoardError::TooLarge { width, height } => {
                write!(f, "board of {width}x{height} cells is too large")
            }
            BoardError::Allocation(e) => write!(f, "failed to allocate board cells: {e}"),
        }
    }
}

impl std::error::Error for BoardError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            BoardError::Allocation(e) => Some(e),
            _ => None,
        }
    }
}

// ============================================================================
// Board
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
    cursor: Coordinate,
    selection: Option<Coordinate>,
}

impl Board {
    /// Allocate a `width` x `height` board with every cell empty, the cursor
    /// at `(0, 0)` and nothing selected.
    pub fn new(width: usize, height: usize) -> Result<Self, BoardError> {
        if width == 0 || height == 0 {
            return Err(BoardError::EmptyBoard { width, height });
        }
        let len = width
            .checked_mul(height)
            .ok_or(BoardError::TooLarge { width, height })?;

        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(BoardError::Allocation)?;
        cells.resize(len, Cell::EMPTY);

        debug!("Created {width}x{height} board ({len} cells)");
        let board = Self {
            width,
            height,
            cells,
            cursor: Coordinate::default(),
            selection: None,
        };
        board.assert_integrity();
        Ok(board)
    }

    /// An 8x8 board with the standard opening layout.
    pub fn standard() -> Result<Self, BoardError> {
        let mut board = Self::new(STANDARD_SIZE, STANDARD_SIZE)?;
        board.set_initial_layout();
        Ok(board)
    }

    /// Release the board's storage. Consuming `self` means this can only
    /// happen once.
    pub fn destroy(self) {
        debug!("Destroying {}x{} board", self.width, self.height);
        drop(self);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn cursor(&self) -> Coordinate {
        self.cursor
    }

    pub fn selection(&self) -> Option<Coordinate> {
        self.selection
    }

    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.column < self.width && coord.row < self.height
    }

    /// Place the standard opening position: black on rows 0 and 1, white on
    /// the last two rows.
    ///
    /// # Panics
    ///
    /// Panics unless the board is 8x8.
    pub fn set_initial_layout(&mut self) {
        assert!(
            self.width == STANDARD_SIZE && self.height == STANDARD_SIZE,
            "initial layout requires an 8x8 board, got {}x{}",
            self.width,
            self.height
        );

        let last = self.height - 1;
        for (column, &kind) in BACK_RANK.iter().enumerate() {
            self.place(column, 0, Piece::new(kind, PieceColor::Black));
            self.place(column, 1, Piece::new(PieceKind::Pawn, PieceColor::Black));
            self.place(column, last - 1, Piece::new(PieceKind::Pawn, PieceColor::White));
            self.place(column, last, Piece::new(kind, PieceColor::White));
        }
        debug!("Initial layout placed");
    }

    fn place(&mut self, column: usize, row: usize, piece: Piece) {
        self.cell_at_mut(Coordinate::new(column, row)).place(piece);
    }

    fn index_of(&self, coord: Coordinate) -> usize {
        assert!(
            self.contains(coord),
            "coordinate {coord} is outside the {}x{} board",
            self.width,
            self.height
        );
        self.width * coord.row + coord.column
    }

    /// The cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the board.
    pub fn cell_at(&self, coord: Coordinate) -> &Cell {
        &self.cells[self.index_of(coord)]
    }

    /// Mutable access to the cell at `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the board.
    pub fn cell_at_mut(&mut self, coord: Coordinate) -> &mut Cell {
        let index = self.index_of(coord);
        &mut self.cells[index]
    }

    /// Non-panicking lookup.
    pub fn get(&self, coord: Coordinate) -> Option<&Cell> {
        self.contains(coord)
            .then(|| &self.cells[self.width * coord.row + coord.column])
    }

    /// Cells of one row, left to right.
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(row < self.height, "row {row} is outside the board");
        let start = self.width * row;
        &self.cells[start..start + self.width]
    }

    /// Every cell in storage order, paired with its coordinate.
    pub fn cells(&self) -> impl Iterator<Item = (Coordinate, &Cell)> {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (Coordinate::new(i % width, i / width), cell))
    }

    /// Glyph of the cell at `coord`.
    pub fn glyph_at(&self, coord: Coordinate) -> char {
        self.cell_at(coord).glyph()
    }

    /// Move the cursor to `coord`.
    ///
    /// # Panics
    ///
    /// Panics if `coord` is outside the board.
    pub fn set_cursor(&mut self, coord: Coordinate) {
        assert!(self.contains(coord), "cursor {coord} is outside the board");
        self.cursor = coord;
        self.assert_integrity();
    }

    /// Replace the selection.
    ///
    /// # Panics
    ///
    /// Panics if a selected coordinate is outside the board.
    pub fn set_selection(&mut self, selection: Option<Coordinate>) {
        if let Some(coord) = selection {
            assert!(self.contains(coord), "selection {coord} is outside the board");
        }
        self.selection = selection;
        self.assert_integrity();
    }

    /// Move the cursor by `(dx, dy)`, stopping at the edges.
    ///
    /// Returns `true` if the cursor actually moved.
    pub fn move_cursor(&mut self, dx: isize, dy: isize) -> bool {
        let clamp = |value: usize, delta: isize, len: usize| {
            value.saturating_add_signed(delta).min(len - 1)
        };
        let next = Coordinate::new(
            clamp(self.cursor.column, dx, self.width),
            clamp(self.cursor.row, dy, self.height),
        );
        let moved = next != self.cursor;
        self.cursor = next;
        self.assert_integrity();
        moved
    }

    /// Select the cursor cell, or clear the selection if one is active.
    pub fn toggle_selection(&mut self) {
        self.selection = match self.selection {
            Some(_) => None,
            None => Some(self.cursor),
        };
        self.assert_integrity();
    }

    /// Check the cursor and selection against the board dimensions.
    ///
    /// # Panics
    ///
    /// Panics if either lies outside the board.
    pub fn assert_integrity(&self) {
        assert_eq!(self.cells.len(), self.width * self.height);
        assert!(
            self.contains(self.cursor),
            "cursor {} is outside the {}x{} board",
            self.cursor,
            self.width,
            self.height
        );
        if let Some(selection) = self.selection {
            assert!(
                self.contains(selection),
                "selection {selection} is outside the {}x{} board",
                self.width,
                self.height
            );
        }
    }
}
