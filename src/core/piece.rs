//! # Pieces
//!
//! A piece is a kind plus a color. Pieces are plain values: once placed on a
//! cell they are never mutated, only replaced.

/// The kind of a chess piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    #[default]
    Unknown,
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 7] = [
        PieceKind::Unknown,
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Display letter for this kind.
    pub fn glyph(self) -> char {
        match self {
            PieceKind::Unknown => '?',
            PieceKind::Pawn => 'P',
            PieceKind::Rook => 'R',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceColor {
    #[default]
    Unknown,
    White,
    Black,
}

impl PieceColor {
    pub const ALL: [PieceColor; 3] = [PieceColor::Unknown, PieceColor::White, PieceColor::Black];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: PieceColor,
}

impl Piece {
    pub const fn new(kind: PieceKind, color: PieceColor) -> Self {
        Self { kind, color }
    }

    /// Display letter for this piece. Both colors share the same letter.
    pub fn glyph(&self) -> char {
        self.kind.glyph()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_table() {
        let expected = ['?', 'P', 'R', 'N', 'B', 'Q', 'K'];
        for (kind, letter) in PieceKind::ALL.iter().zip(expected) {
            assert_eq!(kind.glyph(), letter, "{kind:?}");
        }
    }

    #[test]
    fn test_glyph_ignores_color() {
        for kind in PieceKind::ALL {
            let letters: Vec<char> = PieceColor::ALL
                .iter()
                .map(|&color| Piece::new(kind, color).glyph())
                .collect();
            assert!(letters.iter().all(|&c| c == kind.glyph()));
        }
    }

    #[test]
    fn test_default_piece_is_unknown() {
        let piece = Piece::default();
        assert_eq!(piece.kind, PieceKind::Unknown);
        assert_eq!(piece.color, PieceColor::Unknown);
        assert_eq!(piece.glyph(), '?');
    }
}
