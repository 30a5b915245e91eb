/// Board square index, 0..63, rank-major with a1 = 0 and h8 = 63.
pub type Square = u8;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub fn other(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub fn idx(self) -> usize {
        self as usize
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

/// Reflects a square across the board's horizontal midline (a1 <-> a8).
///
/// This is the square a piece of the opposite colour would stand on in the
/// colour-reversed position.
#[inline]
pub fn mirror_square(sq: Square) -> Square {
    sq ^ 56
}

/// All 64 squares in index order.
pub fn all_squares() -> impl Iterator<Item = Square> {
    0..64u8
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
