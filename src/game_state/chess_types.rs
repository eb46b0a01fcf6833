//! Shared value types for the board model.
//!
//! Squares are zero-based `(row, column)` pairs. Row 0 is rank 8 (the Dark
//! back rank), row 7 is rank 1; column 0 is the a-file. Pieces are plain
//! value tokens; the board stores `Option<Piece>` with `None` as the
//! empty-square sentinel.

use crate::errors::ChessError;

/// Side to move / piece ownership.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Row this side's pawns start on.
    #[inline]
    pub const fn pawn_home_row(self) -> i8 {
        match self {
            Color::Light => 6,
            Color::Dark => 1,
        }
    }

    /// Row delta of a forward pawn step. Light pawns advance toward row 0,
    /// Dark pawns toward row 7.
    #[inline]
    pub const fn pawn_direction(self) -> i8 {
        match self {
            Color::Light => -1,
            Color::Dark => 1,
        }
    }
}

/// Piece kind; ownership is carried separately by [`Color`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// A piece on the board: kind plus owning side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub team: Color,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, team: Color) -> Self {
        Self { kind, team }
    }
}

/// Board square as a zero-based `(row, column)` pair.
pub type Square = (i8, i8);

/// Whether a square lies on the 8x8 board.
#[inline]
pub fn square_in_bounds(square: Square) -> bool {
    (0..8).contains(&square.0) && (0..8).contains(&square.1)
}

/// Offsets a square by `(d_row, d_col)`, failing with
/// [`ChessError::InvalidCoordinate`] when the target leaves the board.
pub fn offset_square(square: Square, d_row: i8, d_col: i8) -> Result<Square, ChessError> {
    let target = (square.0 + d_row, square.1 + d_col);
    if square_in_bounds(target) {
        Ok(target)
    } else {
        Err(ChessError::InvalidCoordinate(target))
    }
}
