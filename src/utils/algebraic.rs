//! Conversions between internal `(row, column)` squares and algebraic names.
//!
//! The fixed mapping: column 0 is file `a` through column 7 = file `h`;
//! row 0 is rank `8` down to row 7 = rank `1`. Pure functions, no clamping:
//! out-of-range input is an error, never a nearby square.

use crate::errors::ChessError;
use crate::game_state::chess_types::{square_in_bounds, Square};

/// Renders a square as its two-character algebraic name (for example,
/// `(6, 4)` -> "e2").
#[inline]
pub fn square_to_algebraic(square: Square) -> Result<String, ChessError> {
    if !square_in_bounds(square) {
        return Err(ChessError::InvalidCoordinate(square));
    }
    let file = char::from(b'a' + square.1 as u8);
    let rank = char::from(b'8' - square.0 as u8);
    Ok(format!("{file}{rank}"))
}

/// Parses a two-character algebraic name back into a square (for example,
/// "e2" -> `(6, 4)`).
#[inline]
pub fn algebraic_to_square(text: &str) -> Result<Square, ChessError> {
    let bytes = text.as_bytes();
    if bytes.len() != 2 {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }
    let file = bytes[0];
    let rank = bytes[1];
    if !(b'a'..=b'h').contains(&file) || !(b'1'..=b'8').contains(&rank) {
        return Err(ChessError::InvalidAlgebraicSquare(text.to_owned()));
    }
    Ok(((b'8' - rank) as i8, (file - b'a') as i8))
}
