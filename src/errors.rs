//! Errors used throughout the game-state core.
//!
//! `ChessError` is the single error type returned by the fallible surface of
//! the crate: coordinate mapping, move-record construction, board editing
//! and undo. Move application and enumeration trust their inputs and do not
//! return errors; feeding `make_move` a record that was not produced against
//! the current board corrupts the position and is the caller's
//! responsibility to avoid.

use std::error::Error;
use std::fmt;

use crate::game_state::chess_types::Square;

/// Unified error type for the game-state core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A (row, column) pair landed outside the 8x8 board. Out-of-range
    /// coordinates fail fast; they are never clamped.
    InvalidCoordinate(Square),

    /// A square name failed to parse as a file letter `a..=h` followed by a
    /// rank digit `1..=8`.
    ///
    /// Payload: the offending text.
    InvalidAlgebraicSquare(String),

    /// A move string was not four characters of coordinate notation.
    ///
    /// Payload: the offending text.
    InvalidAlgebraicMove(String),

    /// Tried to undo a move with an empty move log.
    EmptyMoveLog,

    /// Tried to place a piece on a square that already holds one.
    SquareOccupied(Square),

    /// Tried to remove a piece from an empty square.
    EmptySquare(Square),
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidCoordinate((row, col)) => {
                write!(f, "coordinate ({row}, {col}) is off the board")
            }
            ChessError::InvalidAlgebraicSquare(text) => {
                write!(f, "invalid algebraic square: {text:?}")
            }
            ChessError::InvalidAlgebraicMove(text) => {
                write!(f, "invalid coordinate-notation move: {text:?}")
            }
            ChessError::EmptyMoveLog => write!(f, "no moves to undo"),
            ChessError::SquareOccupied((row, col)) => {
                write!(f, "square ({row}, {col}) is already occupied")
            }
            ChessError::EmptySquare((row, col)) => {
                write!(f, "square ({row}, {col}) is empty")
            }
        }
    }
}

impl Error for ChessError {}
