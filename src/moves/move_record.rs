//! The record of a single ply.
//!
//! A `MoveRecord` snapshots the moved and captured pieces by value at
//! construction time, so later board mutation can never corrupt entries
//! already sitting in the move log. It carries no legality judgement; that
//! belongs to [`move_generation`](crate::move_generation).

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{square_in_bounds, Piece, Square};
use crate::utils::algebraic::{algebraic_to_square, square_to_algebraic};

#[derive(Debug, Clone, Copy)]
pub struct MoveRecord {
    pub start: Square,
    pub stop: Square,
    /// Board contents at `start` when the record was built.
    pub piece_moved: Option<Piece>,
    /// Board contents at `stop` when the record was built; `None` for a
    /// quiet move.
    pub piece_captured: Option<Piece>,
}

impl MoveRecord {
    /// Builds a record by reading both squares from `board`. Fails with
    /// [`ChessError::InvalidCoordinate`] when either square is off the
    /// board; no legality check is performed.
    pub fn new(start: Square, stop: Square, board: &Board) -> Result<Self, ChessError> {
        for square in [start, stop] {
            if !square_in_bounds(square) {
                return Err(ChessError::InvalidCoordinate(square));
            }
        }
        Ok(Self {
            start,
            stop,
            piece_moved: board.piece_at(start),
            piece_captured: board.piece_at(stop),
        })
    }

    /// Parses plain coordinate notation ("e2e4") against `board`. A fifth
    /// promotion character is rejected; promotion is outside the move
    /// shape.
    pub fn from_long_algebraic(text: &str, board: &Board) -> Result<Self, ChessError> {
        let trimmed = text.trim();
        if trimmed.len() != 4 || !trimmed.is_ascii() {
            return Err(ChessError::InvalidAlgebraicMove(text.to_owned()));
        }
        let start = algebraic_to_square(&trimmed[0..2])?;
        let stop = algebraic_to_square(&trimmed[2..4])?;
        Self::new(start, stop, board)
    }

    /// Packed identity of the four coordinates; injective, so two records
    /// are equal exactly when their squares are.
    #[inline]
    pub fn move_id(&self) -> u16 {
        let start = (self.start.0 * 8 + self.start.1) as u16;
        let stop = (self.stop.0 * 8 + self.stop.1) as u16;
        start << 6 | stop
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    /// Coordinate notation, start then stop ("e2e4"). No capture, check or
    /// promotion decoration.
    pub fn to_long_algebraic(&self) -> String {
        let start = square_to_algebraic(self.start).expect("move squares are validated at construction");
        let stop = square_to_algebraic(self.stop).expect("move squares are validated at construction");
        format!("{start}{stop}")
    }
}

/// Move identity is the square pairing alone; the snapshotted pieces do not
/// participate.
impl PartialEq for MoveRecord {
    fn eq(&self, other: &Self) -> bool {
        self.move_id() == other.move_id()
    }
}

impl Eq for MoveRecord {}
