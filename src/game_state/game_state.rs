//! Authoritative state of one game: board, side to move, move log.
//!
//! `GameState` is mutated in place by `make_move`/`undo_move`, which are
//! exact inverses of each other. A game is created once with the starting
//! position and reset by reconstruction; there is no shared or global
//! instance, and no internal synchronization; one caller per instance.

use crate::errors::ChessError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Color;
use crate::moves::move_record::MoveRecord;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub turn: Color,
    move_log: Vec<MoveRecord>,
}

impl GameState {
    /// A fresh game: standard starting position, Light to move, empty log.
    pub fn new_game() -> Self {
        Self::from_board(Board::starting_position(), Color::Light)
    }

    /// A game over an arbitrary position, for setups and tests.
    pub fn from_board(board: Board, turn: Color) -> Self {
        Self {
            board,
            turn,
            move_log: Vec::new(),
        }
    }

    /// Moves made so far, oldest first.
    #[inline]
    pub fn move_log(&self) -> &[MoveRecord] {
        &self.move_log
    }

    /// Applies `mv` to the board: the start square is cleared and the moved
    /// piece overwrites whatever stood on the stop square. The record is
    /// appended to the log and the turn flips.
    ///
    /// The record is trusted to have been produced against the current
    /// board (in practice, by the enumeration in
    /// [`move_generation`](crate::move_generation)); applying anything else
    /// leaves the position corrupted. Castling, en passant and promotion
    /// are not part of the move shape and are not special-cased here; a
    /// pawn arriving on the back rank stays a pawn.
    pub fn make_move(&mut self, mv: MoveRecord) {
        self.board.set(mv.start, None);
        self.board.set(mv.stop, mv.piece_moved);
        self.move_log.push(mv);
        self.turn = self.turn.opposite();
    }

    /// Reverts the most recent move and returns its record: the moved piece
    /// goes back to the start square, the captured piece (or emptiness) is
    /// restored to the stop square, and the turn flips back.
    ///
    /// Fails with [`ChessError::EmptyMoveLog`] when there is nothing to
    /// undo; this crate deliberately reports that case instead of treating
    /// it as a no-op.
    pub fn undo_move(&mut self) -> Result<MoveRecord, ChessError> {
        let mv = self.move_log.pop().ok_or(ChessError::EmptyMoveLog)?;
        self.board.set(mv.start, mv.piece_moved);
        self.board.set(mv.stop, mv.piece_captured);
        self.turn = self.turn.opposite();
        Ok(mv)
    }
}
