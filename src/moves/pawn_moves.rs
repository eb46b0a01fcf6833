//! Pawn moves: pushes and diagonal captures.
//!
//! Promotion and en passant are not part of the move shape; a pawn reaching
//! the far rank simply stops generating forward moves.

use crate::game_state::chess_types::{offset_square, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_record::MoveRecord;

/// Appends the pseudo-legal pawn moves from `start` for the side to move.
pub fn generate_pawn_moves(game: &GameState, start: Square, out: &mut Vec<MoveRecord>) {
    let forward = game.turn.pawn_direction();
    let piece_moved = game.board.piece_at(start);

    // Single push onto an empty square, and the double push behind it from
    // the home row.
    if let Ok(stop) = offset_square(start, forward, 0) {
        if game.board.piece_at(stop).is_none() {
            out.push(MoveRecord {
                start,
                stop,
                piece_moved,
                piece_captured: None,
            });
            if start.0 == game.turn.pawn_home_row() {
                if let Ok(jump) = offset_square(start, 2 * forward, 0) {
                    if game.board.piece_at(jump).is_none() {
                        out.push(MoveRecord {
                            start,
                            stop: jump,
                            piece_moved,
                            piece_captured: None,
                        });
                    }
                }
            }
        }
    }

    // Diagonal steps are captures only; an empty diagonal is not a move.
    for d_col in [-1, 1] {
        if let Ok(stop) = offset_square(start, forward, d_col) {
            if let Some(target) = game.board.piece_at(stop) {
                if target.team != game.turn {
                    out.push(MoveRecord {
                        start,
                        stop,
                        piece_moved,
                        piece_captured: Some(target),
                    });
                }
            }
        }
    }
}
