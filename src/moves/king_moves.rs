//! King moves: one step in each of the eight directions.
//!
//! Castling is not part of the move shape and is not generated.

use crate::game_state::chess_types::{offset_square, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_record::MoveRecord;
use crate::moves::shared::check_move_collision;

/// The eight one-step king directions as `(row, column)` deltas, in
/// enumeration order.
pub const KING_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Appends the pseudo-legal king moves from `start` for the side to move.
pub fn generate_king_moves(game: &GameState, start: Square, out: &mut Vec<MoveRecord>) {
    for (d_row, d_col) in KING_DIRECTIONS {
        if let Ok(stop) = offset_square(start, d_row, d_col) {
            if let Some(mv) = check_move_collision(game, start, stop) {
                out.push(mv);
            }
        }
    }
}
