//! Knight moves: the eight fixed L-shaped offsets.

use crate::game_state::chess_types::{offset_square, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_record::MoveRecord;
use crate::moves::shared::check_move_collision;

/// The eight knight offsets as `(row, column)` deltas, in enumeration order.
pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Appends the pseudo-legal knight moves from `start` for the side to move.
pub fn generate_knight_moves(game: &GameState, start: Square, out: &mut Vec<MoveRecord>) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Ok(stop) = offset_square(start, d_row, d_col) {
            if let Some(mv) = check_move_collision(game, start, stop) {
                out.push(mv);
            }
        }
    }
}
