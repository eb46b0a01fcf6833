//! Rook moves: orthogonal slides.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::move_record::MoveRecord;
use crate::moves::shared::follow_move_vector;

/// The four orthogonal directions as `(row, column)` deltas, in enumeration
/// order.
pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Appends the pseudo-legal rook moves from `start` for the side to move.
pub fn generate_rook_moves(game: &GameState, start: Square, out: &mut Vec<MoveRecord>) {
    for (d_row, d_col) in ROOK_DIRECTIONS {
        follow_move_vector(game, start, d_row, d_col, out);
    }
}
