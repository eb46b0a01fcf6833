//! Queen moves: the union of rook and bishop slides.

use crate::game_state::chess_types::Square;
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::move_record::MoveRecord;
use crate::moves::rook_moves::ROOK_DIRECTIONS;
use crate::moves::shared::follow_move_vector;

/// Appends the pseudo-legal queen moves from `start` for the side to move.
pub fn generate_queen_moves(game: &GameState, start: Square, out: &mut Vec<MoveRecord>) {
    for (d_row, d_col) in ROOK_DIRECTIONS.into_iter().chain(BISHOP_DIRECTIONS) {
        follow_move_vector(game, start, d_row, d_col, out);
    }
}
