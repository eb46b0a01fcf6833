//! Helpers shared by the per-piece generators.

use crate::game_state::chess_types::{offset_square, Square};
use crate::game_state::game_state::GameState;
use crate::moves::move_record::MoveRecord;

/// Classifies a single-step destination for the side to move: a record for
/// an empty square or an enemy piece, `None` when a teammate is in the way.
pub fn check_move_collision(game: &GameState, start: Square, stop: Square) -> Option<MoveRecord> {
    if let Some(target) = game.board.piece_at(stop) {
        if target.team == game.turn {
            // Collide with a teammate, not a move.
            return None;
        }
    }
    Some(MoveRecord {
        start,
        stop,
        piece_moved: game.board.piece_at(start),
        piece_captured: game.board.piece_at(stop),
    })
}

/// Slides from `start` along `(d_row, d_col)`, appending every empty square
/// passed. An enemy piece ends the ray with one capturing move; a teammate
/// ends it with nothing.
pub fn follow_move_vector(
    game: &GameState,
    start: Square,
    d_row: i8,
    d_col: i8,
    out: &mut Vec<MoveRecord>,
) {
    let piece_moved = game.board.piece_at(start);
    let mut cursor = start;
    while let Ok(stop) = offset_square(cursor, d_row, d_col) {
        match game.board.piece_at(stop) {
            None => {
                out.push(MoveRecord {
                    start,
                    stop,
                    piece_moved,
                    piece_captured: None,
                });
                cursor = stop;
            }
            Some(target) => {
                if target.team != game.turn {
                    out.push(MoveRecord {
                        start,
                        stop,
                        piece_moved,
                        piece_captured: Some(target),
                    });
                }
                break;
            }
        }
    }
}
