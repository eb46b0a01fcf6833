//! Pseudo-legal move enumeration for the side to move.
//!
//! The board is scanned row-major and each piece dispatches to its
//! generator through a single exhaustive `match`, so adding a piece kind
//! without a movement rule fails at compile time. The result is freshly
//! computed on every call, in a deterministic order: scan order first, then
//! each generator's direction/offset order.

use crate::game_state::chess_types::PieceKind;
use crate::game_state::game_state::GameState;
use crate::moves::bishop_moves::generate_bishop_moves;
use crate::moves::king_moves::generate_king_moves;
use crate::moves::knight_moves::generate_knight_moves;
use crate::moves::move_record::MoveRecord;
use crate::moves::pawn_moves::generate_pawn_moves;
use crate::moves::queen_moves::generate_queen_moves;
use crate::moves::rook_moves::generate_rook_moves;

/// All moves for the side to move that follow the piece movement rules and
/// do not land on a friendly piece. Whether the mover's own king is left
/// attacked is deliberately not considered here; that filter lives in
/// [`legal_move_generator`](crate::move_generation::legal_move_generator).
pub fn generate_pseudo_legal_moves(game: &GameState) -> Vec<MoveRecord> {
    let mut moves = Vec::new();
    for row in 0..8 {
        for col in 0..8 {
            let start = (row, col);
            let Some(piece) = game.board.piece_at(start) else {
                continue;
            };
            if piece.team != game.turn {
                continue;
            }
            match piece.kind {
                PieceKind::Pawn => generate_pawn_moves(game, start, &mut moves),
                PieceKind::Knight => generate_knight_moves(game, start, &mut moves),
                PieceKind::Bishop => generate_bishop_moves(game, start, &mut moves),
                PieceKind::Rook => generate_rook_moves(game, start, &mut moves),
                PieceKind::Queen => generate_queen_moves(game, start, &mut moves),
                PieceKind::King => generate_king_moves(game, start, &mut moves),
            }
        }
    }
    moves
}
