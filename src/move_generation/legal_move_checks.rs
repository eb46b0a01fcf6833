//! Attack and check detection over the mailbox board.
//!
//! Works backwards from the target square: short-range patterns (pawn,
//! knight, king) are probed by offset, sliders by walking each ray to the
//! first piece. Nothing here mutates the board.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{offset_square, Color, Piece, PieceKind, Square};
use crate::moves::bishop_moves::BISHOP_DIRECTIONS;
use crate::moves::king_moves::KING_DIRECTIONS;
use crate::moves::knight_moves::KNIGHT_OFFSETS;
use crate::moves::rook_moves::ROOK_DIRECTIONS;

/// Where `color`'s king stands, or `None` on a board without one (bare
/// test setups).
pub fn king_square(board: &Board, color: Color) -> Option<Square> {
    for row in 0..8 {
        for col in 0..8 {
            if board.piece_at((row, col)) == Some(Piece::new(PieceKind::King, color)) {
                return Some((row, col));
            }
        }
    }
    None
}

/// Whether any piece of `attacker` attacks `square`.
pub fn is_square_attacked(board: &Board, square: Square, attacker: Color) -> bool {
    // Pawns attack diagonally forward, so look one row back along the
    // attacker's direction of travel.
    for d_col in [-1, 1] {
        if let Ok(from) = offset_square(square, -attacker.pawn_direction(), d_col) {
            if board.piece_at(from) == Some(Piece::new(PieceKind::Pawn, attacker)) {
                return true;
            }
        }
    }

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Ok(from) = offset_square(square, d_row, d_col) {
            if board.piece_at(from) == Some(Piece::new(PieceKind::Knight, attacker)) {
                return true;
            }
        }
    }

    for (d_row, d_col) in KING_DIRECTIONS {
        if let Ok(from) = offset_square(square, d_row, d_col) {
            if board.piece_at(from) == Some(Piece::new(PieceKind::King, attacker)) {
                return true;
            }
        }
    }

    for (d_row, d_col) in ROOK_DIRECTIONS {
        if let Some(piece) = first_piece_along(board, square, d_row, d_col) {
            if piece.team == attacker
                && matches!(piece.kind, PieceKind::Rook | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    for (d_row, d_col) in BISHOP_DIRECTIONS {
        if let Some(piece) = first_piece_along(board, square, d_row, d_col) {
            if piece.team == attacker
                && matches!(piece.kind, PieceKind::Bishop | PieceKind::Queen)
            {
                return true;
            }
        }
    }

    false
}

/// Whether `color`'s king is currently attacked. A board without that king
/// reports no check.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    match king_square(board, color) {
        Some(square) => is_square_attacked(board, square, color.opposite()),
        None => false,
    }
}

fn first_piece_along(board: &Board, from: Square, d_row: i8, d_col: i8) -> Option<Piece> {
    let mut cursor = from;
    while let Ok(next) = offset_square(cursor, d_row, d_col) {
        if let Some(piece) = board.piece_at(next) {
            return Some(piece);
        }
        cursor = next;
    }
    None
}
