//! King-safety filter layered over pseudo-legal enumeration.
//!
//! Each candidate is made on a scratch copy of the game, the mover's king
//! is probed for attack, and the candidate is undone again. The filter
//! stays outside the per-piece generators on purpose: pseudo-legal
//! enumeration remains a complete, separately testable layer.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::move_generator::generate_pseudo_legal_moves;
use crate::moves::move_record::MoveRecord;

/// All moves for the side to move that do not leave their own king
/// attacked. An empty result signals mate or stalemate; telling the two
/// apart is the caller's business (check the king before moving).
pub fn generate_legal_moves(game: &GameState) -> Vec<MoveRecord> {
    let mover = game.turn;
    let mut scratch = game.clone();
    let mut legal = Vec::new();
    for mv in generate_pseudo_legal_moves(game) {
        scratch.make_move(mv);
        if !is_king_in_check(&scratch.board, mover) {
            legal.push(mv);
        }
        scratch.undo_move().expect("a move was just made");
    }
    legal
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use rand::prelude::IndexedRandom;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn put(board: &mut Board, kind: PieceKind, team: Color, square: Square) {
        board.place(Piece::new(kind, team), square).unwrap();
    }

    #[test]
    fn starting_position_has_twenty_legal_moves() {
        let game = GameState::new_game();
        assert_eq!(generate_legal_moves(&game).len(), 20);
    }

    #[test]
    fn pinned_rook_cannot_leave_the_file() {
        let mut board = Board::empty();
        put(&mut board, PieceKind::King, Color::Light, (7, 4));
        put(&mut board, PieceKind::Rook, Color::Light, (6, 4));
        put(&mut board, PieceKind::Rook, Color::Dark, (0, 4));
        put(&mut board, PieceKind::King, Color::Dark, (0, 0));
        let game = GameState::from_board(board, Color::Light);

        let legal = generate_legal_moves(&game);
        let rook_moves: Vec<_> = legal.iter().filter(|m| m.start == (6, 4)).collect();
        assert_eq!(rook_moves.len(), 6);
        assert!(rook_moves.iter().all(|m| m.stop.1 == 4));
        assert!(rook_moves
            .iter()
            .any(|m| m.stop == (0, 4) && m.is_capture()));
    }

    #[test]
    fn king_cannot_step_into_an_attacked_square() {
        let mut board = Board::empty();
        put(&mut board, PieceKind::King, Color::Light, (7, 4));
        put(&mut board, PieceKind::Rook, Color::Dark, (6, 0));
        put(&mut board, PieceKind::King, Color::Dark, (0, 0));
        let game = GameState::from_board(board, Color::Light);

        let legal = generate_legal_moves(&game);
        // Row 6 is swept by the rook; only the two row-7 steps remain.
        let mut stops: Vec<_> = legal.iter().map(|m| m.stop).collect();
        stops.sort();
        assert_eq!(stops, vec![(7, 3), (7, 5)]);
    }

    #[test]
    fn king_cannot_retreat_along_the_checking_ray() {
        let mut board = Board::empty();
        put(&mut board, PieceKind::King, Color::Light, (4, 4));
        put(&mut board, PieceKind::Rook, Color::Dark, (4, 0));
        put(&mut board, PieceKind::King, Color::Dark, (0, 0));
        let game = GameState::from_board(board, Color::Light);

        let legal = generate_legal_moves(&game);
        // Stepping to (4, 5) keeps the king on the rook's line.
        assert!(!legal.iter().any(|m| m.stop == (4, 5)));
        assert!(legal.iter().any(|m| m.stop == (3, 4)));
    }

    #[test]
    fn back_rank_mate_has_no_legal_moves() {
        let mut board = Board::empty();
        put(&mut board, PieceKind::King, Color::Light, (7, 4));
        put(&mut board, PieceKind::Pawn, Color::Light, (6, 3));
        put(&mut board, PieceKind::Pawn, Color::Light, (6, 4));
        put(&mut board, PieceKind::Pawn, Color::Light, (6, 5));
        put(&mut board, PieceKind::Rook, Color::Dark, (7, 0));
        put(&mut board, PieceKind::King, Color::Dark, (0, 4));
        let game = GameState::from_board(board, Color::Light);

        assert!(is_king_in_check(&game.board, Color::Light));
        assert!(generate_legal_moves(&game).is_empty());
    }

    #[test]
    fn random_playout_round_trips_through_undo() {
        let mut rng = StdRng::seed_from_u64(0x5EED);
        let mut game = GameState::new_game();
        let baseline = game.clone();

        let mut plies = 0;
        for _ in 0..60 {
            let moves = generate_legal_moves(&game);
            let Some(&mv) = moves.choose(&mut rng) else {
                break;
            };

            let before = game.clone();
            game.make_move(mv);

            let mut probe = game.clone();
            probe.undo_move().unwrap();
            assert_eq!(probe, before);

            plies += 1;
        }

        for _ in 0..plies {
            game.undo_move().unwrap();
        }
        assert_eq!(game, baseline);
    }
}
