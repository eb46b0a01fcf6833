//! Move-path enumeration for correctness testing.
//!
//! Walks the legal move tree to a fixed depth with make/undo, counting leaf
//! nodes plus a couple of move properties. The counts are compared against
//! the published reference values, which this move shape matches down to
//! depth 4 from the starting position: castling, en passant and promotion
//! do not occur there.

use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::generate_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    /// Leaf nodes reached.
    pub nodes: usize,
    /// Leaf moves that captured a piece.
    pub captures: usize,
    /// Leaf moves that left the opponent in check.
    pub checks: usize,
}

/// Counts the move paths of exactly `depth` plies from `game`.
pub fn perft(game: &GameState, depth: u8) -> PerftCounts {
    let mut counts = PerftCounts::default();
    if depth == 0 {
        counts.nodes = 1;
        return counts;
    }
    let mut scratch = game.clone();
    perft_recurse(&mut scratch, depth, &mut counts);
    counts
}

fn perft_recurse(game: &mut GameState, depth: u8, counts: &mut PerftCounts) {
    for mv in generate_legal_moves(game) {
        game.make_move(mv);
        if depth == 1 {
            counts.nodes += 1;
            if mv.is_capture() {
                counts.captures += 1;
            }
            if is_king_in_check(&game.board, game.turn) {
                counts.checks += 1;
            }
        } else {
            perft_recurse(game, depth - 1, counts);
        }
        game.undo_move().expect("a move was just made");
    }
}

// Reference values: https://www.chessprogramming.org/Perft_Results
#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind};

    #[test]
    fn perft_depth_zero_is_one_node() {
        let game = GameState::new_game();
        assert_eq!(perft(&game, 0).nodes, 1);
    }

    #[test]
    fn perft_from_the_starting_position() {
        let game = GameState::new_game();

        let expected_nodes = [20, 400, 8902, 197_281];
        let expected_captures = [0, 0, 34, 1576];
        let expected_checks = [0, 0, 12];

        for depth in 1..=expected_nodes.len() as u8 {
            let counts = perft(&game, depth);
            assert_eq!(counts.nodes, expected_nodes[depth as usize - 1], "depth {depth}");
            assert_eq!(
                counts.captures,
                expected_captures[depth as usize - 1],
                "depth {depth}"
            );
            if let Some(&checks) = expected_checks.get(depth as usize - 1) {
                assert_eq!(counts.checks, checks, "depth {depth}");
            }
        }
    }

    #[test]
    fn perft_leaves_the_game_untouched() {
        let game = GameState::new_game();
        let baseline = game.clone();
        perft(&game, 3);
        assert_eq!(game, baseline);
    }

    #[test]
    fn perft_on_a_bare_kings_position() {
        let mut board = Board::empty();
        board
            .place(Piece::new(PieceKind::King, Color::Light), (7, 4))
            .unwrap();
        board
            .place(Piece::new(PieceKind::King, Color::Dark), (0, 4))
            .unwrap();
        let game = GameState::from_board(board, Color::Light);
        assert_eq!(perft(&game, 1).nodes, 5);
    }
}
