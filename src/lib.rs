//! Core model of a two-player chess game.
//!
//! This crate owns the authoritative game state (board, side to move, move
//! log), the move records that describe single plies, pseudo-legal move
//! enumeration per piece kind, and a king-safety filter layered on top of
//! it. Rendering, input handling and any driving loop are external
//! collaborators and live outside this crate.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_record;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod shared;
}

pub mod move_generation {
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod move_generator;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod render_game_state;
}
