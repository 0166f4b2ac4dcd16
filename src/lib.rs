//! Crate root module declarations for the Slate Chess rules engine.
//!
//! Exposes the immutable board model, per-piece move generation, move
//! application and legality checks, plus the text and file formats built on
//! top of them, so the binary, tests and benchmarks share stable paths.

pub mod chess_errors;
pub mod config;

pub mod game_state {
    pub mod board;
    pub mod board_builder;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod move_transition;
    pub mod player;
}

pub mod pieces {
    pub mod piece;
    pub mod piece_cache;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
    pub mod sliding_moves;
}

pub mod move_generation {
    pub mod castle_moves;
    pub mod chess_move;
    pub mod move_apply;
    pub mod move_lookup;
    pub mod perft;
}

pub mod evaluation {
    pub mod board_evaluator;
}

pub mod utils {
    pub mod algebraic;
    pub mod board_utils;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod long_algebraic;
    pub mod move_notation;
    pub mod position_file;
    pub mod random_playout;
    pub mod render_board;
}
