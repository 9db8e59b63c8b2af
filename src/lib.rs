//! Crate root module declarations for the Kingfall chess rules engine.
//!
//! Exposes the board model and game state machine, the per-piece movement
//! rules, the pseudo-legal move evaluator, and the utility helpers (placement
//! parsing, rendering, save files, random playouts) used by the text front-end,
//! tests and benchmarks.

pub mod chess_errors;

pub mod game_state {
    pub mod board;
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod moves {
    pub mod bishop_moves;
    pub mod king_moves;
    pub mod knight_moves;
    pub mod move_rules;
    pub mod pawn_moves;
    pub mod queen_moves;
    pub mod rook_moves;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod status;
}

pub mod text_ui {
    pub mod text_top;
}

pub mod utils {
    pub mod algebraic;
    pub mod fen_generator;
    pub mod fen_parser;
    pub mod random_playout;
    pub mod render_game_state;
    pub mod save_game;
}
