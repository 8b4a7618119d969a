//! Crate root module declarations for the chess rules engine.
//!
//! The engine keeps an 8x8 board, enumerates legal moves, applies moves with
//! castling, en passant and auto-queen promotion, and reports checkmate and
//! stalemate. Utility modules provide coordinate notation, text rendering and
//! seeded random playouts for front ends and tests.

pub mod chess_errors;

pub mod game_state {
    pub mod chess_rules;
    pub mod chess_types;
    pub mod game_state;
}

pub mod move_generation {
    pub mod legal_move_apply;
    pub mod legal_move_checks;
    pub mod legal_move_generator;
    pub mod legal_move_shared;
    pub mod legal_moves_bishop;
    pub mod legal_moves_king;
    pub mod legal_moves_knight;
    pub mod legal_moves_pawn;
    pub mod legal_moves_queen;
    pub mod legal_moves_rook;
    pub mod perft;
}

pub mod utils {
    pub mod algebraic;
    pub mod random_game;
    pub mod render_game_state;
}

pub use chess_errors::{ChessErrors, ChessResult};
pub use game_state::chess_types::{
    BoardLocation, CastlingRights, Color, GameOutcome, Move, Piece, PieceKind,
};
pub use game_state::game_state::GameState;
