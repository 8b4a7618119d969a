//! Errors used throughout the rules engine.
//!
//! The trusted core (move generation and `make_move`) has no failure path.
//! `ChessErrors` covers the checked surfaces layered on top of it: coordinate
//! parsing, position setup, and moves submitted through `try_make_move`.
//!
//! Usage guidelines:
//! - Parsing variants (`InvalidAlgebraicString`, `InvalidFileOrRank`) are
//!   recoverable and suitable for showing to end users.
//! - `IllegalMove` and `GameAlreadyOver` mean the caller submitted something
//!   that was not drawn from the current legal-move list.
//! - `InvalidSetup` means a hand-built position breaks a board invariant.

use thiserror::Error;

use crate::game_state::chess_types::{BoardLocation, GameOutcome, Move};

/// Unified error type for the rules engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessErrors {
    /// A square or move string could not be interpreted.
    #[error("invalid algebraic string: {0:?}")]
    InvalidAlgebraicString(String),

    /// Row/column pair outside `0..8`.
    #[error("invalid file or rank: {0:?}")]
    InvalidFileOrRank(BoardLocation),

    /// The move is not in the legal list for the side to move.
    #[error("illegal move: {0}")]
    IllegalMove(Move),

    /// No further moves are accepted once the game has ended.
    #[error("game is already over: {0}")]
    GameAlreadyOver(GameOutcome),

    /// A hand-built position violates a board invariant.
    #[error("invalid setup: {0}")]
    InvalidSetup(String),
}

pub type ChessResult<T> = Result<T, ChessErrors>;
