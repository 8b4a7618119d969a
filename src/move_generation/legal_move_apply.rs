//! Move application.
//!
//! `apply_move_raw` touches the grid only and is what the legality filter runs
//! on scratch copies. `make_move` layers the bookkeeping on top: en-passant
//! file, castling rights, side to move and terminal detection.

use tracing::{debug, info};

use crate::game_state::chess_rules::{
    back_rank, castling_flag, promotion_row, CastlingSide, CASTLING_SIDES,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::get_all_legal_moves;

/// Relocate the mover on the grid, including the side effects of en passant,
/// castling and auto-queen promotion.
pub fn apply_move_raw(game_state: &mut GameState, mv: Move) {
    if !in_bounds(mv.from) || !in_bounds(mv.to) {
        return;
    }
    let Piece::Occupied { kind, color } = game_state.piece_at(mv.from) else {
        return;
    };

    // A pawn stepping diagonally onto an empty square captures en passant.
    if kind == PieceKind::Pawn && mv.from.1 != mv.to.1 && game_state.piece_at(mv.to).is_empty() {
        game_state.set_piece((mv.from.0, mv.to.1), Piece::Empty);
    }

    if kind == PieceKind::King && (mv.to.1 - mv.from.1).abs() == 2 {
        if let Some(side) = CastlingSide::from_king_target_col(mv.to.1) {
            let row = mv.from.0;
            let rook_from = (row, side.rook_home_col());
            let rook = game_state.piece_at(rook_from);
            game_state.set_piece((row, side.transit_col()), rook);
            game_state.set_piece(rook_from, Piece::Empty);
        }
    }

    let landed = if kind == PieceKind::Pawn && mv.to.0 == promotion_row(color) {
        Piece::new(PieceKind::Queen, color)
    } else {
        Piece::new(kind, color)
    };
    game_state.set_piece(mv.to, landed);
    game_state.set_piece(mv.from, Piece::Empty);
}

/// Commit a move drawn from the legal-move list and advance the game.
pub fn make_move(game_state: &mut GameState, mv: Move) {
    let moved = game_state.piece_at(mv.from);
    let mover = game_state.side_to_move;
    apply_move_raw(game_state, mv);

    update_en_passant_file(game_state, moved, mv);
    update_castling_rights(game_state, moved, mv);
    game_state.side_to_move = mover.opposite();
    debug!(%mv, side = %mover, "applied move");

    update_game_status(game_state);
}

fn update_en_passant_file(game_state: &mut GameState, moved: Piece, mv: Move) {
    game_state.en_passant_file = None;
    if moved.kind() == Some(PieceKind::Pawn) && (mv.to.0 - mv.from.0).abs() == 2 {
        game_state.en_passant_file = Some(mv.from.1);
    }
}

/// Rights are tied to the home squares: a king move drops both of its own
/// rights, and any move leaving or landing on a home corner drops that corner.
fn update_castling_rights(game_state: &mut GameState, moved: Piece, mv: Move) {
    let Piece::Occupied { kind, color } = moved else {
        return;
    };

    if kind == PieceKind::King {
        for side in CASTLING_SIDES {
            game_state.castling_rights &= !castling_flag(color, side);
        }
    }

    if kind == PieceKind::Rook && mv.from.0 == back_rank(color) {
        if let Some(side) = CastlingSide::from_rook_col(mv.from.1) {
            game_state.castling_rights &= !castling_flag(color, side);
        }
    }

    for owner in [Color::Light, Color::Dark] {
        if mv.to.0 != back_rank(owner) {
            continue;
        }
        if let Some(side) = CastlingSide::from_rook_col(mv.to.1) {
            game_state.castling_rights &= !castling_flag(owner, side);
        }
    }
}

fn update_game_status(game_state: &mut GameState) {
    if !get_all_legal_moves(game_state).is_empty() {
        return;
    }

    let to_move = game_state.side_to_move;
    let outcome = if is_king_in_check(game_state, to_move) {
        GameOutcome::Checkmate {
            winner: to_move.opposite(),
        }
    } else {
        GameOutcome::Stalemate
    };
    info!(%outcome, "game over");
    game_state.outcome = Some(outcome);
}
