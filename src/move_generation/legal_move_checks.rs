//! Attack and check detection.
//!
//! Attack detection answers "could a piece of this color capture here next
//! move", ignoring whose turn it is and ignoring pins on the attacker.

use crate::game_state::chess_rules::{
    pawn_direction, DIAGONAL_RAYS, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL_RAYS,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::first_piece_along_ray;

/// Locate a king by linear scan of the grid.
pub fn king_location(game_state: &GameState, color: Color) -> Option<BoardLocation> {
    for row in 0..8i8 {
        for col in 0..8i8 {
            if game_state.piece_at((row, col)).is(PieceKind::King, color) {
                return Some((row, col));
            }
        }
    }
    None
}

#[inline]
pub fn is_king_in_check(game_state: &GameState, color: Color) -> bool {
    let Some(king) = king_location(game_state, color) else {
        return false;
    };
    is_square_attacked(game_state, king, color.opposite())
}

pub fn is_square_attacked(
    game_state: &GameState,
    location: BoardLocation,
    attacker_color: Color,
) -> bool {
    let attacker = |kind: PieceKind| Piece::new(kind, attacker_color);
    let holds = |target: Option<BoardLocation>, kind: PieceKind| {
        target.is_some_and(|x| game_state.piece_at(x) == attacker(kind))
    };

    for (d_row, d_col) in KNIGHT_OFFSETS {
        if holds(offset_location(location, d_row, d_col), PieceKind::Knight) {
            return true;
        }
    }

    // Attacking pawns sit one step behind the target from their own side.
    let pawn_row = -pawn_direction(attacker_color);
    for d_col in [-1, 1] {
        if holds(offset_location(location, pawn_row, d_col), PieceKind::Pawn) {
            return true;
        }
    }

    for (d_row, d_col) in KING_OFFSETS {
        if holds(offset_location(location, d_row, d_col), PieceKind::King) {
            return true;
        }
    }

    for ray in ORTHOGONAL_RAYS {
        let blocker = first_piece_along_ray(game_state, location, ray);
        if blocker == Some(attacker(PieceKind::Rook)) || blocker == Some(attacker(PieceKind::Queen))
        {
            return true;
        }
    }

    for ray in DIAGONAL_RAYS {
        let blocker = first_piece_along_ray(game_state, location, ray);
        if blocker == Some(attacker(PieceKind::Bishop))
            || blocker == Some(attacker(PieceKind::Queen))
        {
            return true;
        }
    }

    false
}
