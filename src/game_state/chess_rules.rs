//! Canonical chess-rule constants.
//!
//! Static geometry used by setup, move generation and move application:
//! piece offsets, ray directions, per-color rank numbers and castling wings.

use crate::game_state::chess_types::{
    Color, PieceKind, CastlingRights, CASTLE_DARK_KINGSIDE, CASTLE_DARK_QUEENSIDE,
    CASTLE_LIGHT_KINGSIDE, CASTLE_LIGHT_QUEENSIDE,
};

/// Back-rank piece order from the a-file to the h-file.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_HOME_COL: i8 = 4;

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

pub const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub const ORTHOGONAL_RAYS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];
pub const DIAGONAL_RAYS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

#[inline]
pub const fn back_rank(color: Color) -> i8 {
    match color {
        Color::Light => 0,
        Color::Dark => 7,
    }
}

/// Row delta of a single pawn step.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => -1,
    }
}

#[inline]
pub const fn pawn_home_row(color: Color) -> i8 {
    match color {
        Color::Light => 1,
        Color::Dark => 6,
    }
}

/// Row a pawn must stand on to capture en passant.
#[inline]
pub const fn en_passant_row(color: Color) -> i8 {
    match color {
        Color::Light => 4,
        Color::Dark => 3,
    }
}

#[inline]
pub const fn promotion_row(color: Color) -> i8 {
    match color {
        Color::Light => 7,
        Color::Dark => 0,
    }
}

/// Castling wing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastlingSide {
    Kingside,
    Queenside,
}

pub const CASTLING_SIDES: [CastlingSide; 2] = [CastlingSide::Kingside, CastlingSide::Queenside];

impl CastlingSide {
    #[inline]
    pub const fn rook_home_col(self) -> i8 {
        match self {
            CastlingSide::Kingside => 7,
            CastlingSide::Queenside => 0,
        }
    }

    /// Column the king lands on.
    #[inline]
    pub const fn king_target_col(self) -> i8 {
        match self {
            CastlingSide::Kingside => 6,
            CastlingSide::Queenside => 2,
        }
    }

    /// Column the king crosses, which is also where the rook ends up.
    #[inline]
    pub const fn transit_col(self) -> i8 {
        match self {
            CastlingSide::Kingside => 5,
            CastlingSide::Queenside => 3,
        }
    }

    /// Columns strictly between king and rook.
    #[inline]
    pub const fn between_cols(self) -> &'static [i8] {
        match self {
            CastlingSide::Kingside => &[5, 6],
            CastlingSide::Queenside => &[1, 2, 3],
        }
    }

    /// Wing whose rook starts on `col`, if any.
    #[inline]
    pub const fn from_rook_col(col: i8) -> Option<Self> {
        match col {
            7 => Some(CastlingSide::Kingside),
            0 => Some(CastlingSide::Queenside),
            _ => None,
        }
    }

    /// Wing reached by a king landing on `col` from its home square.
    #[inline]
    pub const fn from_king_target_col(col: i8) -> Option<Self> {
        match col {
            6 => Some(CastlingSide::Kingside),
            2 => Some(CastlingSide::Queenside),
            _ => None,
        }
    }
}

#[inline]
pub const fn castling_flag(color: Color, side: CastlingSide) -> CastlingRights {
    match (color, side) {
        (Color::Light, CastlingSide::Kingside) => CASTLE_LIGHT_KINGSIDE,
        (Color::Light, CastlingSide::Queenside) => CASTLE_LIGHT_QUEENSIDE,
        (Color::Dark, CastlingSide::Kingside) => CASTLE_DARK_KINGSIDE,
        (Color::Dark, CastlingSide::Queenside) => CASTLE_DARK_QUEENSIDE,
    }
}
