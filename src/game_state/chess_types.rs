//! Value types shared by the rules engine.
//!
//! The board is a dense 8x8 grid indexed as `[row][col]`. Row 0 is the light
//! back rank, row 7 the dark back rank, and column 0 the queenside (a) file.

use std::fmt;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    /// Player-facing name used in result messages.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Light => "White",
            Color::Dark => "Black",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Piece kind, independent of color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

/// Contents of a single square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Piece {
    #[default]
    Empty,
    Occupied { kind: PieceKind, color: Color },
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Piece::Occupied { kind, color }
    }

    #[inline]
    pub const fn color(self) -> Option<Color> {
        match self {
            Piece::Empty => None,
            Piece::Occupied { color, .. } => Some(color),
        }
    }

    #[inline]
    pub const fn kind(self) -> Option<PieceKind> {
        match self {
            Piece::Empty => None,
            Piece::Occupied { kind, .. } => Some(kind),
        }
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        matches!(self, Piece::Empty)
    }

    /// True when the square holds exactly `kind` of `color`.
    #[inline]
    pub fn is(self, kind: PieceKind, color: Color) -> bool {
        self == Piece::new(kind, color)
    }
}

/// Classify a square's contents by color; `None` for an empty square.
#[inline]
pub const fn piece_color(piece: Piece) -> Option<Color> {
    piece.color()
}

/// Board coordinate as `(row, col)`.
pub type BoardLocation = (i8, i8);

#[inline]
pub const fn in_bounds(location: BoardLocation) -> bool {
    location.0 >= 0 && location.0 < 8 && location.1 >= 0 && location.1 < 8
}

/// Shift a location, returning `None` if the result leaves the board.
#[inline]
pub const fn offset_location(
    location: BoardLocation,
    d_row: i8,
    d_col: i8,
) -> Option<BoardLocation> {
    let shifted = (location.0 + d_row, location.1 + d_col);
    if in_bounds(shifted) {
        Some(shifted)
    } else {
        None
    }
}

/// A source/destination pair. The mover is whatever stands on `from`, and
/// castling is expressed as a two-column king move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: BoardLocation,
    pub to: BoardLocation,
}

impl Move {
    #[inline]
    pub const fn new(from: BoardLocation, to: BoardLocation) -> Self {
        Self { from, to }
    }
}

/// Compact castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const ALL_CASTLING_RIGHTS: CastlingRights = CASTLE_LIGHT_KINGSIDE
    | CASTLE_LIGHT_QUEENSIDE
    | CASTLE_DARK_KINGSIDE
    | CASTLE_DARK_QUEENSIDE;

/// Terminal state of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Checkmate { winner: Color },
    Stalemate,
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::Checkmate { winner } => write!(f, "{winner} wins by checkmate"),
            GameOutcome::Stalemate => f.write_str("Stalemate — draw"),
        }
    }
}
