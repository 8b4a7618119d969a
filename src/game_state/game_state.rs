//! Board state owned by the rules engine.
//!
//! `GameState` stores the square grid together with side to move, castling
//! rights, the en-passant file and the terminal outcome. Callers read it
//! through accessors and change it only through `make_move`, `try_make_move`
//! and `reset`.

use tracing::warn;

use crate::chess_errors::{ChessErrors, ChessResult};
use crate::game_state::chess_rules::{
    back_rank, castling_flag, pawn_home_row, promotion_row, BACK_RANK_LAYOUT, CASTLING_SIDES,
    KING_HOME_COL,
};
use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_apply::make_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{get_all_legal_moves, get_legal_moves};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) squares: [[Piece; 8]; 8],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant_file: Option<i8>,
    pub(crate) outcome: Option<GameOutcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    fn new_empty() -> Self {
        Self {
            squares: [[Piece::Empty; 8]; 8],
            side_to_move: Color::Light,
            castling_rights: 0,
            en_passant_file: None,
            outcome: None,
        }
    }

    /// Standard starting position with white to move.
    pub fn new_game() -> Self {
        let mut game = Self::new_empty();
        game.reset();
        game
    }

    /// Reinitialize in place to the standard starting position.
    pub fn reset(&mut self) {
        self.squares = [[Piece::Empty; 8]; 8];
        for color in [Color::Light, Color::Dark] {
            let rank = back_rank(color) as usize;
            let pawn_rank = pawn_home_row(color) as usize;
            for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
                self.squares[rank][col] = Piece::new(*kind, color);
                self.squares[pawn_rank][col] = Piece::new(PieceKind::Pawn, color);
            }
        }
        self.side_to_move = Color::Light;
        self.castling_rights = ALL_CASTLING_RIGHTS;
        self.en_passant_file = None;
        self.outcome = None;
    }

    /// Build an arbitrary position from explicit placements.
    ///
    /// Every placement must hold a piece, each color needs exactly one king,
    /// and the side not to move may not be in check. Requested castling
    /// rights are kept only where the king and the rook still stand on their
    /// home squares. No en-passant file is set and no
    /// terminal check is made; the outcome is only ever decided after a move.
    pub fn from_placement(
        placements: &[(BoardLocation, Piece)],
        side_to_move: Color,
        castling_rights: CastlingRights,
    ) -> ChessResult<Self> {
        let mut game = Self::new_empty();
        game.side_to_move = side_to_move;

        for &(location, piece) in placements {
            if !in_bounds(location) {
                return Err(ChessErrors::InvalidFileOrRank(location));
            }
            if piece.is_empty() {
                return Err(ChessErrors::InvalidSetup(format!(
                    "square {location:?} is listed without a piece"
                )));
            }
            if !game.piece_at(location).is_empty() {
                return Err(ChessErrors::InvalidSetup(format!(
                    "square {location:?} is listed twice"
                )));
            }
            if let Piece::Occupied {
                kind: PieceKind::Pawn,
                ..
            } = piece
            {
                let last_rows = [promotion_row(Color::Light), promotion_row(Color::Dark)];
                if last_rows.contains(&location.0) {
                    return Err(ChessErrors::InvalidSetup(format!(
                        "pawn on back rank at {location:?}"
                    )));
                }
            }
            game.set_piece(location, piece);
        }

        for color in [Color::Light, Color::Dark] {
            let kings = game
                .squares
                .iter()
                .flatten()
                .filter(|p| p.is(PieceKind::King, color))
                .count();
            if kings != 1 {
                return Err(ChessErrors::InvalidSetup(format!(
                    "{color} has {kings} kings, expected exactly one"
                )));
            }
        }

        // The side that just moved can never be left in check.
        let waiting = side_to_move.opposite();
        if is_king_in_check(&game, waiting) {
            return Err(ChessErrors::InvalidSetup(format!(
                "{waiting} is in check but {side_to_move} is to move"
            )));
        }

        for color in [Color::Light, Color::Dark] {
            let rank = back_rank(color);
            for side in CASTLING_SIDES {
                let flag = castling_flag(color, side);
                let king_home = game.piece_at((rank, KING_HOME_COL)).is(PieceKind::King, color);
                let rook_home = game
                    .piece_at((rank, side.rook_home_col()))
                    .is(PieceKind::Rook, color);
                if castling_rights & flag != 0 && king_home && rook_home {
                    game.castling_rights |= flag;
                }
            }
        }

        Ok(game)
    }

    /// Piece on `location`, or `Piece::Empty` when off the board.
    #[inline]
    pub fn piece_at(&self, location: BoardLocation) -> Piece {
        if in_bounds(location) {
            self.squares[location.0 as usize][location.1 as usize]
        } else {
            Piece::Empty
        }
    }

    #[inline]
    pub(crate) fn set_piece(&mut self, location: BoardLocation, piece: Piece) {
        if in_bounds(location) {
            self.squares[location.0 as usize][location.1 as usize] = piece;
        }
    }

    #[inline]
    pub fn squares(&self) -> &[[Piece; 8]; 8] {
        &self.squares
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    pub fn has_castling_right(&self, flag: CastlingRights) -> bool {
        self.castling_rights & flag != 0
    }

    #[inline]
    pub fn en_passant_file(&self) -> Option<i8> {
        self.en_passant_file
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    #[inline]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Terminal description, empty while the game is still running.
    pub fn result_text(&self) -> String {
        self.outcome.map(|x| x.to_string()).unwrap_or_default()
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(self, color)
    }

    /// Legal moves for the piece on `location`, whichever side owns it.
    pub fn legal_moves(&self, location: BoardLocation) -> Vec<Move> {
        get_legal_moves(self, location)
    }

    /// Legal moves for every piece of the side to move.
    pub fn all_legal_moves(&self) -> Vec<Move> {
        get_all_legal_moves(self)
    }

    /// Commit a move taken from a legal-move list. The move is not re-validated.
    pub fn make_move(&mut self, mv: Move) {
        make_move(self, mv);
    }

    /// Commit a move only if it belongs to the side to move's legal list.
    pub fn try_make_move(&mut self, mv: Move) -> ChessResult<()> {
        if let Some(outcome) = self.outcome {
            warn!(%mv, %outcome, "rejected move after game end");
            return Err(ChessErrors::GameAlreadyOver(outcome));
        }
        let owned_by_mover = self.piece_at(mv.from).color() == Some(self.side_to_move);
        if !owned_by_mover || !get_legal_moves(self, mv.from).contains(&mv) {
            warn!(%mv, side = %self.side_to_move, "rejected illegal move");
            return Err(ChessErrors::IllegalMove(mv));
        }
        make_move(self, mv);
        Ok(())
    }
}
