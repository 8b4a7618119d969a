//! Full legal move generation pipeline.
//!
//! Dispatches pseudo-legal generation per piece, then applies each candidate
//! to a scratch copy of the whole state and drops moves that leave the mover's
//! own king in check. The copy includes en-passant pawn removal and castling
//! rook relocation, which keeps pins and discovered checks exact.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move_raw;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_moves_bishop::generate_bishop_moves;
use crate::move_generation::legal_moves_king::generate_king_moves;
use crate::move_generation::legal_moves_knight::generate_knight_moves;
use crate::move_generation::legal_moves_pawn::generate_pawn_moves;
use crate::move_generation::legal_moves_queen::generate_queen_moves;
use crate::move_generation::legal_moves_rook::generate_rook_moves;

/// Moves obeying the movement rules of the piece on `from`, without regard
/// for the mover's own king. Empty or off-board squares yield nothing.
pub fn generate_pseudo_legal_moves(game_state: &GameState, from: BoardLocation) -> Vec<Move> {
    let mut moves = Vec::with_capacity(32);
    let Piece::Occupied { kind, color } = game_state.piece_at(from) else {
        return moves;
    };

    match kind {
        PieceKind::Pawn => generate_pawn_moves(game_state, from, color, &mut moves),
        PieceKind::Knight => generate_knight_moves(game_state, from, color, &mut moves),
        PieceKind::Bishop => generate_bishop_moves(game_state, from, color, &mut moves),
        PieceKind::Rook => generate_rook_moves(game_state, from, color, &mut moves),
        PieceKind::Queen => generate_queen_moves(game_state, from, color, &mut moves),
        PieceKind::King => generate_king_moves(game_state, from, color, &mut moves),
    }
    moves
}

/// Legal moves for the piece on `from`.
pub fn get_legal_moves(game_state: &GameState, from: BoardLocation) -> Vec<Move> {
    let Some(color) = game_state.piece_at(from).color() else {
        return Vec::new();
    };

    generate_pseudo_legal_moves(game_state, from)
        .into_iter()
        .filter(|&mv| {
            let mut scratch = game_state.clone();
            apply_move_raw(&mut scratch, mv);
            !is_king_in_check(&scratch, color)
        })
        .collect()
}

/// Legal moves for every piece of the side to move. Empty means the game is over.
pub fn get_all_legal_moves(game_state: &GameState) -> Vec<Move> {
    let mut all = Vec::with_capacity(64);
    for row in 0..8i8 {
        for col in 0..8i8 {
            if game_state.piece_at((row, col)).color() == Some(game_state.side_to_move) {
                all.extend(get_legal_moves(game_state, (row, col)));
            }
        }
    }
    all
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::algebraic::parse_move;

    fn play(game: &mut GameState, moves: &[&str]) {
        for text in moves {
            let mv = parse_move(text).expect("test move should parse");
            game.try_make_move(mv).expect("test move should be legal");
        }
    }

    fn mv(text: &str) -> Move {
        parse_move(text).expect("test move should parse")
    }

    #[test]
    fn twenty_moves_from_the_start_for_either_side() {
        let game = GameState::new_game();
        assert_eq!(get_all_legal_moves(&game).len(), 20);

        let mut mirrored = GameState::new_game();
        mirrored.side_to_move = Color::Dark;
        assert_eq!(get_all_legal_moves(&mirrored).len(), 20);
    }

    #[test]
    fn empty_square_has_no_moves() {
        let game = GameState::new_game();
        assert!(generate_pseudo_legal_moves(&game, (4, 4)).is_empty());
        assert!(get_legal_moves(&game, (4, 4)).is_empty());
    }

    #[test]
    fn pinned_piece_may_only_move_along_the_pin() {
        let game = GameState::from_placement(
            &[
                ((0, 4), Piece::new(PieceKind::King, Color::Light)),
                ((2, 4), Piece::new(PieceKind::Rook, Color::Light)),
                ((3, 3), Piece::new(PieceKind::Knight, Color::Light)),
                ((1, 3), Piece::new(PieceKind::Bishop, Color::Light)),
                ((7, 4), Piece::new(PieceKind::Rook, Color::Dark)),
                ((4, 0), Piece::new(PieceKind::Bishop, Color::Dark)),
                ((7, 7), Piece::new(PieceKind::King, Color::Dark)),
            ],
            Color::Light,
            0,
        )
        .expect("setup should be valid");

        let rook_moves = get_legal_moves(&game, (2, 4));
        assert!(!rook_moves.is_empty());
        assert!(rook_moves.iter().all(|m| m.to.1 == 4));
        assert!(rook_moves.contains(&Move::new((2, 4), (7, 4))));

        let bishop_moves = get_legal_moves(&game, (1, 3));
        assert!(bishop_moves
            .iter()
            .all(|m| [(2, 2), (3, 1), (4, 0)].contains(&m.to)));
        assert_eq!(bishop_moves.len(), 3);

        // Knight is not pinned.
        assert!(!get_legal_moves(&game, (3, 3)).is_empty());
    }

    #[test]
    fn reversed_fools_mate_leaves_black_without_moves() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "f7f6", "d2d4", "g7g5", "d1h5"]);
        assert!(game.is_in_check(Color::Dark));
        assert!(get_all_legal_moves(&game).is_empty());
        assert_eq!(
            game.outcome(),
            Some(GameOutcome::Checkmate {
                winner: Color::Light
            })
        );
        assert_eq!(game.result_text(), "White wins by checkmate");
    }

    #[test]
    fn en_passant_is_offered_only_on_the_next_ply() {
        let mut game = GameState::new_game();
        play(&mut game, &["e2e4", "a7a6", "e4e5", "d7d5"]);
        assert_eq!(game.en_passant_file(), Some(3));
        let capture = mv("e5d6");
        assert_eq!(
            get_legal_moves(&game, (4, 4))
                .iter()
                .filter(|&&m| m == capture)
                .count(),
            1
        );

        play(&mut game, &["h2h3", "h7h6"]);
        assert_eq!(game.en_passant_file(), None);
        assert!(!get_legal_moves(&game, (4, 4)).contains(&capture));
    }

    #[test]
    fn en_passant_for_black_after_a_white_double_step() {
        let mut game = GameState::new_game();
        play(&mut game, &["a2a3", "d7d5", "a3a4", "d5d4", "e2e4"]);
        let capture = mv("d4e3");
        assert!(get_legal_moves(&game, (3, 3)).contains(&capture));

        let mut taken = game.clone();
        play(&mut taken, &["d4e3"]);
        assert_eq!(taken.piece_at((3, 4)), Piece::Empty);
        assert_eq!(taken.piece_at((2, 4)), Piece::new(PieceKind::Pawn, Color::Dark));

        play(&mut game, &["h7h6", "h2h3"]);
        assert_eq!(game.en_passant_file(), None);
        assert!(!get_legal_moves(&game, (3, 3)).contains(&capture));
        assert!(game.try_make_move(capture).is_err());
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_illegal() {
        let mut game = GameState::from_placement(
            &[
                ((4, 0), Piece::new(PieceKind::King, Color::Light)),
                ((4, 1), Piece::new(PieceKind::Pawn, Color::Light)),
                ((6, 2), Piece::new(PieceKind::Pawn, Color::Dark)),
                ((4, 7), Piece::new(PieceKind::Rook, Color::Dark)),
                ((7, 7), Piece::new(PieceKind::King, Color::Dark)),
            ],
            Color::Dark,
            0,
        )
        .expect("setup should be valid");
        game.make_move(mv("c7c5"));
        assert_eq!(game.en_passant_file(), Some(2));
        assert!(!get_legal_moves(&game, (4, 1)).contains(&mv("b5c6")));
        assert!(get_legal_moves(&game, (4, 1)).contains(&mv("b5b6")));
    }
}
