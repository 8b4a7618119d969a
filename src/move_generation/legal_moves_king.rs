use crate::game_state::chess_rules::{
    back_rank, castling_flag, CASTLING_SIDES, KING_HOME_COL, KING_OFFSETS,
};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::{is_king_in_check, is_square_attacked};
use crate::move_generation::legal_move_shared::push_step_move;

/// Pseudo-legal king steps plus castling.
///
/// Castling is offered per wing when the right is held, the rook still stands
/// on its home square, every square between king and rook is empty, the king
/// is not in check, and neither the transit nor the destination square is
/// attacked. It is encoded as a two-column king move.
pub fn generate_king_moves(
    game_state: &GameState,
    from: BoardLocation,
    color: Color,
    moves: &mut Vec<Move>,
) {
    for (d_row, d_col) in KING_OFFSETS {
        push_step_move(
            game_state,
            from,
            offset_location(from, d_row, d_col),
            color,
            moves,
        );
    }

    let rank = back_rank(color);
    if from != (rank, KING_HOME_COL) || is_king_in_check(game_state, color) {
        return;
    }

    let enemy = color.opposite();
    for side in CASTLING_SIDES {
        if !game_state.has_castling_right(castling_flag(color, side)) {
            continue;
        }
        let path_clear = side
            .between_cols()
            .iter()
            .all(|&col| game_state.piece_at((rank, col)).is_empty());
        let rook_home = game_state
            .piece_at((rank, side.rook_home_col()))
            .is(PieceKind::Rook, color);
        if !path_clear || !rook_home {
            continue;
        }
        let transit = (rank, side.transit_col());
        let target = (rank, side.king_target_col());
        if is_square_attacked(game_state, transit, enemy)
            || is_square_attacked(game_state, target, enemy)
        {
            continue;
        }
        moves.push(Move::new(from, target));
    }
}

#[cfg(test)]
mod tests {
    use super::generate_king_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};

    fn castling_setup(extra: &[(BoardLocation, Piece)]) -> GameState {
        let mut placements = vec![
            ((0, 4), Piece::new(PieceKind::King, Color::Light)),
            ((0, 0), Piece::new(PieceKind::Rook, Color::Light)),
            ((0, 7), Piece::new(PieceKind::Rook, Color::Light)),
            ((7, 4), Piece::new(PieceKind::King, Color::Dark)),
        ];
        placements.extend_from_slice(extra);
        GameState::from_placement(&placements, Color::Light, ALL_CASTLING_RIGHTS)
            .expect("setup should be valid")
    }

    fn castles(game: &GameState) -> Vec<Move> {
        let mut moves = Vec::new();
        generate_king_moves(game, (0, 4), Color::Light, &mut moves);
        moves
            .into_iter()
            .filter(|mv| (mv.to.1 - mv.from.1).abs() == 2)
            .collect()
    }

    #[test]
    fn both_wings_available_on_an_open_back_rank() {
        let game = castling_setup(&[]);
        let found = castles(&game);
        assert!(found.contains(&Move::new((0, 4), (0, 6))));
        assert!(found.contains(&Move::new((0, 4), (0, 2))));
    }

    #[test]
    fn queenside_needs_the_knight_square_empty() {
        let game = castling_setup(&[((0, 1), Piece::new(PieceKind::Knight, Color::Light))]);
        assert_eq!(castles(&game), vec![Move::new((0, 4), (0, 6))]);
    }

    #[test]
    fn no_castling_out_of_check() {
        let game = castling_setup(&[((4, 4), Piece::new(PieceKind::Rook, Color::Dark))]);
        assert!(castles(&game).is_empty());
    }

    #[test]
    fn no_castling_through_an_attacked_square() {
        // Rook on f-file covers the kingside transit square only.
        let game = castling_setup(&[((5, 5), Piece::new(PieceKind::Rook, Color::Dark))]);
        assert_eq!(castles(&game), vec![Move::new((0, 4), (0, 2))]);
    }

    #[test]
    fn attacked_rook_square_does_not_block_castling() {
        // b1 is attacked but the king never crosses it.
        let game = castling_setup(&[((5, 1), Piece::new(PieceKind::Rook, Color::Dark))]);
        assert!(castles(&game).contains(&Move::new((0, 4), (0, 2))));
    }
}
