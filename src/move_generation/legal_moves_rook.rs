use crate::game_state::chess_rules::ORTHOGONAL_RAYS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;

pub fn generate_rook_moves(
    game_state: &GameState,
    from: BoardLocation,
    color: Color,
    moves: &mut Vec<Move>,
) {
    push_sliding_moves(game_state, from, color, &ORTHOGONAL_RAYS, moves);
}

#[cfg(test)]
mod tests {
    use super::generate_rook_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn rook_on_open_board_covers_fourteen_squares() {
        let game = GameState::from_placement(
            &[
                ((0, 4), Piece::new(PieceKind::King, Color::Light)),
                ((7, 4), Piece::new(PieceKind::King, Color::Dark)),
                ((3, 0), Piece::new(PieceKind::Rook, Color::Light)),
            ],
            Color::Light,
            0,
        )
        .expect("setup should be valid");
        let mut moves = Vec::new();
        generate_rook_moves(&game, (3, 0), Color::Light, &mut moves);
        assert_eq!(moves.len(), 14);
    }

    #[test]
    fn boxed_in_rook_has_no_moves() {
        let game = GameState::new_game();
        let mut moves = Vec::new();
        generate_rook_moves(&game, (7, 7), Color::Dark, &mut moves);
        assert!(moves.is_empty());
    }
}
