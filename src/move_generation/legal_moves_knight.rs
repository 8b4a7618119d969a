use crate::game_state::chess_rules::KNIGHT_OFFSETS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_step_move;

pub fn generate_knight_moves(
    game_state: &GameState,
    from: BoardLocation,
    color: Color,
    moves: &mut Vec<Move>,
) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        push_step_move(
            game_state,
            from,
            offset_location(from, d_row, d_col),
            color,
            moves,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::generate_knight_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn starting_knight_has_two_targets() {
        let game = GameState::new_game();
        let mut moves = Vec::new();
        generate_knight_moves(&game, (0, 1), Color::Light, &mut moves);
        assert_eq!(moves.len(), 2);
        assert!(moves.contains(&Move::new((0, 1), (2, 0))));
        assert!(moves.contains(&Move::new((0, 1), (2, 2))));
    }

    #[test]
    fn centralized_knight_has_eight_targets() {
        let game = GameState::from_placement(
            &[
                ((0, 4), Piece::new(PieceKind::King, Color::Light)),
                ((7, 4), Piece::new(PieceKind::King, Color::Dark)),
                ((3, 3), Piece::new(PieceKind::Knight, Color::Light)),
            ],
            Color::Light,
            0,
        )
        .expect("setup should be valid");
        let mut moves = Vec::new();
        generate_knight_moves(&game, (3, 3), Color::Light, &mut moves);
        assert_eq!(moves.len(), 8);
    }
}
