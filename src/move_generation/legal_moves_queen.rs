use crate::game_state::chess_rules::{DIAGONAL_RAYS, ORTHOGONAL_RAYS};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;

pub fn generate_queen_moves(
    game_state: &GameState,
    from: BoardLocation,
    color: Color,
    moves: &mut Vec<Move>,
) {
    push_sliding_moves(game_state, from, color, &ORTHOGONAL_RAYS, moves);
    push_sliding_moves(game_state, from, color, &DIAGONAL_RAYS, moves);
}

#[cfg(test)]
mod tests {
    use super::generate_queen_moves;
    use crate::game_state::{chess_types::*, game_state::GameState};

    #[test]
    fn central_queen_covers_twenty_seven_squares() {
        let game = GameState::from_placement(
            &[
                ((0, 0), Piece::new(PieceKind::King, Color::Light)),
                ((7, 7), Piece::new(PieceKind::King, Color::Dark)),
                ((3, 3), Piece::new(PieceKind::Queen, Color::Light)),
            ],
            Color::Dark,
            0,
        )
        .expect("setup should be valid");
        let mut moves = Vec::new();
        generate_queen_moves(&game, (3, 3), Color::Light, &mut moves);
        // 27 on an empty board minus a1, which holds the own king.
        assert_eq!(moves.len(), 26);
        assert!(moves.contains(&Move::new((3, 3), (7, 7))));
        assert!(!moves.contains(&Move::new((3, 3), (0, 0))));
    }
}
