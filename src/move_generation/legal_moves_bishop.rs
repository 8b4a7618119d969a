use crate::game_state::chess_rules::DIAGONAL_RAYS;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::push_sliding_moves;

pub fn generate_bishop_moves(
    game_state: &GameState,
    from: BoardLocation,
    color: Color,
    moves: &mut Vec<Move>,
) {
    push_sliding_moves(game_state, from, color, &DIAGONAL_RAYS, moves);
}
