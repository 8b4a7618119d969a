use crate::game_state::chess_rules::{en_passant_row, pawn_direction, pawn_home_row};
use crate::game_state::{chess_types::*, game_state::GameState};

/// Pseudo-legal pawn pushes, captures and en-passant captures.
pub fn generate_pawn_moves(
    game_state: &GameState,
    from: BoardLocation,
    color: Color,
    moves: &mut Vec<Move>,
) {
    let forward = pawn_direction(color);

    if let Some(one_step) = offset_location(from, forward, 0) {
        if game_state.piece_at(one_step).is_empty() {
            moves.push(Move::new(from, one_step));

            if from.0 == pawn_home_row(color) {
                if let Some(two_step) = offset_location(from, 2 * forward, 0) {
                    if game_state.piece_at(two_step).is_empty() {
                        moves.push(Move::new(from, two_step));
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        let Some(to) = offset_location(from, forward, d_col) else {
            continue;
        };
        match game_state.piece_at(to).color() {
            Some(owner) if owner != color => moves.push(Move::new(from, to)),
            Some(_) => {}
            None => {
                if from.0 == en_passant_row(color) && game_state.en_passant_file == Some(to.1) {
                    moves.push(Move::new(from, to));
                }
            }
        }
    }
}
