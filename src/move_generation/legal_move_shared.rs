use crate::game_state::{chess_types::*, game_state::GameState};

/// First occupied square's piece walking from `from` along `ray`, excluding `from`.
#[inline]
pub fn first_piece_along_ray(
    game_state: &GameState,
    from: BoardLocation,
    ray: (i8, i8),
) -> Option<Piece> {
    let mut current = from;
    while let Some(next) = offset_location(current, ray.0, ray.1) {
        let piece = game_state.piece_at(next);
        if !piece.is_empty() {
            return Some(piece);
        }
        current = next;
    }
    None
}

/// Push a step move when the target is on the board and not held by `color`.
#[inline]
pub fn push_step_move(
    game_state: &GameState,
    from: BoardLocation,
    target: Option<BoardLocation>,
    color: Color,
    moves: &mut Vec<Move>,
) {
    let Some(to) = target else {
        return;
    };
    if game_state.piece_at(to).color() != Some(color) {
        moves.push(Move::new(from, to));
    }
}

/// Push every slide along each ray up to the first blocker, including it only
/// when it belongs to the opponent.
pub fn push_sliding_moves(
    game_state: &GameState,
    from: BoardLocation,
    color: Color,
    rays: &[(i8, i8)],
    moves: &mut Vec<Move>,
) {
    for &(d_row, d_col) in rays {
        let mut current = from;
        while let Some(to) = offset_location(current, d_row, d_col) {
            match game_state.piece_at(to).color() {
                None => moves.push(Move::new(from, to)),
                Some(owner) => {
                    if owner != color {
                        moves.push(Move::new(from, to));
                    }
                    break;
                }
            }
            current = to;
        }
    }
}
