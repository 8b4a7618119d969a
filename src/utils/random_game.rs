//! Seeded random playouts.
//!
//! Drives the engine with uniformly chosen legal moves. Used for property
//! tests and the command-line front end; there is no evaluation involved.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::game_state::{chess_types::*, game_state::GameState};

#[derive(Debug, Clone)]
pub struct RandomGameReport {
    pub seed: u64,
    pub moves: Vec<Move>,
    pub final_state: GameState,
}

impl RandomGameReport {
    /// True when the playout ended in checkmate or stalemate rather than at the ply limit.
    pub fn reached_terminal_state(&self) -> bool {
        self.final_state.is_game_over()
    }
}

/// Play up to `max_plies` random legal moves from the starting position.
pub fn play_random_game(seed: u64, max_plies: usize) -> RandomGameReport {
    play_random_game_from(GameState::new_game(), seed, max_plies)
}

/// Play up to `max_plies` random legal moves from `start`.
pub fn play_random_game_from(start: GameState, seed: u64, max_plies: usize) -> RandomGameReport {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = start;
    let mut moves = Vec::with_capacity(max_plies);

    while moves.len() < max_plies && !game.is_game_over() {
        let legal = game.all_legal_moves();
        let Some(&picked) = legal.as_slice().choose(&mut rng) else {
            break;
        };
        game.make_move(picked);
        moves.push(picked);
    }

    debug!(seed, plies = moves.len(), over = game.is_game_over(), "random playout finished");
    RandomGameReport {
        seed,
        moves,
        final_state: game,
    }
}
