//! Perft node counting.
//!
//! Walks the legal-move tree to a fixed depth and tallies leaf statistics.
//! Counts match published perft tables for positions where no promotion is
//! reachable within the depth, since promotion here is always to a queen.

use crate::game_state::chess_rules::promotion_row;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_generator::get_all_legal_moves;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub en_passant: usize,
    pub castles: usize,
    pub promotions: usize,
    pub checks: usize,
    pub checkmates: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.en_passant += rhs.en_passant;
        self.castles += rhs.castles;
        self.promotions += rhs.promotions;
        self.checks += rhs.checks;
        self.checkmates += rhs.checkmates;
    }
}

pub fn perft(game_state: &GameState, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for mv in get_all_legal_moves(game_state) {
        total.merge(perft_recurse(game_state, mv, depth - 1));
    }
    total
}

fn perft_recurse(game_state: &GameState, mv: Move, remaining: u8) -> PerftCounts {
    let mut next = game_state.clone();
    next.make_move(mv);

    if remaining > 0 {
        return perft(&next, remaining);
    }

    let mut counts = PerftCounts {
        nodes: 1,
        ..PerftCounts::default()
    };
    let Piece::Occupied { kind, color } = game_state.piece_at(mv.from) else {
        return counts;
    };

    let diagonal_onto_empty = mv.from.1 != mv.to.1 && game_state.piece_at(mv.to).is_empty();
    if kind == PieceKind::Pawn && diagonal_onto_empty {
        counts.en_passant += 1;
        counts.captures += 1;
    } else if !game_state.piece_at(mv.to).is_empty() {
        counts.captures += 1;
    }
    if kind == PieceKind::King && (mv.to.1 - mv.from.1).abs() == 2 {
        counts.castles += 1;
    }
    if kind == PieceKind::Pawn && mv.to.0 == promotion_row(color) {
        counts.promotions += 1;
    }
    if next.is_in_check(next.side_to_move()) {
        counts.checks += 1;
        if next.is_game_over() {
            counts.checkmates += 1;
        }
    }
    counts
}
