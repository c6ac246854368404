//! Perft node counting over the legal move generator.
//!
//! Counts leaves of the legal move tree together with the usual per-leaf
//! statistics, which pins move generation against published reference
//! numbers.

use crate::game_state::{board::Board, chess_types::Color};
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::{has_legal_move, MoveGenerator};

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

pub fn perft<G: MoveGenerator>(generator: &G, board: &Board, side: Color, depth: u8) -> PerftCounts {
    if depth == 0 {
        return PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        };
    }

    let mut total = PerftCounts::default();
    for generated in generator.generate_legal_moves(board, side) {
        if depth > 1 {
            total.merge(perft(
                generator,
                &generated.board_after,
                side.opposite(),
                depth - 1,
            ));
            continue;
        }

        let mv = generated.mv;
        total.nodes += 1;
        total.captures += usize::from(mv.is_capture());
        total.en_passant += usize::from(mv.is_en_passant);
        total.castles += usize::from(mv.is_castling);
        total.promotions += usize::from(mv.promoted_to.is_some());
        if is_king_in_check(&generated.board_after, side.opposite()) {
            total.checks += 1;
            if !has_legal_move(&generated.board_after, side.opposite()) {
                total.checkmates += 1;
            }
        }
    }
    total
}

/// Leaf count only.
pub fn perft_nodes<G: MoveGenerator>(generator: &G, board: &Board, side: Color, depth: u8) -> usize {
    perft(generator, board, side, depth).nodes
}
