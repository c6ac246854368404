//! Fixed-depth minimax with alpha-beta pruning.
//!
//! The side to move at the root maximises, its opponent minimises, and every
//! leaf is scored from the root side's perspective. Leaves are depth-0 nodes
//! and nodes without a legal move; both return the static evaluation.
//! `minimax_exhaustive` runs the same recursion without pruning or ordering
//! and is kept as a reference for the pruned search.

use crate::game_state::{board::Board, chess_types::Color};
use crate::move_generation::legal_move_generator::MoveGenerator;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::BoardScorer;
use crate::search::move_ordering::order_moves;

/// Window bound; larger than any reachable evaluation.
pub const SCORE_INFINITY: i32 = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchResult {
    pub best_move: Option<Move>,
    pub score: i32,
    pub nodes: u64,
}

struct Minimax<'a, G: ?Sized, S: ?Sized> {
    generator: &'a G,
    scorer: &'a S,
    root: Color,
    prune: bool,
    nodes: u64,
}

impl<G, S> Minimax<'_, G, S>
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    fn root_search(&mut self, board: &Board, depth: u8) -> SearchResult {
        self.nodes += 1;
        let mut moves = self.generator.generate_legal_moves(board, self.root);
        if depth == 0 || moves.is_empty() {
            return SearchResult {
                best_move: None,
                score: self.scorer.score(board, self.root),
                nodes: self.nodes,
            };
        }
        if self.prune {
            order_moves(&mut moves);
        }

        let mut alpha = -SCORE_INFINITY;
        let mut best_move = None;
        let mut best_score = -SCORE_INFINITY;
        for generated in moves {
            let score = self.search(
                &generated.board_after,
                self.root.opposite(),
                depth - 1,
                alpha,
                SCORE_INFINITY,
            );
            if best_move.is_none() || score > best_score {
                best_score = score;
                best_move = Some(generated.mv);
            }
            if self.prune {
                alpha = alpha.max(score);
            }
        }

        SearchResult {
            best_move,
            score: best_score,
            nodes: self.nodes,
        }
    }

    fn search(
        &mut self,
        board: &Board,
        to_move: Color,
        depth: u8,
        mut alpha: i32,
        mut beta: i32,
    ) -> i32 {
        self.nodes += 1;
        if depth == 0 {
            return self.scorer.score(board, self.root);
        }
        let mut moves = self.generator.generate_legal_moves(board, to_move);
        if moves.is_empty() {
            return self.scorer.score(board, self.root);
        }
        if self.prune {
            order_moves(&mut moves);
        }

        let maximizing = to_move == self.root;
        let mut best = if maximizing { -SCORE_INFINITY } else { SCORE_INFINITY };
        for generated in moves {
            let score = self.search(
                &generated.board_after,
                to_move.opposite(),
                depth - 1,
                alpha,
                beta,
            );
            if maximizing {
                best = best.max(score);
                alpha = alpha.max(score);
            } else {
                best = best.min(score);
                beta = beta.min(score);
            }
            if self.prune && alpha >= beta {
                break;
            }
        }
        best
    }
}

/// Alpha-beta minimax to `depth` plies for `side`, captures searched first.
pub fn minimax_search<G, S>(
    board: &Board,
    side: Color,
    depth: u8,
    generator: &G,
    scorer: &S,
) -> SearchResult
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    Minimax {
        generator,
        scorer,
        root: side,
        prune: true,
        nodes: 0,
    }
    .root_search(board, depth)
}

/// Plain minimax over every node, in generation order.
pub fn minimax_exhaustive<G, S>(
    board: &Board,
    side: Color,
    depth: u8,
    generator: &G,
    scorer: &S,
) -> SearchResult
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    Minimax {
        generator,
        scorer,
        root: side,
        prune: false,
        nodes: 0,
    }
    .root_search(board, depth)
}
