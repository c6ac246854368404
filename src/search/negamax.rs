//! Negamax alpha-beta search with a capture-only quiescence extension.
//!
//! Scores are always from the side to move; a child's score is negated and
//! the window swapped on the way back up. Horizon nodes hand over to
//! `quiescence`, which resolves pending exchanges before trusting the static
//! evaluation.

use tracing::trace;

use crate::game_state::{board::Board, chess_types::Color};
use crate::move_generation::legal_move_generator::{CaptureMoveGenerator, MoveGenerator};
use crate::search::board_scoring::BoardScorer;
use crate::search::minimax::{SearchResult, SCORE_INFINITY};
use crate::search::move_ordering::order_moves;

/// Capture sequences longer than this are cut off at stand-pat.
pub const QUIESCENCE_MAX_PLY: u8 = 8;

pub fn negamax_search<G, S>(
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
    let mut nodes = 1u64;
    let mut moves = generator.generate_legal_moves(board, side);
    if depth == 0 || moves.is_empty() {
        return SearchResult {
            best_move: None,
            score: scorer.score(board, side),
            nodes,
        };
    }
    order_moves(&mut moves);

    let mut alpha = -SCORE_INFINITY;
    let mut best_move = None;
    let mut best_score = -SCORE_INFINITY;
    for generated in moves {
        let score = -negamax(
            &generated.board_after,
            side.opposite(),
            depth - 1,
            -SCORE_INFINITY,
            -alpha,
            generator,
            scorer,
            &mut nodes,
        );
        if best_move.is_none() || score > best_score {
            best_score = score;
            best_move = Some(generated.mv);
        }
        alpha = alpha.max(score);
    }

    SearchResult {
        best_move,
        score: best_score,
        nodes,
    }
}

#[allow(clippy::too_many_arguments)]
fn negamax<G, S>(
    board: &Board,
    side: Color,
    depth: u8,
    mut alpha: i32,
    beta: i32,
    generator: &G,
    scorer: &S,
    nodes: &mut u64,
) -> i32
where
    G: MoveGenerator + ?Sized,
    S: BoardScorer + ?Sized,
{
    if depth == 0 {
        return quiescence(board, side, alpha, beta, scorer, nodes);
    }
    *nodes += 1;

    let mut moves = generator.generate_legal_moves(board, side);
    if moves.is_empty() {
        return scorer.score(board, side);
    }
    order_moves(&mut moves);

    let mut best = -SCORE_INFINITY;
    for generated in moves {
        let score = -negamax(
            &generated.board_after,
            side.opposite(),
            depth - 1,
            -beta,
            -alpha,
            generator,
            scorer,
            nodes,
        );
        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    best
}

/// Fail-soft capture search from `side`'s point of view. The stand-pat
/// evaluation is both the starting bound and a floor on the result.
pub fn quiescence<S>(
    board: &Board,
    side: Color,
    alpha: i32,
    beta: i32,
    scorer: &S,
    nodes: &mut u64,
) -> i32
where
    S: BoardScorer + ?Sized,
{
    quiescence_at(board, side, alpha, beta, scorer, nodes, 0)
}

fn quiescence_at<S>(
    board: &Board,
    side: Color,
    mut alpha: i32,
    beta: i32,
    scorer: &S,
    nodes: &mut u64,
    ply: u8,
) -> i32
where
    S: BoardScorer + ?Sized,
{
    *nodes += 1;
    let stand_pat = scorer.score(board, side);
    if stand_pat >= beta {
        return stand_pat;
    }
    if ply >= QUIESCENCE_MAX_PLY {
        trace!(ply, "quiescence ply cap reached");
        return stand_pat;
    }
    alpha = alpha.max(stand_pat);

    let mut captures = CaptureMoveGenerator.generate_legal_moves(board, side);
    order_moves(&mut captures);

    let mut best = stand_pat;
    for generated in captures {
        let score = -quiescence_at(
            &generated.board_after,
            side.opposite(),
            -beta,
            -alpha,
            scorer,
            nodes,
            ply + 1,
        );
        best = best.max(score);
        alpha = alpha.max(score);
        if alpha >= beta {
            break;
        }
    }
    best
}
