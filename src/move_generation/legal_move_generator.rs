//! Full legal move generation pipeline.
//!
//! Gathers each piece's pseudo-legal destinations in row-major board order,
//! builds the candidate move, then drops king captures and any move that
//! leaves the mover's own king attacked. Search code consumes the moves
//! through the `MoveGenerator` trait together with the board each one
//! produces, so no node re-applies a move it has already simulated.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_apply::board_after;
use crate::move_generation::legal_move_checks::{captures_king, is_king_in_check};
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone)]
pub struct GeneratedMove {
    pub mv: Move,
    pub board_after: Board,
}

pub trait MoveGenerator: Send + Sync {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove>;
}

/// Every legal move.
#[derive(Debug, Clone, Copy, Default)]
pub struct LegalMoveGenerator;

/// Legal captures only, en passant included.
#[derive(Debug, Clone, Copy, Default)]
pub struct CaptureMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove> {
        generate_internal(board, side, false)
    }
}

impl MoveGenerator for CaptureMoveGenerator {
    fn generate_legal_moves(&self, board: &Board, side: Color) -> Vec<GeneratedMove> {
        generate_internal(board, side, true)
    }
}

fn generate_internal(board: &Board, side: Color, captures_only: bool) -> Vec<GeneratedMove> {
    let mut legal = Vec::with_capacity(48);
    for piece in board.pieces_of(side) {
        for to in piece.pseudo_moves(board) {
            let Some(mv) = Move::build(board, piece.square, to) else {
                continue;
            };
            if captures_king(&mv) || (captures_only && !mv.is_capture()) {
                continue;
            }
            let next = board_after(board, &mv);
            if is_king_in_check(&next, side) {
                continue;
            }
            legal.push(GeneratedMove {
                mv,
                board_after: next,
            });
        }
    }
    legal
}

/// Legal moves of the piece on `square`, whichever colour it is.
pub fn legal_moves_from(board: &Board, square: Square) -> Vec<Move> {
    let Some(piece) = board.get(square) else {
        return Vec::new();
    };
    piece
        .pseudo_moves(board)
        .into_iter()
        .filter_map(|to| Move::build(board, square, to))
        .filter(|mv| !captures_king(mv))
        .filter(|mv| !is_king_in_check(&board_after(board, mv), piece.color))
        .collect()
}

/// Every legal move for `side`, in scan order.
pub fn legal_moves(board: &Board, side: Color) -> Vec<Move> {
    board
        .pieces_of(side)
        .flat_map(|piece| legal_moves_from(board, piece.square))
        .collect()
}

/// First legal move for `side` in row-major scan order.
pub fn first_legal_move(board: &Board, side: Color) -> Option<Move> {
    board
        .pieces_of(side)
        .find_map(|piece| legal_moves_from(board, piece.square).into_iter().next())
}

#[inline]
pub fn has_legal_move(board: &Board, side: Color) -> bool {
    first_legal_move(board, side).is_some()
}

#[cfg(test)]
mod tests {
    use super::{
        first_legal_move, legal_moves, legal_moves_from, CaptureMoveGenerator,
        LegalMoveGenerator, MoveGenerator,
    };
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Square};
    use crate::game_state::test_support::board_from_diagram;
    use crate::move_generation::legal_move_checks::is_king_in_check;

    #[test]
    fn start_position_has_twenty_moves_per_side() {
        let board = Board::new_standard();
        assert_eq!(LegalMoveGenerator.generate_legal_moves(&board, Color::White).len(), 20);
        assert_eq!(LegalMoveGenerator.generate_legal_moves(&board, Color::Black).len(), 20);
        assert_eq!(legal_moves(&board, Color::White).len(), 20);
        assert!(CaptureMoveGenerator
            .generate_legal_moves(&board, Color::White)
            .is_empty());
    }

    #[test]
    fn no_legal_move_leaves_own_king_attacked() {
        let board = board_from_diagram([
            "r3k2r",
            "p1ppqpb1",
            "bn2pnp1",
            "3PN3",
            "1p2P3",
            "2N2Q1p",
            "PPPBBPPP",
            "R3K2R",
        ]);
        for side in [Color::White, Color::Black] {
            for generated in LegalMoveGenerator.generate_legal_moves(&board, side) {
                assert!(!is_king_in_check(&generated.board_after, side));
            }
        }
        assert_eq!(legal_moves(&board, Color::White).len(), 48);
    }

    #[test]
    fn first_legal_move_follows_scan_order() {
        let board = Board::new_standard();
        let first = first_legal_move(&board, Color::Black).expect("black has moves");
        assert_eq!(first.from, Square::new(0, 1));
        assert_eq!(legal_moves_from(&board, Square::new(4, 4)), Vec::new());
    }
}
