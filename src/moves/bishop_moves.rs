//! Bishop movement geometry.
//!
//! Diagonal rays for move generation and the matching single-target checks
//! used by validation and attack detection.

use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::{
    has_ally_at, is_diagonal, path_is_clear, push_sliding_moves, BISHOP_DIRECTIONS,
};

pub fn generate_bishop_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    push_sliding_moves(piece, board, &BISHOP_DIRECTIONS, out);
}

pub fn is_valid_bishop_move(piece: &Piece, target: Square, board: &Board) -> bool {
    bishop_attacks(piece.square, target, board) && !has_ally_at(board, piece, target)
}

#[inline]
pub fn bishop_attacks(from: Square, target: Square, board: &Board) -> bool {
    is_diagonal(from, target) && path_is_clear(board, from, target)
}
