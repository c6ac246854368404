use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::{has_ally_at, push_sliding_moves, QUEEN_DIRECTIONS};
use crate::moves::bishop_moves::bishop_attacks;
use crate::moves::rook_moves::rook_attacks;

pub fn generate_queen_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    push_sliding_moves(piece, board, &QUEEN_DIRECTIONS, out);
}

pub fn is_valid_queen_move(piece: &Piece, target: Square, board: &Board) -> bool {
    queen_attacks(piece.square, target, board) && !has_ally_at(board, piece, target)
}

#[inline]
pub fn queen_attacks(from: Square, target: Square, board: &Board) -> bool {
    rook_attacks(from, target, board) || bishop_attacks(from, target, board)
}
