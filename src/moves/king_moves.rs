//! King movement geometry, including castling candidates.
//!
//! Castling is offered only when the king and the chosen rook are both
//! unmoved, the squares between them are empty, and the king's start,
//! transit and destination squares are not attacked.

use crate::game_state::chess_rules::KING_START_COL;
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::{
    has_ally_at, path_is_clear, push_step_moves, QUEEN_DIRECTIONS,
};

pub fn generate_king_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    push_step_moves(piece, board, &QUEEN_DIRECTIONS, out);

    for direction in [1, -1] {
        if can_castle(piece, board, direction) {
            if let Some(target) = piece.square.offset(0, 2 * direction) {
                out.push(target);
            }
        }
    }
}

pub fn is_valid_king_move(piece: &Piece, target: Square, board: &Board) -> bool {
    if king_attacks(piece.square, target) {
        return !has_ally_at(board, piece, target);
    }

    let d_col = target.col() - piece.square.col();
    target.row() == piece.square.row()
        && d_col.abs() == 2
        && can_castle(piece, board, d_col.signum())
}

#[inline]
pub fn king_attacks(from: Square, target: Square) -> bool {
    let d_row = (target.row() - from.row()).abs();
    let d_col = (target.col() - from.col()).abs();
    d_row <= 1 && d_col <= 1 && (d_row, d_col) != (0, 0)
}

/// Column of the rook that castles toward `direction` (+1 king side).
#[inline]
pub const fn castling_rook_col(direction: i8) -> i8 {
    if direction > 0 {
        7
    } else {
        0
    }
}

fn can_castle(king: &Piece, board: &Board, direction: i8) -> bool {
    if king.moved
        || king.square.row() != king.color.back_row()
        || king.square.col() != KING_START_COL
    {
        return false;
    }

    let rook_square = Square::new(king.square.row(), castling_rook_col(direction));
    let rook_ready = board.get(rook_square).is_some_and(|rook| {
        rook.kind == PieceKind::Rook && rook.color == king.color && !rook.moved
    });
    if !rook_ready || !path_is_clear(board, king.square, rook_square) {
        return false;
    }

    let enemy = king.color.opposite();
    let king_path = [0, 1, 2].map(|step| king.square.offset(0, step * direction));
    king_path
        .iter()
        .all(|sq| sq.is_some_and(|sq| !board.is_square_attacked(sq, enemy)))
}
