use crate::game_state::{board::Board, chess_types::*};
use crate::moves::king_moves::castling_rook_col;
use crate::moves::move_descriptions::Move;
use crate::moves::pawn_moves::en_passant_victim_square;

/// Plays `mv` on `board`, resolving every special effect.
///
/// This is the only mutation path used by the committed game, the king-safety
/// simulation and search nodes, so all three agree on en passant, castling
/// and promotion.
pub fn apply_move(board: &mut Board, mv: &Move) {
    board.set_en_passant_target(None);

    if mv.is_en_passant {
        board.remove(en_passant_victim_square(mv.mover(), mv.to));
    }

    board.move_piece(mv.from, mv.to);

    if mv.is_castling {
        let direction = (mv.to.col() - mv.from.col()).signum();
        let rook_from = Square::new(mv.from.row(), castling_rook_col(direction));
        let rook_to = Square::new(mv.from.row(), mv.from.col() + direction);
        board.move_piece(rook_from, rook_to);
    }

    if let Some(kind) = mv.promoted_to {
        let mut promoted = Piece::new(kind, mv.mover(), mv.to);
        promoted.moved = true;
        board.set(mv.to, promoted);
    }

    if mv.is_double_pawn_push() {
        let mid_row = (mv.from.row() + mv.to.row()) / 2;
        board.set_en_passant_target(Some(Square::new(mid_row, mv.from.col())));
    }
}

/// Returns a copy of `board` with `mv` applied; `board` is untouched.
#[inline]
pub fn board_after(board: &Board, mv: &Move) -> Board {
    let mut next = board.clone();
    apply_move(&mut next, mv);
    next
}
