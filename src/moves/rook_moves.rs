use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::{
    has_ally_at, is_straight, path_is_clear, push_sliding_moves, ROOK_DIRECTIONS,
};

pub fn generate_rook_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    push_sliding_moves(piece, board, &ROOK_DIRECTIONS, out);
}

pub fn is_valid_rook_move(piece: &Piece, target: Square, board: &Board) -> bool {
    rook_attacks(piece.square, target, board) && !has_ally_at(board, piece, target)
}

#[inline]
pub fn rook_attacks(from: Square, target: Square, board: &Board) -> bool {
    is_straight(from, target) && path_is_clear(board, from, target)
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn rook_on_empty_board_sees_fourteen_squares() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3);
        board.set(d4, Piece::new(PieceKind::Rook, Color::White, d4));
        let rook = board.get(d4).expect("rook placed");
        assert_eq!(rook.pseudo_moves(&board).len(), 14);
    }

    #[test]
    fn rook_blocker_stops_ray_after_capture() {
        let mut board = Board::empty();
        let a1 = Square::new(7, 0);
        let a4 = Square::new(4, 0);
        board.set(a1, Piece::new(PieceKind::Rook, Color::White, a1));
        board.set(a4, Piece::new(PieceKind::Pawn, Color::Black, a4));
        let rook = board.get(a1).expect("rook placed");

        let moves = rook.pseudo_moves(&board);
        assert!(moves.contains(&a4));
        assert!(!moves.contains(&Square::new(3, 0)));
        assert!(rook.is_valid_move(a4, &board));
        assert!(!rook.is_valid_move(Square::new(3, 0), &board));
    }
}
