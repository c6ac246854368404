use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_apply::board_after;
use crate::moves::move_descriptions::Move;

#[inline]
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king_sq) = board.find_king(color) else {
        return false;
    };
    board.is_square_attacked(king_sq, color.opposite())
}

/// Simulates `mv` on a copy of `board` and reports whether the mover's king
/// is left unattacked.
#[inline]
pub fn leaves_king_safe(board: &Board, mv: &Move) -> bool {
    !is_king_in_check(&board_after(board, mv), mv.mover())
}

/// Capturing a king is never a legal move, even though king-safety
/// filtering should already make it unreachable.
#[inline]
pub fn captures_king(mv: &Move) -> bool {
    mv.piece_captured
        .is_some_and(|captured| captured.kind == PieceKind::King)
}

/// Full legality of an already-built move for `side`.
pub fn is_legal_move(board: &Board, side: Color, mv: &Move) -> bool {
    mv.mover() == side
        && board.get(mv.from) == Some(mv.piece_moved)
        && mv.piece_moved.is_valid_move(mv.to, board)
        && !captures_king(mv)
        && leaves_king_safe(board, mv)
}

#[cfg(test)]
mod tests {
    use super::{is_king_in_check, is_legal_move, leaves_king_safe};
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};
    use crate::moves::move_descriptions::Move;

    #[test]
    fn pinned_rook_cannot_leave_the_file() {
        let mut board = Board::empty();
        for (sq, kind, color) in [
            (Square::new(7, 4), PieceKind::King, Color::White),
            (Square::new(5, 4), PieceKind::Rook, Color::White),
            (Square::new(0, 4), PieceKind::Rook, Color::Black),
            (Square::new(0, 0), PieceKind::King, Color::Black),
        ] {
            board.set(sq, Piece::new(kind, color, sq));
        }
        let sideways = Move::build(&board, Square::new(5, 4), Square::new(5, 0)).expect("rook");
        let along = Move::build(&board, Square::new(5, 4), Square::new(2, 4)).expect("rook");
        assert!(!leaves_king_safe(&board, &sideways));
        assert!(leaves_king_safe(&board, &along));
        assert!(!is_legal_move(&board, Color::White, &sideways));
        assert!(is_legal_move(&board, Color::White, &along));
        assert!(!is_legal_move(&board, Color::Black, &along));
    }

    #[test]
    fn missing_king_is_never_in_check() {
        let board = Board::empty();
        assert!(!is_king_in_check(&board, Color::White));
    }

    #[test]
    fn king_capture_is_illegal() {
        let mut board = Board::empty();
        for (sq, kind, color) in [
            (Square::new(7, 4), PieceKind::King, Color::White),
            (Square::new(7, 0), PieceKind::Rook, Color::White),
            (Square::new(0, 0), PieceKind::King, Color::Black),
        ] {
            board.set(sq, Piece::new(kind, color, sq));
        }
        let grab = Move::build(&board, Square::new(7, 0), Square::new(0, 0)).expect("rook");
        assert!(!is_legal_move(&board, Color::White, &grab));
    }
}
