use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::has_enemy_at;

pub fn generate_pawn_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    let forward = piece.color.forward();

    if let Some(one) = piece.square.offset(forward, 0) {
        if board.is_empty(one) {
            out.push(one);
            if piece.square.row() == piece.color.pawn_start_row() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(diag) = piece.square.offset(forward, d_col) {
            if has_enemy_at(board, piece, diag) || is_en_passant_target(piece, diag, board) {
                out.push(diag);
            }
        }
    }
}

pub fn is_valid_pawn_move(piece: &Piece, target: Square, board: &Board) -> bool {
    let forward = piece.color.forward();
    let d_row = target.row() - piece.square.row();
    let d_col = (target.col() - piece.square.col()).abs();

    match (d_col, d_row) {
        (0, r) if r == forward => board.is_empty(target),
        (0, r) if r == 2 * forward => {
            piece.square.row() == piece.color.pawn_start_row()
                && board.is_empty(target)
                && piece
                    .square
                    .offset(forward, 0)
                    .is_some_and(|mid| board.is_empty(mid))
        }
        (1, r) if r == forward => {
            has_enemy_at(board, piece, target) || is_en_passant_target(piece, target, board)
        }
        _ => false,
    }
}

#[inline]
pub fn pawn_attacks(piece: &Piece, target: Square) -> bool {
    target.row() - piece.square.row() == piece.color.forward()
        && (target.col() - piece.square.col()).abs() == 1
}

/// `target` is the board's en-passant square, empty, and reachable by this
/// pawn diagonally forward.
pub fn is_en_passant_target(piece: &Piece, target: Square, board: &Board) -> bool {
    board.en_passant_target() == Some(target)
        && board.is_empty(target)
        && pawn_attacks(piece, target)
}

/// Square of the pawn removed by an en-passant capture landing on `target`.
#[inline]
pub fn en_passant_victim_square(mover: Color, target: Square) -> Square {
    Square::new(target.row() - mover.forward(), target.col())
}

#[cfg(test)]
mod tests {
    use super::en_passant_victim_square;
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn white_pawn_on_start_row_has_single_and_double_push() {
        let board = Board::new_standard();
        let pawn = board.get(Square::new(6, 4)).expect("e2 pawn");
        let moves = pawn.pseudo_moves(&board);
        assert_eq!(moves, vec![Square::new(5, 4), Square::new(4, 4)]);
    }

    #[test]
    fn double_push_needs_both_squares_empty() {
        let mut board = Board::new_standard();
        let e3 = Square::new(5, 4);
        board.set(e3, Piece::new(PieceKind::Knight, Color::Black, e3));
        let pawn = board.get(Square::new(6, 4)).expect("e2 pawn");
        assert!(!pawn.is_valid_move(Square::new(4, 4), &board));
        assert!(!pawn.is_valid_move(e3, &board));
        assert!(pawn.pseudo_moves(&board).is_empty());

        let d2 = board.get(Square::new(6, 3)).expect("d2 pawn");
        assert!(d2.pseudo_moves(&board).contains(&e3));
    }

    #[test]
    fn pawn_captures_diagonally_only_onto_enemies() {
        let mut board = Board::empty();
        let from = Square::new(4, 4);
        board.set(from, Piece::new(PieceKind::Pawn, Color::White, from));
        board.set(
            Square::new(3, 3),
            Piece::new(PieceKind::Rook, Color::Black, Square::new(3, 3)),
        );
        board.set(
            Square::new(3, 5),
            Piece::new(PieceKind::Rook, Color::White, Square::new(3, 5)),
        );
        let pawn = board.get(from).expect("pawn placed");
        assert!(pawn.is_valid_move(Square::new(3, 3), &board));
        assert!(!pawn.is_valid_move(Square::new(3, 5), &board));
        assert!(!pawn.is_valid_move(Square::new(5, 4), &board));
    }

    #[test]
    fn en_passant_target_is_a_pseudo_move() {
        let mut board = Board::empty();
        let white = Square::new(3, 4);
        let black = Square::new(3, 3);
        board.set(white, Piece::new(PieceKind::Pawn, Color::White, white));
        board.set(black, Piece::new(PieceKind::Pawn, Color::Black, black));
        board.set_en_passant_target(Some(Square::new(2, 3)));

        let pawn = board.get(white).expect("pawn placed");
        assert!(pawn.pseudo_moves(&board).contains(&Square::new(2, 3)));
        assert!(pawn.is_valid_move(Square::new(2, 3), &board));
        assert_eq!(en_passant_victim_square(Color::White, Square::new(2, 3)), black);
    }
}
