use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_shared::{has_ally_at, push_step_moves};

pub const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, 1),
    (-1, 2),
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
];

pub fn generate_knight_moves(piece: &Piece, board: &Board, out: &mut Vec<Square>) {
    push_step_moves(piece, board, &KNIGHT_OFFSETS, out);
}

pub fn is_valid_knight_move(piece: &Piece, target: Square, board: &Board) -> bool {
    knight_attacks(piece.square, target) && !has_ally_at(board, piece, target)
}

#[inline]
pub fn knight_attacks(from: Square, target: Square) -> bool {
    let d_row = (target.row() - from.row()).abs();
    let d_col = (target.col() - from.col()).abs();
    (d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1)
}

#[cfg(test)]
mod tests {
    use crate::game_state::board::Board;
    use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

    #[test]
    fn knight_in_the_centre_has_eight_targets() {
        let mut board = Board::empty();
        let d4 = Square::new(4, 3);
        board.set(d4, Piece::new(PieceKind::Knight, Color::White, d4));
        let knight = board.get(d4).expect("knight placed");
        assert_eq!(knight.pseudo_moves(&board).len(), 8);
    }

    #[test]
    fn knight_on_start_square_jumps_over_pawns() {
        let board = Board::new_standard();
        let knight = board.get(Square::new(7, 1)).expect("b1 knight");
        let mut targets = knight.pseudo_moves(&board);
        targets.sort_by_key(|sq| (sq.row(), sq.col()));
        assert_eq!(targets, vec![Square::new(5, 0), Square::new(5, 2)]);
        assert!(!knight.is_valid_move(Square::new(6, 3), &board));
    }
}
