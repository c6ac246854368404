use crate::game_state::{board::Board, chess_types::*};

pub const ROOK_DIRECTIONS: [(i8, i8); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];
pub const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (0, 1),
    (0, -1),
    (1, 0),
    (-1, 0),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

#[inline]
pub fn has_ally_at(board: &Board, piece: &Piece, square: Square) -> bool {
    board.get(square).is_some_and(|p| p.color == piece.color)
}

#[inline]
pub fn has_enemy_at(board: &Board, piece: &Piece, square: Square) -> bool {
    board.get(square).is_some_and(|p| p.color != piece.color)
}

/// Walks each direction one square at a time: empty squares are added, the
/// first enemy is added and stops the ray, a friendly piece stops it before.
pub fn push_sliding_moves(
    piece: &Piece,
    board: &Board,
    directions: &[(i8, i8)],
    out: &mut Vec<Square>,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = piece.square;
        while let Some(next) = cursor.offset(d_row, d_col) {
            match board.get(next) {
                None => out.push(next),
                Some(other) => {
                    if other.color != piece.color {
                        out.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

/// Pushes each fixed offset that lands on the board and not on a friend.
pub fn push_step_moves(piece: &Piece, board: &Board, offsets: &[(i8, i8)], out: &mut Vec<Square>) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = piece.square.offset(d_row, d_col) {
            if !has_ally_at(board, piece, target) {
                out.push(target);
            }
        }
    }
}

/// Unit step from `from` toward `to` when they share a rank, file or
/// diagonal.
pub fn line_step(from: Square, to: Square) -> Option<(i8, i8)> {
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();
    if (d_row, d_col) == (0, 0) {
        return None;
    }
    if d_row == 0 || d_col == 0 || d_row.abs() == d_col.abs() {
        Some((d_row.signum(), d_col.signum()))
    } else {
        None
    }
}

/// True when every square strictly between `from` and `to` is empty. The two
/// squares must be aligned.
pub fn path_is_clear(board: &Board, from: Square, to: Square) -> bool {
    let Some((d_row, d_col)) = line_step(from, to) else {
        return false;
    };
    let mut cursor = from;
    while let Some(next) = cursor.offset(d_row, d_col) {
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        cursor = next;
    }
    false
}

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    d_row == d_col && d_row != 0
}

#[inline]
pub fn is_straight(from: Square, to: Square) -> bool {
    (from.row() == to.row()) != (from.col() == to.col())
}
