//! Position-repetition key.
//!
//! Layout, 67 characters: 64 piece symbols in row-major order (`.` for an
//! empty square), the en-passant target as `<row><col>` digits or `--`, and
//! `W` or `B` for the side to move.

use crate::game_state::{board::Board, chess_types::*};

pub const POSITION_KEY_LEN: usize = 67;
pub const EMPTY_SQUARE_MARKER: char = '.';
pub const NO_EN_PASSANT_MARKER: &str = "--";

pub fn position_key(board: &Board, side_to_move: Color) -> String {
    let mut key = String::with_capacity(POSITION_KEY_LEN);
    for square in Square::all() {
        key.push(board.get(square).map_or(EMPTY_SQUARE_MARKER, |p| p.symbol()));
    }
    match board.en_passant_target() {
        Some(ep) => {
            key.push(digit(ep.row()));
            key.push(digit(ep.col()));
        }
        None => key.push_str(NO_EN_PASSANT_MARKER),
    }
    key.push(match side_to_move {
        Color::White => 'W',
        Color::Black => 'B',
    });
    key
}

#[inline]
fn digit(value: i8) -> char {
    char::from(b'0' + value as u8)
}
