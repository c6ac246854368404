//! Plain-text board renderer for logs and test failure messages.

use crate::game_state::{board::Board, chess_types::Square};

/// Renders `board` with row 0 (Black's back rank) on top, rank labels on
/// both sides and file letters above and below.
///
/// ```text
///   a b c d e f g h
/// 8 r n b q k b n r 8
/// ...
/// 1 R N B Q K B N R 1
///   a b c d e f g h
/// ```
pub fn render_board(board: &Board) -> String {
    let mut out = String::with_capacity(200);
    out.push_str("  a b c d e f g h\n");

    for row in 0..8i8 {
        let rank = char::from(b'8' - row as u8);
        out.push(rank);
        out.push(' ');
        for col in 0..8i8 {
            let symbol = board
                .get(Square::new(row, col))
                .map_or('.', |piece| piece.symbol());
            out.push(symbol);
            out.push(' ');
        }
        out.push(rank);
        out.push('\n');
    }

    out.push_str("  a b c d e f g h");
    out
}
