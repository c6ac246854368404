use crate::game_state::board::Board;
use crate::game_state::chess_types::{Color, Piece, PieceKind, Square};

/// Builds a board from eight rows, top (row 0) first. Letters use the piece
/// symbols, digits skip that many empty squares. All pieces start unmoved.
pub(crate) fn board_from_diagram(rows: [&str; 8]) -> Board {
    let mut board = Board::empty();
    for (row, text) in rows.iter().enumerate() {
        let mut col = 0i8;
        for ch in text.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col += skip as i8;
                continue;
            }
            let kind = match ch.to_ascii_uppercase() {
                'P' => PieceKind::Pawn,
                'N' => PieceKind::Knight,
                'B' => PieceKind::Bishop,
                'R' => PieceKind::Rook,
                'Q' => PieceKind::Queen,
                'K' => PieceKind::King,
                other => panic!("unknown diagram piece '{other}'"),
            };
            let color = if ch.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let square = Square::new(row as i8, col);
            board.set(square, Piece::new(kind, color, square));
            col += 1;
        }
        assert_eq!(col, 8, "diagram row {row} does not cover eight columns");
    }
    board
}
