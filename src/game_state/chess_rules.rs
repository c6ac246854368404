//! Canonical chess-rule constants.
//!
//! Stores the standard back-rank arrangement and the draw thresholds used by
//! the game controller.

use crate::game_state::chess_types::PieceKind;

/// Back-rank arrangement from column 0 to column 7, identical for both sides.
pub const BACK_RANK_LAYOUT: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Half-moves without a pawn move or capture after which the game is drawn.
pub const FIFTY_MOVE_LIMIT: u32 = 50;

/// Occurrences of one position key that draw the game.
pub const REPETITION_LIMIT: u32 = 3;

/// Column the king starts on; castling moves it two columns either way.
pub const KING_START_COL: i8 = 4;
