//! Core value types shared by the board, move generation and search.
//!
//! Pieces are a closed set of six kinds, so behaviour is dispatched with a
//! single `match` on `PieceKind` into the per-kind modules under `moves`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::game_state::board::Board;
use crate::moves::{bishop_moves, king_moves, knight_moves, pawn_moves, queen_moves, rook_moves};

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step for this colour.
    #[inline]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn pawn_start_row(self) -> i8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    pub const fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    #[inline]
    pub const fn back_row(self) -> i8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }
}

/// Piece kind (colour is carried separately on `Piece`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Upper-case letter; `Piece::symbol` lowers it for Black.
    #[inline]
    pub const fn letter(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }
}

/// Board coordinate. Row 0 is Black's back rank, row 7 is White's.
///
/// Any pair of integers can be held so that out-of-range input coming from a
/// caller can be represented and then rejected by `is_valid`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Square {
    row: i8,
    col: i8,
}

impl Square {
    #[inline]
    pub const fn new(row: i8, col: i8) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col
    }

    #[inline]
    pub const fn is_valid(self) -> bool {
        self.row >= 0 && self.row < 8 && self.col >= 0 && self.col < 8
    }

    /// Neighbouring square, or `None` when it falls off the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        if !self.is_valid() {
            return None;
        }
        let target = Square::new(self.row.checked_add(d_row)?, self.col.checked_add(d_col)?);
        target.is_valid().then_some(target)
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..8i8).flat_map(|row| (0..8i8).map(move |col| Square::new(row, col)))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A piece as stored in a board slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub square: Square,
    pub moved: bool,
}

impl Piece {
    #[inline]
    pub const fn new(kind: PieceKind, color: Color, square: Square) -> Self {
        Self {
            kind,
            color,
            square,
            moved: false,
        }
    }

    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.letter(),
            Color::Black => self.kind.letter().to_ascii_lowercase(),
        }
    }

    /// Destinations allowed by this piece's geometry and occupancy rules,
    /// without regard to the safety of its own king.
    pub fn pseudo_moves(&self, board: &Board) -> Vec<Square> {
        let mut out = Vec::with_capacity(28);
        match self.kind {
            PieceKind::Pawn => pawn_moves::generate_pawn_moves(self, board, &mut out),
            PieceKind::Knight => knight_moves::generate_knight_moves(self, board, &mut out),
            PieceKind::Bishop => bishop_moves::generate_bishop_moves(self, board, &mut out),
            PieceKind::Rook => rook_moves::generate_rook_moves(self, board, &mut out),
            PieceKind::Queen => queen_moves::generate_queen_moves(self, board, &mut out),
            PieceKind::King => king_moves::generate_king_moves(self, board, &mut out),
        }
        out
    }

    /// Single-target form of `pseudo_moves`.
    pub fn is_valid_move(&self, target: Square, board: &Board) -> bool {
        if !target.is_valid() || target == self.square {
            return false;
        }
        match self.kind {
            PieceKind::Pawn => pawn_moves::is_valid_pawn_move(self, target, board),
            PieceKind::Knight => knight_moves::is_valid_knight_move(self, target, board),
            PieceKind::Bishop => bishop_moves::is_valid_bishop_move(self, target, board),
            PieceKind::Rook => rook_moves::is_valid_rook_move(self, target, board),
            PieceKind::Queen => queen_moves::is_valid_queen_move(self, target, board),
            PieceKind::King => king_moves::is_valid_king_move(self, target, board),
        }
    }

    /// Whether this piece attacks `target`, ignoring what stands on it.
    /// Pawn pushes and castling never attack.
    pub fn attacks(&self, target: Square, board: &Board) -> bool {
        if !target.is_valid() || target == self.square {
            return false;
        }
        match self.kind {
            PieceKind::Pawn => pawn_moves::pawn_attacks(self, target),
            PieceKind::Knight => knight_moves::knight_attacks(self.square, target),
            PieceKind::Bishop => bishop_moves::bishop_attacks(self.square, target, board),
            PieceKind::Rook => rook_moves::rook_attacks(self.square, target, board),
            PieceKind::Queen => queen_moves::queen_attacks(self.square, target, board),
            PieceKind::King => king_moves::king_attacks(self.square, target),
        }
    }
}

/// Terminal result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    FiftyMoveDraw,
    ThreefoldRepetition,
}

impl Outcome {
    pub fn is_draw(self) -> bool {
        !matches!(self, Outcome::Checkmate { .. })
    }
}
