//! 8x8 board model.
//!
//! `Board` owns every piece in play plus the transient en-passant target.
//! Storage is a flat array of `Option<Piece>` with `Copy` slots, so cloning a
//! board for a simulation is a fixed-size copy with no heap allocation.

use crate::game_state::chess_rules::BACK_RANK_LAYOUT;
use crate::game_state::chess_types::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; 8]; 8],
    en_passant_target: Option<Square>,
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

impl Board {
    pub const fn empty() -> Self {
        Self {
            squares: [[None; 8]; 8],
            en_passant_target: None,
        }
    }

    /// Standard initial arrangement.
    pub fn new_standard() -> Self {
        let mut board = Self::empty();
        for (col, kind) in BACK_RANK_LAYOUT.iter().enumerate() {
            let col = col as i8;
            for color in [Color::White, Color::Black] {
                let back = Square::new(color.back_row(), col);
                board.set(back, Piece::new(*kind, color, back));
                let pawn = Square::new(color.pawn_start_row(), col);
                board.set(pawn, Piece::new(PieceKind::Pawn, color, pawn));
            }
        }
        board
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        if !square.is_valid() {
            return None;
        }
        self.squares[square.row() as usize][square.col() as usize]
    }

    /// Places `piece` on `square`, updating its recorded square. Invalid
    /// squares are ignored.
    pub fn set(&mut self, square: Square, mut piece: Piece) {
        if !square.is_valid() {
            return;
        }
        piece.square = square;
        self.squares[square.row() as usize][square.col() as usize] = Some(piece);
    }

    pub fn remove(&mut self, square: Square) -> Option<Piece> {
        if !square.is_valid() {
            return None;
        }
        self.squares[square.row() as usize][square.col() as usize].take()
    }

    /// Relocates the occupant of `from` to `to` and marks it as moved.
    ///
    /// Whatever stood on `to` is overwritten and returned; rule-level capture
    /// handling and special moves live in `legal_move_apply`.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Option<Piece> {
        if !to.is_valid() {
            return None;
        }
        let mut piece = self.remove(from)?;
        piece.moved = true;
        let displaced = self.remove(to);
        self.set(to, piece);
        displaced
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|p| p.kind == PieceKind::King)
            .map(|p| p.square)
    }

    /// True if any piece of `by` attacks `square`.
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        if !square.is_valid() {
            return false;
        }
        self.pieces_of(by).any(|p| p.attacks(square, self))
    }

    #[inline]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    pub fn set_en_passant_target(&mut self, target: Option<Square>) {
        self.en_passant_target = target.filter(|sq| sq.is_valid());
    }

    /// Every piece in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = Piece> + '_ {
        self.squares.iter().flatten().filter_map(|slot| *slot)
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = Piece> + '_ {
        self.pieces().filter(move |p| p.color == color)
    }

    pub fn count(&self, color: Color, kind: PieceKind) -> usize {
        self.pieces_of(color).filter(|p| p.kind == kind).count()
    }
}
