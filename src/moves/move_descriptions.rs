//! Move record used by history, legality checks and search.
//!
//! A `Move` is built against the board it will be played on so that every
//! special-move flag and the captured piece are known before it is applied.

use std::fmt;

use crate::game_state::{board::Board, chess_types::*};
use crate::moves::pawn_moves::{en_passant_victim_square, is_en_passant_target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Snapshot of the mover before the move.
    pub piece_moved: Piece,
    pub piece_captured: Option<Piece>,
    pub is_castling: bool,
    pub is_en_passant: bool,
    pub promoted_to: Option<PieceKind>,
}

impl Move {
    /// Describes moving the occupant of `from` to `to` on `board`. Returns
    /// `None` when `from` is empty or either square is off the board.
    ///
    /// Geometry is not checked here.
    pub fn build(board: &Board, from: Square, to: Square) -> Option<Move> {
        if !to.is_valid() {
            return None;
        }
        let piece = board.get(from)?;

        let mut captured = board.get(to);
        let mut is_en_passant = false;
        let mut is_castling = false;
        let mut promoted_to = None;

        match piece.kind {
            PieceKind::Pawn => {
                if captured.is_none()
                    && to.col() != from.col()
                    && is_en_passant_target(&piece, to, board)
                {
                    let victim = board.get(en_passant_victim_square(piece.color, to));
                    if victim.is_some_and(|v| v.kind == PieceKind::Pawn && v.color != piece.color)
                    {
                        captured = victim;
                        is_en_passant = true;
                    }
                }
                if to.row() == piece.color.promotion_row() {
                    promoted_to = Some(PieceKind::Queen);
                }
            }
            PieceKind::King => {
                is_castling = to.row() == from.row() && (to.col() - from.col()).abs() == 2;
            }
            _ => {}
        }

        Some(Move {
            from,
            to,
            piece_moved: piece,
            piece_captured: captured,
            is_castling,
            is_en_passant,
            promoted_to,
        })
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.piece_captured.is_some()
    }

    #[inline]
    pub fn is_double_pawn_push(&self) -> bool {
        self.piece_moved.kind == PieceKind::Pawn && (self.to.row() - self.from.row()).abs() == 2
    }

    #[inline]
    pub fn mover(&self) -> Color {
        self.piece_moved.color
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.piece_moved.symbol(), self.from, self.to)?;
        if let Some(captured) = self.piece_captured {
            write!(f, " x{}", captured.symbol())?;
        }
        if self.promoted_to.is_some() {
            write!(f, " =Q")?;
        }
        Ok(())
    }
}
