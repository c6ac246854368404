//! Pluggable board evaluation interfaces and baseline implementations.
//!
//! Search stays independent of the scoring terms by delegating static
//! position scoring to `BoardScorer`, so heuristics can be swapped without
//! altering search code. Every scorer answers from an explicit perspective
//! colour: positive is good for `perspective`.

use std::fmt;
use std::str::FromStr;

use crate::chess_errors::ChessError;
use crate::game_state::{board::Board, chess_types::*};
use crate::search::learned_scorer::{LearnedScorer, DEFAULT_NETWORK_SEED};

pub trait BoardScorer: Send + Sync {
    fn score(&self, board: &Board, perspective: Color) -> i32;
}

impl<S: BoardScorer + ?Sized> BoardScorer for Box<S> {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        (**self).score(board, perspective)
    }
}

/// Signed material balance.
#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialScorer;

impl MaterialScorer {
    #[inline]
    pub const fn piece_value(piece: PieceKind) -> i32 {
        match piece {
            PieceKind::Pawn => 100,
            PieceKind::Knight => 300,
            PieceKind::Bishop => 300,
            PieceKind::Rook => 500,
            PieceKind::Queen => 900,
            PieceKind::King => 10000,
        }
    }

    pub fn material_balance(board: &Board, perspective: Color) -> i32 {
        board
            .pieces()
            .map(|p| signed(p, perspective, Self::piece_value(p.kind)))
            .sum()
    }
}

impl BoardScorer for MaterialScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        Self::material_balance(board, perspective)
    }
}

#[inline]
fn signed(piece: Piece, perspective: Color, value: i32) -> i32 {
    if piece.color == perspective {
        value
    } else {
        -value
    }
}

pub const CENTER_WEIGHT: i32 = 10;
pub const PAWN_ADVANCE_WEIGHT: i32 = 5;
pub const BISHOP_DIAGONAL_BONUS: i32 = 15;
pub const ROOK_CENTER_FILE_BONUS: i32 = 10;

/// Material plus placement terms: central pawns and knights, pawn
/// advancement, bishops on the long diagonals and rooks on the centre files.
#[derive(Debug, Clone, Copy, Default)]
pub struct PositionalScorer;

impl PositionalScorer {
    /// 0 on the four centre squares, 3 on the rim.
    #[inline]
    pub fn center_distance(square: Square) -> i32 {
        let row = ((2 * square.row() as i32) - 7).abs() / 2;
        let col = ((2 * square.col() as i32) - 7).abs() / 2;
        row.max(col)
    }

    pub fn placement_bonus(piece: &Piece) -> i32 {
        let sq = piece.square;
        match piece.kind {
            PieceKind::Pawn => {
                let advanced = (sq.row() - piece.color.pawn_start_row()).abs() as i32;
                CENTER_WEIGHT * (3 - Self::center_distance(sq)) + PAWN_ADVANCE_WEIGHT * advanced
            }
            PieceKind::Knight => CENTER_WEIGHT * (3 - Self::center_distance(sq)),
            PieceKind::Bishop if sq.row() == sq.col() || sq.row() + sq.col() == 7 => {
                BISHOP_DIAGONAL_BONUS
            }
            PieceKind::Rook if sq.col() == 3 || sq.col() == 4 => ROOK_CENTER_FILE_BONUS,
            _ => 0,
        }
    }
}

impl BoardScorer for PositionalScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        let placement: i32 = board
            .pieces()
            .map(|p| signed(p, perspective, Self::placement_bonus(&p)))
            .sum();
        MaterialScorer::material_balance(board, perspective) + placement
    }
}

pub const MOBILITY_WEIGHT: i32 = 10;
pub const KING_SAFETY_WEIGHT: i32 = 50;

/// Material, mobility of the perspective side and a king-safety term.
#[derive(Debug, Clone, Copy, Default)]
pub struct MobilityScorer;

impl MobilityScorer {
    pub fn mobility(board: &Board, color: Color) -> i32 {
        board
            .pieces_of(color)
            .map(|p| p.pseudo_moves(board).len() as i32)
            .sum()
    }

    pub fn king_safety(board: &Board, perspective: Color) -> i32 {
        let attacked = |color: Color| {
            board
                .find_king(color)
                .is_some_and(|king| board.is_square_attacked(king, color.opposite()))
        };
        let mut score = 0;
        if attacked(perspective) {
            score -= KING_SAFETY_WEIGHT;
        }
        if attacked(perspective.opposite()) {
            score += KING_SAFETY_WEIGHT;
        }
        score
    }
}

impl BoardScorer for MobilityScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        MaterialScorer::material_balance(board, perspective)
            + MOBILITY_WEIGHT * Self::mobility(board, perspective)
            + Self::king_safety(board, perspective)
    }
}

/// Named scorer selection used by engine options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScorerKind {
    Material,
    Positional,
    Mobility,
    Learned,
}

impl ScorerKind {
    pub fn build(self) -> Box<dyn BoardScorer> {
        match self {
            ScorerKind::Material => Box::new(MaterialScorer),
            ScorerKind::Positional => Box::new(PositionalScorer),
            ScorerKind::Mobility => Box::new(MobilityScorer),
            ScorerKind::Learned => Box::new(LearnedScorer::seeded(DEFAULT_NETWORK_SEED)),
        }
    }
}

impl FromStr for ScorerKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "material" => Ok(ScorerKind::Material),
            "positional" => Ok(ScorerKind::Positional),
            "mobility" => Ok(ScorerKind::Mobility),
            "learned" => Ok(ScorerKind::Learned),
            _ => Err(ChessError::UnknownKind {
                what: "scorer",
                name: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for ScorerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScorerKind::Material => "material",
            ScorerKind::Positional => "positional",
            ScorerKind::Mobility => "mobility",
            ScorerKind::Learned => "learned",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::test_support::board_from_diagram;

    #[test]
    fn start_position_is_balanced_for_every_scorer() {
        let board = Board::new_standard();
        for color in [Color::White, Color::Black] {
            assert_eq!(MaterialScorer.score(&board, color), 0);
            assert_eq!(PositionalScorer.score(&board, color), 0);
            assert_eq!(MobilityScorer.score(&board, color), 200);
        }
    }

    #[test]
    fn material_is_antisymmetric() {
        let mut board = Board::new_standard();
        board.remove(Square::new(0, 3));
        assert_eq!(MaterialScorer.score(&board, Color::White), 900);
        assert_eq!(MaterialScorer.score(&board, Color::Black), -900);
    }

    #[test]
    fn centre_distance_rings() {
        assert_eq!(PositionalScorer::center_distance(Square::new(3, 4)), 0);
        assert_eq!(PositionalScorer::center_distance(Square::new(2, 5)), 1);
        assert_eq!(PositionalScorer::center_distance(Square::new(0, 0)), 3);
    }

    #[test]
    fn central_knight_outscores_rim_knight() {
        let rim = board_from_diagram(["4k3", "8", "8", "8", "8", "8", "8", "N3K3"]);
        let centre = board_from_diagram(["4k3", "8", "8", "3N4", "8", "8", "8", "4K3"]);
        assert!(
            PositionalScorer.score(&centre, Color::White)
                > PositionalScorer.score(&rim, Color::White)
        );
    }

    #[test]
    fn king_safety_rewards_giving_check() {
        let board = board_from_diagram(["4k3", "8", "8", "8", "8", "8", "8", "4R1K1"]);
        assert_eq!(MobilityScorer::king_safety(&board, Color::White), 50);
        assert_eq!(MobilityScorer::king_safety(&board, Color::Black), -50);
    }

    #[test]
    fn scorer_kind_parses_case_insensitively() {
        assert_eq!("Learned".parse::<ScorerKind>().ok(), Some(ScorerKind::Learned));
        assert!("bogus".parse::<ScorerKind>().is_err());
    }
}
