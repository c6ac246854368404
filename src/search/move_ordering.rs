//! Candidate ordering ahead of alpha-beta recursion.
//!
//! Captures come first, best (victim value minus attacker value) leading;
//! then quiet pawn and minor-piece moves; then everything else. The sort is
//! stable, so ties keep generation order.

use crate::game_state::chess_types::PieceKind;
use crate::move_generation::legal_move_generator::GeneratedMove;
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::MaterialScorer;

const QUIET_DEVELOPING: i32 = -20_000;
const QUIET_OTHER: i32 = -30_000;

/// Sort key: larger searches earlier.
pub fn move_order_score(mv: &Move) -> i32 {
    match mv.piece_captured {
        Some(victim) => {
            MaterialScorer::piece_value(victim.kind)
                - MaterialScorer::piece_value(mv.piece_moved.kind)
        }
        None => match mv.piece_moved.kind {
            PieceKind::Pawn | PieceKind::Knight | PieceKind::Bishop => QUIET_DEVELOPING,
            _ => QUIET_OTHER,
        },
    }
}

pub fn order_moves(moves: &mut [GeneratedMove]) {
    moves.sort_by_key(|generated| std::cmp::Reverse(move_order_score(&generated.mv)));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::Color;
    use crate::game_state::test_support::board_from_diagram;
    use crate::move_generation::legal_move_generator::{LegalMoveGenerator, MoveGenerator};

    #[test]
    fn captures_lead_and_cheapest_attacker_first() {
        // White pawn and queen can both take the black rook on d5.
        let board = board_from_diagram(["4k3", "8", "8", "3r4", "4P3", "8", "8", "3QK3"]);
        let mut moves = LegalMoveGenerator.generate_legal_moves(&board, Color::White);
        order_moves(&mut moves);

        let first = moves[0].mv;
        assert!(first.is_capture());
        assert_eq!(first.piece_moved.kind, PieceKind::Pawn);
        assert_eq!(moves[1].mv.piece_moved.kind, PieceKind::Queen);
        assert!(moves[1].mv.is_capture());

        let first_quiet = moves
            .iter()
            .position(|g| !g.mv.is_capture())
            .expect("quiet moves exist");
        assert!(moves[first_quiet..].iter().all(|g| !g.mv.is_capture()));
    }

    #[test]
    fn quiet_minor_moves_precede_heavy_piece_moves() {
        let board = board_from_diagram(["4k3", "8", "8", "8", "8", "8", "8", "R3K1N1"]);
        let mut moves = LegalMoveGenerator.generate_legal_moves(&board, Color::White);
        order_moves(&mut moves);
        let knight_moves = moves
            .iter()
            .take_while(|g| g.mv.piece_moved.kind == PieceKind::Knight)
            .count();
        assert_eq!(knight_moves, 3);
    }
}
