//! Select-then-move controller consumed by a presentation layer.
//!
//! A caller selects one of the side-to-move's pieces and then proposes a
//! destination. Proposals run through geometric validation, the king-capture
//! ban and king safety before being committed; a rejected proposal changes
//! nothing, the selection included. Once an outcome is recorded the game is
//! frozen until `reset`.
//!
//! When an automated opponent is enabled its replies are produced right
//! after the human move that hands it the turn. Engine output is
//! re-validated against the live board and replaced by the first legal move
//! in scan order if it does not hold up.

use tracing::{debug, info, warn};

use crate::chess_errors::ChessError;
use crate::engines::engine_select::{
    build_engine, clamp_difficulty, OpponentConfig, StrategyKind,
};
use crate::engines::engine_trait::{Engine, SearchParams};
use crate::game_state::game_state::GameState;
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_checks::{is_legal_move, leaves_king_safe};
use crate::move_generation::legal_move_generator::{first_legal_move, legal_moves_from};
use crate::moves::move_descriptions::Move;

/// Automated plies played per trigger; the second one only runs if the
/// automated side is somehow still to move.
const MAX_AUTOMATED_PLIES: usize = 2;

pub struct GameController {
    state: GameState,
    opponent: OpponentConfig,
    engine: Box<dyn Engine>,
    params: SearchParams,
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

impl GameController {
    pub fn new() -> Self {
        Self::with_state(GameState::new_game())
    }

    /// Starts from an arbitrary position with `turn` to move.
    pub fn with_board(board: Board, turn: Color) -> Self {
        Self::with_state(GameState::from_board(board, turn))
    }

    fn with_state(state: GameState) -> Self {
        let opponent = OpponentConfig::default();
        Self {
            state,
            engine: build_engine(opponent.strategy, opponent.difficulty),
            opponent,
            params: SearchParams::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.state.turn()
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.state.selected()
    }

    pub fn opponent(&self) -> OpponentConfig {
        self.opponent
    }

    pub fn engine_name(&self) -> &str {
        self.engine.name()
    }

    /// Selects the piece on `square` if it belongs to the side to move;
    /// otherwise clears the selection and fails.
    pub fn select(&mut self, square: Square) -> bool {
        let ok = !self.is_game_over()
            && self
                .state
                .board
                .get(square)
                .is_some_and(|piece| piece.color == self.state.turn);
        self.state.selected = ok.then_some(square);
        ok
    }

    /// Moves the selected piece to `to`. Returns `false`, leaving the game
    /// untouched, when nothing is selected, the game is over or the move is
    /// illegal.
    pub fn propose_move(&mut self, to: Square) -> bool {
        if self.is_game_over() {
            return false;
        }
        let Some(from) = self.state.selected else {
            return false;
        };
        let board = &self.state.board;
        let Some(piece) = board.get(from) else {
            return false;
        };

        if !piece.is_valid_move(to, board) {
            return false;
        }
        if board
            .get(to)
            .is_some_and(|target| target.kind == PieceKind::King && target.color != piece.color)
        {
            return false;
        }
        let Some(mv) = Move::build(board, from, to) else {
            return false;
        };
        if !leaves_king_safe(board, &mv) {
            return false;
        }

        self.state.commit(mv);
        self.run_automated_turns();
        true
    }

    /// Legal destinations of the piece on `square`, for either colour.
    pub fn legal_moves_for(&self, square: Square) -> Vec<Square> {
        legal_moves_from(&self.state.board, square)
            .into_iter()
            .map(|mv| mv.to)
            .collect()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.state.terminal().is_some()
    }

    #[inline]
    pub fn result(&self) -> Option<Outcome> {
        self.state.terminal()
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.state.is_in_check(color)
    }

    #[inline]
    pub fn is_checkmate(&self, color: Color) -> bool {
        self.state.is_checkmate(color)
    }

    #[inline]
    pub fn is_stalemate(&self, color: Color) -> bool {
        self.state.is_stalemate(color)
    }

    #[inline]
    pub fn move_history(&self) -> &[Move] {
        self.state.history()
    }

    /// Enables or disables the automated opponent and swaps in a fresh engine
    /// for `strategy`. Difficulty is clamped into 1..=10.
    pub fn configure_automated_opponent(
        &mut self,
        enabled: bool,
        strategy: StrategyKind,
        difficulty: u8,
    ) {
        self.opponent.enabled = enabled;
        self.opponent.strategy = strategy;
        self.opponent.difficulty = clamp_difficulty(difficulty);
        self.engine = build_engine(strategy, self.opponent.difficulty);
        info!(
            enabled,
            %strategy,
            difficulty = self.opponent.difficulty,
            side = ?self.opponent.side,
            "automated opponent configured"
        );
    }

    pub fn set_automated_side(&mut self, side: Color) {
        self.opponent.side = side;
    }

    /// Replaces the automated opponent's engine, keeping the rest of the
    /// configuration.
    pub fn set_engine(&mut self, engine: Box<dyn Engine>) {
        self.engine = engine;
    }

    pub fn set_engine_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        self.engine.set_option(name, value)
    }

    pub fn set_search_params(&mut self, params: SearchParams) {
        self.params = params;
    }

    /// Lets the automated side move when it is its turn without waiting for
    /// a human move, e.g. to open the game as White.
    pub fn request_automated_move(&mut self) -> bool {
        self.run_automated_turns()
    }

    /// Back to the standard starting position; the opponent configuration
    /// is kept.
    pub fn reset(&mut self) {
        self.state = GameState::new_game();
        self.engine.new_game();
        info!("game reset");
    }

    fn automated_to_move(&self) -> bool {
        self.opponent.enabled && !self.is_game_over() && self.state.turn == self.opponent.side
    }

    fn run_automated_turns(&mut self) -> bool {
        let mut played = false;
        for _ in 0..MAX_AUTOMATED_PLIES {
            if !self.automated_to_move() {
                break;
            }
            match self.pick_automated_move() {
                Some(mv) => {
                    self.state.commit(mv);
                    played = true;
                }
                None => break,
            }
        }
        played
    }

    fn pick_automated_move(&mut self) -> Option<Move> {
        let side = self.state.turn;
        let board = &self.state.board;

        let proposed = match self.engine.choose_move(board, side, &self.params) {
            Ok(out) => {
                for line in &out.info_lines {
                    debug!(engine = self.engine.name(), "{line}");
                }
                out.best_move
            }
            Err(err) => {
                warn!(%err, engine = self.engine.name(), "engine failed to produce a move");
                None
            }
        };

        let validated = proposed
            .and_then(|mv| Move::build(board, mv.from, mv.to))
            .filter(|mv| is_legal_move(board, side, mv));
        if validated.is_some() {
            return validated;
        }

        let fallback = first_legal_move(board, side);
        match (proposed, fallback) {
            (Some(rejected), Some(mv)) => {
                warn!(%rejected, fallback = %mv, "engine move rejected; playing first legal move")
            }
            (None, Some(mv)) => {
                warn!(fallback = %mv, "engine returned no move; playing first legal move")
            }
            (_, None) => debug!(?side, "automated side has no legal move"),
        }
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::engine_trait::EngineOutput;
    use crate::game_state::test_support::board_from_diagram;

    fn sq(row: i8, col: i8) -> Square {
        Square::new(row, col)
    }

    fn play(controller: &mut GameController, from: (i8, i8), to: (i8, i8)) -> bool {
        controller.select(sq(from.0, from.1)) && controller.propose_move(sq(to.0, to.1))
    }

    #[test]
    fn selection_requires_a_piece_of_the_side_to_move() {
        let mut game = GameController::new();
        assert!(!game.select(sq(1, 4)));
        assert!(!game.select(sq(4, 4)));
        assert!(game.select(sq(6, 4)));
        assert_eq!(game.selected(), Some(sq(6, 4)));
        assert!(!game.select(sq(0, 0)));
        assert_eq!(game.selected(), None);
        assert!(!game.propose_move(sq(4, 4)));
    }

    #[test]
    fn rejected_proposal_leaves_everything_in_place() {
        let mut game = GameController::new();
        let before = game.board().clone();
        assert!(game.select(sq(6, 4)));
        assert!(!game.propose_move(sq(3, 4)));
        assert!(!game.propose_move(sq(-1, 4)));
        assert_eq!(game.board(), &before);
        assert_eq!(game.selected(), Some(sq(6, 4)));
        assert_eq!(game.turn(), Color::White);
        assert!(game.move_history().is_empty());
        assert!(game.propose_move(sq(4, 4)));
        assert_eq!(game.turn(), Color::Black);
        assert_eq!(game.selected(), None);
    }

    #[test]
    fn en_passant_capture_is_available_for_one_move_only() {
        let mut game = GameController::new();
        assert!(play(&mut game, (6, 4), (4, 4)));
        assert_eq!(game.board().en_passant_target(), Some(sq(5, 4)));
        assert!(play(&mut game, (1, 0), (2, 0)));
        assert_eq!(game.board().en_passant_target(), None);
        assert!(play(&mut game, (4, 4), (3, 4)));
        assert!(play(&mut game, (1, 3), (3, 3)));
        assert_eq!(game.board().en_passant_target(), Some(sq(2, 3)));
        assert!(game.legal_moves_for(sq(3, 4)).contains(&sq(2, 3)));

        assert!(play(&mut game, (3, 4), (2, 3)));
        assert!(game.board().get(sq(3, 3)).is_none());
        let last = game.move_history().last().copied().expect("move recorded");
        assert!(last.is_en_passant);
        assert_eq!(game.state().halfmove_clock(), 0);

        let mut late = GameController::new();
        for (from, to) in [
            ((6, 4), (4, 4)),
            ((1, 0), (2, 0)),
            ((4, 4), (3, 4)),
            ((1, 3), (3, 3)),
            ((6, 7), (5, 7)),
            ((2, 0), (3, 0)),
        ] {
            assert!(play(&mut late, from, to));
        }
        assert!(!play(&mut late, (3, 4), (2, 3)));
    }

    #[test]
    fn castling_moves_the_rook_and_is_lost_once_the_king_moves() {
        let diagram = ["r3k2r", "8", "8", "8", "8", "8", "8", "R3K2R"];
        let mut game = GameController::with_board(board_from_diagram(diagram), Color::White);
        let king_targets = game.legal_moves_for(sq(7, 4));
        assert!(king_targets.contains(&sq(7, 6)));
        assert!(king_targets.contains(&sq(7, 2)));
        assert!(play(&mut game, (7, 4), (7, 6)));
        assert_eq!(game.board().get(sq(7, 5)).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(game.board().get(sq(7, 7)).is_none());
        assert!(game.move_history()[0].is_castling);

        let mut wandering = GameController::with_board(board_from_diagram(diagram), Color::White);
        assert!(play(&mut wandering, (7, 4), (7, 5)));
        assert!(play(&mut wandering, (0, 0), (1, 0)));
        assert!(play(&mut wandering, (7, 5), (7, 4)));
        assert!(play(&mut wandering, (1, 0), (0, 0)));
        assert!(!wandering.legal_moves_for(sq(7, 4)).contains(&sq(7, 6)));
        assert!(!play(&mut wandering, (7, 4), (7, 6)));
        assert!(wandering.legal_moves_for(sq(0, 4)).contains(&sq(0, 6)));
        assert!(!wandering.legal_moves_for(sq(0, 4)).contains(&sq(0, 2)));
    }

    #[test]
    fn fifty_quiet_half_moves_draw() {
        let board = board_from_diagram(["7k", "8", "r7", "8", "8", "R7", "8", "7K"]);
        let mut game = GameController::with_board(board, Color::White);
        let (mut white_col, mut black_col) = (0i8, 0i8);
        for ply in 0..50 {
            assert!(!game.is_game_over(), "ended early at ply {ply}");
            if ply % 2 == 0 {
                let next = (white_col + 1) % 7;
                assert!(play(&mut game, (5, white_col), (5, next)));
                white_col = next;
            } else {
                let next = (black_col + 1) % 6;
                assert!(play(&mut game, (2, black_col), (2, next)));
                black_col = next;
            }
        }
        assert_eq!(game.state().halfmove_clock(), 50);
        assert_eq!(game.result(), Some(Outcome::FiftyMoveDraw));
        assert!(!game.select(sq(5, white_col)));
    }

    #[test]
    fn knight_shuffle_draws_by_repetition() {
        let mut game = GameController::new();
        let shuffle = [((7, 6), (5, 5)), ((0, 6), (2, 5)), ((5, 5), (7, 6)), ((2, 5), (0, 6))];
        for (round, (from, to)) in shuffle.iter().chain(shuffle.iter()).enumerate() {
            assert!(!game.is_game_over(), "ended early at ply {round}");
            assert!(play(&mut game, *from, *to));
        }
        assert_eq!(game.state().repetition_count(), 3);
        assert_eq!(game.result(), Some(Outcome::ThreefoldRepetition));
        assert!(game.result().is_some_and(Outcome::is_draw));
    }

    #[test]
    fn back_rank_mate_ends_the_game() {
        let board = board_from_diagram(["6k1", "5ppp", "8", "8", "8", "8", "8", "R3K3"]);
        let mut game = GameController::with_board(board, Color::White);
        assert!(play(&mut game, (7, 0), (0, 0)));
        assert!(game.is_in_check(Color::Black));
        assert!(game.is_checkmate(Color::Black));
        assert_eq!(
            game.result(),
            Some(Outcome::Checkmate {
                winner: Color::White
            })
        );
        assert!(first_legal_move(game.board(), Color::Black).is_none());
        assert!(!game.select(sq(0, 6)));
    }

    #[test]
    fn queen_move_that_stalemates_is_a_draw() {
        let board = board_from_diagram(["7k", "8", "6K1", "8", "8", "8", "8", "5Q2"]);
        let mut game = GameController::with_board(board, Color::White);
        assert!(play(&mut game, (7, 5), (1, 5)));
        assert!(game.is_stalemate(Color::Black));
        assert!(!game.is_checkmate(Color::Black));
        assert_eq!(game.result(), Some(Outcome::Stalemate));
    }

    #[test]
    fn king_cannot_be_captured_and_must_be_kept_safe() {
        let board = board_from_diagram(["4k3", "8", "8", "8", "8", "8", "4r3", "R3K3"]);
        let mut game = GameController::with_board(board, Color::White);
        assert!(game.is_in_check(Color::White));
        assert!(!play(&mut game, (7, 0), (6, 0)));
        assert!(game.legal_moves_for(sq(7, 0)).is_empty());
        assert!(play(&mut game, (7, 4), (6, 4)));

        // Black king left en prise with White to move: taking it is refused.
        let exposed = board_from_diagram(["4k3", "8", "8", "8", "8", "8", "8", "4RK2"]);
        let mut game = GameController::with_board(exposed, Color::White);
        assert!(!game.legal_moves_for(sq(7, 4)).contains(&sq(0, 4)));
        assert!(game.select(sq(7, 4)));
        assert!(!game.propose_move(sq(0, 4)));
        assert!(game.move_history().is_empty());
    }

    #[test]
    fn automated_opponent_answers_each_human_move() {
        let mut game = GameController::new();
        game.configure_automated_opponent(true, StrategyKind::Negamax, 3);
        game.set_search_params(SearchParams { depth: Some(1) });
        assert!(play(&mut game, (6, 4), (4, 4)));
        assert_eq!(game.move_history().len(), 2);
        assert_eq!(game.move_history()[1].mover(), Color::Black);
        assert_eq!(game.turn(), Color::White);
        assert!(!game.request_automated_move());
    }

    #[test]
    fn automated_side_can_open_as_white() {
        let mut game = GameController::new();
        game.configure_automated_opponent(true, StrategyKind::Heuristic, 5);
        game.set_automated_side(Color::White);
        assert!(game.request_automated_move());
        assert_eq!(game.move_history().len(), 1);
        assert_eq!(game.turn(), Color::Black);

        game.reset();
        assert!(game.move_history().is_empty());
        assert_eq!(game.opponent().side, Color::White);
    }

    struct RogueEngine;

    impl Engine for RogueEngine {
        fn name(&self) -> &str {
            "rogue"
        }

        fn choose_move(
            &mut self,
            board: &Board,
            _side: Color,
            _params: &SearchParams,
        ) -> Result<EngineOutput, ChessError> {
            // Rook jumping over its own pawn.
            Ok(EngineOutput {
                best_move: Move::build(board, Square::new(0, 0), Square::new(5, 0)),
                ..EngineOutput::default()
            })
        }
    }

    #[test]
    fn illegal_engine_move_is_replaced_by_first_legal_move() {
        let mut game = GameController::new();
        game.configure_automated_opponent(true, StrategyKind::Heuristic, 3);
        game.set_engine(Box::new(RogueEngine));
        assert!(play(&mut game, (6, 3), (4, 3)));
        let reply = game.move_history()[1];
        assert_eq!(reply.from, sq(0, 1));
        assert_eq!(reply.piece_moved.kind, PieceKind::Knight);
    }
}
