//! Turn-based game record.
//!
//! `GameState` owns the live board together with everything needed to decide
//! draws: side to move, history, the halfmove clock and position-repetition
//! counts. Moves reach it only through `commit`, which assumes the caller has
//! already checked legality.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::game_state::chess_rules::{FIFTY_MOVE_LIMIT, REPETITION_LIMIT};
use crate::game_state::position_key::position_key;
use crate::game_state::{board::Board, chess_types::*};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::legal_move_checks::is_king_in_check;
use crate::move_generation::legal_move_generator::has_legal_move;
use crate::moves::move_descriptions::Move;

#[derive(Debug, Clone)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) turn: Color,
    pub(crate) selected: Option<Square>,
    pub(crate) history: Vec<Move>,
    pub(crate) halfmove_clock: u32,
    pub(crate) position_counts: HashMap<String, u32>,
    pub(crate) terminal: Option<Outcome>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new_game()
    }
}

impl GameState {
    #[inline]
    pub fn new_game() -> Self {
        Self::from_board(Board::new_standard(), Color::White)
    }

    /// Starts a game from an arbitrary arrangement. The starting position
    /// counts as its first occurrence for repetition purposes, and a position
    /// that is already decided is recorded as such.
    pub fn from_board(board: Board, turn: Color) -> Self {
        let mut state = Self {
            board,
            turn,
            selected: None,
            history: Vec::new(),
            halfmove_clock: 0,
            position_counts: HashMap::new(),
            terminal: None,
        };
        state.record_position();
        state.evaluate_termination();
        state
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn turn(&self) -> Color {
        self.turn
    }

    #[inline]
    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    #[inline]
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    #[inline]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[inline]
    pub fn terminal(&self) -> Option<Outcome> {
        self.terminal
    }

    #[inline]
    pub fn position_key(&self) -> String {
        position_key(&self.board, self.turn)
    }

    pub fn repetition_count(&self) -> u32 {
        self.position_counts
            .get(&self.position_key())
            .copied()
            .unwrap_or(0)
    }

    #[inline]
    pub fn is_in_check(&self, color: Color) -> bool {
        is_king_in_check(&self.board, color)
    }

    pub fn is_checkmate(&self, color: Color) -> bool {
        self.is_in_check(color) && !has_legal_move(&self.board, color)
    }

    pub fn is_stalemate(&self, color: Color) -> bool {
        !self.is_in_check(color) && !has_legal_move(&self.board, color)
    }

    /// Plays an already validated move: applies it with its special effects,
    /// updates the clock, flips the turn, records the new position and
    /// re-evaluates termination for the side now to move.
    pub(crate) fn commit(&mut self, mv: Move) {
        apply_move(&mut self.board, &mv);

        if mv.piece_moved.kind == PieceKind::Pawn || mv.is_capture() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock += 1;
        }

        self.history.push(mv);
        self.turn = self.turn.opposite();
        self.selected = None;
        self.record_position();

        debug!(
            ply = self.history.len(),
            halfmove_clock = self.halfmove_clock,
            "committed {mv}"
        );

        self.evaluate_termination();
    }

    fn record_position(&mut self) {
        *self.position_counts.entry(self.position_key()).or_insert(0) += 1;
    }

    /// Checkmate, then stalemate, then the fifty-move rule, then threefold
    /// repetition; the first match freezes the game.
    fn evaluate_termination(&mut self) {
        if self.terminal.is_some() {
            return;
        }
        let side = self.turn;
        let outcome = if self.is_checkmate(side) {
            Some(Outcome::Checkmate {
                winner: side.opposite(),
            })
        } else if self.is_stalemate(side) {
            Some(Outcome::Stalemate)
        } else if self.halfmove_clock >= FIFTY_MOVE_LIMIT {
            Some(Outcome::FiftyMoveDraw)
        } else if self.repetition_count() >= REPETITION_LIMIT {
            Some(Outcome::ThreefoldRepetition)
        } else {
            None
        };

        if let Some(outcome) = outcome {
            info!(?outcome, ply = self.history.len(), "game over");
            self.terminal = Some(outcome);
        }
    }
}
