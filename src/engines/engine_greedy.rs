//! One-ply greedy engine with difficulty-scaled noise.
//!
//! Scores every legal reply by the material balance it leaves, plays the
//! best one, and at low difficulty sometimes plays a uniformly random legal
//! move instead.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::chess_errors::ChessError;
use crate::engines::engine_trait::{parse_option, Engine, EngineOutput, SearchParams};
use crate::engines::engine_select::clamp_difficulty;
use crate::game_state::{board::Board, chess_types::Color};
use crate::move_generation::legal_move_generator::{LegalMoveGenerator, MoveGenerator};
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

pub struct GreedyEngine {
    move_generator: LegalMoveGenerator,
    scorer: MaterialScorer,
    difficulty: u8,
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new(difficulty: u8) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer: MaterialScorer,
            difficulty: clamp_difficulty(difficulty),
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible noise for tests and engine matches.
    pub fn with_seed(difficulty: u8, seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new(difficulty)
        }
    }

    pub fn difficulty(&self) -> u8 {
        self.difficulty
    }

    /// Chance of replacing the best move with a random one.
    pub fn noise_probability(difficulty: u8) -> f64 {
        match difficulty {
            0 | 1 => 0.5,
            2 => 0.2,
            _ => 0.0,
        }
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new(2)
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "Ember Greedy"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        match name.trim().to_ascii_lowercase().as_str() {
            "difficulty" => {
                self.difficulty = clamp_difficulty(parse_option(name, value)?);
                Ok(())
            }
            "seed" => {
                self.rng = StdRng::seed_from_u64(parse_option(name, value)?);
                Ok(())
            }
            _ => Err(ChessError::UnknownOption(name.to_owned())),
        }
    }

    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        params: &SearchParams,
    ) -> Result<EngineOutput, ChessError> {
        let legal_moves = self.move_generator.generate_legal_moves(board, side);

        let mut out = EngineOutput {
            nodes: legal_moves.len() as u64,
            ..EngineOutput::default()
        };
        out.info_lines
            .push(format!("greedy legal_moves={}", legal_moves.len()));
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("greedy ignores depth={depth}"));
        }

        if legal_moves.is_empty() {
            return Ok(out);
        }

        let noise = Self::noise_probability(self.difficulty);
        if noise > 0.0 && self.rng.random_bool(noise) {
            let picked = legal_moves
                .as_slice()
                .choose(&mut self.rng)
                .ok_or_else(|| ChessError::EngineFailure("failed to choose a random move".into()))?;
            out.info_lines.push("greedy noise_move".to_owned());
            debug!(mv = %picked.mv, "greedy engine played a noise move");
            out.best_move = Some(picked.mv);
            out.score = Some(self.scorer.score(&picked.board_after, side));
            return Ok(out);
        }

        let mut best_score = i32::MIN;
        let mut best = None;
        for generated in &legal_moves {
            let score = self.scorer.score(&generated.board_after, side);
            if score > best_score {
                best_score = score;
                best = Some(generated.mv);
            }
        }

        out.info_lines
            .push(format!("greedy material_score={best_score}"));
        out.best_move = best;
        out.score = Some(best_score);
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Square};
    use crate::game_state::test_support::board_from_diagram;
    use crate::move_generation::legal_move_checks::is_legal_move;

    #[test]
    fn noise_shrinks_with_difficulty() {
        assert_eq!(GreedyEngine::noise_probability(1), 0.5);
        assert_eq!(GreedyEngine::noise_probability(2), 0.2);
        assert_eq!(GreedyEngine::noise_probability(3), 0.0);
        assert_eq!(GreedyEngine::noise_probability(10), 0.0);
    }

    #[test]
    fn noiseless_engine_grabs_the_biggest_capture() {
        let board = board_from_diagram(["4k3", "8", "8", "1r1q4", "8", "8", "8", "1R1RK3"]);
        let mut engine = GreedyEngine::with_seed(5, 1);
        let out = engine
            .choose_move(&board, Color::White, &SearchParams::default())
            .expect("engine runs");
        let mv = out.best_move.expect("white has moves");
        assert_eq!(mv.piece_captured.map(|p| p.kind), Some(PieceKind::Queen));
        assert_eq!(mv.to, Square::new(3, 3));
        assert_eq!(out.score, Some(500));
    }

    #[test]
    fn diagnostics_report_move_count_and_score() {
        let mut engine = GreedyEngine::with_seed(3, 7);
        let out = engine
            .choose_move(&Board::new_standard(), Color::White, &SearchParams::default())
            .expect("engine runs");
        assert_eq!(
            out.info_lines,
            vec!["greedy legal_moves=20".to_owned(), "greedy material_score=0".to_owned()]
        );
    }

    #[test]
    fn noisy_engine_still_plays_legal_moves() {
        let board = Board::new_standard();
        let mut engine = GreedyEngine::with_seed(1, 42);
        for _ in 0..32 {
            let out = engine
                .choose_move(&board, Color::Black, &SearchParams::default())
                .expect("engine runs");
            let mv = out.best_move.expect("black has moves");
            assert!(is_legal_move(&board, Color::Black, &mv));
        }
    }

    #[test]
    fn options_are_validated() {
        let mut engine = GreedyEngine::default();
        engine.set_option("Difficulty", "40").expect("difficulty accepted");
        assert_eq!(engine.difficulty(), 10);
        assert!(matches!(
            engine.set_option("Difficulty", "hard"),
            Err(ChessError::InvalidOption { .. })
        ));
        assert!(matches!(
            engine.set_option("Hash", "16"),
            Err(ChessError::UnknownOption(_))
        ));
    }
}
