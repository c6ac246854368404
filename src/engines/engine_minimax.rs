//! Fixed-depth alpha-beta minimax engine.
//!
//! Depth comes from the difficulty tier unless overridden by the `Depth`
//! option or `SearchParams::depth`. Evaluation defaults to the positional
//! scorer and can be switched with the `Scorer` option.

use tracing::debug;

use crate::chess_errors::ChessError;
use crate::engines::engine_select::clamp_difficulty;
use crate::engines::engine_trait::{
    parse_option, Engine, EngineOutput, ScorerSlot, SearchParams,
};
use crate::game_state::{board::Board, chess_types::Color};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::ScorerKind;
use crate::search::minimax::minimax_search;

pub const MAX_MINIMAX_DEPTH: u8 = 6;

pub struct MinimaxEngine {
    move_generator: LegalMoveGenerator,
    scorer: ScorerSlot,
    difficulty: u8,
    depth_override: Option<u8>,
}

impl MinimaxEngine {
    pub fn new(difficulty: u8) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer: ScorerSlot::new(ScorerKind::Positional),
            difficulty: clamp_difficulty(difficulty),
            depth_override: None,
        }
    }

    pub fn default_depth(difficulty: u8) -> u8 {
        if difficulty >= 8 {
            4
        } else {
            3
        }
    }

    pub fn scorer_kind(&self) -> ScorerKind {
        self.scorer.kind()
    }

    fn search_depth(&self, params: &SearchParams) -> u8 {
        params
            .depth
            .or(self.depth_override)
            .unwrap_or_else(|| Self::default_depth(self.difficulty))
            .clamp(1, MAX_MINIMAX_DEPTH)
    }
}

impl Default for MinimaxEngine {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "Ember Minimax"
    }

    fn set_option(&mut self, name: &str, value: &str) -> Result<(), ChessError> {
        if let Some(result) = self.scorer.set_option(name, value) {
            return result;
        }
        match name.trim().to_ascii_lowercase().as_str() {
            "difficulty" => {
                self.difficulty = clamp_difficulty(parse_option(name, value)?);
                Ok(())
            }
            "depth" => {
                let depth: u8 = parse_option(name, value)?;
                if depth == 0 {
                    return Err(ChessError::InvalidOption {
                        name: name.to_owned(),
                        value: value.to_owned(),
                    });
                }
                self.depth_override = Some(depth);
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
        let depth = self.search_depth(params);
        let result = minimax_search(
            board,
            side,
            depth,
            &self.move_generator,
            self.scorer.scorer(),
        );
        debug!(
            depth,
            nodes = result.nodes,
            score = result.score,
            scorer = %self.scorer.kind(),
            "minimax search finished"
        );

        Ok(EngineOutput {
            best_move: result.best_move,
            score: Some(result.score),
            nodes: result.nodes,
            info_lines: vec![format!(
                "minimax depth={} score={} nodes={} scorer={}",
                depth,
                result.score,
                result.nodes,
                self.scorer.kind()
            )],
        })
    }
}
