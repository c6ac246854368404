//! Negamax engine with quiescence at the horizon.
//!
//! Searches one ply shallower than the minimax engine at the same difficulty
//! and spends the difference on capture-only extension. Mobility and king
//! safety are the default evaluation terms.

use tracing::debug;

use crate::chess_errors::ChessError;
use crate::engines::engine_select::clamp_difficulty;
use crate::engines::engine_trait::{
    parse_option, Engine, EngineOutput, ScorerSlot, SearchParams,
};
use crate::game_state::{board::Board, chess_types::Color};
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::search::board_scoring::ScorerKind;
use crate::search::negamax::negamax_search;

pub const MAX_NEGAMAX_DEPTH: u8 = 5;

pub struct NegamaxEngine {
    move_generator: LegalMoveGenerator,
    scorer: ScorerSlot,
    difficulty: u8,
    depth_override: Option<u8>,
}

impl NegamaxEngine {
    pub fn new(difficulty: u8) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            scorer: ScorerSlot::new(ScorerKind::Mobility),
            difficulty: clamp_difficulty(difficulty),
            depth_override: None,
        }
    }

    pub fn default_depth(difficulty: u8) -> u8 {
        if difficulty >= 8 {
            3
        } else {
            2
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
            .clamp(1, MAX_NEGAMAX_DEPTH)
    }
}

impl Default for NegamaxEngine {
    fn default() -> Self {
        Self::new(5)
    }
}

impl Engine for NegamaxEngine {
    fn name(&self) -> &str {
        "Ember Negamax"
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
            "depth" => match parse_option::<u8>(name, value)? {
                0 => Err(ChessError::InvalidOption {
                    name: name.to_owned(),
                    value: value.to_owned(),
                }),
                depth => {
                    self.depth_override = Some(depth);
                    Ok(())
                }
            },
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
        let result = negamax_search(
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
            "negamax search finished"
        );

        Ok(EngineOutput {
            best_move: result.best_move,
            score: Some(result.score),
            nodes: result.nodes,
            info_lines: vec![format!(
                "negamax depth={} score={} nodes={} scorer={} quiescence=on",
                depth,
                result.score,
                result.nodes,
                self.scorer.kind()
            )],
        })
    }
}
