//! Engine abstraction layer used by the game controller.
//!
//! Defines common input parameters and output payloads so different search
//! strategies can be selected at runtime behind a single trait interface.

use std::path::PathBuf;

use crate::chess_errors::ChessError;
use crate::game_state::{board::Board, chess_types::Color};
use crate::moves::move_descriptions::Move;
use crate::search::board_scoring::{BoardScorer, ScorerKind};
use crate::search::learned_scorer::{LearnedScorer, DEFAULT_NETWORK_SEED};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchParams {
    /// Overrides the engine's difficulty-derived depth when set.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub score: Option<i32>,
    pub nodes: u64,
    pub info_lines: Vec<String>,
}

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn set_option(&mut self, name: &str, _value: &str) -> Result<(), ChessError> {
        Err(ChessError::UnknownOption(name.to_owned()))
    }

    /// Picks a move for `side` on `board`. `best_move` is `None` exactly when
    /// `side` has no legal move.
    fn choose_move(
        &mut self,
        board: &Board,
        side: Color,
        params: &SearchParams,
    ) -> Result<EngineOutput, ChessError>;
}

pub(crate) fn parse_option<T: std::str::FromStr>(
    name: &str,
    value: &str,
) -> Result<T, ChessError> {
    value.trim().parse().map_err(|_| ChessError::InvalidOption {
        name: name.to_owned(),
        value: value.to_owned(),
    })
}

/// Evaluation slot shared by the searching engines: the selected scorer plus
/// the settings the learned scorer is rebuilt from.
pub(crate) struct ScorerSlot {
    kind: ScorerKind,
    network_seed: u64,
    model_path: Option<PathBuf>,
    scorer: Box<dyn BoardScorer>,
}

impl ScorerSlot {
    pub(crate) fn new(kind: ScorerKind) -> Self {
        Self {
            kind,
            network_seed: DEFAULT_NETWORK_SEED,
            model_path: None,
            scorer: kind.build(),
        }
    }

    pub(crate) fn kind(&self) -> ScorerKind {
        self.kind
    }

    pub(crate) fn scorer(&self) -> &dyn BoardScorer {
        self.scorer.as_ref()
    }

    /// Handles `Scorer`, `Seed` and `ModelPath`; `None` for any other name.
    pub(crate) fn set_option(
        &mut self,
        name: &str,
        value: &str,
    ) -> Option<Result<(), ChessError>> {
        let result = match name.trim().to_ascii_lowercase().as_str() {
            "scorer" => value.parse().map(|kind| self.kind = kind),
            "seed" => parse_option(name, value).map(|seed| self.network_seed = seed),
            "modelpath" => {
                let path = value.trim();
                self.model_path = (!path.is_empty()).then(|| PathBuf::from(path));
                Ok(())
            }
            _ => return None,
        };
        if result.is_ok() {
            self.rebuild();
        }
        Some(result)
    }

    fn rebuild(&mut self) {
        self.scorer = match (self.kind, &self.model_path) {
            (ScorerKind::Learned, Some(path)) => {
                Box::new(LearnedScorer::load_or_seeded(path, self.network_seed))
            }
            (ScorerKind::Learned, None) => Box::new(LearnedScorer::seeded(self.network_seed)),
            (kind, _) => kind.build(),
        };
    }
}
