//! Strategy selection and automated-opponent configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::chess_errors::ChessError;
use crate::engines::engine_greedy::GreedyEngine;
use crate::engines::engine_minimax::MinimaxEngine;
use crate::engines::engine_negamax::NegamaxEngine;
use crate::engines::engine_trait::Engine;
use crate::game_state::chess_types::Color;

pub const MIN_DIFFICULTY: u8 = 1;
pub const MAX_DIFFICULTY: u8 = 10;

#[inline]
pub fn clamp_difficulty(difficulty: u8) -> u8 {
    difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StrategyKind {
    /// One-ply material greed with difficulty-scaled random moves.
    #[default]
    Heuristic,
    Minimax,
    /// Negamax with quiescence.
    Negamax,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Heuristic,
        StrategyKind::Minimax,
        StrategyKind::Negamax,
    ];
}

impl FromStr for StrategyKind {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "heuristic" | "greedy" => Ok(StrategyKind::Heuristic),
            "minimax" => Ok(StrategyKind::Minimax),
            "negamax" => Ok(StrategyKind::Negamax),
            _ => Err(ChessError::UnknownKind {
                what: "strategy",
                name: s.to_owned(),
            }),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StrategyKind::Heuristic => "heuristic",
            StrategyKind::Minimax => "minimax",
            StrategyKind::Negamax => "negamax",
        })
    }
}

pub fn build_engine(strategy: StrategyKind, difficulty: u8) -> Box<dyn Engine> {
    match strategy {
        StrategyKind::Heuristic => Box::new(GreedyEngine::new(difficulty)),
        StrategyKind::Minimax => Box::new(MinimaxEngine::new(difficulty)),
        StrategyKind::Negamax => Box::new(NegamaxEngine::new(difficulty)),
    }
}

/// Who the automated opponent is and how it plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpponentConfig {
    pub enabled: bool,
    pub strategy: StrategyKind,
    pub difficulty: u8,
    pub side: Color,
}

impl Default for OpponentConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            strategy: StrategyKind::Heuristic,
            difficulty: 2,
            side: Color::Black,
        }
    }
}
