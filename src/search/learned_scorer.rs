//! Deterministic pseudo-learned evaluation.
//!
//! A tiny feed-forward network (64 inputs, one `tanh` hidden layer, one
//! output) whose weights come either from a fixed-seed generator or from a
//! JSON weight file. The network only nudges the material balance by at most
//! `LEARNED_ADJUSTMENT_SPAN` centipawns.

use std::fs;
use std::path::Path;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::chess_errors::{ChessError, ChessResult};
use crate::game_state::{board::Board, chess_types::*};
use crate::search::board_scoring::{BoardScorer, MaterialScorer};

pub const INPUT_SIZE: usize = 64;
pub const HIDDEN_SIZE: usize = 16;
pub const DEFAULT_NETWORK_SEED: u64 = 0x5EED_C0DE;
pub const LEARNED_ADJUSTMENT_SPAN: f32 = 50.0;

const INIT_RANGE: f32 = 0.125;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkWeights {
    /// `HIDDEN_SIZE` rows of `INPUT_SIZE` weights.
    pub input_hidden: Vec<Vec<f32>>,
    pub hidden_bias: Vec<f32>,
    pub hidden_output: Vec<f32>,
    pub output_bias: f32,
}

impl NetworkWeights {
    pub fn seeded(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut sample = || rng.random_range(-INIT_RANGE..INIT_RANGE);
        let input_hidden = (0..HIDDEN_SIZE)
            .map(|_| (0..INPUT_SIZE).map(|_| sample()).collect())
            .collect();
        let hidden_bias = (0..HIDDEN_SIZE).map(|_| sample()).collect();
        let hidden_output = (0..HIDDEN_SIZE).map(|_| sample()).collect();
        let output_bias = sample();
        Self {
            input_hidden,
            hidden_bias,
            hidden_output,
            output_bias,
        }
    }

    fn validate(&self) -> ChessResult<()> {
        if self.input_hidden.len() != HIDDEN_SIZE {
            return Err(ChessError::ModelShape(format!(
                "expected {HIDDEN_SIZE} hidden rows, found {}",
                self.input_hidden.len()
            )));
        }
        if let Some(row) = self.input_hidden.iter().find(|row| row.len() != INPUT_SIZE) {
            return Err(ChessError::ModelShape(format!(
                "expected {INPUT_SIZE} inputs per hidden row, found {}",
                row.len()
            )));
        }
        if self.hidden_bias.len() != HIDDEN_SIZE || self.hidden_output.len() != HIDDEN_SIZE {
            return Err(ChessError::ModelShape(format!(
                "expected {HIDDEN_SIZE} hidden biases and output weights, found {} and {}",
                self.hidden_bias.len(),
                self.hidden_output.len()
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct LearnedScorer {
    weights: NetworkWeights,
}

impl LearnedScorer {
    pub fn seeded(seed: u64) -> Self {
        Self {
            weights: NetworkWeights::seeded(seed),
        }
    }

    pub fn from_weights(weights: NetworkWeights) -> ChessResult<Self> {
        weights.validate()?;
        Ok(Self { weights })
    }

    /// Reads JSON weights from `path`.
    pub fn load(path: impl AsRef<Path>) -> ChessResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ChessError::ModelIo {
            path: path.to_path_buf(),
            source,
        })?;
        let weights: NetworkWeights =
            serde_json::from_str(&text).map_err(|source| ChessError::ModelFormat {
                path: path.to_path_buf(),
                source,
            })?;
        Self::from_weights(weights)
    }

    /// External model when `path` holds a usable one, seeded network
    /// otherwise.
    pub fn load_or_seeded(path: impl AsRef<Path>, seed: u64) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            info!(?path, seed, "no model file; using seeded network");
            return Self::seeded(seed);
        }
        match Self::load(path) {
            Ok(scorer) => {
                info!(?path, "loaded external evaluation model");
                scorer
            }
            Err(err) => {
                warn!(%err, seed, "model file unusable; using seeded network");
                Self::seeded(seed)
            }
        }
    }

    pub fn weights(&self) -> &NetworkWeights {
        &self.weights
    }

    /// Board features: signed piece value in thousands of centipawns,
    /// positive for `perspective`, one entry per square.
    fn encode(board: &Board, perspective: Color) -> [f32; INPUT_SIZE] {
        let mut features = [0f32; INPUT_SIZE];
        for piece in board.pieces() {
            let index = (piece.square.row() as usize) * 8 + piece.square.col() as usize;
            let value = MaterialScorer::piece_value(piece.kind).min(1000) as f32 / 1000.0;
            features[index] = if piece.color == perspective { value } else { -value };
        }
        features
    }

    /// Raw network output in `(-1, 1)`.
    pub fn network_output(&self, board: &Board, perspective: Color) -> f32 {
        let features = Self::encode(board, perspective);
        let w = &self.weights;
        let hidden_sum: f32 = w
            .input_hidden
            .iter()
            .zip(&w.hidden_bias)
            .zip(&w.hidden_output)
            .map(|((row, bias), out_weight)| {
                let pre: f32 = row.iter().zip(&features).map(|(a, b)| a * b).sum::<f32>() + bias;
                pre.tanh() * out_weight
            })
            .sum();
        (hidden_sum + w.output_bias).tanh()
    }
}

impl BoardScorer for LearnedScorer {
    fn score(&self, board: &Board, perspective: Color) -> i32 {
        let adjustment = self.network_output(board, perspective) * LEARNED_ADJUSTMENT_SPAN;
        MaterialScorer::material_balance(board, perspective) + adjustment.round() as i32
    }
}
