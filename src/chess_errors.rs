//! Errors used throughout the chess core.
//!
//! Rule violations (illegal selections, illegal move proposals) are not
//! errors: they come back from the controller as `false` and leave the game
//! untouched. `ChessError` covers the recoverable faults around the rules:
//! engine configuration, engine failures and external model files.
//!
//! Usage guidelines:
//! - Engines return `Result<_, ChessError>`; the controller logs the error and
//!   falls back to the first legal move rather than propagating it.
//! - Model-file variants are reported by `LearnedScorer::load` and absorbed by
//!   `LearnedScorer::load_or_seeded`, which falls back to seeded weights.

use std::path::PathBuf;

/// Unified error type for the chess core.
#[derive(Debug, thiserror::Error)]
pub enum ChessError {
    /// An engine option name that the engine does not recognise.
    #[error("unknown engine option '{0}'")]
    UnknownOption(String),

    /// A recognised option with a value that cannot be used.
    #[error("invalid value '{value}' for engine option '{name}'")]
    InvalidOption { name: String, value: String },

    /// A strategy or scorer name that does not match any known kind.
    #[error("unknown {what} '{name}'")]
    UnknownKind { what: &'static str, name: String },

    /// The engine could not produce a result for an internal reason.
    #[error("engine failure: {0}")]
    EngineFailure(String),

    /// The model file could not be read.
    #[error("failed to read model file {path:?}: {source}")]
    ModelIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model file is not valid JSON for the expected weight layout.
    #[error("failed to parse model file {path:?}: {source}")]
    ModelFormat {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Weight tensors have the wrong dimensions.
    #[error("model weights have wrong shape: {0}")]
    ModelShape(String),
}

pub type ChessResult<T> = Result<T, ChessError>;
