//! Errors raised at the edges of the simulation (level data, config, phase
//! misuse). The per-tick physics never fails.

use thiserror::Error;

use crate::level::progression::Phase;

#[derive(Debug, Error)]
pub enum LevelError {
    /// Level or config JSON could not be parsed.
    #[error("malformed level data: {0}")]
    Json(#[from] serde_json::Error),

    /// A rectangle in a level descriptor has a non-positive size.
    #[error("level {level}: {what} #{index} has non-positive size")]
    InvalidRect {
        level: String,
        what: &'static str,
        index: usize,
    },

    #[error("level catalog is empty")]
    EmptyCatalog,

    #[error("level index {index} out of range (catalog has {len} levels)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("operation not allowed in phase {0:?}")]
    WrongPhase(Phase),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, LevelError>;
