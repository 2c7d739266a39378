//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading a puzzle board from text.
#[derive(Debug, Error)]
pub enum BoardError {
    #[error("{path} could not be opened: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("row {row}: invalid tile '{token}' (expected 0-8 or '_')")]
    InvalidToken { row: usize, token: String },
    #[error("row {row}: expected 3 tiles, found {found}")]
    RowWidth { row: usize, found: usize },
    #[error("expected 3 rows, found {0}")]
    RowCount(usize),
    #[error("tiles must be a permutation of 0-8, tile {0} appears more than once")]
    NotPermutation(u8),
}

/// Registry and strategy-name configuration errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("strategy registry is empty")]
    EmptyRegistry,
    #[error("unknown algorithm '{0}'. Valid options: bfs, ids, h1, h2, h3")]
    UnknownStrategy(String),
}

/// Reasons a strategy stops without producing a path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StrategyError {
    #[error("search space exhausted without reaching the goal")]
    Exhausted,
    #[error("search cancelled")]
    Cancelled,
}

/// Top-level error for the command-line front end.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
