//! Time-bounded 8-puzzle strategy runner.
//!
//! Loads 3x3 sliding-tile boards, runs search strategies against them under
//! a wall-clock budget and reports node counts, elapsed time and solution
//! paths, for a single file or a whole directory.

pub mod error;
pub mod puzzle;
pub mod report;
pub mod runner;
pub mod search;

pub use error::{BoardError, ConfigError, Error, StrategyError};
