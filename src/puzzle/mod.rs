//! Sliding-tile puzzle model: board files, states, moves and solvability.

pub mod board;
pub mod state;

pub use board::Board;
pub use state::{EightPuzzle, GOAL, Move, Tiles};
