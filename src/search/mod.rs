//! Search strategies for the 8-puzzle.
//!
//! Every strategy receives a fresh [`EightPuzzle`] and a [`SearchContext`].
//! The context carries two pieces of per-run instrumentation:
//! - a node counter bumped once per generated search node
//! - a cancellation token checked between expansions, so a run that lost the
//!   race against its time budget stops on its own

pub mod informed;
pub mod node;
pub mod registry;
pub mod uninformed;

pub use registry::{Registry, Strategy};

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

use crate::error::StrategyError;
use crate::puzzle::{EightPuzzle, Move};

/// Trait for search algorithms that turn a puzzle into a move sequence.
pub trait SearchStrategy {
    /// Registry name of the strategy.
    fn name(&self) -> &'static str;

    /// Search for a path from `puzzle.initial` to `puzzle.goal`.
    ///
    /// # Returns
    /// The solving move sequence, `StrategyError::Exhausted` if the reachable
    /// space holds no goal, or `StrategyError::Cancelled` once `ctx` is cancelled.
    fn search(
        &self,
        puzzle: &EightPuzzle,
        ctx: &SearchContext,
    ) -> Result<Solution, StrategyError>;
}

/// Cooperative cancellation flag shared between the executor and a strategy.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }
}

/// Per-run instrumentation handed to a strategy.
#[derive(Debug, Clone, Default)]
pub struct SearchContext {
    cancel: CancelToken,
    nodes: Arc<AtomicU64>,
}

impl SearchContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.is_cancelled()
    }

    /// Bail out with `Cancelled` if the run has been cancelled.
    pub fn check(&self) -> Result<(), StrategyError> {
        if self.is_cancelled() {
            Err(StrategyError::Cancelled)
        } else {
            Ok(())
        }
    }

    /// Record one generated node.
    pub fn count_node(&self) {
        self.nodes.fetch_add(1, Ordering::Relaxed);
    }

    /// Nodes generated so far.
    pub fn nodes_generated(&self) -> u64 {
        self.nodes.load(Ordering::Relaxed)
    }
}

/// A solving move sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Solution {
    pub moves: Vec<Move>,
}

impl Solution {
    pub fn new(moves: Vec<Move>) -> Self {
        Self { moves }
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    /// Moves rendered as one letter each, e.g. `DR`.
    pub fn path_string(&self) -> String {
        self.moves.iter().map(|mv| mv.symbol()).collect()
    }
}
