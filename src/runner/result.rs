//! Per-run result types.

use std::fmt;
use std::time::Duration;

use crate::puzzle::Move;
use crate::search::Solution;

/// How a (strategy, puzzle) run ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    Solved,
    TimedOut,
    /// The puzzle cannot reach the goal; no strategy was started.
    Unsolvable,
    /// The strategy failed or panicked.
    Failed(String),
}

/// Node count, or the unknown marker when the run was abandoned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCount {
    Known(u64),
    Unknown,
}

impl fmt::Display for NodeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeCount::Known(n) => write!(f, "{}", n),
            NodeCount::Unknown => write!(f, "<<?>>"),
        }
    }
}

/// Metrics of one (strategy, puzzle) pairing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunResult {
    pub outcome: RunOutcome,
    pub elapsed: Duration,
    pub nodes: NodeCount,
    /// Moves of the solution; empty unless solved.
    pub moves: Vec<Move>,
}

impl RunResult {
    pub fn solved(solution: Solution, nodes: u64, elapsed: Duration) -> Self {
        Self {
            outcome: RunOutcome::Solved,
            elapsed,
            nodes: NodeCount::Known(nodes),
            moves: solution.moves,
        }
    }

    /// Elapsed time is pinned to the budget ceiling.
    pub fn timed_out(budget: Duration) -> Self {
        Self {
            outcome: RunOutcome::TimedOut,
            elapsed: budget,
            nodes: NodeCount::Unknown,
            moves: Vec::new(),
        }
    }

    pub fn unsolvable() -> Self {
        Self {
            outcome: RunOutcome::Unsolvable,
            elapsed: Duration::ZERO,
            nodes: NodeCount::Unknown,
            moves: Vec::new(),
        }
    }

    pub fn failed(cause: impl Into<String>, nodes: u64, elapsed: Duration) -> Self {
        Self {
            outcome: RunOutcome::Failed(cause.into()),
            elapsed,
            nodes: NodeCount::Known(nodes),
            moves: Vec::new(),
        }
    }

    pub fn is_solved(&self) -> bool {
        self.outcome == RunOutcome::Solved
    }

    /// Number of moves, only available for solved runs.
    pub fn path_length(&self) -> Option<usize> {
        self.is_solved().then_some(self.moves.len())
    }

    /// One letter per move, only available for solved runs.
    pub fn path_string(&self) -> Option<String> {
        self.is_solved()
            .then(|| self.moves.iter().map(|mv| mv.symbol()).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solved_fields() {
        let result = RunResult::solved(
            Solution::new(vec![Move::Down, Move::Right]),
            7,
            Duration::from_millis(3),
        );
        assert!(result.is_solved());
        assert_eq!(result.nodes, NodeCount::Known(7));
        assert_eq!(result.path_length(), Some(2));
        assert_eq!(result.path_string().as_deref(), Some("DR"));
    }

    #[test]
    fn test_timed_out_fields() {
        let budget = Duration::from_secs(900);
        let result = RunResult::timed_out(budget);
        assert_eq!(result.outcome, RunOutcome::TimedOut);
        assert_eq!(result.elapsed, budget);
        assert_eq!(result.nodes, NodeCount::Unknown);
        assert_eq!(result.path_length(), None);
        assert_eq!(result.path_string(), None);
    }

    #[test]
    fn test_node_count_display() {
        assert_eq!(NodeCount::Known(12).to_string(), "12");
        assert_eq!(NodeCount::Unknown.to_string(), "<<?>>");
    }
}
