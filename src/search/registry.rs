//! Strategy registry: name lookup with random fallback.

use std::fmt;
use std::str::FromStr;

use log::warn;
use rand::seq::IndexedRandom;

use crate::error::{ConfigError, StrategyError};
use crate::puzzle::EightPuzzle;
use crate::search::informed::{AStar, Heuristic};
use crate::search::uninformed::{BreadthFirst, IterativeDeepening};
use crate::search::{SearchContext, SearchStrategy, Solution};

/// Search strategy selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Breadth-first graph search.
    Bfs,
    /// Iterative deepening depth-first search.
    Ids,
    /// A* with misplaced-tiles heuristic.
    H1,
    /// A* with Manhattan-distance heuristic.
    H2,
    /// A* with Manhattan distance plus linear conflicts.
    H3,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::Bfs,
        Strategy::Ids,
        Strategy::H1,
        Strategy::H2,
        Strategy::H3,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "bfs",
            Strategy::Ids => "ids",
            Strategy::H1 => "h1",
            Strategy::H2 => "h2",
            Strategy::H3 => "h3",
        }
    }
}

impl SearchStrategy for Strategy {
    fn name(&self) -> &'static str {
        Strategy::name(*self)
    }

    fn search(
        &self,
        puzzle: &EightPuzzle,
        ctx: &SearchContext,
    ) -> Result<Solution, StrategyError> {
        match self {
            Strategy::Bfs => BreadthFirst.search(puzzle, ctx),
            Strategy::Ids => IterativeDeepening.search(puzzle, ctx),
            Strategy::H1 => AStar::new(Heuristic::MisplacedTiles).search(puzzle, ctx),
            Strategy::H2 => AStar::new(Heuristic::Manhattan).search(puzzle, ctx),
            Strategy::H3 => AStar::new(Heuristic::LinearConflict).search(puzzle, ctx),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Strategy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_lowercase();
        Strategy::ALL
            .into_iter()
            .find(|strategy| strategy.name() == name)
            .ok_or_else(|| ConfigError::UnknownStrategy(s.to_string()))
    }
}

/// The set of strategies available to a run, in report order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Registry {
    strategies: Vec<Strategy>,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            strategies: Strategy::ALL.to_vec(),
        }
    }
}

impl Registry {
    /// An empty registry cannot serve random fallbacks and is rejected.
    pub fn new(strategies: Vec<Strategy>) -> Result<Self, ConfigError> {
        if strategies.is_empty() {
            return Err(ConfigError::EmptyRegistry);
        }
        Ok(Self { strategies })
    }

    /// Parse a comma-separated list of strategy names.
    pub fn from_names(names: &str) -> Result<Self, ConfigError> {
        let strategies = names
            .split(',')
            .filter(|name| !name.trim().is_empty())
            .map(|name| name.parse::<Strategy>())
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(strategies)
    }

    pub fn strategies(&self) -> &[Strategy] {
        &self.strategies
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name()).collect()
    }

    pub fn contains(&self, strategy: Strategy) -> bool {
        self.strategies.contains(&strategy)
    }

    /// Look up `name`; unknown names fall back to a random registered strategy.
    pub fn resolve(&self, name: &str) -> Strategy {
        match name.parse::<Strategy>() {
            Ok(strategy) if self.contains(strategy) => strategy,
            _ => {
                warn!("unable to find algorithm '{}', generating random.", name);
                self.random_strategy()
            }
        }
    }

    pub fn random_strategy(&self) -> Strategy {
        // `new` guarantees at least one entry
        self.strategies
            .choose(&mut rand::rng())
            .copied()
            .unwrap_or(Strategy::Bfs)
    }
}
