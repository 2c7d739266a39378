//! Uninformed search: breadth-first graph search and iterative deepening.

use std::collections::{HashSet, VecDeque};

use crate::error::StrategyError;
use crate::puzzle::{EightPuzzle, Move, Tiles};
use crate::search::node::NodeArena;
use crate::search::{SearchContext, SearchStrategy, Solution};

/// Breadth-first graph search. Finds a shortest path; memory grows with the frontier.
#[derive(Debug, Clone, Copy, Default)]
pub struct BreadthFirst;

impl SearchStrategy for BreadthFirst {
    fn name(&self) -> &'static str {
        "bfs"
    }

    fn search(
        &self,
        puzzle: &EightPuzzle,
        ctx: &SearchContext,
    ) -> Result<Solution, StrategyError> {
        breadth_first_graph_search(puzzle, ctx)
    }
}

/// Goal test happens when a child is generated, not when it is expanded.
pub fn breadth_first_graph_search(
    puzzle: &EightPuzzle,
    ctx: &SearchContext,
) -> Result<Solution, StrategyError> {
    let mut arena = NodeArena::new();
    let root = arena.root(puzzle.initial, ctx);
    if puzzle.goal_test(&puzzle.initial) {
        return Ok(arena.solution(root));
    }

    let mut frontier = VecDeque::from([root]);
    // Explored states plus states currently on the frontier
    let mut reached: HashSet<Tiles> = HashSet::from([puzzle.initial]);

    while let Some(index) = frontier.pop_front() {
        ctx.check()?;
        for child in arena.expand(puzzle, index, ctx) {
            let state = arena.get(child).state;
            if !reached.insert(state) {
                continue;
            }
            if puzzle.goal_test(&state) {
                return Ok(arena.solution(child));
            }
            frontier.push_back(child);
        }
    }

    Err(StrategyError::Exhausted)
}

/// Iterative deepening depth-first search.
#[derive(Debug, Clone, Copy, Default)]
pub struct IterativeDeepening;

impl SearchStrategy for IterativeDeepening {
    fn name(&self) -> &'static str {
        "ids"
    }

    fn search(
        &self,
        puzzle: &EightPuzzle,
        ctx: &SearchContext,
    ) -> Result<Solution, StrategyError> {
        iterative_deepening_search(puzzle, ctx)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Depth {
    Found,
    Cutoff,
    Failure,
}

pub fn iterative_deepening_search(
    puzzle: &EightPuzzle,
    ctx: &SearchContext,
) -> Result<Solution, StrategyError> {
    for limit in 0.. {
        ctx.count_node();
        let mut path = vec![puzzle.initial];
        let mut moves = Vec::new();
        match depth_limited(puzzle, puzzle.initial, limit, &mut path, &mut moves, ctx)? {
            Depth::Found => return Ok(Solution::new(moves)),
            Depth::Cutoff => continue,
            Depth::Failure => break,
        }
    }
    Err(StrategyError::Exhausted)
}

/// Depth-limited DFS that never revisits a state already on the current path.
fn depth_limited(
    puzzle: &EightPuzzle,
    state: Tiles,
    limit: usize,
    path: &mut Vec<Tiles>,
    moves: &mut Vec<Move>,
    ctx: &SearchContext,
) -> Result<Depth, StrategyError> {
    ctx.check()?;
    if puzzle.goal_test(&state) {
        return Ok(Depth::Found);
    }
    if limit == 0 {
        return Ok(Depth::Cutoff);
    }

    let mut cutoff = false;
    for mv in puzzle.actions(&state) {
        let child = puzzle.result(&state, mv);
        ctx.count_node();
        if path.contains(&child) {
            continue;
        }

        path.push(child);
        moves.push(mv);
        match depth_limited(puzzle, child, limit - 1, path, moves, ctx)? {
            Depth::Found => return Ok(Depth::Found),
            Depth::Cutoff => cutoff = true,
            Depth::Failure => {}
        }
        path.pop();
        moves.pop();
    }

    Ok(if cutoff { Depth::Cutoff } else { Depth::Failure })
}
