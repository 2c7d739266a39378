//! A* search and the 8-puzzle heuristics.
//!
//! - `h1`: number of misplaced tiles
//! - `h2`: sum of Manhattan distances
//! - `h3`: Manhattan distance plus two moves for every tile that has to leave
//!   its goal row or column to clear a linear conflict
//!
//! All three are admissible, so every A* variant returns an optimal path.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use crate::error::StrategyError;
use crate::puzzle::{EightPuzzle, Tiles};
use crate::search::node::NodeArena;
use crate::search::{SearchContext, SearchStrategy, Solution};

const WIDTH: usize = 3;

/// Heuristic selection for A*.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    MisplacedTiles,
    Manhattan,
    LinearConflict,
}

impl Heuristic {
    pub fn estimate(self, state: &Tiles, goal: &Tiles) -> usize {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(state, goal),
            Heuristic::Manhattan => manhattan(state, goal),
            Heuristic::LinearConflict => manhattan(state, goal) + 2 * linear_conflicts(state, goal),
        }
    }
}

/// A* graph search guided by one heuristic.
#[derive(Debug, Clone, Copy)]
pub struct AStar {
    pub heuristic: Heuristic,
}

impl AStar {
    pub fn new(heuristic: Heuristic) -> Self {
        Self { heuristic }
    }
}

impl SearchStrategy for AStar {
    fn name(&self) -> &'static str {
        match self.heuristic {
            Heuristic::MisplacedTiles => "h1",
            Heuristic::Manhattan => "h2",
            Heuristic::LinearConflict => "h3",
        }
    }

    fn search(
        &self,
        puzzle: &EightPuzzle,
        ctx: &SearchContext,
    ) -> Result<Solution, StrategyError> {
        astar_search(puzzle, self.heuristic, ctx)
    }
}

pub fn astar_search(
    puzzle: &EightPuzzle,
    heuristic: Heuristic,
    ctx: &SearchContext,
) -> Result<Solution, StrategyError> {
    let mut arena = NodeArena::new();
    let root = arena.root(puzzle.initial, ctx);

    // Min-heap on (f, insertion order); the counter makes ties FIFO
    let mut frontier = BinaryHeap::new();
    let mut best_depth: HashMap<Tiles, usize> = HashMap::from([(puzzle.initial, 0)]);
    let mut counter = 0u64;
    frontier.push(Reverse((
        heuristic.estimate(&puzzle.initial, &puzzle.goal),
        counter,
        root,
    )));

    while let Some(Reverse((_, _, index))) = frontier.pop() {
        ctx.check()?;
        let node = arena.get(index);
        if puzzle.goal_test(&node.state) {
            return Ok(arena.solution(index));
        }
        // Stale entry superseded by a cheaper path
        if best_depth
            .get(&node.state)
            .is_some_and(|&depth| depth < node.depth)
        {
            continue;
        }

        for child in arena.expand(puzzle, index, ctx) {
            let child_node = arena.get(child);
            let improves = best_depth
                .get(&child_node.state)
                .is_none_or(|&depth| child_node.depth < depth);
            if !improves {
                continue;
            }
            best_depth.insert(child_node.state, child_node.depth);
            counter += 1;
            let f = child_node.depth + heuristic.estimate(&child_node.state, &puzzle.goal);
            frontier.push(Reverse((f, counter, child)));
        }
    }

    Err(StrategyError::Exhausted)
}

/// Goal (row, column) of every tile value.
fn goal_positions(goal: &Tiles) -> [(usize, usize); 9] {
    let mut positions = [(0, 0); 9];
    for (index, &tile) in goal.iter().enumerate() {
        positions[tile as usize] = (index / WIDTH, index % WIDTH);
    }
    positions
}

pub fn misplaced_tiles(state: &Tiles, goal: &Tiles) -> usize {
    state
        .iter()
        .zip(goal)
        .filter(|&(&s, &g)| s != 0 && s != g)
        .count()
}

pub fn manhattan(state: &Tiles, goal: &Tiles) -> usize {
    let targets = goal_positions(goal);
    state
        .iter()
        .enumerate()
        .filter(|&(_, &tile)| tile != 0)
        .map(|(index, &tile)| {
            let (row, col) = (index / WIDTH, index % WIDTH);
            let (goal_row, goal_col) = targets[tile as usize];
            row.abs_diff(goal_row) + col.abs_diff(goal_col)
        })
        .sum()
}

/// Tiles that must leave their goal row or column to resolve linear conflicts.
///
/// Within one line only the tiles already in their goal line matter. Those
/// outside the longest run already in goal order have to step out and back,
/// costing two moves each on top of Manhattan distance.
pub fn linear_conflicts(state: &Tiles, goal: &Tiles) -> usize {
    let targets = goal_positions(goal);
    let mut conflicts = 0;

    for line in 0..WIDTH {
        // Goal column of each tile that already sits in its goal row, left to right
        let in_row: Vec<usize> = (0..WIDTH)
            .map(|col| state[line * WIDTH + col])
            .filter(|&tile| tile != 0 && targets[tile as usize].0 == line)
            .map(|tile| targets[tile as usize].1)
            .collect();
        conflicts += tiles_out_of_order(&in_row);

        let in_col: Vec<usize> = (0..WIDTH)
            .map(|row| state[row * WIDTH + line])
            .filter(|&tile| tile != 0 && targets[tile as usize].1 == line)
            .map(|tile| targets[tile as usize].0)
            .collect();
        conflicts += tiles_out_of_order(&in_col);
    }

    conflicts
}

/// Fewest entries to drop so the rest is increasing.
fn tiles_out_of_order(goal_indices: &[usize]) -> usize {
    // Longest increasing subsequence ending at each index
    let mut run = vec![1; goal_indices.len()];
    for i in 0..goal_indices.len() {
        for j in 0..i {
            if goal_indices[j] < goal_indices[i] {
                run[i] = run[i].max(run[j] + 1);
            }
        }
    }
    goal_indices.len() - run.into_iter().max().unwrap_or(0)
}
