//! Search tree nodes stored in an index arena.

use crate::puzzle::{EightPuzzle, Move, Tiles};
use crate::search::{SearchContext, Solution};

/// A node of the search tree.
#[derive(Debug, Clone)]
pub struct Node {
    pub state: Tiles,
    pub parent: Option<usize>,
    pub action: Option<Move>,
    /// Path cost from the root; every move costs 1.
    pub depth: usize,
}

/// Owns every node generated during one search. Parents are arena indices.
#[derive(Debug, Default)]
pub struct NodeArena {
    nodes: Vec<Node>,
}

impl NodeArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn root(&mut self, state: Tiles, ctx: &SearchContext) -> usize {
        ctx.count_node();
        self.nodes.push(Node {
            state,
            parent: None,
            action: None,
            depth: 0,
        });
        self.nodes.len() - 1
    }

    pub fn get(&self, index: usize) -> &Node {
        &self.nodes[index]
    }

    /// Generate every child of `index`, returning their arena indices.
    pub fn expand(&mut self, puzzle: &EightPuzzle, index: usize, ctx: &SearchContext) -> Vec<usize> {
        let parent = self.nodes[index].clone();
        puzzle
            .actions(&parent.state)
            .map(|mv| {
                ctx.count_node();
                self.nodes.push(Node {
                    state: puzzle.result(&parent.state, mv),
                    parent: Some(index),
                    action: Some(mv),
                    depth: parent.depth + 1,
                });
                self.nodes.len() - 1
            })
            .collect()
    }

    /// Walk parent links back to the root.
    pub fn solution(&self, mut index: usize) -> Solution {
        let mut moves = Vec::with_capacity(self.nodes[index].depth);
        while let Some(parent) = self.nodes[index].parent {
            if let Some(mv) = self.nodes[index].action {
                moves.push(mv);
            }
            index = parent;
        }
        moves.reverse();
        Solution::new(moves)
    }
}
