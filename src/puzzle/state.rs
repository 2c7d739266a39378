//! 8-puzzle states, moves and solvability.

use std::fmt;

use crate::puzzle::board::Board;

/// Row-major tile order, 0 is the blank.
pub type Tiles = [u8; 9];

/// Solved configuration: blank in the bottom-right corner.
pub const GOAL: Tiles = [1, 2, 3, 4, 5, 6, 7, 8, 0];

const WIDTH: usize = 3;

/// Direction the blank slides in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

impl Move {
    pub const ALL: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

    /// Single-letter symbol used in rendered paths.
    pub fn symbol(self) -> char {
        match self {
            Move::Up => 'U',
            Move::Down => 'D',
            Move::Left => 'L',
            Move::Right => 'R',
        }
    }

    /// Index of the blank after this move, if the move stays on the board.
    fn target(self, blank: usize) -> Option<usize> {
        let (row, col) = (blank / WIDTH, blank % WIDTH);
        match self {
            Move::Up if row > 0 => Some(blank - WIDTH),
            Move::Down if row < WIDTH - 1 => Some(blank + WIDTH),
            Move::Left if col > 0 => Some(blank - 1),
            Move::Right if col < WIDTH - 1 => Some(blank + 1),
            _ => None,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Up => write!(f, "UP"),
            Move::Down => write!(f, "DOWN"),
            Move::Left => write!(f, "LEFT"),
            Move::Right => write!(f, "RIGHT"),
        }
    }
}

/// One puzzle instance handed to a search strategy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EightPuzzle {
    pub initial: Tiles,
    pub goal: Tiles,
    /// Computed once at construction.
    pub solvable: bool,
}

impl EightPuzzle {
    pub fn new(initial: Tiles) -> Self {
        Self {
            initial,
            goal: GOAL,
            solvable: is_solvable(&initial),
        }
    }

    pub fn from_board(board: &Board) -> Self {
        Self::new(board.order())
    }

    pub fn goal_test(&self, state: &Tiles) -> bool {
        *state == self.goal
    }

    /// Legal moves from `state`, in `Move::ALL` order.
    pub fn actions(&self, state: &Tiles) -> impl Iterator<Item = Move> + use<> {
        let blank = blank_index(state);
        Move::ALL
            .into_iter()
            .filter(move |mv| mv.target(blank).is_some())
    }

    /// State reached by applying `mv`. Illegal moves leave the state unchanged.
    pub fn result(&self, state: &Tiles, mv: Move) -> Tiles {
        let blank = blank_index(state);
        let mut next = *state;
        if let Some(target) = mv.target(blank) {
            next.swap(blank, target);
        }
        next
    }

    /// Every state visited by replaying `moves` from the initial state, initial included.
    pub fn path_states(&self, moves: &[Move]) -> Vec<Tiles> {
        let mut states = Vec::with_capacity(moves.len() + 1);
        let mut current = self.initial;
        states.push(current);
        for &mv in moves {
            current = self.result(&current, mv);
            states.push(current);
        }
        states
    }
}

fn blank_index(state: &Tiles) -> usize {
    state.iter().position(|&t| t == 0).unwrap_or(0)
}

/// Inversion parity test. On an odd-width board a state can reach the goal iff
/// its inversion count (blank excluded) is even.
pub fn is_solvable(state: &Tiles) -> bool {
    let tiles: Vec<u8> = state.iter().copied().filter(|&t| t != 0).collect();
    let inversions = tiles
        .iter()
        .enumerate()
        .map(|(i, a)| tiles[i + 1..].iter().filter(|&&b| *a > b).count())
        .sum::<usize>();
    inversions % 2 == 0
}

/// Render a state as three rows, blank shown as `_`.
pub fn format_state(state: &Tiles) -> String {
    state
        .chunks(WIDTH)
        .map(|row| {
            row.iter()
                .map(|&t| if t == 0 { "_".to_string() } else { t.to_string() })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}
