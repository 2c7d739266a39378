//! Puzzle file parser.
//!
//! A board file holds three lines of three whitespace-separated tiles. Tiles
//! are the digits 0-8; `_` is accepted as an alias for the blank (0).

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::BoardError;

/// Symbol accepted in input files for the blank tile.
pub const BLANK_SYMBOL: &str = "_";

/// A validated 3x3 tile layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    rows: [[u8; 3]; 3],
}

impl Board {
    /// Build a board from rows, checking that the tiles are a permutation of 0-8.
    pub fn from_rows(rows: [[u8; 3]; 3]) -> Result<Self, BoardError> {
        let mut seen = [false; 9];
        for (i, row) in rows.iter().enumerate() {
            for &tile in row {
                if tile > 8 {
                    return Err(BoardError::InvalidToken {
                        row: i + 1,
                        token: tile.to_string(),
                    });
                }
                if seen[tile as usize] {
                    return Err(BoardError::NotPermutation(tile));
                }
                seen[tile as usize] = true;
            }
        }
        Ok(Self { rows })
    }

    /// Parse board text. Blank lines are ignored.
    pub fn parse(text: &str) -> Result<Self, BoardError> {
        let mut rows = Vec::with_capacity(3);

        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let row = rows.len() + 1;
            let tiles = line
                .split_whitespace()
                .map(|token| parse_tile(row, token))
                .collect::<Result<Vec<_>, _>>()?;
            let tiles: [u8; 3] = tiles
                .as_slice()
                .try_into()
                .map_err(|_| BoardError::RowWidth {
                    row,
                    found: tiles.len(),
                })?;
            rows.push(tiles);
        }

        let rows: [[u8; 3]; 3] = rows
            .as_slice()
            .try_into()
            .map_err(|_| BoardError::RowCount(rows.len()))?;
        Self::from_rows(rows)
    }

    /// Read and parse a board file.
    pub fn load(path: &Path) -> Result<Self, BoardError> {
        let text = fs::read_to_string(path).map_err(|source| BoardError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text)
    }

    /// Row-major tile order, blank as 0.
    pub fn order(&self) -> [u8; 9] {
        let mut order = [0; 9];
        for (dst, &tile) in order.iter_mut().zip(self.rows.iter().flatten()) {
            *dst = tile;
        }
        order
    }
}

fn parse_tile(row: usize, token: &str) -> Result<u8, BoardError> {
    if token == BLANK_SYMBOL {
        return Ok(0);
    }
    match token.parse::<u8>() {
        Ok(tile) if tile <= 8 => Ok(tile),
        _ => Err(BoardError::InvalidToken {
            row,
            token: token.to_string(),
        }),
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{} {} {}", row[0], row[1], row[2])?;
        }
        Ok(())
    }
}
