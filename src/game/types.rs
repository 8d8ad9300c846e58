use serde::{Serialize, Deserialize};

use crate::config::game::{GRID_ROW, GRID_COL, HIDDEN_SECS, HIDDEN_POW, SHOWN_SECS, SHOWN_POW};

/// A cell of the grid, addressed by row then column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

/// Lifecycle of the round loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Hidden,
    Shown,
}

/// Bounds and skew of a randomized phase duration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseTiming {
    pub min_secs: f64,
    pub max_secs: f64,
    pub pow: f64,
}

impl PhaseTiming {
    pub fn new((min_secs, max_secs): (f64, f64), pow: f64) -> Self {
        Self { min_secs, max_secs, pow }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameConfig {
    pub rows: usize,
    pub cols: usize,
    /// Wait before the cat appears.
    pub hidden: PhaseTiming,
    /// How long the cat stays whackable.
    pub shown: PhaseTiming,
}

impl GameConfig {
    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: GRID_ROW,
            cols: GRID_COL,
            hidden: PhaseTiming::new(HIDDEN_SECS, HIDDEN_POW),
            shown: PhaseTiming::new(SHOWN_SECS, SHOWN_POW),
        }
    }
}
