//! Game configuration constants.
//! 
//! This module defines the main gameplay parameters such as grid dimensions
//! and the randomized durations of the hidden and shown phases.

/// Number of rows in the game grid.
pub const GRID_ROW: usize = 2;

/// Number of columns in the game grid.
pub const GRID_COL: usize = 3;

/// Range (in seconds) of the wait before the cat shows up.
pub const HIDDEN_SECS: (f64, f64) = (0.5, 10.0);

/// Exponent applied to the hidden wait draw. Biases toward short waits.
pub const HIDDEN_POW: f64 = 3.0;

/// Range (in seconds) during which the cat stays whackable.
pub const SHOWN_SECS: (f64, f64) = (0.6, 1.0);

/// Exponent applied to the shown duration draw (1 = plain uniform).
pub const SHOWN_POW: f64 = 1.0;

/// Title shown by displays.
pub const WINDOW_TITLE: &str = "Whack-a-Cat";
