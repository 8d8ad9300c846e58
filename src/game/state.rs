use serde::{Serialize, Deserialize};

use crate::game::types::Position;
use crate::game::utils::round_to;

/// Whether the cat can be whacked right now, and where it sits.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct RoundState {
    pub is_target_active: bool,
    pub target_position: Position,
}

impl RoundState {
    pub fn reset(&mut self) {
        self.is_target_active = false;
        self.target_position = Position::default();
    }
}

/// Hit/miss counters and the statistics derived from them.
///
/// Counters only change through `register_hit`, `register_miss` and `reset`;
/// each of them recomputes `score` and `accuracy` before returning.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub hit_count: u32,
    pub miss_count: u32,
    pub shown_count: u32,
    pub score: i64,
    /// "Whackuracy", rounded to two decimals.
    pub accuracy: f64,
    pub round: RoundState,
}

impl GameState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register_hit(&mut self) {
        self.hit_count += 1;
        self.recompute();
    }

    /// Counts a miss when `counts` is set. Always refreshes the derived stats,
    /// so an expired target can update them without penalizing the player.
    pub fn register_miss(&mut self, counts: bool) {
        if counts {
            self.miss_count += 1;
        }
        self.recompute();
    }

    pub fn reset(&mut self) {
        self.round.reset();
        self.shown_count = 0;
        self.hit_count = 0;
        self.miss_count = 0;
        self.recompute();
    }

    /// Rewrites `score` and `accuracy` from the counters.
    pub fn recompute(&mut self) {
        self.score = i64::from(self.hit_count) - i64::from(self.miss_count);

        // Misses during a shown phase land in both terms of the denominator.
        let ratio_div = self.shown_count + self.miss_count;
        let ratio = if ratio_div > 0 {
            f64::from(self.hit_count) / f64::from(ratio_div)
        } else {
            0.0
        };
        self.accuracy = round_to(ratio, 2);
    }
}
