//! Round state machine.
//!
//! `Idle -> Hidden -> Shown -> Hidden -> ... -> Idle`. This module only
//! performs the transitions; waiting out the phase durations is the
//! caller's job (see `server::scheduler`).

use std::time::Duration;

use log::{debug, warn};
use rand::Rng;

use crate::game::display::Display;
use crate::game::state::GameState;
use crate::game::types::{GameConfig, Phase, Position};
use crate::game::utils::{randrange_pow, random_cell};

/// Result of a player selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectOutcome {
    Hit,
    Miss,
    /// Out of the grid; nothing was counted.
    Ignored,
}

pub struct Round {
    config: GameConfig,
    state: GameState,
    phase: Phase,
    hits_at_show: u32,
}

impl Round {
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            state: GameState::new(),
            phase: Phase::Idle,
            hits_at_show: 0,
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase != Phase::Idle
    }

    /// Reset everything and enter the first hidden phase.
    /// Returns false (and changes nothing) if a game is already running.
    pub fn start(&mut self, display: &mut impl Display) -> bool {
        if self.is_running() {
            return false;
        }
        self.state.reset();
        self.hits_at_show = 0;
        display.game_status(true);
        self.enter_hidden(display);
        true
    }

    /// Back to `Idle`. The target is withdrawn but statistics are kept for display.
    pub fn stop(&mut self, display: &mut impl Display) {
        if !self.is_running() {
            return;
        }
        self.phase = Phase::Idle;
        self.state.round.is_target_active = false;
        display.clear_grid();
        display.game_status(false);
    }

    pub fn hidden_duration<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        randrange_pow(rng, &self.config.hidden)
    }

    pub fn shown_duration<R: Rng + ?Sized>(&self, rng: &mut R) -> Duration {
        randrange_pow(rng, &self.config.shown)
    }

    /// `Hidden -> Shown`: place the cat on a random cell and make it whackable.
    /// Returns `None` outside the hidden phase.
    pub fn show_target<R: Rng + ?Sized>(&mut self, rng: &mut R, display: &mut impl Display) -> Option<Position> {
        if self.phase != Phase::Hidden {
            return None;
        }
        self.hits_at_show = self.state.hit_count;
        self.state.shown_count += 1;

        let pos = random_cell(rng, self.config.rows, self.config.cols);
        self.state.round.target_position = pos;
        self.state.round.is_target_active = true;
        self.phase = Phase::Shown;

        debug!("[Round] Target shown at ({}, {}), shown_count={}", pos.row, pos.col, self.state.shown_count);
        display.render_target(pos);
        Some(pos)
    }

    /// `Shown -> Hidden`: the cat leaves. An unwhacked cat only refreshes the stats.
    /// Returns false outside the shown phase.
    pub fn hide_target(&mut self, display: &mut impl Display) -> bool {
        if self.phase != Phase::Shown {
            return false;
        }
        if self.hits_at_show == self.state.hit_count {
            self.state.register_miss(false);
        }
        self.state.round.is_target_active = false;
        self.enter_hidden(display);
        true
    }

    /// Handle a click on `(row, col)`. Valid in any phase: clicking while no
    /// cat is whackable is always a miss.
    pub fn select_cell(&mut self, row: usize, col: usize, display: &mut impl Display) -> SelectOutcome {
        let pos = Position::new(row, col);
        if !self.config.contains(pos) {
            warn!("[Round] Ignoring selection outside the grid: ({}, {})", row, col);
            return SelectOutcome::Ignored;
        }

        let round = self.state.round;
        let outcome = if round.is_target_active && round.target_position == pos {
            self.state.register_hit();
            self.state.round.is_target_active = false;
            display.clear_grid();
            SelectOutcome::Hit
        } else {
            // A wrong cell leaves the target up until its timer expires.
            self.state.register_miss(true);
            SelectOutcome::Miss
        };

        debug!("[Round] Selection ({}, {}) -> {:?}", row, col, outcome);
        display.render_stats(self.state.score, self.state.accuracy);
        outcome
    }

    fn enter_hidden(&mut self, display: &mut impl Display) {
        self.phase = Phase::Hidden;
        display.clear_grid();
        display.render_stats(self.state.score, self.state.accuracy);
    }
}
