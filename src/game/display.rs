//! Display collaborator.
//!
//! The core never renders anything itself: it calls into a `Display`, which
//! may draw immediately or forward the matching `DisplayEvent` to whatever
//! actually owns the screen.

use serde::{Serialize, Deserialize};

use crate::game::types::Position;

/// Everything the core can ask a display to show.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", content = "data")]
pub enum DisplayEvent {
    TargetShown { row: usize, col: usize },
    GridCleared,
    StatsUpdated { score: i64, accuracy: f64 },
    GameStatus { running: bool },
    GridInfo { rows: usize, cols: usize, title: String },
}

pub trait Display {
    fn render_target(&mut self, pos: Position);
    fn clear_grid(&mut self);
    fn render_stats(&mut self, score: i64, accuracy: f64);

    /// Running/stopped notification, e.g. to grey out a start button.
    fn game_status(&mut self, _running: bool) {}
}

/// Records events in order. Handy for replaying or inspecting what was rendered.
impl Display for Vec<DisplayEvent> {
    fn render_target(&mut self, pos: Position) {
        self.push(DisplayEvent::TargetShown { row: pos.row, col: pos.col });
    }

    fn clear_grid(&mut self) {
        self.push(DisplayEvent::GridCleared);
    }

    fn render_stats(&mut self, score: i64, accuracy: f64) {
        self.push(DisplayEvent::StatsUpdated { score, accuracy });
    }

    fn game_status(&mut self, running: bool) {
        self.push(DisplayEvent::GameStatus { running });
    }
}
