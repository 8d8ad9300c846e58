use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::display::DisplayEvent;
use crate::game::state::GameState;
use crate::game::types::Phase;

/// Start a new game. Ignored while one is running.
#[derive(Message)]
#[rtype(result = "()")]
pub struct StartGame;

#[derive(Message)]
#[rtype(result = "()")]
pub struct StopGame;

/// A click on a grid cell, forwarded from a display.
#[derive(Message, Debug, Clone, Copy)]
#[rtype(result = "()")]
pub struct SelectCell {
    pub row: usize,
    pub col: usize,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct RegisterDisplay {
    pub id: Uuid,
    pub addr: Recipient<DisplayUpdate>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct UnregisterDisplay {
    pub id: Uuid,
}

#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct GetSnapshot;

/// Read-only copy of the scheduler's state.
#[derive(Debug, Clone)]
pub struct Snapshot {
    pub phase: Phase,
    pub state: GameState,
}

/// Scheduler -> display.
#[derive(Message, Debug, Clone)]
#[rtype(result = "()")]
pub struct DisplayUpdate(pub DisplayEvent);

/// Browser -> server.
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(tag = "action", content = "data")]
pub enum ClientAction {
    Start,
    Stop,
    Select { row: usize, col: usize },
    Ping,
}
