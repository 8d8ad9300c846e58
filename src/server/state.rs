//! Application state for the server.
//!
//! Holds the round scheduler address and the grid configuration, shared
//! between HTTP/WebSocket handlers.

use actix::Addr;

use crate::game::types::GameConfig;
use crate::server::scheduler::RoundScheduler;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the round scheduler actor (owns the game).
    pub scheduler: Addr<RoundScheduler>,
    /// Grid and timing configuration, used to validate selections early.
    pub config: GameConfig,
}

impl AppState {
    pub fn new(scheduler: Addr<RoundScheduler>, config: GameConfig) -> Self {
        AppState { scheduler, config }
    }
}
