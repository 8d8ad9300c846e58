//! Game core.
//!
//! Statistics, the round state machine and the display collaborator trait.
//! Nothing here sleeps or touches the network.

pub mod types;
pub mod utils;
pub mod state;
pub mod display;
pub mod round;

#[cfg(test)]
mod tests;

pub use display::{Display, DisplayEvent};
pub use round::{Round, SelectOutcome};
pub use state::{GameState, RoundState};
pub use types::{GameConfig, Phase, PhaseTiming, Position};
