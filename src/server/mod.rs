// src/server/mod.rs

//! Server layer root module.
//!
//! This module organizes the actor runtime around the game core, including:
//! - The round scheduler actor (phase timers, selections, broadcasting)
//! - Display WebSocket sessions and their JSON protocol
//! - HTTP routing and shared application state

pub mod state;
pub mod router;
pub mod messages;
pub mod scheduler;
pub mod session;
pub mod ws_error;
