// src/server/state.rs

//! Application state for the server.
//!
//! Holds the address of the round manager, shared between HTTP/WebSocket handlers.

use actix::Addr;
use crate::server::round::server::RoundManager;

/// Shared application state, injected into HTTP/WebSocket handlers.
pub struct AppState {
    /// Address of the round manager actor (creates and tracks rounds).
    pub round_manager: Addr<RoundManager>,
}

impl AppState {
    pub fn new(round_manager: Addr<RoundManager>) -> Self {
        AppState { round_manager }
    }
}
