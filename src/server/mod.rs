// src/server/mod.rs

//! Server layer root module.
//!
//! This module drives rounds over the network:
//! - Application state management
//! - HTTP/WebSocket routing
//! - Round orchestration (tick timer, direction requests, observers)

pub mod state;
pub mod router;
pub mod round;
pub mod ws_error;
