/// Round driver configuration constants.
///
/// This module defines the tick rate and where the server listens.

/// Ticks per second.
pub const TICKS_PER_SECOND: u64 = 15;

/// Interval between two simulation steps, in milliseconds.
pub const TICK_INTERVAL_MS: u64 = 1000 / TICKS_PER_SECOND;

/// Address the HTTP/WebSocket server binds to.
pub const BIND_HOST: &str = "127.0.0.1";

pub const BIND_PORT: u16 = 8080;
