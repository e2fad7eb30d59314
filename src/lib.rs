//! Grid snake simulation.
//!
//! [`game`] holds the simulation core (body, arena, rules). [`server`] hosts rounds in actix
//! actors and streams them over WebSocket. [`config`] groups the tunable constants.

pub mod config;
pub mod game;
pub mod server;
