//! Simulation core: the creature body, the arena and the rules that tie them together.
//!
//! Nothing in here blocks, spawns or touches the outside world; drivers own an [`Arena`] and call
//! into it.

pub mod types;
pub mod error;
pub mod arena;
pub mod entities;
pub mod systems;
pub mod demo;


pub use arena::{Arena, ArenaConfig, Layout, Snapshot};
pub use error::ArenaError;
pub use types::*;
