//! Game entities module.
//!
//! This module organizes the creature body and the placement of items and obstacles.

pub mod body;
pub mod placement;

pub use body::*;
pub use placement::*;
