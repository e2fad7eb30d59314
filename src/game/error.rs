//! Errors raised by the simulation core.
//!
//! Collisions are not errors: they end the round and are reported through
//! [`RoundStatus`](crate::game::types::RoundStatus).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArenaError {
    /// The requested board cannot host a round. No arena is produced.
    #[error("invalid arena configuration: {reason}")]
    InvalidConfig { reason: String },

    /// `step` was called after the round ended.
    #[error("round is already over (final score {score})")]
    RoundAlreadyOver { score: i64 },
}

impl ArenaError {
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig { reason: reason.into() }
    }
}
