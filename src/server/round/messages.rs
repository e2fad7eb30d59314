use actix::prelude::*;
use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::game::{ArenaError, Heading, Snapshot, StepOutcome, TerminationReason};

/// Client -> server frames, e.g. `{"action":"Turn","data":"Up"}`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "action", content = "data")]
pub enum ClientWsMessage {
    Turn(Heading),
    Ping,
}

/// Server -> client frames.
#[derive(Message, Serialize, Deserialize, Clone, Debug, PartialEq)]
#[rtype(result = "()")]
#[serde(tag = "action", content = "data")]
pub enum ServerWsMessage {
    RoundStarted {
        round_id: Uuid,
    },
    Update(Snapshot),
    RoundOver {
        reason: TerminationReason,
        score: i64,
    },
}

#[derive(Message)]
#[rtype(result = "bool")]
pub struct RequestHeading {
    pub heading: Heading,
}

#[derive(Message)]
#[rtype(result = "Snapshot")]
pub struct GetSnapshot;

/// Step the round once, outside the tick timer.
#[derive(Message)]
#[rtype(result = "Result<StepOutcome, ArenaError>")]
pub struct Tick;

#[derive(Message)]
#[rtype(result = "()")]
pub struct Register {
    pub observer_id: Uuid,
    pub addr: Recipient<ServerWsMessage>,
}

#[derive(Message)]
#[rtype(result = "()")]
pub struct Unregister {
    pub observer_id: Uuid,
}
