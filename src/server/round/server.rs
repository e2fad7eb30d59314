use actix::prelude::*;
use actix::MessageResult;
use std::collections::HashMap;
use std::time::Duration;
use uuid::Uuid;
use log::{debug, info, warn};

use crate::config::round::TICK_INTERVAL_MS;
use crate::game::{Arena, ArenaConfig, ArenaError, RoundStatus, StepOutcome};
use crate::server::round::messages::{
    GetSnapshot, Register, RequestHeading, ServerWsMessage, Tick, Unregister,
};

/// Hosts one round. The arena only changes inside this actor's handlers, so a direction request
/// can never land in the middle of a tick.
///
/// The round is idle until the first accepted direction request, then steps every
/// `tick_interval` and pushes a snapshot to every observer after each step.
pub struct RoundSession {
    pub round_id: Uuid,
    arena: Arena,
    observers: HashMap<Uuid, Recipient<ServerWsMessage>>,
    tick_interval: Duration,
    tick_timer: Option<SpawnHandle>,
    manager: Option<Addr<RoundManager>>,
}

impl RoundSession {
    pub fn new(round_id: Uuid, arena: Arena) -> Self {
        Self {
            round_id,
            arena,
            observers: HashMap::new(),
            tick_interval: Duration::from_millis(TICK_INTERVAL_MS),
            tick_timer: None,
            manager: None,
        }
    }

    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_manager(mut self, manager: Addr<RoundManager>) -> Self {
        self.manager = Some(manager);
        self
    }

    fn broadcast(&self, msg: ServerWsMessage) {
        for addr in self.observers.values() {
            addr.do_send(msg.clone());
        }
    }

    fn start_ticking(&mut self, ctx: &mut Context<Self>) {
        if self.tick_timer.is_some() || self.arena.is_over() {
            return;
        }
        info!("[RoundSession] Round {} started", self.round_id);
        let handle = ctx.run_interval(self.tick_interval, |act, ctx| {
            if let Err(e) = act.advance(ctx) {
                warn!("[RoundSession] Tick on round {} failed: {}", act.round_id, e);
            }
        });
        self.tick_timer = Some(handle);
    }

    fn advance(&mut self, ctx: &mut Context<Self>) -> Result<StepOutcome, ArenaError> {
        let outcome = self.arena.step()?;
        self.broadcast(ServerWsMessage::Update(self.arena.snapshot()));

        if let RoundStatus::Over(reason) = outcome.status {
            if let Some(handle) = self.tick_timer.take() {
                ctx.cancel_future(handle);
            }
            info!(
                "[RoundSession] Round {} over ({:?}). Final Score: {}",
                self.round_id, reason, outcome.score
            );
            self.broadcast(ServerWsMessage::RoundOver { reason, score: outcome.score });
            if let Some(manager) = &self.manager {
                manager.do_send(RoundClosed { round_id: self.round_id });
            }
        }
        Ok(outcome)
    }
}

impl Actor for RoundSession {
    type Context = Context<Self>;

    fn started(&mut self, _ctx: &mut Self::Context) {
        debug!("[RoundSession] Round {} waiting for first input", self.round_id);
    }

    fn stopped(&mut self, _ctx: &mut Self::Context) {
        debug!("[RoundSession] Round {} stopped", self.round_id);
    }
}

impl Handler<RequestHeading> for RoundSession {
    type Result = bool;

    fn handle(&mut self, msg: RequestHeading, ctx: &mut Context<Self>) -> Self::Result {
        if self.arena.is_over() {
            return false;
        }
        let accepted = self.arena.request_heading(msg.heading);
        if accepted {
            self.start_ticking(ctx);
        } else {
            debug!("[RoundSession] Round {}: turn to {:?} rejected", self.round_id, msg.heading);
        }
        accepted
    }
}

impl Handler<Tick> for RoundSession {
    type Result = Result<StepOutcome, ArenaError>;

    fn handle(&mut self, _: Tick, ctx: &mut Context<Self>) -> Self::Result {
        self.advance(ctx)
    }
}

impl Handler<GetSnapshot> for RoundSession {
    type Result = MessageResult<GetSnapshot>;

    fn handle(&mut self, _: GetSnapshot, _: &mut Context<Self>) -> Self::Result {
        MessageResult(self.arena.snapshot())
    }
}

impl Handler<Register> for RoundSession {
    type Result = ();

    fn handle(&mut self, msg: Register, _: &mut Context<Self>) -> Self::Result {
        msg.addr.do_send(ServerWsMessage::RoundStarted { round_id: self.round_id });
        msg.addr.do_send(ServerWsMessage::Update(self.arena.snapshot()));
        self.observers.insert(msg.observer_id, msg.addr);
    }
}

impl Handler<Unregister> for RoundSession {
    type Result = ();

    fn handle(&mut self, msg: Unregister, ctx: &mut Context<Self>) -> Self::Result {
        self.observers.remove(&msg.observer_id);

        // Nobody left to play or watch.
        if self.observers.is_empty() {
            info!("[RoundSession] Round {} abandoned at score {}", self.round_id, self.arena.score());
            if let Some(manager) = &self.manager {
                manager.do_send(RoundClosed { round_id: self.round_id });
            }
            ctx.stop();
        }
    }
}

/// Keeps track of the rounds currently being played.
pub struct RoundManager {
    rounds: HashMap<Uuid, Addr<RoundSession>>,
}

impl RoundManager {
    pub fn new() -> Self {
        Self {
            rounds: HashMap::new(),
        }
    }
}

impl Default for RoundManager {
    fn default() -> Self {
        Self::new()
    }
}

impl Actor for RoundManager {
    type Context = Context<Self>;
}

#[derive(Message)]
#[rtype(result = "Result<(Uuid, Addr<RoundSession>), ArenaError>")]
pub struct CreateRound {
    pub config: ArenaConfig,
    /// Random seed when `None`.
    pub seed: Option<u64>,
}

impl Handler<CreateRound> for RoundManager {
    type Result = Result<(Uuid, Addr<RoundSession>), ArenaError>;

    fn handle(&mut self, msg: CreateRound, ctx: &mut Context<Self>) -> Self::Result {
        let seed = msg.seed.unwrap_or_else(rand::random);
        let arena = Arena::with_seed(msg.config, seed)?;
        let round_id = Uuid::new_v4();

        let session = RoundSession::new(round_id, arena)
            .with_manager(ctx.address())
            .start();
        self.rounds.insert(round_id, session.clone());
        info!(
            "[RoundManager] Created round {} ({}x{}, {} obstacles, seed {})",
            round_id, msg.config.width, msg.config.height, msg.config.obstacle_count, seed
        );
        Ok((round_id, session))
    }
}

#[derive(Message)]
#[rtype(result = "Result<Addr<RoundSession>, String>")]
pub struct GetRound {
    pub round_id: Uuid,
}

impl Handler<GetRound> for RoundManager {
    type Result = Result<Addr<RoundSession>, String>;

    fn handle(&mut self, msg: GetRound, _: &mut Context<Self>) -> Self::Result {
        self.rounds.get(&msg.round_id)
            .cloned()
            .ok_or_else(|| "Round not found".to_string())
    }
}

/// Number of rounds the manager is tracking.
#[derive(Message)]
#[rtype(result = "usize")]
pub struct CountRounds;

impl Handler<CountRounds> for RoundManager {
    type Result = usize;

    fn handle(&mut self, _: CountRounds, _: &mut Context<Self>) -> Self::Result {
        self.rounds.len()
    }
}

/// Sent by a session once its round is over.
#[derive(Message)]
#[rtype(result = "()")]
pub struct RoundClosed {
    pub round_id: Uuid,
}

impl Handler<RoundClosed> for RoundManager {
    type Result = ();

    fn handle(&mut self, msg: RoundClosed, _: &mut Context<Self>) -> Self::Result {
        if self.rounds.remove(&msg.round_id).is_some() {
            debug!("[RoundManager] Forgot finished round {}", msg.round_id);
        }
    }
}
