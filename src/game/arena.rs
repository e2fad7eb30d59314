//! Round state and the per-tick simulation.
//!
//! An [`Arena`] owns the board, one [`Body`], the two consumable items, the obstacles and the
//! score. Drivers call [`Arena::request_heading`] whenever input arrives and [`Arena::step`] once
//! per tick; everything else is read through [`Arena::snapshot`].

use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use serde::{Serialize, Deserialize};
use log::{debug, info};

use crate::config::game::{BOARD_COLUMNS, BOARD_ROWS, MAX_BOARD_SIDE, OBSTACLE_COUNT};
use crate::game::entities::{Body, spawn_free_cell, spawn_obstacles};
use crate::game::error::ArenaError;
use crate::game::systems::{apply_heading_request, detect_collision, resolve_consumption, restock_items};
use crate::game::types::{Cell, Heading, RoundStatus, StepOutcome};

/// Heading of a freshly spawned body.
pub const START_HEADING: Heading = Heading::Down;

/// Per-round board settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub width: i32,
    pub height: i32,
    pub obstacle_count: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: BOARD_COLUMNS,
            height: BOARD_ROWS,
            obstacle_count: OBSTACLE_COUNT,
        }
    }
}

impl ArenaConfig {
    /// Reject boards that cannot host the starting body, both items and every obstacle.
    pub fn validate(&self) -> Result<(), ArenaError> {
        check_dimensions(self.width, self.height)?;
        let cells = self.width as u64 * self.height as u64;
        let needed = self.obstacle_count as u64 + 3;
        if needed > cells {
            return Err(ArenaError::invalid_config(format!(
                "{} obstacles, 2 items and the starting cell do not fit on a {}x{} board",
                self.obstacle_count, self.width, self.height
            )));
        }
        Ok(())
    }
}

fn check_dimensions(width: i32, height: i32) -> Result<(), ArenaError> {
    if width <= 0 || height <= 0 {
        return Err(ArenaError::invalid_config(format!(
            "board must be at least 1x1, got {}x{}",
            width, height
        )));
    }
    if width > MAX_BOARD_SIDE || height > MAX_BOARD_SIDE {
        return Err(ArenaError::invalid_config(format!(
            "board sides are limited to {}, got {}x{}",
            MAX_BOARD_SIDE, width, height
        )));
    }
    Ok(())
}

/// An explicit round layout, used to replay or script a round instead of placing at random.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    pub width: i32,
    pub height: i32,
    /// Head first.
    pub body: Vec<Cell>,
    pub heading: Heading,
    pub positive_item: Option<Cell>,
    pub negative_item: Option<Cell>,
    pub obstacles: Vec<Cell>,
}

/// Read-only copy of the round for renderers and clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: i32,
    pub height: i32,
    /// Head first.
    pub body: Vec<Cell>,
    /// Pending heading, i.e. where the creature is facing.
    pub heading: Heading,
    pub positive_item: Option<Cell>,
    pub negative_item: Option<Cell>,
    pub obstacles: Vec<Cell>,
    pub score: i64,
    pub status: RoundStatus,
    pub tick: u64,
}

pub struct Arena<R = StdRng> {
    pub(crate) width: i32,
    pub(crate) height: i32,
    pub(crate) body: Body,
    pub(crate) positive_item: Option<Cell>,
    pub(crate) negative_item: Option<Cell>,
    pub(crate) obstacles: Vec<Cell>,
    pub(crate) score: i64,
    /// Latest accepted direction request.
    pub(crate) heading: Heading,
    /// Heading applied on the last tick.
    pub(crate) committed: Heading,
    pub(crate) status: RoundStatus,
    pub(crate) tick: u64,
    pub(crate) rng: R,
}

impl Arena<StdRng> {
    /// Start a round whose placements are fully determined by `seed`.
    pub fn with_seed(config: ArenaConfig, seed: u64) -> Result<Self, ArenaError> {
        Self::new(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> Arena<R> {
    /// Start a round: the body occupies the board centre, then the positive item, the negative
    /// item and the obstacles are placed on free cells.
    pub fn new(config: ArenaConfig, mut rng: R) -> Result<Self, ArenaError> {
        config.validate()?;
        let ArenaConfig { width, height, obstacle_count } = config;

        let body = Body::new(Cell::new(width / 2, height / 2));
        let positive_item = spawn_free_cell(width, height, &body, &[], &mut rng);
        let taken: Vec<Cell> = positive_item.into_iter().collect();
        let negative_item = spawn_free_cell(width, height, &body, &taken, &mut rng);
        let taken: Vec<Cell> = taken.into_iter().chain(negative_item).collect();
        let obstacles = spawn_obstacles(width, height, &body, &taken, obstacle_count, &mut rng);

        info!(
            "[Arena] New round {}x{}: start={:?} positive={:?} negative={:?} obstacles={:?}",
            width, height, body.head(), positive_item, negative_item, obstacles
        );

        Ok(Self {
            width,
            height,
            body,
            positive_item,
            negative_item,
            obstacles,
            score: 0,
            heading: START_HEADING,
            committed: START_HEADING,
            status: RoundStatus::Running,
            tick: 0,
            rng,
        })
    }

    /// Start a round from an explicit layout. The layout must satisfy the same invariants as a
    /// random one: everything in bounds, a contiguous non-overlapping body, and items/obstacles
    /// on distinct cells off the body.
    pub fn with_layout(layout: Layout, rng: R) -> Result<Self, ArenaError> {
        let Layout { width, height, body, heading, positive_item, negative_item, obstacles } = layout;
        check_dimensions(width, height)?;

        for (i, cell) in body.iter().enumerate() {
            if !cell.is_within(width, height) {
                return Err(ArenaError::invalid_config(format!("body cell {:?} is off the board", cell)));
            }
            if body[i + 1..].contains(cell) {
                return Err(ArenaError::invalid_config(format!("body overlaps itself at {:?}", cell)));
            }
            if let Some(next) = body.get(i + 1) {
                if (cell.x - next.x).abs() + (cell.y - next.y).abs() != 1 {
                    return Err(ArenaError::invalid_config(format!(
                        "body cells {:?} and {:?} are not adjacent",
                        cell, next
                    )));
                }
            }
        }
        let body = Body::from_cells(body)
            .ok_or_else(|| ArenaError::invalid_config("body must have at least one cell"))?;

        let placed: Vec<Cell> = positive_item
            .into_iter()
            .chain(negative_item)
            .chain(obstacles.iter().copied())
            .collect();
        for (i, cell) in placed.iter().enumerate() {
            if !cell.is_within(width, height) {
                return Err(ArenaError::invalid_config(format!("{:?} is off the board", cell)));
            }
            if body.contains(*cell) {
                return Err(ArenaError::invalid_config(format!("{:?} is on the body", cell)));
            }
            if placed[i + 1..].contains(cell) {
                return Err(ArenaError::invalid_config(format!("{:?} is placed twice", cell)));
            }
        }

        Ok(Self {
            width,
            height,
            body,
            positive_item,
            negative_item,
            obstacles,
            score: 0,
            heading,
            committed: heading,
            status: RoundStatus::Running,
            tick: 0,
            rng,
        })
    }

    /// Advance the round by one tick.
    pub fn step(&mut self) -> Result<StepOutcome, ArenaError> {
        if self.status.is_over() {
            return Err(ArenaError::RoundAlreadyOver { score: self.score });
        }

        let heading = self.heading;
        let head = self.body.advance(heading);
        self.tick += 1;

        if let Some(reason) = detect_collision(self) {
            self.body.retract();
            self.committed = heading;
            self.status = RoundStatus::Over(reason);
            info!(
                "[Arena] Round over at tick {}: {:?} at {:?}, final score {}",
                self.tick, reason, head, self.score
            );
            return Ok(StepOutcome { status: self.status, score: self.score, consumed: None });
        }

        let consumed = resolve_consumption(self);
        restock_items(self);
        self.committed = heading;

        debug!(
            "[Arena] tick={} head={:?} heading={:?} len={} score={} consumed={:?}",
            self.tick, head, heading, self.body.len(), self.score, consumed
        );

        Ok(StepOutcome { status: self.status, score: self.score, consumed })
    }
}

impl<R> Arena<R> {
    /// Queue a direction change for the next tick.
    /// Returns `false` if the request was dropped by the turn restriction.
    pub fn request_heading(&mut self, heading: Heading) -> bool {
        apply_heading_request(self, heading)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            body: self.body.iter().copied().collect(),
            heading: self.heading,
            positive_item: self.positive_item,
            negative_item: self.negative_item,
            obstacles: self.obstacles.clone(),
            score: self.score,
            status: self.status,
            tick: self.tick,
        }
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    pub fn score(&self) -> i64 {
        self.score
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Pending heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn committed_heading(&self) -> Heading {
        self.committed
    }

    pub fn positive_item(&self) -> Option<Cell> {
        self.positive_item
    }

    pub fn negative_item(&self) -> Option<Cell> {
        self.negative_item
    }

    pub fn obstacles(&self) -> &[Cell] {
        &self.obstacles
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }
}
