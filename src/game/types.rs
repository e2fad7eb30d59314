use serde::{Serialize, Deserialize};

/// A board location. Signed so a head that stepped off the board is still representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit away in `heading`.
    pub fn step(self, heading: Heading) -> Cell {
        let (dx, dy) = heading.offset();
        Cell { x: self.x + dx, y: self.y + dy }
    }

    /// True if the cell lies within `[0, width) x [0, height)`.
    pub fn is_within(self, width: i32, height: i32) -> bool {
        (0..width).contains(&self.x) && (0..height).contains(&self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    Up,
    Down,
    Left,
    Right,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    /// Column/row delta for one tick of movement. Rows grow downwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::Up => (0, -1),
            Heading::Down => (0, 1),
            Heading::Left => (-1, 0),
            Heading::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Heading {
        match self {
            Heading::Up => Heading::Down,
            Heading::Down => Heading::Up,
            Heading::Left => Heading::Right,
            Heading::Right => Heading::Left,
        }
    }

    pub fn is_opposite(self, other: Heading) -> bool {
        self.opposite() == other
    }
}

/// The two consumable item kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemKind {
    /// Grows the body and adds the reward to the score.
    Positive,
    /// Shrinks the body and subtracts the penalty from the score.
    Negative,
}

/// Why a round ended. All three are equally fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerminationReason {
    WallCollision,
    ObstacleCollision,
    SelfCollision,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundStatus {
    Running,
    Over(TerminationReason),
}

impl RoundStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, RoundStatus::Over(_))
    }

    pub fn reason(&self) -> Option<TerminationReason> {
        match self {
            RoundStatus::Running => None,
            RoundStatus::Over(reason) => Some(*reason),
        }
    }
}

/// Result of one simulation tick, reported to the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepOutcome {
    pub status: RoundStatus,
    pub score: i64,
    /// Item eaten on this tick, if any.
    pub consumed: Option<ItemKind>,
}

impl StepOutcome {
    pub fn terminated(&self) -> bool {
        self.status.is_over()
    }
}
