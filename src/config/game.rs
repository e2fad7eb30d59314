/// Game configuration constants.
///
/// This module defines the default board and the scoring rules.

/// Number of columns on the default board.
pub const BOARD_COLUMNS: i32 = 20;

/// Number of rows on the default board.
pub const BOARD_ROWS: i32 = 20;

/// Obstacles placed at the start of each round.
pub const OBSTACLE_COUNT: usize = 5;

/// Score added when the positive item is eaten.
pub const POSITIVE_REWARD: i64 = 10;

/// Score removed when the negative item is eaten.
pub const NEGATIVE_PENALTY: i64 = 10;

/// Largest accepted board width or height. Placement scans the whole board.
pub const MAX_BOARD_SIDE: i32 = 200;
