//! Item and obstacle placement.
//!
//! Free cells are enumerated and one is chosen uniformly, so placement always terminates. A board
//! with no free cell left yields `None` and the caller leaves the item absent.

use rand::Rng;
use rand::seq::IteratorRandom;
use log::warn;

use crate::game::entities::Body;
use crate::game::types::Cell;

/// Pick a uniformly random cell inside the board that is neither on the body nor in `taken`.
pub fn spawn_free_cell<R: Rng + ?Sized>(
    width: i32,
    height: i32,
    body: &Body,
    taken: &[Cell],
    rng: &mut R,
) -> Option<Cell> {
    let free = (0..height)
        .flat_map(|y| (0..width).map(move |x| Cell::new(x, y)))
        .filter(|cell| !body.contains(*cell) && !taken.contains(cell));

    let cell = free.choose(rng);
    if cell.is_none() {
        warn!("[Placement] No free cell left on a {}x{} board", width, height);
    }
    cell
}

/// Place `count` obstacles, each on a distinct free cell.
/// Stops early if the board runs out of room.
pub fn spawn_obstacles<R: Rng + ?Sized>(
    width: i32,
    height: i32,
    body: &Body,
    taken: &[Cell],
    count: usize,
    rng: &mut R,
) -> Vec<Cell> {
    let mut occupied = taken.to_vec();
    let mut obstacles = Vec::with_capacity(count);

    for _ in 0..count {
        match spawn_free_cell(width, height, body, &occupied, rng) {
            Some(cell) => {
                occupied.push(cell);
                obstacles.push(cell);
            }
            None => break,
        }
    }
    obstacles
}
