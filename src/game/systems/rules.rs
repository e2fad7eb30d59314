//! Collision and consumption rules applied after the body has advanced.

use rand::Rng;

use crate::config::game::{NEGATIVE_PENALTY, POSITIVE_REWARD};
use crate::game::arena::Arena;
use crate::game::entities::spawn_free_cell;
use crate::game::types::{Cell, ItemKind, TerminationReason};

/// Check the freshly advanced head against the walls, the obstacles and the rest of the body.
pub fn detect_collision<R>(arena: &Arena<R>) -> Option<TerminationReason> {
    let head = arena.body.head();

    if !head.is_within(arena.width, arena.height) {
        Some(TerminationReason::WallCollision)
    } else if arena.obstacles.contains(&head) {
        Some(TerminationReason::ObstacleCollision)
    } else if arena.body.self_collides() {
        Some(TerminationReason::SelfCollision)
    } else {
        None
    }
}

/// Resolve the tail for this tick: grow on the positive item, shrink on the negative item,
/// otherwise drop the tail. A consumed item is re-placed immediately.
pub fn resolve_consumption<R: Rng>(arena: &mut Arena<R>) -> Option<ItemKind> {
    let head = arena.body.head();

    if arena.positive_item == Some(head) {
        arena.body.grow();
        arena.score += POSITIVE_REWARD;
        arena.positive_item = None;
        arena.positive_item = respawn_item(arena);
        Some(ItemKind::Positive)
    } else if arena.negative_item == Some(head) {
        arena.body.shrink();
        arena.score -= NEGATIVE_PENALTY;
        arena.negative_item = None;
        arena.negative_item = respawn_item(arena);
        Some(ItemKind::Negative)
    } else {
        arena.body.settle();
        None
    }
}

/// Re-place any item that could not be placed earlier because the board was full.
pub fn restock_items<R: Rng>(arena: &mut Arena<R>) {
    if arena.positive_item.is_none() {
        arena.positive_item = respawn_item(arena);
    }
    if arena.negative_item.is_none() {
        arena.negative_item = respawn_item(arena);
    }
}

fn respawn_item<R: Rng>(arena: &mut Arena<R>) -> Option<Cell> {
    let taken: Vec<_> = arena
        .obstacles
        .iter()
        .copied()
        .chain(arena.positive_item)
        .chain(arena.negative_item)
        .collect();
    spawn_free_cell(arena.width, arena.height, &arena.body, &taken, &mut arena.rng)
}
