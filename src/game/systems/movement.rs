//! Heading requests and the turn restriction.
//!
//! A body longer than one cell may not reverse onto its own neck, so a request is checked
//! against the heading committed on the last tick, not against an earlier pending request.

use crate::game::arena::Arena;
use crate::game::types::Heading;

/// True if `requested` may replace the pending heading.
pub fn is_turn_allowed(committed: Heading, requested: Heading, body_len: usize) -> bool {
    body_len == 1 || !requested.is_opposite(committed)
}

/// Store `heading` as the pending heading if the turn restriction allows it.
/// Last write wins; a rejected request leaves the pending heading untouched.
pub fn apply_heading_request<R>(arena: &mut Arena<R>, heading: Heading) -> bool {
    if is_turn_allowed(arena.committed, heading, arena.body.len()) {
        arena.heading = heading;
        true
    } else {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_cell_can_reverse() {
        for heading in Heading::ALL {
            assert!(is_turn_allowed(heading, heading.opposite(), 1));
        }
    }

    #[test]
    fn test_long_body_cannot_reverse() {
        for heading in Heading::ALL {
            assert!(!is_turn_allowed(heading, heading.opposite(), 2));
            assert!(is_turn_allowed(heading, heading, 2));
        }
        assert!(is_turn_allowed(Heading::Left, Heading::Up, 5));
        assert!(is_turn_allowed(Heading::Left, Heading::Down, 5));
    }
}
