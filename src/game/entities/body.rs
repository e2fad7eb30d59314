//! Creature body.
//!
//! The body is an ordered run of cells, head first. A tick is two-phase: [`Body::advance`]
//! pushes the new head, then the arena picks exactly one of [`Body::settle`], [`Body::grow`] or
//! [`Body::shrink`] once it knows what the head landed on (or [`Body::retract`] if the move was
//! fatal).

use std::collections::VecDeque;

use crate::game::types::{Cell, Heading};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Body {
    cells: VecDeque<Cell>,
}

impl Body {
    pub fn new(start: Cell) -> Self {
        Self { cells: VecDeque::from([start]) }
    }

    /// Build a body from explicit cells, head first. Returns `None` if `cells` is empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let cells: VecDeque<Cell> = cells.into_iter().collect();
        if cells.is_empty() {
            None
        } else {
            Some(Self { cells })
        }
    }

    pub fn head(&self) -> Cell {
        self.cells[0]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    /// Head to tail.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// Push a new head one cell away in `heading` and return it. The tail is untouched.
    pub fn advance(&mut self, heading: Heading) -> Cell {
        let new_head = self.head().step(heading);
        self.cells.push_front(new_head);
        new_head
    }

    /// True if the head sits on any other body cell.
    pub fn self_collides(&self) -> bool {
        let head = self.head();
        self.cells.iter().skip(1).any(|cell| *cell == head)
    }

    /// Normal tick: drop the tail, length unchanged since the last advance.
    pub fn settle(&mut self) {
        if self.cells.len() > 1 {
            self.cells.pop_back();
        }
    }

    /// Keep the tail this tick, net length +1.
    pub fn grow(&mut self) {}

    /// Drop the tail plus one more cell, net length -1. Never goes below one cell.
    pub fn shrink(&mut self) {
        for _ in 0..2 {
            if self.cells.len() > 1 {
                self.cells.pop_back();
            }
        }
    }

    /// Undo the last advance.
    pub fn retract(&mut self) {
        if self.cells.len() > 1 {
            self.cells.pop_front();
        }
    }
}

impl<'a> IntoIterator for &'a Body {
    type Item = &'a Cell;
    type IntoIter = std::collections::vec_deque::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn body(cells: &[(i32, i32)]) -> Body {
        Body::from_cells(cells.iter().map(|&(x, y)| Cell::new(x, y))).unwrap()
    }

    #[test]
    fn test_advance_offsets_head() {
        let mut b = Body::new(Cell::new(5, 5));
        assert_eq!(b.advance(Heading::Up), Cell::new(5, 4));
        b.settle();
        assert_eq!(b.advance(Heading::Left), Cell::new(4, 4));
        b.settle();
        assert_eq!(b.advance(Heading::Down), Cell::new(4, 5));
        b.settle();
        assert_eq!(b.advance(Heading::Right), Cell::new(5, 5));
        b.settle();
        assert_eq!(b.len(), 1);
        assert_eq!(b.head(), Cell::new(5, 5));
    }

    #[test]
    fn test_grow_keeps_tail() {
        let mut b = body(&[(3, 3), (3, 4)]);
        b.advance(Heading::Up);
        b.grow();
        let cells: Vec<Cell> = b.iter().copied().collect();
        assert_eq!(cells, vec![Cell::new(3, 2), Cell::new(3, 3), Cell::new(3, 4)]);
    }

    #[test]
    fn test_shrink_drops_two() {
        let mut b = body(&[(3, 3), (3, 4), (3, 5)]);
        b.advance(Heading::Up);
        b.shrink();
        let cells: Vec<Cell> = b.iter().copied().collect();
        assert_eq!(cells, vec![Cell::new(3, 2), Cell::new(3, 3)]);
    }

    #[test]
    fn test_shrink_floors_at_one() {
        let mut b = Body::new(Cell::new(0, 0));
        b.advance(Heading::Right);
        b.shrink();
        assert_eq!(b.len(), 1);
        assert_eq!(b.head(), Cell::new(1, 0));
    }

    #[test]
    fn test_self_collision_detected() {
        // Head at (2,2) moving into a U turn.
        let mut b = body(&[(2, 2), (3, 2), (3, 3), (2, 3), (1, 3)]);
        b.advance(Heading::Down);
        assert!(b.self_collides());
    }

    #[test]
    fn test_no_self_collision_on_free_cell() {
        let mut b = body(&[(2, 2), (3, 2), (4, 2)]);
        b.advance(Heading::Up);
        assert!(!b.self_collides());
    }

    #[test]
    fn test_retract_restores_previous_body() {
        let before = body(&[(0, 0), (1, 0)]);
        let mut b = before.clone();
        b.advance(Heading::Left);
        b.retract();
        assert_eq!(b, before);
    }

    #[test]
    fn test_from_cells_rejects_empty() {
        assert!(Body::from_cells(Vec::new()).is_none());
    }
}
