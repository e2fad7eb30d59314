//! Text rendering of a round (terminal demo and debug logs).

use std::fmt;

use crate::game::arena::Snapshot;
use crate::game::types::{Cell, RoundStatus};

/// One symbol per cell, rows separated by newlines.
/// `H` head, `S` body, `F` positive item, `P` negative item, `R` obstacle, `-` empty.
pub fn render_board(snapshot: &Snapshot) -> String {
    let mut out = String::with_capacity((snapshot.width as usize * 2 + 1) * snapshot.height as usize);

    for y in 0..snapshot.height {
        for x in 0..snapshot.width {
            out.push(cell_symbol(snapshot, Cell::new(x, y)));
            out.push(' ');
        }
        out.push('\n');
    }
    out
}

fn cell_symbol(snapshot: &Snapshot, cell: Cell) -> char {
    // Body first so a just-eaten cell shows the head.
    if snapshot.body.first() == Some(&cell) {
        'H'
    } else if snapshot.body.contains(&cell) {
        'S'
    } else if snapshot.positive_item == Some(cell) {
        'F'
    } else if snapshot.negative_item == Some(cell) {
        'P'
    } else if snapshot.obstacles.contains(&cell) {
        'R'
    } else {
        '-'
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", render_board(self))?;
        match self.status {
            RoundStatus::Running => write!(f, "Score: {} (tick {}, heading {:?})", self.score, self.tick, self.heading),
            RoundStatus::Over(reason) => write!(f, "Final score: {} ({:?})", self.score, reason),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::{Heading, TerminationReason};

    fn snapshot() -> Snapshot {
        Snapshot {
            width: 3,
            height: 2,
            body: vec![Cell::new(0, 0), Cell::new(1, 0)],
            heading: Heading::Left,
            positive_item: Some(Cell::new(2, 0)),
            negative_item: Some(Cell::new(0, 1)),
            obstacles: vec![Cell::new(2, 1)],
            score: 20,
            status: RoundStatus::Running,
            tick: 4,
        }
    }

    #[test]
    fn test_render_board_symbols() {
        assert_eq!(render_board(&snapshot()), "H S F \nP - R \n");
    }

    #[test]
    fn test_display_reports_final_score() {
        let mut snap = snapshot();
        snap.status = RoundStatus::Over(TerminationReason::WallCollision);
        let text = snap.to_string();
        assert!(text.starts_with("H S F \n"));
        assert!(text.ends_with("Final score: 20 (WallCollision)"));
    }
}
