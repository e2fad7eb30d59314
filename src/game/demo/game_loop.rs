//! Terminal game loop for local play.
//!
//! One line of input is one tick: the typed heading (if any) is requested, then the arena steps.

use std::io::{self, BufRead, Write};

use thiserror::Error;

use crate::game::arena::Arena;
use crate::game::error::ArenaError;
use crate::game::types::Heading;

/// Map a line of input to a heading. `w/a/s/d` and arrow escape sequences are accepted; anything
/// else keeps the current heading.
pub fn parse_heading(input: &str) -> Option<Heading> {
    match input.trim() {
        "w" | "W" | "\x1b[A" => Some(Heading::Up),
        "s" | "S" | "\x1b[B" => Some(Heading::Down),
        "a" | "A" | "\x1b[D" => Some(Heading::Left),
        "d" | "D" | "\x1b[C" => Some(Heading::Right),
        _ => None,
    }
}

/// Failure while driving a terminal round.
#[derive(Debug, Error)]
pub enum DemoError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),

    #[error(transparent)]
    Arena(#[from] ArenaError),
}

/// Play `arena` until the round ends, reading headings from `input` and printing the board to
/// `output`. Returns the final score; running out of input ends the game early.
pub fn run_game_loop<R, I, O>(arena: &mut Arena<R>, input: I, mut output: O) -> Result<i64, DemoError>
where
    R: rand::Rng,
    I: BufRead,
    O: Write,
{
    let mut lines = input.lines();
    writeln!(output, "Game start!\n{}", arena.snapshot())?;

    while !arena.is_over() {
        write!(output, "\nDirection (w/a/s/d, Enter to keep going): ")?;
        output.flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if let Some(heading) = parse_heading(&line) {
            if !arena.request_heading(heading) {
                writeln!(output, "Cannot turn back onto yourself.")?;
            }
        }

        arena.step()?;
        writeln!(output, "{}", arena.snapshot())?;
    }

    if arena.is_over() {
        writeln!(output, "\nGame Over! Final Score: {}", arena.score())?;
    } else {
        writeln!(output, "\nInput closed. Score so far: {}", arena.score())?;
    }
    output.flush()?;
    Ok(arena.score())
}

/// Run the loop on stdin/stdout.
pub fn run_stdio<R: rand::Rng>(arena: &mut Arena<R>) -> Result<i64, DemoError> {
    let stdin = io::stdin();
    run_game_loop(arena, stdin.lock(), io::stdout())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::arena::Layout;
    use crate::game::types::Cell;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_parse_heading() {
        assert_eq!(parse_heading("w\n"), Some(Heading::Up));
        assert_eq!(parse_heading("\x1b[D"), Some(Heading::Left));
        assert_eq!(parse_heading(""), None);
        assert_eq!(parse_heading("q"), None);
    }

    #[test]
    fn test_loop_runs_until_wall() {
        let layout = Layout {
            width: 3,
            height: 3,
            body: vec![Cell::new(1, 1)],
            heading: Heading::Down,
            positive_item: Some(Cell::new(0, 0)),
            negative_item: Some(Cell::new(2, 0)),
            obstacles: vec![],
        };
        let mut arena = Arena::with_layout(layout, StdRng::seed_from_u64(3)).unwrap();
        let mut out = Vec::new();

        // Right twice: (2,1) then off the board.
        let score = run_game_loop(&mut arena, "d\n\n\n".as_bytes(), &mut out).unwrap();

        assert_eq!(score, 0);
        assert!(arena.is_over());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Game Over! Final Score: 0"));
    }

    #[test]
    fn test_closed_input_is_not_game_over() {
        let mut arena = Arena::with_seed(crate::game::ArenaConfig::default(), 4).unwrap();
        let mut out = Vec::new();

        let score = run_game_loop(&mut arena, "".as_bytes(), &mut out).unwrap();

        assert_eq!(score, 0);
        assert!(!arena.is_over());
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Input closed. Score so far: 0"));
        assert!(!text.contains("Game Over!"));
    }

    /// Writer that rejects every write.
    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_is_reported() {
        let mut arena = Arena::with_seed(crate::game::ArenaConfig::default(), 4).unwrap();

        let result = run_game_loop(&mut arena, "d\n".as_bytes(), BrokenPipe);

        assert!(matches!(result, Err(DemoError::Io(ref e)) if e.kind() == io::ErrorKind::BrokenPipe));
        assert_eq!(arena.tick(), 0);
    }
}
