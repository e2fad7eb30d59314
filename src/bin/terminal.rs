//! Standalone entry point for playing a round in the terminal.

use snake_arena::game::{Arena, ArenaConfig};

fn main() {
    env_logger::init();

    let seed = rand::random::<u64>();
    let mut arena = match Arena::with_seed(ArenaConfig::default(), seed) {
        Ok(arena) => arena,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };
    log::info!("Terminal round seeded with {}", seed);

    if let Err(e) = snake_arena::game::demo::game_loop::run_stdio(&mut arena) {
        eprintln!("{}", e);
    }
}
