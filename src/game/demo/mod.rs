// Demo module for the game. Provides the interactive terminal loop used by the
// `snake-arena-terminal` binary.
pub mod game_loop;
