/// Main configuration module.
///
/// Re-exports submodules for game and round driver configuration.
pub mod game;
pub mod round;
