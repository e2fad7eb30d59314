pub mod movement;
pub mod rules;
pub mod render;

pub use movement::*;
pub use rules::*;
pub use render::*;
