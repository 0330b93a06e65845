mod game;
pub use game::*;
mod grid;
pub use grid::*;
