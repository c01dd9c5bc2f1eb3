mod game;
pub use game::*;
