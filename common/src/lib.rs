mod constants;
mod game_engine;
mod game_state;
mod score;
mod snake;

pub mod util;

pub use constants::*;
pub use game_engine::*;
pub use game_state::*;
pub use score::*;
pub use snake::*;
