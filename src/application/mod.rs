mod config;
mod game_state;
mod scene;

pub use config::{ConfigError, SimConfig};
pub use game_state::GameState;
pub use scene::Scene;
