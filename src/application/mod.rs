mod game_state;
mod settings;

pub use game_state::GameState;
pub use settings::Settings;
