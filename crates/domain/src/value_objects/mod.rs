//! Value objects - Objects defined by their attributes

mod game_state;
mod settings;
mod statistics;

pub use game_state::GameState;
pub use settings::{GameSettings, GameSettingsUpdate};
pub use statistics::{GameStatistics, QuestionPerformance};
