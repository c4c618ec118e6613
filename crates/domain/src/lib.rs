pub mod entities;
pub mod error;
pub mod ids;
pub mod types;
pub mod value_objects;

pub use entities::{
    all_achievements, Achievement, AchievementCriteria, CriteriaCondition, CriteriaType,
    Question, QuestionParts, QuizResult, OPTIONS_PER_QUESTION,
};

pub use error::DomainError;

// Re-export ID types
pub use ids::{AchievementId, QuestionId};

pub use types::{BodyPartStyle, BodyPartType, GamePhase, QuestionCategory, QuestionDifficulty};

pub use value_objects::{
    GameSettings, GameSettingsUpdate, GameState, GameStatistics, QuestionPerformance,
};
