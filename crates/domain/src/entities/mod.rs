//! Domain entities

mod achievement;
mod question;

pub use achievement::{
    all_achievements, Achievement, AchievementCriteria, CriteriaCondition, CriteriaType,
};
pub use question::{Question, QuestionParts, QuizResult, OPTIONS_PER_QUESTION};
