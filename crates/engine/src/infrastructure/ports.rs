//! Port traits for the engine's collaborators.
//!
//! - Question generation (injected into the progression engine)
//! - Clock/Random (for testing)

use chrono::{DateTime, Utc};
use uuid::Uuid;

use critterquiz_domain::{DomainError, Question, QuestionCategory, QuestionDifficulty};

// =============================================================================
// Error Types
// =============================================================================

/// Why a batch of questions could not be produced
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GenerationError {
    #[error("No question categories requested")]
    NoCategories,
    #[error("Generated question violates invariants: {0}")]
    Domain(#[from] DomainError),
}

// =============================================================================
// Content Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait QuestionGeneratorPort: Send + Sync {
    /// Produce exactly `count` questions in random order.
    fn generate(
        &self,
        count: usize,
        difficulty: QuestionDifficulty,
        categories: &[QuestionCategory],
    ) -> Result<Vec<Question>, GenerationError>;
}

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait RandomPort: Send + Sync {
    /// Uniform integer in `min..=max`
    fn gen_range(&self, min: i64, max: i64) -> i64;
    fn gen_uuid(&self) -> Uuid;
}
