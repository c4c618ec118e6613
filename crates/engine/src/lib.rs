//! CritterQuiz Engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Question generation and the progression state machine
//! - `infrastructure/` - Port traits and their adapters (clock, random, env settings)

pub mod infrastructure;
pub mod use_cases;

pub use infrastructure::ports::{ClockPort, GenerationError, QuestionGeneratorPort, RandomPort};
pub use use_cases::{ProgressionEngine, QuestionGenerator};
