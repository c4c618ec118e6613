//! # Critter Quiz Domain Types
//!
//! Shared vocabulary types used by the question generator, the progression
//! engine and whatever presentation layer drives them.
//!
//! ## Design Principles
//!
//! 1. **Pure data types** - No I/O, no side effects
//! 2. **Serializable** - All types derive Serialize/Deserialize

// Creature customization types
mod creature;
pub use creature::{BodyPartStyle, BodyPartType};

// Quiz flow types
mod quiz;
pub use quiz::{GamePhase, QuestionCategory, QuestionDifficulty};
