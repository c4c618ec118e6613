//! Use cases - Question generation and game progression.

pub mod progression;
pub mod question_generator;

pub use progression::ProgressionEngine;
pub use question_generator::QuestionGenerator;
