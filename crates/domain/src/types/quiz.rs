//! Quiz vocabulary: game phases, difficulty tiers and question categories

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Phase of the progression state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GamePhase {
    #[default]
    Quiz,
    Selection,
    Results,
    Customization,
}

impl GamePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            GamePhase::Quiz => "quiz",
            GamePhase::Selection => "selection",
            GamePhase::Results => "results",
            GamePhase::Customization => "customization",
        }
    }
}

impl fmt::Display for GamePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for GamePhase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "quiz" => Ok(GamePhase::Quiz),
            "selection" => Ok(GamePhase::Selection),
            "results" => Ok(GamePhase::Results),
            "customization" => Ok(GamePhase::Customization),
            _ => Err(DomainError::parse(format!(
                "Unknown game phase: '{}'. Valid values: quiz, selection, results, customization",
                s
            ))),
        }
    }
}

/// Difficulty tier controlling numeric ranges and distractor spread
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionDifficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl QuestionDifficulty {
    pub fn all() -> &'static [QuestionDifficulty] {
        &[
            QuestionDifficulty::Easy,
            QuestionDifficulty::Medium,
            QuestionDifficulty::Hard,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionDifficulty::Easy => "easy",
            QuestionDifficulty::Medium => "medium",
            QuestionDifficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for QuestionDifficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionDifficulty {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Ok(QuestionDifficulty::Easy),
            "medium" => Ok(QuestionDifficulty::Medium),
            "hard" => Ok(QuestionDifficulty::Hard),
            _ => Err(DomainError::parse(format!(
                "Unknown difficulty: '{}'. Valid values: easy, medium, hard",
                s
            ))),
        }
    }
}

/// Kind of problem a question poses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum QuestionCategory {
    Addition,
    Subtraction,
    Multiplication,
    Division,
    WordProblems,
}

impl QuestionCategory {
    pub fn all() -> &'static [QuestionCategory] {
        &[
            QuestionCategory::Addition,
            QuestionCategory::Subtraction,
            QuestionCategory::Multiplication,
            QuestionCategory::Division,
            QuestionCategory::WordProblems,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            QuestionCategory::Addition => "addition",
            QuestionCategory::Subtraction => "subtraction",
            QuestionCategory::Multiplication => "multiplication",
            QuestionCategory::Division => "division",
            QuestionCategory::WordProblems => "word-problems",
        }
    }

    /// Short prefix used when minting question ids
    pub fn id_prefix(&self) -> &'static str {
        match self {
            QuestionCategory::Addition => "add",
            QuestionCategory::Subtraction => "sub",
            QuestionCategory::Multiplication => "mul",
            QuestionCategory::Division => "div",
            QuestionCategory::WordProblems => "word",
        }
    }
}

impl fmt::Display for QuestionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for QuestionCategory {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "addition" => Ok(QuestionCategory::Addition),
            "subtraction" => Ok(QuestionCategory::Subtraction),
            "multiplication" => Ok(QuestionCategory::Multiplication),
            "division" => Ok(QuestionCategory::Division),
            "word-problems" | "wordproblems" => Ok(QuestionCategory::WordProblems),
            _ => Err(DomainError::parse(format!(
                "Unknown question category: '{}'. Valid values: addition, subtraction, \
                multiplication, division, word-problems",
                s
            ))),
        }
    }
}
