//! Question entity - A single multiple-choice quiz item
//!
//! Every question is tied to one creature body part. Each of its three answer
//! options maps to a cosmetic style, so whichever option the player picks
//! unlocks a style for that part, right or wrong.

use std::collections::BTreeMap;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::ids::QuestionId;
use crate::types::{BodyPartStyle, BodyPartType, QuestionCategory, QuestionDifficulty};

/// Number of answer options every question offers
pub const OPTIONS_PER_QUESTION: usize = 3;

/// Raw parts of a question, validated by [`Question::new`]
#[derive(Debug, Clone)]
pub struct QuestionParts {
    pub id: QuestionId,
    pub question_text: String,
    pub correct_answer: String,
    pub body_part: BodyPartType,
    pub options: Vec<String>,
    pub answer_to_body_part_style: BTreeMap<String, BodyPartStyle>,
    pub difficulty: QuestionDifficulty,
    pub category: QuestionCategory,
    pub hint: Option<String>,
}

/// An immutable quiz question
///
/// # Invariants
///
/// - `options` holds exactly three distinct strings
/// - `correct_answer` is one of the `options`
/// - every option is a key of `answer_to_body_part_style`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    id: QuestionId,
    question_text: String,
    correct_answer: String,
    body_part: BodyPartType,
    options: Vec<String>,
    answer_to_body_part_style: BTreeMap<String, BodyPartStyle>,
    difficulty: QuestionDifficulty,
    category: QuestionCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hint: Option<String>,
}

impl Question {
    /// Build a question, enforcing the option invariants.
    pub fn new(parts: QuestionParts) -> Result<Self, DomainError> {
        if parts.options.len() != OPTIONS_PER_QUESTION {
            return Err(DomainError::validation(format!(
                "Question {} has {} options, expected {}",
                parts.id,
                parts.options.len(),
                OPTIONS_PER_QUESTION
            )));
        }

        for (i, option) in parts.options.iter().enumerate() {
            if parts.options[..i].contains(option) {
                return Err(DomainError::validation(format!(
                    "Question {} repeats option '{}'",
                    parts.id, option
                )));
            }
            if !parts.answer_to_body_part_style.contains_key(option) {
                return Err(DomainError::validation(format!(
                    "Question {} has no style for option '{}'",
                    parts.id, option
                )));
            }
        }

        if !parts.options.contains(&parts.correct_answer) {
            return Err(DomainError::validation(format!(
                "Question {} does not offer its correct answer '{}'",
                parts.id, parts.correct_answer
            )));
        }

        Ok(Self {
            id: parts.id,
            question_text: parts.question_text,
            correct_answer: parts.correct_answer,
            body_part: parts.body_part,
            options: parts.options,
            answer_to_body_part_style: parts.answer_to_body_part_style,
            difficulty: parts.difficulty,
            category: parts.category,
            hint: parts.hint,
        })
    }

    /// The single question a round falls back to when generation yields nothing.
    pub fn fallback() -> Self {
        let options: Vec<String> = ["7", "8", "9"].iter().map(|s| s.to_string()).collect();
        let answer_to_body_part_style = BTreeMap::from([
            ("7".to_string(), BodyPartStyle::Square),
            ("8".to_string(), BodyPartStyle::Round),
            ("9".to_string(), BodyPartStyle::Triangle),
        ]);

        Self {
            id: QuestionId::new("fallback_1"),
            question_text: "What is 5 + 3?".to_string(),
            correct_answer: "8".to_string(),
            body_part: BodyPartType::Eyes,
            options,
            answer_to_body_part_style,
            difficulty: QuestionDifficulty::Easy,
            category: QuestionCategory::Addition,
            hint: None,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn question_text(&self) -> &str {
        &self.question_text
    }

    pub fn correct_answer(&self) -> &str {
        &self.correct_answer
    }

    pub fn body_part(&self) -> BodyPartType {
        self.body_part
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn answer_to_body_part_style(&self) -> &BTreeMap<String, BodyPartStyle> {
        &self.answer_to_body_part_style
    }

    pub fn difficulty(&self) -> QuestionDifficulty {
        self.difficulty
    }

    pub fn category(&self) -> QuestionCategory {
        self.category
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    // =========================================================================
    // Behavior
    // =========================================================================

    /// Whether `answer` matches the correct answer exactly
    pub fn is_correct(&self, answer: &str) -> bool {
        self.correct_answer == answer
    }

    /// Style unlocked by choosing `answer`, if it is one of the options
    pub fn style_for_answer(&self, answer: &str) -> Option<BodyPartStyle> {
        self.answer_to_body_part_style.get(answer).copied()
    }
}

/// Log entry written once per answered question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub question_id: QuestionId,
    pub selected_answer: String,
    pub is_correct: bool,
    /// Time since the round started when the answer was given
    pub time_spent: Duration,
    pub body_part: BodyPartType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlocked_style: Option<BodyPartStyle>,
}
