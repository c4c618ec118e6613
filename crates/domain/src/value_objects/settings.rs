//! Game settings value object
//!
//! Settings are plain data: `time_limit` is carried for the presentation
//! layer and never enforced by the engine.

use std::time::Duration;

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::DomainError;
use crate::types::{QuestionCategory, QuestionDifficulty};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettings {
    pub questions_per_quiz: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_limit: Option<Duration>,
    pub difficulty: QuestionDifficulty,
    pub categories: Vec<QuestionCategory>,
    pub allow_hints: bool,
    pub allow_retry: bool,
    pub enable_customization: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            questions_per_quiz: 3,
            time_limit: None,
            difficulty: QuestionDifficulty::Easy,
            categories: vec![QuestionCategory::Addition],
            allow_hints: true,
            allow_retry: true,
            enable_customization: true,
        }
    }
}

impl GameSettings {
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.questions_per_quiz == 0 {
            return Err(DomainError::validation(
                "questions per quiz must be at least 1",
            ));
        }
        if self.categories.is_empty() {
            return Err(DomainError::validation(
                "at least one question category is required",
            ));
        }
        Ok(())
    }

    /// Merge a partial update, returning the merged settings if they are valid.
    pub fn merged(&self, update: GameSettingsUpdate) -> Result<Self, DomainError> {
        let merged = Self {
            questions_per_quiz: update.questions_per_quiz.unwrap_or(self.questions_per_quiz),
            time_limit: update.time_limit.unwrap_or(self.time_limit),
            difficulty: update.difficulty.unwrap_or(self.difficulty),
            categories: update.categories.unwrap_or_else(|| self.categories.clone()),
            allow_hints: update.allow_hints.unwrap_or(self.allow_hints),
            allow_retry: update.allow_retry.unwrap_or(self.allow_retry),
            enable_customization: update
                .enable_customization
                .unwrap_or(self.enable_customization),
        };
        merged.validate()?;
        Ok(merged)
    }
}

/// Partial settings; `None` fields keep their current value.
///
/// `time_limit` is doubly optional so an update can clear the limit. In JSON an
/// absent `timeLimit` keeps the current value and `"timeLimit": null` clears it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSettingsUpdate {
    #[serde(default)]
    pub questions_per_quiz: Option<u32>,
    #[serde(
        default,
        deserialize_with = "deserialize_clearable",
        skip_serializing_if = "Option::is_none"
    )]
    pub time_limit: Option<Option<Duration>>,
    #[serde(default)]
    pub difficulty: Option<QuestionDifficulty>,
    #[serde(default)]
    pub categories: Option<Vec<QuestionCategory>>,
    #[serde(default)]
    pub allow_hints: Option<bool>,
    #[serde(default)]
    pub allow_retry: Option<bool>,
    #[serde(default)]
    pub enable_customization: Option<bool>,
}

/// Maps a present field (including `null`) to `Some`, leaving absence to `default`.
fn deserialize_clearable<'de, D>(deserializer: D) -> Result<Option<Option<Duration>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Duration>::deserialize(deserializer).map(Some)
}
