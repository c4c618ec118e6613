//! Read-only snapshot of a game in progress
//!
//! The presentation layer renders from this; the engine is the only writer of
//! the underlying fields.

use std::collections::BTreeMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::{Question, QuizResult};
use crate::types::{BodyPartStyle, BodyPartType, GamePhase};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    pub current_phase: GamePhase,
    pub current_question_index: usize,
    pub score: u32,
    pub total_questions: u32,
    pub unlocked_body_part_styles: BTreeMap<BodyPartType, BodyPartStyle>,
    pub selected_variations: BTreeMap<BodyPartType, String>,
    pub incorrect_questions: Vec<Question>,
    pub quiz_results: Vec<QuizResult>,
    pub is_retry_mode: bool,
    /// `None` until the first round starts
    pub game_start_time: Option<DateTime<Utc>>,
    /// Wall time of the last finalized round
    pub total_time_spent: Duration,
}
