//! Session-lifetime aggregate statistics
//!
//! Created when the engine is constructed and only ever accumulated from
//! there; nothing resets it during a session.

use std::collections::{BTreeMap, HashMap};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::entities::CriteriaType;
use crate::ids::QuestionId;
use crate::types::{BodyPartStyle, BodyPartType};

/// Attempt counters for a single question
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionPerformance {
    pub correct: u32,
    pub total: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameStatistics {
    pub total_games_played: u32,
    /// Running mean of finalized round scores
    pub average_score: f64,
    pub best_score: u32,
    pub total_time_played: Duration,
    /// Style the player last settled on for each part
    pub favorite_body_part_styles: BTreeMap<BodyPartType, BodyPartStyle>,
    pub question_performance: HashMap<QuestionId, QuestionPerformance>,
}

impl GameStatistics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_game_started(&mut self) {
        self.total_games_played += 1;
    }

    /// Bump the attempt counters for a question, correct or not
    pub fn record_answer(&mut self, question_id: &QuestionId, is_correct: bool) {
        let performance = self
            .question_performance
            .entry(question_id.clone())
            .or_default();
        performance.total += 1;
        if is_correct {
            performance.correct += 1;
        }
    }

    pub fn record_favorite(&mut self, part: BodyPartType, style: BodyPartStyle) {
        self.favorite_body_part_styles.insert(part, style);
    }

    /// Fold a finalized round into best score, running mean and play time.
    ///
    /// The mean is weighted by `total_games_played`, which counts games
    /// started, so it is only exact when every started game is finalized once.
    pub fn record_round(&mut self, score: u32, elapsed: Duration) {
        self.best_score = self.best_score.max(score);

        let games = f64::from(self.total_games_played.max(1));
        self.average_score = (self.average_score * (games - 1.0) + f64::from(score)) / games;

        self.total_time_played += elapsed;
    }

    pub fn performance_for(&self, question_id: &QuestionId) -> Option<QuestionPerformance> {
        self.question_performance.get(question_id).copied()
    }

    /// Current value of the metric an achievement criterion measures.
    ///
    /// Streaks are not tracked, so streak criteria have no metric.
    pub fn metric(&self, criteria_type: CriteriaType) -> Option<u64> {
        match criteria_type {
            CriteriaType::Score => Some(u64::from(self.best_score)),
            CriteriaType::Questions => Some(u64::from(self.total_games_played)),
            CriteriaType::Time => Some(self.total_time_played.as_secs()),
            CriteriaType::Customization => Some(self.favorite_body_part_styles.len() as u64),
            CriteriaType::Streak => None,
        }
    }
}
