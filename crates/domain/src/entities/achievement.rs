//! Achievement entity - Milestones unlocked from cumulative statistics

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::AchievementId;
use crate::value_objects::GameStatistics;

/// What an achievement measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriteriaType {
    /// Best round score
    Score,
    /// Total play time in seconds
    Time,
    /// Games played
    Questions,
    /// Body parts with a favorite style
    Customization,
    /// Consecutive correct answers (not tracked yet)
    Streak,
}

/// How the measured value is compared with the criterion's value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CriteriaCondition {
    Equals,
    /// Reaching the value counts: `measured >= value`
    GreaterThan,
    LessThan,
    /// The measured collection holds at least `value` entries
    Contains,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AchievementCriteria {
    #[serde(rename = "type")]
    pub criteria_type: CriteriaType,
    pub value: u64,
    pub condition: CriteriaCondition,
}

impl AchievementCriteria {
    pub fn new(criteria_type: CriteriaType, value: u64, condition: CriteriaCondition) -> Self {
        Self {
            criteria_type,
            value,
            condition,
        }
    }

    pub fn is_met_by(&self, stats: &GameStatistics) -> bool {
        let Some(measured) = stats.metric(self.criteria_type) else {
            return false;
        };

        match self.condition {
            CriteriaCondition::Equals => measured == self.value,
            CriteriaCondition::GreaterThan | CriteriaCondition::Contains => {
                measured >= self.value
            }
            CriteriaCondition::LessThan => measured < self.value,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Achievement {
    pub id: AchievementId,
    pub name: String,
    pub description: String,
    pub icon: String,
    pub unlocked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unlock_date: Option<DateTime<Utc>>,
    pub criteria: AchievementCriteria,
}

impl Achievement {
    pub fn new(
        id: impl Into<AchievementId>,
        name: impl Into<String>,
        description: impl Into<String>,
        icon: impl Into<String>,
        criteria: AchievementCriteria,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            icon: icon.into(),
            unlocked: false,
            unlock_date: None,
            criteria,
        }
    }

    /// Unlocked copy of this achievement stamped with `at`
    pub fn unlock(&self, at: DateTime<Utc>) -> Self {
        Self {
            unlocked: true,
            unlock_date: Some(at),
            ..self.clone()
        }
    }

    /// Whether `stats` satisfy this achievement, ignoring its unlocked flag
    pub fn is_earned(&self, stats: &GameStatistics) -> bool {
        self.criteria.is_met_by(stats)
    }
}

/// All achievement definitions, locked
pub fn all_achievements() -> Vec<Achievement> {
    vec![
        Achievement::new(
            "first_5_games",
            "Getting Started",
            "Played 5 games",
            "🎮",
            AchievementCriteria::new(CriteriaType::Questions, 5, CriteriaCondition::GreaterThan),
        ),
        Achievement::new(
            "perfect_score",
            "Perfect Score",
            "Got a perfect score",
            "🏆",
            AchievementCriteria::new(CriteriaType::Score, 10, CriteriaCondition::GreaterThan),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::time::Duration;

    fn stats_with(games: u32, best: u32) -> GameStatistics {
        GameStatistics {
            total_games_played: games,
            best_score: best,
            ..GameStatistics::default()
        }
    }

    #[test]
    fn definitions_start_locked() {
        let all = all_achievements();
        assert_eq!(all.len(), 2);
        assert!(all.iter().all(|a| !a.unlocked && a.unlock_date.is_none()));
    }

    #[test]
    fn games_played_threshold_is_inclusive() {
        let getting_started = &all_achievements()[0];
        assert!(!getting_started.is_earned(&stats_with(4, 0)));
        assert!(getting_started.is_earned(&stats_with(5, 0)));
    }

    #[test]
    fn best_score_threshold() {
        let perfect = &all_achievements()[1];
        assert!(!perfect.is_earned(&stats_with(50, 9)));
        assert!(perfect.is_earned(&stats_with(1, 10)));
    }

    #[test]
    fn conditions_compare_measured_value() {
        let stats = GameStatistics {
            total_time_played: Duration::from_secs(30),
            ..GameStatistics::default()
        };
        let equals = AchievementCriteria::new(CriteriaType::Time, 30, CriteriaCondition::Equals);
        let under = AchievementCriteria::new(CriteriaType::Time, 60, CriteriaCondition::LessThan);
        let streak =
            AchievementCriteria::new(CriteriaType::Streak, 0, CriteriaCondition::GreaterThan);

        assert!(equals.is_met_by(&stats));
        assert!(under.is_met_by(&stats));
        assert!(!streak.is_met_by(&stats));
    }

    #[test]
    fn unlock_stamps_date() {
        let at = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let unlocked = all_achievements()[1].unlock(at);
        assert!(unlocked.unlocked);
        assert_eq!(unlocked.unlock_date, Some(at));
        assert_eq!(unlocked.id.as_str(), "perfect_score");
    }

    #[test]
    fn criteria_serializes_type_field() {
        let json = serde_json::to_value(all_achievements()[0].criteria).unwrap();
        assert_eq!(json["type"], "questions");
        assert_eq!(json["condition"], "greater-than");
    }
}
