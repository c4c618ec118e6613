//! Settings loaded from `CRITTERQUIZ_*` environment variables.
//!
//! Every variable is optional. Values that fail to parse are logged and the
//! default is kept, so a typo in `.env` never stops the engine from starting.

use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use critterquiz_domain::{GameSettings, QuestionCategory};

pub const ENV_PREFIX: &str = "CRITTERQUIZ_";

const DEFAULT_SIM_GAMES: u32 = 10;

/// Configuration for the headless simulation binary
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    pub settings: GameSettings,
    pub games: u32,
    /// Seed for reproducible runs; `None` uses the thread RNG
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            settings: GameSettings::default(),
            games: DEFAULT_SIM_GAMES,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source. `lookup` receives the full
    /// prefixed name.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let var = |name: &str| {
            lookup(&format!("{ENV_PREFIX}{name}"))
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = SimConfig::default();
        let base = defaults.settings;

        let questions_per_quiz = parse_or(
            "QUESTIONS_PER_QUIZ",
            var("QUESTIONS_PER_QUIZ"),
            base.questions_per_quiz,
        );
        let time_limit = var("TIME_LIMIT_SECS")
            .map(|raw| parse_or("TIME_LIMIT_SECS", Some(raw), 0u64))
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs);

        let settings = GameSettings {
            questions_per_quiz,
            time_limit,
            difficulty: parse_or("DIFFICULTY", var("DIFFICULTY"), base.difficulty),
            categories: var("CATEGORIES")
                .and_then(|raw| parse_categories(&raw))
                .unwrap_or_else(|| base.categories.clone()),
            allow_hints: parse_or("ALLOW_HINTS", var("ALLOW_HINTS"), base.allow_hints),
            allow_retry: parse_or("ALLOW_RETRY", var("ALLOW_RETRY"), base.allow_retry),
            enable_customization: parse_or(
                "ENABLE_CUSTOMIZATION",
                var("ENABLE_CUSTOMIZATION"),
                base.enable_customization,
            ),
        };

        let settings = match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                tracing::warn!(error = %e, "Invalid settings from environment, using defaults");
                GameSettings::default()
            }
        };

        Self {
            settings,
            games: parse_or("SIM_GAMES", var("SIM_GAMES"), defaults.games),
            seed: var("SIM_SEED").and_then(|raw| match raw.parse() {
                Ok(seed) => Some(seed),
                Err(e) => {
                    tracing::warn!(value = %raw, error = %e, "Ignoring invalid SIM_SEED");
                    None
                }
            }),
        }
    }
}

fn parse_or<T>(name: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    let Some(raw) = raw else {
        return default;
    };
    match raw.parse() {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(
                variable = %format!("{ENV_PREFIX}{name}"),
                value = %raw,
                error = %e,
                default = %default,
                "Invalid setting, using default"
            );
            default
        }
    }
}

/// Comma-separated category list. Any unknown entry rejects the whole list.
fn parse_categories(raw: &str) -> Option<Vec<QuestionCategory>> {
    let parsed: Result<Vec<QuestionCategory>, _> = raw
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(QuestionCategory::from_str)
        .collect();

    match parsed {
        Ok(categories) if !categories.is_empty() => Some(categories),
        Ok(_) => None,
        Err(e) => {
            tracing::warn!(value = %raw, error = %e, "Invalid CATEGORIES, using default");
            None
        }
    }
}
