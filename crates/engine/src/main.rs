//! CritterQuiz simulator - plays headless games with random answers.

use std::sync::Arc;

use serde::Serialize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use critterquiz_domain::{Achievement, GamePhase, GameStatistics};
use critterquiz_engine::infrastructure::{
    clock::{SeededRandom, SystemClock, SystemRandom},
    ports::{ClockPort, RandomPort},
    settings::SimConfig,
};
use critterquiz_engine::{ProgressionEngine, QuestionGenerator};

fn main() -> anyhow::Result<()> {
    load_dotenv_from_repo_root();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "critterquiz_engine=debug,critterquiz_sim=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = SimConfig::from_env();
    tracing::info!(
        games = config.games,
        seed = ?config.seed,
        settings = ?config.settings,
        "Starting CritterQuiz simulation"
    );

    let random: Arc<dyn RandomPort> = match config.seed {
        Some(seed) => Arc::new(SeededRandom::new(seed)),
        None => Arc::new(SystemRandom),
    };
    let clock: Arc<dyn ClockPort> = Arc::new(SystemClock);
    let generator = Arc::new(QuestionGenerator::new(random.clone()));

    let mut engine = ProgressionEngine::new(generator, clock, config.settings);

    for game in 1..=config.games {
        play_game(&mut engine, random.as_ref());
        tracing::info!(
            game,
            score = engine.game_state().score,
            total = engine.game_state().total_questions,
            unlocked = engine.unlocked_body_part_styles().len(),
            "Game finished"
        );
    }

    let stats = engine.statistics();
    tracing::info!(
        games_played = stats.total_games_played,
        average_score = stats.average_score,
        best_score = stats.best_score,
        time_played_ms = stats.total_time_played.as_millis() as u64,
        "Simulation complete"
    );
    for achievement in engine.achievements() {
        tracing::info!(
            id = %achievement.id,
            name = %achievement.name,
            icon = %achievement.icon,
            "Achievement earned"
        );
    }

    let summary = serde_json::to_string(&SessionSummary {
        statistics: stats,
        achievements: engine.achievements(),
    })?;
    tracing::debug!(summary = %summary, "Final session state");

    Ok(())
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct SessionSummary<'a> {
    statistics: &'a GameStatistics,
    achievements: &'a [Achievement],
}

/// One full round: first pass, optional retry, statistics, then customization.
fn play_game(engine: &mut ProgressionEngine, random: &dyn RandomPort) {
    engine.start_new_game();
    answer_until_results(engine, random);

    // A finished retry round records statistics itself.
    if engine.start_retry_mode() {
        answer_until_results(engine, random);
    } else {
        engine.update_statistics();
    }

    if engine.start_customization() {
        let parts: Vec<_> = engine.unlocked_body_part_styles().keys().copied().collect();
        for part in parts {
            let variations = engine.available_variations(part);
            if let Some(variation) = pick(&variations, random) {
                engine.select_variation(part, variation.clone());
            }
        }
        engine.set_phase(GamePhase::Results);
    }
}

fn answer_until_results(engine: &mut ProgressionEngine, random: &dyn RandomPort) {
    while engine.game_state().current_phase == GamePhase::Quiz {
        let answer = engine
            .current_question()
            .and_then(|q| pick(q.options(), random).cloned());
        match answer {
            Some(answer) => engine.answer_question(&answer),
            None => tracing::warn!("Question without options, skipping"),
        }
        engine.next_question();
    }
}

fn pick<'a, T>(items: &'a [T], random: &dyn RandomPort) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let last = items.len() as i64 - 1;
    let index = usize::try_from(random.gen_range(0, last)).unwrap_or(0);
    items.get(index.min(items.len() - 1))
}

fn load_dotenv_from_repo_root() {
    let repo_root = std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..");

    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = repo_root.join(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
