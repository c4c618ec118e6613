//! Game progression.
//!
//! Drives a player through quiz → results → (retry) → customization:
//! - Starting a round from generated questions (with a fallback question)
//! - Recording answers, unlocking cosmetic styles, collecting mistakes
//! - Retrying missed questions
//! - Folding finished rounds into statistics and achievements
//!
//! Every mutation takes `&mut self`, so one action completes before the next
//! can start.

mod achievements;

use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};

use critterquiz_domain::{
    Achievement, BodyPartStyle, BodyPartType, DomainError, GamePhase, GameSettings,
    GameSettingsUpdate, GameState, GameStatistics, Question, QuizResult,
};

use crate::infrastructure::ports::{ClockPort, QuestionGeneratorPort};

/// Stateful progression engine for a single player.
pub struct ProgressionEngine {
    generator: Arc<dyn QuestionGeneratorPort>,
    clock: Arc<dyn ClockPort>,
    settings: GameSettings,
    questions: Vec<Question>,
    state: GameState,
    statistics: GameStatistics,
    achievements: Vec<Achievement>,
}

impl ProgressionEngine {
    pub fn new(
        generator: Arc<dyn QuestionGeneratorPort>,
        clock: Arc<dyn ClockPort>,
        settings: GameSettings,
    ) -> Self {
        Self {
            generator,
            clock,
            settings,
            questions: Vec::new(),
            state: GameState::default(),
            statistics: GameStatistics::new(),
            achievements: Vec::new(),
        }
    }

    // =========================================================================
    // Round lifecycle
    // =========================================================================

    /// Start a fresh round from newly generated questions.
    ///
    /// Generation errors and empty batches are logged and replaced by
    /// [`Question::fallback`], so the round always has a question to play.
    pub fn start_new_game(&mut self) {
        let count = self.settings.questions_per_quiz as usize;
        let questions = match self.generator.generate(
            count,
            self.settings.difficulty,
            &self.settings.categories,
        ) {
            Ok(questions) if !questions.is_empty() => questions,
            Ok(_) => {
                tracing::warn!(requested = count, "No questions generated, using fallback");
                vec![Question::fallback()]
            }
            Err(e) => {
                tracing::warn!(error = %e, "Error generating questions, using fallback");
                vec![Question::fallback()]
            }
        };

        self.questions = questions;
        self.state = GameState {
            current_phase: GamePhase::Quiz,
            total_questions: self.questions.len() as u32,
            game_start_time: Some(self.clock.now()),
            ..GameState::default()
        };
        self.statistics.record_game_started();

        tracing::info!(
            questions = self.questions.len(),
            difficulty = %self.settings.difficulty,
            games_played = self.statistics.total_games_played,
            "Started new game"
        );
    }

    /// Same as [`start_new_game`](Self::start_new_game).
    pub fn reset_game(&mut self) {
        self.start_new_game();
    }

    /// Record an answer to the current question.
    ///
    /// Whatever the outcome, the chosen option's style is unlocked for the
    /// question's body part. Does nothing when there is no current question.
    pub fn answer_question(&mut self, selected_answer: &str) {
        let Some(question) = self.current_question().cloned() else {
            tracing::debug!(
                index = self.state.current_question_index,
                "Ignoring answer with no current question"
            );
            return;
        };

        let is_correct = question.is_correct(selected_answer);
        let time_spent = self.elapsed_in_round();
        let unlocked_style = question.style_for_answer(selected_answer);

        if let Some(style) = unlocked_style {
            self.state
                .unlocked_body_part_styles
                .insert(question.body_part(), style);
        }

        self.state.quiz_results.push(QuizResult {
            question_id: question.id().clone(),
            selected_answer: selected_answer.to_string(),
            is_correct,
            time_spent,
            body_part: question.body_part(),
            unlocked_style,
        });

        self.statistics.record_answer(question.id(), is_correct);

        if is_correct {
            self.state.score += 1;
        } else {
            self.state.incorrect_questions.push(question.clone());
        }

        tracing::debug!(
            question_id = %question.id(),
            is_correct,
            body_part = %question.body_part(),
            style = ?unlocked_style,
            "Answer recorded"
        );
    }

    /// Move past the current question.
    ///
    /// Running off the end finishes a retry round, or shows the results of a
    /// first pass. A first pass does not update statistics here; callers do
    /// that with [`update_statistics`](Self::update_statistics).
    pub fn next_question(&mut self) {
        self.state.current_question_index += 1;

        if self.state.current_question_index >= self.questions.len() {
            if self.state.is_retry_mode {
                self.finish_retry_mode();
            } else {
                self.state.current_phase = GamePhase::Results;
            }
        } else {
            self.state.current_phase = GamePhase::Quiz;
        }
    }

    /// Replay only the missed questions. Returns whether the retry started.
    ///
    /// Refused when nothing was missed or retries are disabled. The mistake
    /// list is handed to the new round and cleared.
    pub fn start_retry_mode(&mut self) -> bool {
        if !self.settings.allow_retry || self.state.incorrect_questions.is_empty() {
            tracing::debug!(
                allow_retry = self.settings.allow_retry,
                mistakes = self.state.incorrect_questions.len(),
                "Retry refused"
            );
            return false;
        }

        self.questions = std::mem::take(&mut self.state.incorrect_questions);
        self.state.is_retry_mode = true;
        self.state.current_question_index = 0;
        self.state.score = 0;
        self.state.total_questions = self.questions.len() as u32;
        self.state.quiz_results.clear();
        self.state.current_phase = GamePhase::Quiz;
        self.state.game_start_time = Some(self.clock.now());

        tracing::info!(questions = self.questions.len(), "Started retry round");
        true
    }

    pub fn finish_retry_mode(&mut self) {
        self.state.is_retry_mode = false;
        self.state.current_phase = GamePhase::Results;
        self.update_statistics();
    }

    /// Enter customization after a perfect round. Returns whether it did.
    pub fn start_customization(&mut self) -> bool {
        if !self.can_customize() {
            tracing::debug!(
                score = self.state.score,
                total = self.state.total_questions,
                enabled = self.settings.enable_customization,
                "Customization refused"
            );
            return false;
        }
        self.state.current_phase = GamePhase::Customization;
        true
    }

    pub fn set_phase(&mut self, phase: GamePhase) {
        self.state.current_phase = phase;
    }

    // =========================================================================
    // Customization & settings
    // =========================================================================

    /// Record the player's visual variant for a body part.
    ///
    /// If the part has an unlocked style, that style becomes its favorite.
    pub fn select_variation(&mut self, part: BodyPartType, variation: impl Into<String>) {
        self.state
            .selected_variations
            .insert(part, variation.into());

        if let Some(style) = self.state.unlocked_body_part_styles.get(&part) {
            self.statistics.record_favorite(part, *style);
        }
    }

    /// Merge a partial settings update. Invalid results leave settings as they were.
    pub fn update_game_settings(&mut self, update: GameSettingsUpdate) -> Result<(), DomainError> {
        self.settings = self.settings.merged(update)?;
        tracing::debug!(settings = ?self.settings, "Game settings updated");
        Ok(())
    }

    // =========================================================================
    // Statistics
    // =========================================================================

    /// Fold the current round into the session statistics and re-check achievements.
    pub fn update_statistics(&mut self) {
        let now = self.clock.now();
        let elapsed = elapsed_between(self.state.game_start_time, now);

        self.state.total_time_spent = elapsed;
        self.statistics.record_round(self.state.score, elapsed);

        tracing::info!(
            score = self.state.score,
            best_score = self.statistics.best_score,
            average_score = self.statistics.average_score,
            "Round finalized"
        );

        for achievement in achievements::newly_earned(&self.statistics, &self.achievements, now) {
            tracing::info!(achievement = %achievement.id, "Achievement unlocked");
            self.achievements.push(achievement);
        }
    }

    // =========================================================================
    // Projections
    // =========================================================================

    /// Percentage through the round, capped at 100; 0 with no questions.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        let position = (self.state.current_question_index + 1) as f64;
        (position / self.questions.len() as f64 * 100.0).min(100.0)
    }

    pub fn is_perfect_score(&self) -> bool {
        self.state.total_questions > 0 && self.state.score == self.state.total_questions
    }

    pub fn can_customize(&self) -> bool {
        self.is_perfect_score() && self.settings.enable_customization
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.state.current_question_index)
    }

    /// Hint for the current question, when hints are allowed and it has one
    pub fn current_hint(&self) -> Option<&str> {
        if !self.settings.allow_hints {
            return None;
        }
        self.current_question().and_then(Question::hint)
    }

    /// Variations the player may pick for `part`, based on its unlocked style
    pub fn available_variations(&self, part: BodyPartType) -> Vec<String> {
        self.state
            .unlocked_body_part_styles
            .get(&part)
            .map(BodyPartStyle::variations)
            .unwrap_or_default()
    }

    pub fn unlocked_body_part_styles(&self) -> &BTreeMap<BodyPartType, BodyPartStyle> {
        &self.state.unlocked_body_part_styles
    }

    pub fn game_state(&self) -> &GameState {
        &self.state
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn settings(&self) -> &GameSettings {
        &self.settings
    }

    pub fn statistics(&self) -> &GameStatistics {
        &self.statistics
    }

    pub fn achievements(&self) -> &[Achievement] {
        &self.achievements
    }

    fn elapsed_in_round(&self) -> Duration {
        elapsed_between(self.state.game_start_time, self.clock.now())
    }
}

/// Non-negative time from `start` to `now`; zero without a start.
fn elapsed_between(start: Option<DateTime<Utc>>, now: DateTime<Utc>) -> Duration {
    start
        .and_then(|start| (now - start).to_std().ok())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::clock::{FixedClock, SeededRandom};
    use crate::infrastructure::ports::{GenerationError, MockClockPort, MockQuestionGeneratorPort};
    use crate::use_cases::question_generator::QuestionGenerator;
    use chrono::TimeZone;
    use critterquiz_domain::{QuestionCategory, QuestionDifficulty};

    fn start() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 10, 30, 0).unwrap()
    }

    fn settings(questions_per_quiz: u32) -> GameSettings {
        GameSettings {
            questions_per_quiz,
            ..GameSettings::default()
        }
    }

    fn engine_with(settings: GameSettings) -> ProgressionEngine {
        let generator = QuestionGenerator::new(Arc::new(SeededRandom::new(42)));
        ProgressionEngine::new(Arc::new(generator), Arc::new(FixedClock(start())), settings)
    }

    /// Clock that moves forward `step_secs` on every read.
    fn ticking_clock(step_secs: i64) -> MockClockPort {
        let mut clock = MockClockPort::new();
        let mut reads = 0;
        clock.expect_now().returning(move || {
            let now = start() + chrono::Duration::seconds(reads * step_secs);
            reads += 1;
            now
        });
        clock
    }

    fn failing_generator() -> MockQuestionGeneratorPort {
        let mut generator = MockQuestionGeneratorPort::new();
        generator
            .expect_generate()
            .returning(|_, _, _| Err(GenerationError::NoCategories));
        generator
    }

    fn answer_correctly(engine: &mut ProgressionEngine) {
        let answer = engine
            .current_question()
            .map(|q| q.correct_answer().to_string())
            .expect("current question");
        engine.answer_question(&answer);
    }

    fn answer_wrong(engine: &mut ProgressionEngine) {
        let answer = engine
            .current_question()
            .and_then(|q| {
                q.options()
                    .iter()
                    .find(|o| o.as_str() != q.correct_answer())
                    .cloned()
            })
            .expect("wrong option");
        engine.answer_question(&answer);
    }

    /// Answer every remaining question of the round, correctly or not, advancing after each.
    fn play_round(engine: &mut ProgressionEngine, correct: &[bool]) {
        for is_correct in correct {
            if *is_correct {
                answer_correctly(engine);
            } else {
                answer_wrong(engine);
            }
            engine.next_question();
        }
    }

    mod state_machine {
        use super::*;

        #[test]
        fn three_question_round_ends_in_results() {
            let mut engine = engine_with(settings(3));
            engine.start_new_game();
            assert_eq!(engine.game_state().current_phase, GamePhase::Quiz);
            assert_eq!(engine.game_state().total_questions, 3);

            let mut phases = vec![engine.game_state().current_phase];
            for _ in 0..3 {
                answer_correctly(&mut engine);
                engine.next_question();
                phases.push(engine.game_state().current_phase);
            }

            assert_eq!(
                phases,
                vec![
                    GamePhase::Quiz,
                    GamePhase::Quiz,
                    GamePhase::Quiz,
                    GamePhase::Results
                ]
            );
            assert_eq!(engine.game_state().current_question_index, 3);
            assert!((engine.progress() - 100.0).abs() < f64::EPSILON);
            assert!(engine.current_question().is_none());
        }

        #[test]
        fn progress_counts_current_question() {
            let mut engine = engine_with(settings(4));
            assert_eq!(engine.progress(), 0.0);

            engine.start_new_game();
            assert!((engine.progress() - 25.0).abs() < f64::EPSILON);
            engine.next_question();
            assert!((engine.progress() - 50.0).abs() < f64::EPSILON);
        }

        #[test]
        fn first_pass_results_do_not_touch_statistics() {
            let mut engine = engine_with(settings(2));
            engine.start_new_game();
            play_round(&mut engine, &[true, true]);

            assert_eq!(engine.game_state().current_phase, GamePhase::Results);
            assert_eq!(engine.statistics().best_score, 0);
            assert_eq!(engine.statistics().average_score, 0.0);
        }

        #[test]
        fn new_game_resets_round_state() {
            let mut engine = engine_with(settings(2));
            engine.start_new_game();
            play_round(&mut engine, &[false, true]);
            engine.select_variation(BodyPartType::Eyes, "round-2");

            engine.reset_game();

            let state = engine.game_state();
            assert_eq!(state.current_phase, GamePhase::Quiz);
            assert_eq!(state.current_question_index, 0);
            assert_eq!(state.score, 0);
            assert!(state.unlocked_body_part_styles.is_empty());
            assert!(state.selected_variations.is_empty());
            assert!(state.incorrect_questions.is_empty());
            assert!(state.quiz_results.is_empty());
            assert!(!state.is_retry_mode);
            assert_eq!(state.game_start_time, Some(start()));
            assert_eq!(engine.statistics().total_games_played, 2);
        }

        #[test]
        fn set_phase_is_unconditional() {
            let mut engine = engine_with(settings(1));
            engine.set_phase(GamePhase::Selection);
            assert_eq!(engine.game_state().current_phase, GamePhase::Selection);
        }
    }

    mod answers {
        use super::*;

        #[test]
        fn answer_without_question_is_ignored() {
            let mut engine = engine_with(settings(3));
            engine.answer_question("8");

            assert!(engine.game_state().quiz_results.is_empty());
            assert_eq!(engine.game_state().score, 0);
            assert!(engine.statistics().question_performance.is_empty());
        }

        #[test]
        fn wrong_answer_still_unlocks_its_style() {
            let mut engine = ProgressionEngine::new(
                Arc::new(failing_generator()),
                Arc::new(FixedClock(start())),
                GameSettings::default(),
            );
            engine.start_new_game();
            engine.answer_question("7");

            let state = engine.game_state();
            assert_eq!(state.score, 0);
            assert_eq!(
                state.unlocked_body_part_styles.get(&BodyPartType::Eyes),
                Some(&BodyPartStyle::Square)
            );
            assert_eq!(state.incorrect_questions, vec![Question::fallback()]);

            let result = &state.quiz_results[0];
            assert!(!result.is_correct);
            assert_eq!(result.selected_answer, "7");
            assert_eq!(result.unlocked_style, Some(BodyPartStyle::Square));
        }

        #[test]
        fn answer_outside_options_unlocks_nothing() {
            let mut engine = ProgressionEngine::new(
                Arc::new(failing_generator()),
                Arc::new(FixedClock(start())),
                GameSettings::default(),
            );
            engine.start_new_game();
            engine.answer_question("42");

            assert!(engine.unlocked_body_part_styles().is_empty());
            assert_eq!(engine.game_state().quiz_results.len(), 1);
            assert_eq!(engine.game_state().incorrect_questions.len(), 1);
        }

        #[test]
        fn time_spent_measures_from_round_start() {
            let mut engine = ProgressionEngine::new(
                Arc::new(failing_generator()),
                Arc::new(ticking_clock(2)),
                GameSettings::default(),
            );
            engine.start_new_game();
            engine.answer_question("8");

            assert_eq!(
                engine.game_state().quiz_results[0].time_spent,
                Duration::from_secs(2)
            );
        }

        #[test]
        fn per_question_counters_update_every_answer() {
            let mut engine = engine_with(settings(1));
            engine.start_new_game();
            let id = engine.current_question().map(|q| q.id().clone()).unwrap();

            answer_wrong(&mut engine);
            answer_correctly(&mut engine);

            let performance = engine.statistics().performance_for(&id).unwrap();
            assert_eq!(performance.total, 2);
            assert_eq!(performance.correct, 1);
        }

        #[test]
        fn hints_follow_settings() {
            let word_problems = GameSettings {
                questions_per_quiz: 2,
                categories: vec![QuestionCategory::WordProblems],
                difficulty: QuestionDifficulty::Hard,
                ..GameSettings::default()
            };
            let mut engine = engine_with(word_problems);
            engine.start_new_game();
            assert!(engine.current_hint().is_some());

            engine
                .update_game_settings(GameSettingsUpdate {
                    allow_hints: Some(false),
                    ..GameSettingsUpdate::default()
                })
                .unwrap();
            assert!(engine.current_hint().is_none());
        }
    }

    mod fallback {
        use super::*;

        #[test]
        fn generator_error_yields_fallback_round() {
            let mut engine = ProgressionEngine::new(
                Arc::new(failing_generator()),
                Arc::new(FixedClock(start())),
                settings(5),
            );
            engine.start_new_game();

            assert_eq!(engine.questions(), &[Question::fallback()]);
            assert_eq!(engine.game_state().total_questions, 1);
            assert_eq!(engine.game_state().current_phase, GamePhase::Quiz);

            engine.answer_question("8");
            engine.next_question();

            assert_eq!(engine.game_state().score, 1);
            assert!(engine.is_perfect_score());
            assert_eq!(engine.game_state().current_phase, GamePhase::Results);
            assert_eq!(
                engine.unlocked_body_part_styles().get(&BodyPartType::Eyes),
                Some(&BodyPartStyle::Round)
            );
        }

        #[test]
        fn empty_batch_yields_fallback_round() {
            let mut generator = MockQuestionGeneratorPort::new();
            generator
                .expect_generate()
                .times(1)
                .returning(|_, _, _| Ok(vec![]));

            let mut engine = ProgressionEngine::new(
                Arc::new(generator),
                Arc::new(FixedClock(start())),
                settings(3),
            );
            engine.start_new_game();

            assert_eq!(engine.questions(), &[Question::fallback()]);
        }

        #[test]
        fn generator_receives_settings() {
            let mut generator = MockQuestionGeneratorPort::new();
            generator
                .expect_generate()
                .withf(|count, difficulty, categories| {
                    *count == 4
                        && *difficulty == QuestionDifficulty::Medium
                        && categories.to_vec() == vec![QuestionCategory::Division]
                })
                .times(1)
                .returning(|_, _, _| Ok(vec![Question::fallback()]));

            let mut engine = ProgressionEngine::new(
                Arc::new(generator),
                Arc::new(FixedClock(start())),
                GameSettings {
                    questions_per_quiz: 4,
                    difficulty: QuestionDifficulty::Medium,
                    categories: vec![QuestionCategory::Division],
                    ..GameSettings::default()
                },
            );
            engine.start_new_game();
            assert_eq!(engine.questions().len(), 1);
        }
    }

    mod customization {
        use super::*;

        #[test]
        fn perfect_round_can_customize() {
            let mut engine = engine_with(settings(3));
            engine.start_new_game();
            play_round(&mut engine, &[true, true, true]);

            assert!(engine.is_perfect_score());
            assert!(engine.can_customize());
            assert!(engine.start_customization());
            assert_eq!(engine.game_state().current_phase, GamePhase::Customization);
        }

        #[test]
        fn imperfect_round_cannot_customize() {
            let mut engine = engine_with(settings(3));
            engine.start_new_game();
            play_round(&mut engine, &[true, false, true]);

            assert_eq!(engine.game_state().score, 2);
            assert!(!engine.can_customize());
            assert!(!engine.start_customization());
            assert_eq!(engine.game_state().current_phase, GamePhase::Results);
        }

        #[test]
        fn disabled_customization_is_refused() {
            let mut engine = engine_with(GameSettings {
                questions_per_quiz: 1,
                enable_customization: false,
                ..GameSettings::default()
            });
            engine.start_new_game();
            play_round(&mut engine, &[true]);

            assert!(engine.is_perfect_score());
            assert!(!engine.can_customize());
            assert!(!engine.start_customization());
        }

        #[test]
        fn no_questions_is_not_perfect() {
            let engine = engine_with(settings(3));
            assert!(!engine.is_perfect_score());
        }

        #[test]
        fn selecting_variation_records_favorite_for_unlocked_part() {
            let mut engine = ProgressionEngine::new(
                Arc::new(failing_generator()),
                Arc::new(FixedClock(start())),
                GameSettings::default(),
            );
            engine.start_new_game();
            engine.answer_question("9");

            engine.select_variation(BodyPartType::Eyes, "triangle-3");
            engine.select_variation(BodyPartType::Tail, "round-1");

            let state = engine.game_state();
            assert_eq!(
                state.selected_variations.get(&BodyPartType::Eyes).map(String::as_str),
                Some("triangle-3")
            );
            assert_eq!(
                state.selected_variations.get(&BodyPartType::Tail).map(String::as_str),
                Some("round-1")
            );

            let favorites = &engine.statistics().favorite_body_part_styles;
            assert_eq!(favorites.get(&BodyPartType::Eyes), Some(&BodyPartStyle::Triangle));
            assert!(!favorites.contains_key(&BodyPartType::Tail));
        }

        #[test]
        fn available_variations_follow_unlocked_style() {
            let mut engine = ProgressionEngine::new(
                Arc::new(failing_generator()),
                Arc::new(FixedClock(start())),
                GameSettings::default(),
            );
            engine.start_new_game();
            assert!(engine.available_variations(BodyPartType::Eyes).is_empty());

            engine.answer_question("8");
            assert_eq!(
                engine.available_variations(BodyPartType::Eyes),
                vec!["round-1", "round-2", "round-3"]
            );
        }
    }

    mod retry {
        use super::*;

        #[test]
        fn retry_replays_only_missed_question() {
            let mut engine = engine_with(settings(3));
            engine.start_new_game();

            let missed = engine.current_question().cloned().unwrap();
            play_round(&mut engine, &[false, true, true]);
            assert_eq!(engine.game_state().current_phase, GamePhase::Results);
            assert_eq!(engine.game_state().incorrect_questions, vec![missed.clone()]);

            assert!(engine.start_retry_mode());
            let state = engine.game_state();
            assert!(state.is_retry_mode);
            assert_eq!(state.current_phase, GamePhase::Quiz);
            assert_eq!(state.total_questions, 1);
            assert_eq!(state.score, 0);
            assert!(state.quiz_results.is_empty());
            assert!(state.incorrect_questions.is_empty());
            assert_eq!(engine.questions(), &[missed]);

            play_round(&mut engine, &[true]);

            let state = engine.game_state();
            assert!(!state.is_retry_mode);
            assert_eq!(state.current_phase, GamePhase::Results);
            assert_eq!(engine.statistics().best_score, 1);
            assert!((engine.statistics().average_score - 1.0).abs() < f64::EPSILON);
        }

        #[test]
        fn mistakes_in_retry_start_a_fresh_list() {
            let mut engine = engine_with(settings(2));
            engine.start_new_game();
            play_round(&mut engine, &[false, false]);

            assert!(engine.start_retry_mode());
            answer_wrong(&mut engine);

            assert_eq!(engine.game_state().incorrect_questions.len(), 1);
        }

        #[test]
        fn retry_refused_without_mistakes() {
            let mut engine = engine_with(settings(2));
            engine.start_new_game();
            play_round(&mut engine, &[true, true]);

            assert!(!engine.start_retry_mode());
            assert!(!engine.game_state().is_retry_mode);
            assert_eq!(engine.game_state().current_phase, GamePhase::Results);
        }

        #[test]
        fn retry_refused_when_disabled() {
            let mut engine = engine_with(GameSettings {
                questions_per_quiz: 2,
                allow_retry: false,
                ..GameSettings::default()
            });
            engine.start_new_game();
            play_round(&mut engine, &[false, true]);

            assert!(!engine.start_retry_mode());
            assert_eq!(engine.game_state().incorrect_questions.len(), 1);
        }

        #[test]
        fn finishing_retry_records_round_time() {
            let mut engine = ProgressionEngine::new(
                Arc::new(failing_generator()),
                Arc::new(ticking_clock(5)),
                GameSettings::default(),
            );
            // reads: start=0s, answer=5s, retry start=10s, answer=15s, finish=20s
            engine.start_new_game();
            engine.answer_question("7");
            engine.next_question();
            assert!(engine.start_retry_mode());
            engine.answer_question("8");
            engine.next_question();

            assert_eq!(engine.game_state().total_time_spent, Duration::from_secs(10));
            assert_eq!(engine.statistics().total_time_played, Duration::from_secs(10));
        }
    }

    mod statistics {
        use super::*;

        #[test]
        fn running_average_over_two_games() {
            let mut engine = engine_with(settings(3));

            engine.start_new_game();
            play_round(&mut engine, &[true, true, true]);
            engine.update_statistics();

            engine
                .update_game_settings(GameSettingsUpdate {
                    questions_per_quiz: Some(5),
                    ..GameSettingsUpdate::default()
                })
                .unwrap();
            engine.start_new_game();
            play_round(&mut engine, &[true, true, true, true, true]);
            engine.update_statistics();

            let stats = engine.statistics();
            assert_eq!(stats.total_games_played, 2);
            assert_eq!(stats.best_score, 5);
            assert!((stats.average_score - 4.0).abs() < f64::EPSILON);
        }

        #[test]
        fn achievements_unlock_once() {
            let mut engine = engine_with(settings(1));

            for _ in 0..7 {
                engine.start_new_game();
                play_round(&mut engine, &[true]);
                engine.update_statistics();
            }

            let achievements = engine.achievements();
            assert_eq!(achievements.len(), 1);
            assert_eq!(achievements[0].id.as_str(), "first_5_games");
            assert_eq!(achievements[0].unlock_date, Some(start()));
        }

        #[test]
        fn high_score_unlocks_perfect_score() {
            let mut engine = engine_with(settings(10));
            engine.start_new_game();
            play_round(&mut engine, &[true; 10]);
            engine.update_statistics();

            let ids: Vec<&str> = engine.achievements().iter().map(|a| a.id.as_str()).collect();
            assert_eq!(ids, vec!["perfect_score"]);
        }

        #[test]
        fn invalid_settings_update_is_rejected() {
            let mut engine = engine_with(settings(3));
            let result = engine.update_game_settings(GameSettingsUpdate {
                categories: Some(vec![]),
                ..GameSettingsUpdate::default()
            });

            assert!(matches!(result, Err(DomainError::Validation(_))));
            assert_eq!(engine.settings(), &settings(3));
        }
    }
}
