//! Question generation.
//!
//! Produces batches of multiple-choice questions. Question `i` of a batch
//! takes `categories[i % len]` and the `i`-th entry of the body part table,
//! so both axes are covered evenly; the finished batch is shuffled.

mod arithmetic;
mod distractors;
mod style_table;
mod word_problems;

use std::collections::BTreeMap;
use std::sync::Arc;

use critterquiz_domain::{
    BodyPartStyle, BodyPartType, Question, QuestionCategory, QuestionDifficulty, QuestionId,
    QuestionParts,
};

use crate::infrastructure::ports::{GenerationError, QuestionGeneratorPort, RandomPort};

pub use style_table::{part_style_mapping, PART_STYLE_TABLE};

/// Stateless question generator; randomness comes from the injected port.
pub struct QuestionGenerator {
    random: Arc<dyn RandomPort>,
}

impl QuestionGenerator {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// The fixed body part → style table, as a map
    pub fn part_style_mapping(&self) -> BTreeMap<BodyPartType, BodyPartStyle> {
        part_style_mapping()
    }

    /// The three variations offered for `style`
    pub fn style_variations(&self, style: BodyPartStyle) -> Vec<String> {
        style.variations()
    }

    fn build_question(
        &self,
        index: usize,
        category: QuestionCategory,
        difficulty: QuestionDifficulty,
    ) -> Result<Question, GenerationError> {
        let random = self.random.as_ref();

        let (question_text, answer, hint) =
            match arithmetic::generate_problem(category, difficulty, random) {
                Some(problem) => (problem.text, problem.answer, None),
                None => {
                    let word = word_problems::pick(difficulty, random);
                    (
                        word.question.to_string(),
                        word.answer,
                        Some(word.hint.to_string()),
                    )
                }
            };

        let options = distractors::generate_options(answer, difficulty, random);
        let answer_to_body_part_style = options
            .iter()
            .enumerate()
            .map(|(position, option)| (option.clone(), style_table::style_for_option(position)))
            .collect();

        let id = QuestionId::new(format!(
            "{}_{}_{}",
            category.id_prefix(),
            index,
            random.gen_uuid()
        ));

        let question = Question::new(QuestionParts {
            id,
            question_text,
            correct_answer: answer.to_string(),
            body_part: style_table::body_part_for(index),
            options,
            answer_to_body_part_style,
            difficulty,
            category,
            hint,
        })?;
        Ok(question)
    }
}

impl QuestionGeneratorPort for QuestionGenerator {
    fn generate(
        &self,
        count: usize,
        difficulty: QuestionDifficulty,
        categories: &[QuestionCategory],
    ) -> Result<Vec<Question>, GenerationError> {
        if categories.is_empty() {
            return Err(GenerationError::NoCategories);
        }

        let mut questions = (0..count)
            .map(|i| self.build_question(i, categories[i % categories.len()], difficulty))
            .collect::<Result<Vec<_>, _>>()?;

        distractors::shuffle(&mut questions, self.random.as_ref());

        tracing::debug!(
            count = questions.len(),
            difficulty = %difficulty,
            categories = ?categories,
            "Generated question batch"
        );

        Ok(questions)
    }
}
