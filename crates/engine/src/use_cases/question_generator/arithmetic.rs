//! Arithmetic problem generation scaled by difficulty.

use critterquiz_domain::{QuestionCategory, QuestionDifficulty};

use crate::infrastructure::ports::RandomPort;

/// A problem statement with its numeric answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    pub text: String,
    pub answer: i64,
}

/// Inclusive operand range for a category at a difficulty
pub fn operand_range(category: QuestionCategory, difficulty: QuestionDifficulty) -> (i64, i64) {
    let additive = matches!(
        category,
        QuestionCategory::Addition | QuestionCategory::Subtraction
    );
    match (difficulty, additive) {
        (QuestionDifficulty::Easy, true) => (1, 10),
        (QuestionDifficulty::Easy, false) => (1, 5),
        (QuestionDifficulty::Medium, true) => (10, 59),
        (QuestionDifficulty::Medium, false) => (1, 10),
        (QuestionDifficulty::Hard, true) => (50, 149),
        (QuestionDifficulty::Hard, false) => (5, 19),
    }
}

/// Build an arithmetic problem. Returns `None` for word problems.
///
/// Subtraction draws two distinct operands and puts the larger first, so the
/// answer is always positive.
/// Division shows `a·b ÷ b` so the quotient is the whole number `a`.
pub fn generate_problem(
    category: QuestionCategory,
    difficulty: QuestionDifficulty,
    random: &dyn RandomPort,
) -> Option<Problem> {
    let (min, max) = operand_range(category, difficulty);
    let a = random.gen_range(min, max);
    let b = match category {
        QuestionCategory::Subtraction => distinct_operand(a, min, max, random),
        _ => random.gen_range(min, max),
    };

    let problem = match category {
        QuestionCategory::Addition => Problem {
            text: format!("What is {} + {}?", a, b),
            answer: a + b,
        },
        QuestionCategory::Subtraction => {
            let (high, low) = (a.max(b), a.min(b));
            Problem {
                text: format!("What is {} - {}?", high, low),
                answer: high - low,
            }
        }
        QuestionCategory::Multiplication => Problem {
            text: format!("What is {} × {}?", a, b),
            answer: a * b,
        },
        QuestionCategory::Division => Problem {
            text: format!("What is {} ÷ {}?", a * b, b),
            answer: a,
        },
        QuestionCategory::WordProblems => return None,
    };
    Some(problem)
}

/// Uniform over `min..=max` without `a`.
fn distinct_operand(a: i64, min: i64, max: i64, random: &dyn RandomPort) -> i64 {
    let b = random.gen_range(min, max - 1);
    if b >= a {
        b + 1
    } else {
        b
    }
}
