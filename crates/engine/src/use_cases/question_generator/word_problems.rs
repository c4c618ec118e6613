//! Canned word problems per difficulty tier.

use critterquiz_domain::QuestionDifficulty;

use crate::infrastructure::ports::RandomPort;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordProblem {
    pub question: &'static str,
    pub answer: i64,
    pub hint: &'static str,
}

const EASY: &[WordProblem] = &[
    WordProblem {
        question: "If you have 3 apples and get 2 more, how many do you have?",
        answer: 5,
        hint: "Count the apples you start with, then add the new ones!",
    },
    WordProblem {
        question: "There are 4 birds on a tree and 3 more fly in. How many birds are there now?",
        answer: 7,
        hint: "Add the birds that were there to the ones that flew in!",
    },
];

const MEDIUM: &[WordProblem] = &[
    WordProblem {
        question: "A store has 25 books and sells 8. How many books are left?",
        answer: 17,
        hint: "Start with the total books and subtract the ones sold!",
    },
    WordProblem {
        question: "If each box has 6 toys and you have 4 boxes, how many toys do you have?",
        answer: 24,
        hint: "Multiply the number of toys per box by the number of boxes!",
    },
];

const HARD: &[WordProblem] = &[
    WordProblem {
        question: "A train travels 120 miles in 3 hours. How many miles does it travel per hour?",
        answer: 40,
        hint: "Divide the total distance by the time taken!",
    },
    WordProblem {
        question: "If you save $15 each week for 8 weeks, how much money will you have?",
        answer: 120,
        hint: "Multiply the amount saved per week by the number of weeks!",
    },
];

pub fn pool_for(difficulty: QuestionDifficulty) -> &'static [WordProblem] {
    match difficulty {
        QuestionDifficulty::Easy => EASY,
        QuestionDifficulty::Medium => MEDIUM,
        QuestionDifficulty::Hard => HARD,
    }
}

/// Uniform pick from the tier's pool
pub fn pick(difficulty: QuestionDifficulty, random: &dyn RandomPort) -> WordProblem {
    let pool = pool_for(difficulty);
    let last = pool.len().saturating_sub(1);
    let index = usize::try_from(random.gen_range(0, last as i64))
        .unwrap_or(0)
        .min(last);
    pool[index]
}
