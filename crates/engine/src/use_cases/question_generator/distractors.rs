//! Answer options: distractor generation and shuffling.

use critterquiz_domain::{QuestionDifficulty, OPTIONS_PER_QUESTION};

use crate::infrastructure::ports::RandomPort;

/// Random draws allowed per spread before the spread doubles
const ATTEMPTS_PER_SPREAD: usize = 24;
/// Times the spread may double before options are filled deterministically
const MAX_WIDENINGS: u32 = 3;

/// Half-width of the window distractors are drawn from
fn spread_for(difficulty: QuestionDifficulty) -> i64 {
    match difficulty {
        QuestionDifficulty::Easy => 3,
        QuestionDifficulty::Medium => 5,
        QuestionDifficulty::Hard => 10,
    }
}

/// Correct answer plus two unique positive distractors, shuffled.
///
/// Candidates are `correct ± delta + 1` with `delta` in `0..spread`. After
/// too many rejected draws the spread widens; past the last widening the
/// remaining slots are filled by walking outward from the correct answer, so
/// this always terminates whatever the random source returns.
pub fn generate_options(
    correct: i64,
    difficulty: QuestionDifficulty,
    random: &dyn RandomPort,
) -> Vec<String> {
    let mut values = vec![correct];
    let mut spread = spread_for(difficulty);

    'widen: for _ in 0..=MAX_WIDENINGS {
        for _ in 0..ATTEMPTS_PER_SPREAD {
            if values.len() == OPTIONS_PER_QUESTION {
                break 'widen;
            }
            let sign = if random.gen_range(0, 1) == 0 { 1 } else { -1 };
            let delta = random.gen_range(0, spread - 1);
            try_push(&mut values, correct + sign * delta + 1);
        }
        spread *= 2;
    }

    let mut step = 1;
    while values.len() < OPTIONS_PER_QUESTION {
        try_push(&mut values, correct + step);
        if values.len() < OPTIONS_PER_QUESTION {
            try_push(&mut values, correct - step);
        }
        step += 1;
    }

    let mut options: Vec<String> = values.iter().map(i64::to_string).collect();
    shuffle(&mut options, random);
    options
}

fn try_push(values: &mut Vec<i64>, candidate: i64) {
    if candidate > 0 && !values.contains(&candidate) {
        values.push(candidate);
    }
}

/// Fisher–Yates: walk down from the end, swapping with a uniformly drawn
/// earlier-or-same index.
pub fn shuffle<T>(items: &mut [T], random: &dyn RandomPort) {
    for i in (1..items.len()).rev() {
        let drawn = random.gen_range(0, i as i64);
        let j = usize::try_from(drawn).unwrap_or(0).min(i);
        items.swap(i, j);
    }
}
