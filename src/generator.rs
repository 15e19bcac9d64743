//! Multiple-choice question assembly.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::{debug, warn};

use crate::QuizError;
use crate::data::PoemStore;
use crate::models::{CHOICE_COUNT, GameMode, Poem, Question};

/// How many poems are drawn as candidate distractors per question.
pub const DISTRACTOR_POOL_SIZE: usize = 10;

/// Draw a target poem and distractors from `store` and build a question for `mode`.
///
/// The store is only read; generating never changes it.
pub fn generate_question<R: Rng + ?Sized>(
    store: &PoemStore,
    mode: GameMode,
    rng: &mut R,
) -> Result<Question, QuizError> {
    let target = store.pick_one(rng)?;
    let pool = store.sample(DISTRACTOR_POOL_SIZE, rng)?;
    let choices = build_choices(target, pool, mode, rng)?;

    debug!(poem_id = target.id, ?mode, "generated question");

    Ok(Question {
        poem: target.clone(),
        prompt: mode.prompt(target),
        choices,
        correct_answer: mode.answer(target).to_string(),
        kind: mode,
    })
}

/// Assemble the shuffled choice list for `target`.
///
/// Distinct answer values from `pool` fill the distractor slots in pool
/// order. Missing slots are padded with placeholders that never repeat an
/// existing choice.
pub fn build_choices<'a, R, I>(
    target: &Poem,
    pool: I,
    mode: GameMode,
    rng: &mut R,
) -> Result<[String; CHOICE_COUNT], QuizError>
where
    R: Rng + ?Sized,
    I: IntoIterator<Item = &'a Poem>,
{
    let correct = mode.answer(target);
    let mut choices: Vec<String> = Vec::with_capacity(CHOICE_COUNT);
    choices.push(correct.to_string());

    for poem in pool {
        if choices.len() >= CHOICE_COUNT {
            break;
        }
        if poem.id == target.id {
            continue;
        }
        let value = mode.answer(poem);
        if !choices.iter().any(|choice| choice == value) {
            choices.push(value.to_string());
        }
    }

    let distractors = choices.len() - 1;
    let mut position = choices.len();
    while choices.len() < CHOICE_COUNT {
        let placeholder = mode.placeholder(position);
        position += 1;
        if !choices.contains(&placeholder) {
            choices.push(placeholder);
        }
    }
    if distractors < CHOICE_COUNT - 1 {
        warn!(poem_id = target.id, distractors, "padded choices with placeholders");
    }

    choices.shuffle(rng);

    choices.try_into().map_err(|choices: Vec<String>| {
        QuizError::Generation(format!(
            "expected {} choices, assembled {}",
            CHOICE_COUNT,
            choices.len()
        ))
    })
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::test_support::poem;

    fn occurrences(choices: &[String], value: &str) -> usize {
        choices.iter().filter(|choice| choice.as_str() == value).count()
    }

    #[test]
    fn test_generated_questions_hold_invariants() {
        let store = PoemStore::new((1..=100).map(poem).collect());
        let mut rng = StdRng::seed_from_u64(2024);

        for mode in GameMode::ALL {
            for _ in 0..200 {
                let question = generate_question(&store, mode, &mut rng).unwrap();
                assert_eq!(question.choices.len(), CHOICE_COUNT);
                assert_eq!(occurrences(&question.choices, &question.correct_answer), 1);
                assert_eq!(question.correct_answer, mode.answer(&question.poem));
                assert_eq!(question.kind, mode);

                let mut unique = question.choices.to_vec();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), CHOICE_COUNT);
            }
        }
    }

    #[test]
    fn test_generation_leaves_store_untouched() {
        let store = PoemStore::new((1..=12).map(poem).collect());
        let before = store.clone();
        let mut rng = StdRng::seed_from_u64(5);

        for _ in 0..20 {
            generate_question(&store, GameMode::Author, &mut rng).unwrap();
        }
        assert_eq!(store, before);
    }

    #[test]
    fn test_target_seven_scenario() {
        let poems: Vec<Poem> = (1..=100).map(poem).collect();
        let mut target = poems[6].clone();
        target.lower = "X".to_string();
        let mut rng = StdRng::seed_from_u64(11);

        let pool: Vec<&Poem> = poems.iter().take(DISTRACTOR_POOL_SIZE).collect();
        let choices = build_choices(&target, pool, GameMode::LowerVerse, &mut rng).unwrap();

        assert_eq!(choices.len(), 4);
        assert_eq!(occurrences(&choices, "X"), 1);
        assert!(!choices.iter().any(|c| c == "lower 7"));
    }

    #[test]
    fn test_single_poem_corpus_is_padded() {
        let store = PoemStore::new(vec![poem(1)]);
        let mut rng = StdRng::seed_from_u64(9);

        let question = generate_question(&store, GameMode::LowerVerse, &mut rng).unwrap();
        let mut choices = question.choices.to_vec();
        choices.sort();
        assert_eq!(choices, vec!["lower 1", "選択肢 1", "選択肢 2", "選択肢 3"]);

        let question = generate_question(&store, GameMode::Author, &mut rng).unwrap();
        let mut choices = question.choices.to_vec();
        choices.sort();
        assert_eq!(choices, vec!["author 1", "作者 1", "作者 2", "作者 3"]);
    }

    #[test]
    fn test_duplicate_answer_values_are_filtered() {
        let mut poems: Vec<Poem> = (1..=6).map(poem).collect();
        for poem in poems.iter_mut().skip(1) {
            poem.author = "紀貫之".to_string();
        }
        let target = poems[0].clone();
        let mut rng = StdRng::seed_from_u64(1);

        let choices = build_choices(&target, poems.iter(), GameMode::Author, &mut rng).unwrap();
        let mut sorted = choices.to_vec();
        sorted.sort();
        assert_eq!(sorted, vec!["author 1", "作者 2", "作者 3", "紀貫之"]);
    }

    #[test]
    fn test_distractors_matching_correct_answer_are_skipped() {
        let mut poems: Vec<Poem> = (1..=4).map(poem).collect();
        poems[1].author = poems[0].author.clone();
        let target = poems[0].clone();
        let mut rng = StdRng::seed_from_u64(8);

        let choices = build_choices(&target, poems.iter(), GameMode::Author, &mut rng).unwrap();
        assert_eq!(occurrences(&choices, "author 1"), 1);
        assert_eq!(occurrences(&choices, "作者 3"), 1);
    }

    #[test]
    fn test_placeholder_never_repeats_correct_answer() {
        let mut target = poem(1);
        target.lower = "選択肢 1".to_string();
        let mut rng = StdRng::seed_from_u64(4);

        let choices = build_choices(&target, [&target], GameMode::LowerVerse, &mut rng).unwrap();
        let mut sorted = choices.to_vec();
        sorted.sort();
        assert_eq!(sorted, vec!["選択肢 1", "選択肢 2", "選択肢 3", "選択肢 4"]);
    }

    #[test]
    fn test_empty_store_fails() {
        let store = PoemStore::default();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            generate_question(&store, GameMode::LowerVerse, &mut rng),
            Err(QuizError::EmptyCorpus)
        ));
    }
}
