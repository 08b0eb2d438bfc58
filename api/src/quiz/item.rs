use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;

use super::{PromptItem, QuizError};
use crate::consts::OPTIONS_PER_ITEM;

/// One multiple-choice question.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuizItem {
    pub prompt_asset: String,
    pub correct_answer: String,
    /// Four distinct names in random order, one of which is `correct_answer`.
    pub options: Vec<String>,
    /// Set once the round is over. A timed-out round records `Some(false)`.
    pub answered_correctly: Option<bool>,
}

/// Builds one question per pool item, with shuffled options and shuffled item order.
///
/// Fails with [`QuizError::PoolTooSmall`] when the pool has fewer distinct names than
/// options per question, instead of repeating a name.
pub fn generate_items<R: Rng + ?Sized>(
    pool: &[PromptItem],
    rng: &mut R,
) -> Result<Vec<QuizItem>, QuizError> {
    let mut names: Vec<&str> = Vec::with_capacity(pool.len());
    for item in pool {
        if !names.contains(&item.label.as_str()) {
            names.push(&item.label);
        }
    }
    if names.len() < OPTIONS_PER_ITEM {
        return Err(QuizError::PoolTooSmall {
            distinct: names.len(),
            needed: OPTIONS_PER_ITEM,
        });
    }

    let mut items: Vec<QuizItem> = pool
        .iter()
        .map(|prompt| {
            let others: Vec<&str> = names
                .iter()
                .copied()
                .filter(|n| *n != prompt.label)
                .collect();
            let mut options: Vec<String> = others
                .choose_multiple(rng, OPTIONS_PER_ITEM - 1)
                .map(|n| n.to_string())
                .collect();
            options.push(prompt.label.clone());
            options.shuffle(rng);

            QuizItem {
                prompt_asset: prompt.asset.clone(),
                correct_answer: prompt.label.clone(),
                options,
                answered_correctly: None,
            }
        })
        .collect();
    items.shuffle(rng);

    Ok(items)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::quiz::default_pool;

    #[test]
    fn every_item_has_four_distinct_options_with_the_answer() {
        let pool = default_pool();
        for seed in 0..20 {
            let items = generate_items(&pool, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(items.len(), pool.len());
            for item in &items {
                assert_eq!(item.options.len(), OPTIONS_PER_ITEM);
                assert!(item.options.contains(&item.correct_answer));
                let mut unique = item.options.clone();
                unique.sort();
                unique.dedup();
                assert_eq!(unique.len(), OPTIONS_PER_ITEM);
                assert_eq!(item.answered_correctly, None);
            }
        }
    }

    #[test]
    fn every_pool_item_is_asked_once() {
        let pool = default_pool();
        let items = generate_items(&pool, &mut StdRng::seed_from_u64(7)).unwrap();
        let mut answers: Vec<&str> = items.iter().map(|i| i.correct_answer.as_str()).collect();
        let mut labels: Vec<&str> = pool.iter().map(|p| p.label.as_str()).collect();
        answers.sort();
        labels.sort();
        assert_eq!(answers, labels);
    }

    #[test]
    fn generations_differ() {
        let pool = default_pool();
        let runs: Vec<Vec<QuizItem>> = (0..5)
            .map(|seed| generate_items(&pool, &mut StdRng::seed_from_u64(seed)).unwrap())
            .collect();
        assert!(runs.windows(2).any(|w| w[0] != w[1]));
    }

    #[test]
    fn exactly_four_names_still_works() {
        let pool: Vec<PromptItem> = ["A", "B", "C", "D"]
            .iter()
            .map(|n| PromptItem::new(n, n, n))
            .collect();
        let items = generate_items(&pool, &mut StdRng::seed_from_u64(1)).unwrap();
        for item in items {
            let mut options = item.options.clone();
            options.sort();
            assert_eq!(options, vec!["A", "B", "C", "D"]);
        }
    }

    #[test]
    fn small_pool_is_rejected() {
        let pool: Vec<PromptItem> = ["A", "B", "C", "C"]
            .iter()
            .map(|n| PromptItem::new(n, n, n))
            .collect();
        let err = generate_items(&pool, &mut StdRng::seed_from_u64(1)).unwrap_err();
        assert_eq!(err, QuizError::PoolTooSmall { distinct: 3, needed: 4 });
    }
}
