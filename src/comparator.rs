//! Total order over evaluated hands.
//!
//! Category decides first. Within a category the five stored cards are
//! compared position by position on rank; the evaluator already arranged
//! them by significance, so the first differing rank settles it. Suits never
//! matter, and five equal ranks is a genuine tie.

use crate::evaluator::EvaluatedHand;
use core::cmp::Ordering;

/// Compare two evaluated hands; `Greater` means `a` is stronger.
///
/// ```
/// use poker_showdown::cards::parse_cards;
/// use poker_showdown::comparator::compare;
/// use poker_showdown::evaluator::evaluate;
/// use std::cmp::Ordering;
///
/// let a = evaluate(&parse_cards("As Ah Qc Jd 9h 3s 2c").unwrap()).unwrap();
/// let b = evaluate(&parse_cards("Ks Kh Qc Jd 9h 3s 2c").unwrap()).unwrap();
/// assert_eq!(compare(&a, &b), Ordering::Greater);
/// assert_eq!(compare(&a, &a), Ordering::Equal);
/// ```
pub fn compare(a: &EvaluatedHand, b: &EvaluatedHand) -> Ordering {
    a.category().cmp(&b.category()).then_with(|| {
        a.cards()
            .iter()
            .zip(b.cards())
            .map(|(x, y)| x.rank().cmp(&y.rank()))
            .find(|o| o.is_ne())
            .unwrap_or(Ordering::Equal)
    })
}

/// Indices of every hand tied for the best, in the order given.
///
/// Empty input gives an empty result.
pub fn best_indices(hands: &[EvaluatedHand]) -> Vec<usize> {
    let Some(best) = hands.iter().max_by(|a, b| compare(a, b)) else {
        return Vec::new();
    };
    hands
        .iter()
        .enumerate()
        .filter(|(_, h)| compare(h, best).is_eq())
        .map(|(i, _)| i)
        .collect()
}
