use crate::cards::{Card, Rank};

/// The wheel's low end, top card first. Ace follows as the lowest card.
const WHEEL_LOW: [Rank; 4] = [Rank::Five, Rank::Four, Rank::Three, Rank::Two];

/// Find the highest straight in cards sorted by rank descending.
///
/// Returns the five cards top-down. Ace counts high in the normal scan; only
/// when no such run exists is the wheel (5-4-3-2-A) tried, with the Ace
/// placed last because it plays as the lowest card.
pub fn find_straight(sorted: &[Card]) -> Option<[Card; 5]> {
    // one card per rank, still descending
    let mut distinct: Vec<Card> = Vec::with_capacity(sorted.len());
    for &card in sorted {
        if distinct.last().map_or(true, |last| last.rank() != card.rank()) {
            distinct.push(card);
        }
    }

    // distinct ranks strictly descend, so a span of 4 over 5 cards is a run
    if let Some(run) =
        distinct.windows(5).find(|w| w[0].rank().value() == w[4].rank().value() + 4)
    {
        return Some([run[0], run[1], run[2], run[3], run[4]]);
    }

    let ace = distinct.first().copied().filter(|c| c.rank() == Rank::Ace)?;
    let low = |rank: Rank| distinct.iter().copied().find(|c| c.rank() == rank);
    Some([low(WHEEL_LOW[0])?, low(WHEEL_LOW[1])?, low(WHEEL_LOW[2])?, low(WHEEL_LOW[3])?, ace])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::parse_cards;

    fn top(s: &str) -> Option<Rank> {
        let mut cards = parse_cards(s).unwrap();
        cards.sort_unstable_by(|a, b| b.cmp(a));
        find_straight(&cards).map(|five| five[0].rank())
    }

    #[test]
    fn regular_straight() {
        assert_eq!(top("Kc Qd Jh Ts 9c"), Some(Rank::King));
    }

    #[test]
    fn ace_high_straight() {
        assert_eq!(top("Ac Kd Qh Js Tc"), Some(Rank::Ace));
    }

    #[test]
    fn wheel_tops_at_five_with_ace_last() {
        let mut cards = parse_cards("Ac 2d 3h 4s 5c").unwrap();
        cards.sort_unstable_by(|a, b| b.cmp(a));
        let five = find_straight(&cards).unwrap();
        assert_eq!(five[0].rank(), Rank::Five);
        assert_eq!(five[4].rank(), Rank::Ace);
    }

    #[test]
    fn higher_window_wins_over_lower() {
        assert_eq!(top("4c 5d 6h 7s 8c 9d Th"), Some(Rank::Ten));
    }

    #[test]
    fn pairs_do_not_break_a_run() {
        assert_eq!(top("9c 9d 8h 7s 6c 6d 5h"), Some(Rank::Nine));
    }

    #[test]
    fn gaps_are_not_straights() {
        assert_eq!(top("Ac Kd Qh Js 9c"), None);
        assert_eq!(top("Ac 2d 3h 4s 6c"), None);
    }

    #[test]
    fn no_wrap_around_the_ace() {
        assert_eq!(top("Qc Kd Ah 2s 3c"), None);
    }
}
