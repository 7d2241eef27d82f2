use super::rank_groups::RankGroups;
use super::suit_groups::SuitGroups;
use crate::cards::Card;

/// Pre-computed view of a candidate pool.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// Every candidate, rank descending then suit descending.
    pub sorted_cards: Vec<Card>,
    pub rank_groups: RankGroups,
    pub suit_groups: SuitGroups,
    high_card: [Card; 5],
}

impl HandAnalysis {
    /// `None` when the pool holds fewer than five cards.
    pub fn new(cards: &[Card]) -> Option<Self> {
        let mut sorted_cards = cards.to_vec();
        sorted_cards.sort_unstable_by(|a, b| b.cmp(a));

        let high_card = take_five(sorted_cards.iter().copied())?;
        let rank_groups = RankGroups::from_sorted(&sorted_cards);
        let suit_groups = SuitGroups::from_sorted(&sorted_cards);

        Some(Self { sorted_cards, rank_groups, suit_groups, high_card })
    }

    /// The five highest cards; every pool qualifies.
    pub fn high_card(&self) -> [Card; 5] {
        self.high_card
    }

    /// `committed` followed by the highest cards not already in it, five in total.
    pub fn with_kickers(&self, committed: &[Card]) -> Option<[Card; 5]> {
        let kickers = self.sorted_cards.iter().filter(|c| !committed.contains(c));
        take_five(committed.iter().chain(kickers).copied())
    }
}

/// First five items of `cards`, or `None` if there are fewer.
pub fn take_five<I: IntoIterator<Item = Card>>(cards: I) -> Option<[Card; 5]> {
    let mut it = cards.into_iter();
    Some([it.next()?, it.next()?, it.next()?, it.next()?, it.next()?])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};

    #[test]
    fn cards_sorted_descending() {
        let cards = parse_cards("3s Ah 5d Kc 9s 9c").unwrap();
        let analysis = HandAnalysis::new(&cards).unwrap();
        let ranks: Vec<Rank> = analysis.sorted_cards.iter().map(|c| c.rank()).collect();
        assert_eq!(
            ranks,
            vec![Rank::Ace, Rank::King, Rank::Nine, Rank::Nine, Rank::Five, Rank::Three]
        );
        // equal ranks fall back to suit, spades above clubs
        assert_eq!(analysis.sorted_cards[2], "9s".parse::<Card>().unwrap());
    }

    #[test]
    fn kickers_skip_committed_cards() {
        let cards = parse_cards("Kc Kd Ah Qs 7c 2d").unwrap();
        let analysis = HandAnalysis::new(&cards).unwrap();
        let pair = parse_cards("Kc Kd").unwrap();
        let five = analysis.with_kickers(&pair).unwrap();
        let ranks = five.map(|c| c.rank());
        assert_eq!(ranks, [Rank::King, Rank::King, Rank::Ace, Rank::Queen, Rank::Seven]);
    }

    #[test]
    fn take_five_needs_five() {
        let four = parse_cards("2c 3c 4c 5c").unwrap();
        assert!(take_five(four.iter().copied()).is_none());
        assert!(HandAnalysis::new(&four).is_none());
    }

    #[test]
    fn high_card_is_the_five_highest() {
        let cards = parse_cards("2c 7d 9h Jc Kd 3s").unwrap();
        let five = HandAnalysis::new(&cards).unwrap().high_card();
        let ranks = five.map(|c| c.rank());
        assert_eq!(ranks, [Rank::King, Rank::Jack, Rank::Nine, Rank::Seven, Rank::Three]);
    }
}
