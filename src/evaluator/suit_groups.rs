use crate::cards::Card;

/// Cards bucketed by suit, each bucket keeping rank-descending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SuitGroups {
    buckets: [Vec<Card>; 4],
}

impl SuitGroups {
    /// Bucket cards that are already sorted by rank descending.
    pub fn from_sorted(sorted: &[Card]) -> Self {
        let mut buckets: [Vec<Card>; 4] = Default::default();
        for &card in sorted {
            buckets[card.suit().index()].push(card);
        }
        Self { buckets }
    }

    /// Suits holding at least five cards. Seven candidates allow at most one.
    pub fn flush_suits(&self) -> impl Iterator<Item = &[Card]> + '_ {
        self.buckets.iter().filter(|b| b.len() >= 5).map(Vec::as_slice)
    }

    #[cfg(test)]
    pub fn suit(&self, suit: crate::cards::Suit) -> &[Card] {
        &self.buckets[suit.index()]
    }
}
