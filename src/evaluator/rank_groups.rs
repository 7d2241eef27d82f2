use crate::cards::Card;

/// Cards grouped by rank, groups ordered by rank descending.
///
/// Example: A A K Q Q 3 groups as [[A, A], [K], [Q, Q], [3]]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    groups: Vec<Vec<Card>>,
}

impl RankGroups {
    /// Group cards that are already sorted by rank descending.
    pub fn from_sorted(sorted: &[Card]) -> Self {
        let mut groups: Vec<Vec<Card>> = Vec::new();
        for &card in sorted {
            match groups.last_mut() {
                Some(g) if g[0].rank() == card.rank() => g.push(card),
                _ => groups.push(vec![card]),
            }
        }
        Self { groups }
    }

    /// Groups of exactly `n` cards, highest rank first.
    pub fn exactly(&self, n: usize) -> impl Iterator<Item = &[Card]> + '_ {
        self.groups.iter().filter(move |g| g.len() == n).map(Vec::as_slice)
    }

    /// Groups of `n` or more cards, highest rank first.
    pub fn at_least(&self, n: usize) -> impl Iterator<Item = &[Card]> + '_ {
        self.groups.iter().filter(move |g| g.len() >= n).map(Vec::as_slice)
    }

    #[cfg(test)]
    pub fn groups(&self) -> &[Vec<Card>] {
        &self.groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{parse_cards, Rank};

    fn groups_of(s: &str) -> RankGroups {
        let mut cards = parse_cards(s).unwrap();
        cards.sort_unstable_by(|a, b| b.cmp(a));
        RankGroups::from_sorted(&cards)
    }

    #[test]
    fn groups_follow_rank_order() {
        let g = groups_of("3s Qd Ah Qc Kd Ac");
        let shape: Vec<(Rank, usize)> = g.groups().iter().map(|g| (g[0].rank(), g.len())).collect();
        assert_eq!(
            shape,
            vec![(Rank::Ace, 2), (Rank::King, 1), (Rank::Queen, 2), (Rank::Three, 1)]
        );
    }

    #[test]
    fn exactly_excludes_larger_groups() {
        let g = groups_of("9c 9d 9h 9s 4c 4d 4h");
        assert_eq!(g.exactly(4).count(), 1);
        assert_eq!(g.exactly(3).next().map(|g| g[0].rank()), Some(Rank::Four));
        assert_eq!(g.exactly(2).count(), 0);
    }

    #[test]
    fn at_least_includes_larger_groups() {
        let g = groups_of("9c 9d 9h 9s 4c 4d Ah");
        let ranks: Vec<Rank> = g.at_least(2).map(|g| g[0].rank()).collect();
        assert_eq!(ranks, vec![Rank::Nine, Rank::Four]);
    }

    #[test]
    fn pairs_come_out_high_to_low() {
        let g = groups_of("2c 2d 5h 5s Jc Jd 8h");
        let ranks: Vec<Rank> = g.exactly(2).map(|g| g[0].rank()).collect();
        assert_eq!(ranks, vec![Rank::Jack, Rank::Five, Rank::Two]);
    }
}
