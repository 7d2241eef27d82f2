use super::hand_analysis::{take_five, HandAnalysis};
use super::straight::find_straight;
use crate::cards::Card;
use crate::evaluator::Category;

/// Strategy pattern: each detector knows its category and how to pick the
/// best five cards for it, if the pool qualifies.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    fn detect(&self, analysis: &HandAnalysis) -> Option<[Card; 5]>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: a straight made only of cards from one suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Card; 5]> {
        analysis
            .suit_groups
            .flush_suits()
            .filter_map(find_straight)
            .max_by_key(|five| five[0].rank())
    }
}

/// Four of a Kind: four cards of one rank plus the best kicker
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Card; 5]> {
        let quad = analysis.rank_groups.exactly(4).next()?;
        analysis.with_kickers(quad)
    }
}

/// Full House: highest trips, then the highest other rank with a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Card; 5]> {
        let trips = analysis.rank_groups.at_least(3).next()?;
        let pair = analysis.rank_groups.at_least(2).find(|g| g[0].rank() != trips[0].rank())?;
        take_five(trips[..3].iter().chain(&pair[..2]).copied())
    }
}

/// Flush: the five highest cards of a suit holding five or more
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Card; 5]> {
        analysis
            .suit_groups
            .flush_suits()
            .filter_map(|suited| take_five(suited.iter().copied()))
            .max_by_key(|five| five.map(Card::rank))
    }
}

/// Straight: five consecutive ranks, any suits
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Card; 5]> {
        find_straight(&analysis.sorted_cards)
    }
}

/// Three of a Kind: three cards of one rank plus two kickers
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Card; 5]> {
        let trips = analysis.rank_groups.exactly(3).next()?;
        analysis.with_kickers(trips)
    }
}

/// Two Pair: the two highest pairs plus one kicker
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Card; 5]> {
        let mut pairs = analysis.rank_groups.exactly(2);
        let (high, low) = (pairs.next()?, pairs.next()?);
        let committed = [high[0], high[1], low[0], low[1]];
        analysis.with_kickers(&committed)
    }
}

/// One Pair: two cards of one rank plus three kickers
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<[Card; 5]> {
        let pair = analysis.rank_groups.exactly(2).next()?;
        analysis.with_kickers(pair)
    }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

/// Every category but High Card, which any pool falls back to via
/// [`HandAnalysis::high_card`].
pub const DETECTORS: [&dyn CategoryDetector; 8] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
];
