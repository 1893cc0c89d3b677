use super::hand_analysis::HandAnalysis;
use crate::evaluator::{Category, HandRank};

/// Strategy pattern: each category detector recognises its category and
/// builds the matching descriptor.
pub trait CategoryDetector {
    fn category(&self) -> Category;
    /// `Some` when the analysed hand belongs to this category.
    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank>;
}

// ============================================================================
// Detector Implementations (in priority order: highest to lowest)
// ============================================================================

/// Straight Flush: Five consecutive ranks, all same suit
pub struct StraightFlushDetector;

impl CategoryDetector for StraightFlushDetector {
    fn category(&self) -> Category {
        Category::StraightFlush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        if !(analysis.suit_info.is_flush() && analysis.straight_info.is_straight()) {
            return None;
        }
        let high = analysis.straight_info.top_rank?;
        Some(HandRank::StraightFlush { high })
    }
}

/// Four of a Kind: Four cards of the same rank
pub struct FourOfAKindDetector;

impl CategoryDetector for FourOfAKindDetector {
    fn category(&self) -> Category {
        Category::FourOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let value = analysis.rank_groups.quad()?;
        Some(HandRank::FourOfAKind { value, kickers: analysis.rank_groups.kickers().to_vec() })
    }
}

/// Full House: Three of a kind plus a pair
pub struct FullHouseDetector;

impl CategoryDetector for FullHouseDetector {
    fn category(&self) -> Category {
        Category::FullHouse
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let value = analysis.rank_groups.trips()?;
        let full_of = analysis.rank_groups.pairs().first().copied()?;
        Some(HandRank::FullHouse { value, full_of })
    }
}

/// Flush: All five cards of the same suit
pub struct FlushDetector;

impl CategoryDetector for FlushDetector {
    fn category(&self) -> Category {
        Category::Flush
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        // All 5 cards are kickers in flush ranking
        analysis.suit_info.is_flush().then(|| HandRank::Flush { kickers: analysis.ranks.to_vec() })
    }
}

/// Straight: Five consecutive ranks (not all same suit)
pub struct StraightDetector;

impl CategoryDetector for StraightDetector {
    fn category(&self) -> Category {
        Category::Straight
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        let high = analysis.straight_info.top_rank?;
        Some(HandRank::Straight { high })
    }
}

/// Three of a Kind: Three cards of the same rank, no pair
pub struct ThreeOfAKindDetector;

impl CategoryDetector for ThreeOfAKindDetector {
    fn category(&self) -> Category {
        Category::ThreeOfAKind
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        if analysis.rank_groups.has_full_house() {
            return None;
        }
        let value = analysis.rank_groups.trips()?;
        Some(HandRank::ThreeOfAKind { value, kickers: analysis.rank_groups.kickers().to_vec() })
    }
}

/// Two Pair: Two pairs of cards
pub struct TwoPairDetector;

impl CategoryDetector for TwoPairDetector {
    fn category(&self) -> Category {
        Category::TwoPair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        match *analysis.rank_groups.pairs() {
            [high, low] => Some(HandRank::TwoPair {
                pairs: [high, low],
                kickers: analysis.rank_groups.kickers().to_vec(),
            }),
            _ => None,
        }
    }
}

/// One Pair: Two cards of the same rank
pub struct OnePairDetector;

impl CategoryDetector for OnePairDetector {
    fn category(&self) -> Category {
        Category::Pair
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        if analysis.rank_groups.has_full_house() {
            return None;
        }
        match *analysis.rank_groups.pairs() {
            [value] => {
                Some(HandRank::Pair { value, kickers: analysis.rank_groups.kickers().to_vec() })
            }
            _ => None,
        }
    }
}

/// High Card: No matching ranks or sequences
pub struct HighCardDetector;

impl CategoryDetector for HighCardDetector {
    fn category(&self) -> Category {
        Category::HighCard
    }

    fn detect(&self, analysis: &HandAnalysis) -> Option<HandRank> {
        // Always matches as fallback
        Some(high_card(analysis))
    }
}

/// All five ranks as kickers, highest first.
pub fn high_card(analysis: &HandAnalysis) -> HandRank {
    HandRank::HighCard { kickers: analysis.ranks.to_vec() }
}

// ============================================================================
// Static detector list (in priority order)
// ============================================================================

pub const DETECTORS: [&dyn CategoryDetector; 9] = [
    &StraightFlushDetector,
    &FourOfAKindDetector,
    &FullHouseDetector,
    &FlushDetector,
    &StraightDetector,
    &ThreeOfAKindDetector,
    &TwoPairDetector,
    &OnePairDetector,
    &HighCardDetector,
];
