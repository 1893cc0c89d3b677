use super::rank_groups::RankGroups;
use super::straight_info::StraightInfo;
use super::suit_info::SuitInfo;
use crate::cards::{Card, Rank};

/// Pre-computed analysis of a 5-card hand.
/// Built once and shared by all category detectors.
#[derive(Debug, Clone)]
pub struct HandAnalysis {
    /// All five ranks, highest first.
    pub ranks: [Rank; 5],
    pub rank_groups: RankGroups,
    pub suit_info: SuitInfo,
    pub straight_info: StraightInfo,
}

impl HandAnalysis {
    /// Analyze a 5-card hand, computing all properties needed for evaluation.
    pub fn new(cards: &[Card; 5]) -> Self {
        let mut ranks = cards.map(Card::rank);
        ranks.sort_unstable_by(|a, b| b.cmp(a));

        let rank_groups = RankGroups::from_ranks(&ranks);
        let suit_info = SuitInfo::detect(cards);
        let straight_info = StraightInfo::detect(&ranks);

        Self { ranks, rank_groups, suit_info, straight_info }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    #[test]
    fn test_straight_flush_analysis() {
        let cards = [
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Six, Suit::Spades),
            Card::new(Rank::Seven, Suit::Spades),
            Card::new(Rank::Eight, Suit::Spades),
            Card::new(Rank::Nine, Suit::Spades),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert!(analysis.suit_info.is_flush());
        assert!(analysis.straight_info.is_straight());
        assert_eq!(analysis.straight_info.top_rank, Some(Rank::Nine));
        assert_eq!(analysis.rank_groups.quad(), None);
        assert!(analysis.rank_groups.pairs().is_empty());
    }

    #[test]
    fn test_ranks_sorted_descending() {
        let cards = [
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Ace, Suit::Diamonds),
            Card::new(Rank::Six, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Eight, Suit::Diamonds),
        ];
        let analysis = HandAnalysis::new(&cards);
        assert_eq!(analysis.ranks, [Rank::Ace, Rank::Eight, Rank::Six, Rank::Five, Rank::Five]);
        assert_eq!(analysis.rank_groups.pairs(), &[Rank::Five]);
        assert!(!analysis.suit_info.is_flush());
        assert!(!analysis.straight_info.is_straight());
    }

    #[test]
    fn test_quads_analysis() {
        let cards = [
            Card::new(Rank::Five, Suit::Hearts),
            Card::new(Rank::Five, Suit::Diamonds),
            Card::new(Rank::Five, Suit::Spades),
            Card::new(Rank::Five, Suit::Clubs),
            Card::new(Rank::Eight, Suit::Diamonds),
        ];
        let analysis = HandAnalysis::new(&cards);

        assert_eq!(analysis.rank_groups.quad(), Some(Rank::Five));
        assert_eq!(analysis.rank_groups.kickers(), &[Rank::Eight]);
        assert!(!analysis.suit_info.is_flush());
    }
}
