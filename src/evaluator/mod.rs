pub(crate) mod detector;
pub(crate) mod hand_analysis;
pub(crate) mod rank_groups;
pub(crate) mod straight_info;
pub(crate) mod suit_info;

use crate::cards::{Card, Rank};
use crate::hand::Hand;
use core::cmp::Ordering;
use std::fmt;

/// Poker hand category from weakest to strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[non_exhaustive]
#[repr(u8)]
pub enum Category {
    HighCard = 0,
    Pair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
}

impl Category {
    /// Strongest first, the order in which categories are detected.
    pub const BY_STRENGTH: [Category; 9] = [
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::Pair,
        Category::HighCard,
    ];

    /// Strength of the category, 0 for high card up to 8 for a straight flush.
    ///
    /// ```
    /// use poker_hands::evaluator::Category;
    ///
    /// assert_eq!(Category::HighCard.ordinal(), 0);
    /// assert_eq!(Category::StraightFlush.ordinal(), 8);
    /// ```
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    pub const fn name(self) -> &'static str {
        match self {
            Category::HighCard => "high card",
            Category::Pair => "pair",
            Category::TwoPair => "two pair",
            Category::ThreeOfAKind => "three of a kind",
            Category::Straight => "straight",
            Category::Flush => "flush",
            Category::FullHouse => "full house",
            Category::FourOfAKind => "four of a kind",
            Category::StraightFlush => "straight flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Rank descriptor of a five-card hand.
///
/// Each variant carries only what is needed to break ties inside its
/// category. Rank lists (`kickers`, `pairs`) are sorted descending.
///
/// Ordering compares the category first. Within a category the fields are
/// compared in the order `value`, `full_of`, `pairs`, `kickers`; rank lists
/// are decided by their highest unshared rank, see [`compare_highest_unshared`].
#[derive(Debug, Clone)]
pub enum HandRank {
    HighCard { kickers: Vec<Rank> },
    Pair { value: Rank, kickers: Vec<Rank> },
    TwoPair { pairs: [Rank; 2], kickers: Vec<Rank> },
    ThreeOfAKind { value: Rank, kickers: Vec<Rank> },
    Straight { high: Rank },
    Flush { kickers: Vec<Rank> },
    FullHouse { value: Rank, full_of: Rank },
    FourOfAKind { value: Rank, kickers: Vec<Rank> },
    StraightFlush { high: Rank },
}

impl HandRank {
    pub fn category(&self) -> Category {
        match self {
            HandRank::HighCard { .. } => Category::HighCard,
            HandRank::Pair { .. } => Category::Pair,
            HandRank::TwoPair { .. } => Category::TwoPair,
            HandRank::ThreeOfAKind { .. } => Category::ThreeOfAKind,
            HandRank::Straight { .. } => Category::Straight,
            HandRank::Flush { .. } => Category::Flush,
            HandRank::FullHouse { .. } => Category::FullHouse,
            HandRank::FourOfAKind { .. } => Category::FourOfAKind,
            HandRank::StraightFlush { .. } => Category::StraightFlush,
        }
    }

    /// The primary single rank of the hand, if the category has one.
    /// Straights report their high card.
    pub fn value(&self) -> Option<Rank> {
        match self {
            HandRank::Pair { value, .. }
            | HandRank::ThreeOfAKind { value, .. }
            | HandRank::FullHouse { value, .. }
            | HandRank::FourOfAKind { value, .. } => Some(*value),
            HandRank::Straight { high } | HandRank::StraightFlush { high } => Some(*high),
            HandRank::HighCard { .. } | HandRank::TwoPair { .. } | HandRank::Flush { .. } => None,
        }
    }

    /// Kicker ranks, highest first. Empty for categories without kickers.
    pub fn kickers(&self) -> &[Rank] {
        match self {
            HandRank::HighCard { kickers }
            | HandRank::Pair { kickers, .. }
            | HandRank::TwoPair { kickers, .. }
            | HandRank::ThreeOfAKind { kickers, .. }
            | HandRank::Flush { kickers }
            | HandRank::FourOfAKind { kickers, .. } => kickers.as_slice(),
            HandRank::Straight { .. }
            | HandRank::FullHouse { .. }
            | HandRank::StraightFlush { .. } => &[],
        }
    }
}

impl Ord for HandRank {
    fn cmp(&self, other: &Self) -> Ordering {
        use HandRank::*;

        let by_category = self.category().ordinal().cmp(&other.category().ordinal());
        if by_category != Ordering::Equal {
            return by_category;
        }

        match (self, other) {
            (StraightFlush { high: a }, StraightFlush { high: b })
            | (Straight { high: a }, Straight { high: b }) => a.cmp(b),
            (FourOfAKind { value: a, kickers: ka }, FourOfAKind { value: b, kickers: kb })
            | (ThreeOfAKind { value: a, kickers: ka }, ThreeOfAKind { value: b, kickers: kb })
            | (Pair { value: a, kickers: ka }, Pair { value: b, kickers: kb }) => {
                a.cmp(b).then_with(|| compare_highest_unshared(ka, kb))
            }
            (FullHouse { value: a, full_of: fa }, FullHouse { value: b, full_of: fb }) => {
                a.cmp(b).then_with(|| fa.cmp(fb))
            }
            (TwoPair { pairs: pa, kickers: ka }, TwoPair { pairs: pb, kickers: kb }) => {
                compare_highest_unshared(pa, pb).then_with(|| compare_highest_unshared(ka, kb))
            }
            (Flush { kickers: ka }, Flush { kickers: kb })
            | (HighCard { kickers: ka }, HighCard { kickers: kb }) => {
                compare_highest_unshared(ka, kb)
            }
            // Equal categories always pair up the same variant.
            _ => Ordering::Equal,
        }
    }
}

impl PartialOrd for HandRank {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HandRank {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HandRank {}

fn join_ranks(ranks: &[Rank]) -> String {
    ranks.iter().map(|r| r.to_string()).collect::<Vec<_>>().join("-")
}

impl fmt::Display for HandRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HandRank::HighCard { kickers } => write!(f, "high card, {}", join_ranks(kickers)),
            HandRank::Pair { value, .. } => write!(f, "pair of {value}s"),
            HandRank::TwoPair { pairs, .. } => {
                write!(f, "two pair, {}s and {}s", pairs[0], pairs[1])
            }
            HandRank::ThreeOfAKind { value, .. } => write!(f, "three of a kind, {value}s"),
            HandRank::Straight { high } => write!(f, "straight, {high} high"),
            HandRank::Flush { kickers } => write!(f, "flush, {}", join_ranks(kickers)),
            HandRank::FullHouse { value, full_of } => {
                write!(f, "full house, {value}s full of {full_of}s")
            }
            HandRank::FourOfAKind { value, .. } => write!(f, "four of a kind, {value}s"),
            HandRank::StraightFlush { high } => write!(f, "straight flush, {high} high"),
        }
    }
}

/// Compare two rank lists by the highest rank one holds that the other
/// does not.
///
/// Shared ranks cancel out (as multisets), then the maxima of the two
/// leftovers decide. Identical lists tie. For equal-length lists this agrees
/// with comparing both lists sorted descending, position by position.
///
/// ```
/// use poker_hands::cards::Rank::*;
/// use poker_hands::evaluator::compare_highest_unshared;
/// use std::cmp::Ordering;
///
/// assert_eq!(compare_highest_unshared(&[Nine, Seven, Six], &[Nine, Seven, Two]), Ordering::Greater);
/// assert_eq!(compare_highest_unshared(&[Eight], &[Eight]), Ordering::Equal);
/// ```
pub fn compare_highest_unshared(ours: &[Rank], theirs: &[Rank]) -> Ordering {
    let mut ours_count = [0usize; 15];
    let mut theirs_count = [0usize; 15];
    for r in ours {
        ours_count[r.value() as usize] += 1;
    }
    for r in theirs {
        theirs_count[r.value() as usize] += 1;
    }

    // The highest rank whose counts differ holds the highest unshared card.
    Rank::ALL
        .iter()
        .rev()
        .map(|r| r.value() as usize)
        .map(|v| ours_count[v].cmp(&theirs_count[v]))
        .find(|o| o.is_ne())
        .unwrap_or(Ordering::Equal)
}

/// Classify exactly five cards into their rank descriptor.
///
/// ```
/// use poker_hands::cards::parse_cards;
/// use poker_hands::evaluator::{evaluate_five, HandRank};
/// use poker_hands::cards::Rank;
///
/// let cards = parse_cards("2H 3H 4H 5H AD").unwrap();
/// let rank = evaluate_five(&[cards[0], cards[1], cards[2], cards[3], cards[4]]);
/// assert_eq!(rank, HandRank::Straight { high: Rank::Five });
/// ```
pub fn evaluate_five(cards: &[Card; 5]) -> HandRank {
    use detector::DETECTORS;
    use hand_analysis::HandAnalysis;

    // Build analysis once (sorted ranks, rank groups, flush/straight info)
    let analysis = HandAnalysis::new(cards);

    // Check categories in priority order (highest to lowest)
    for detector in DETECTORS.iter() {
        if let Some(rank) = detector.detect(&analysis) {
            log::trace!("{:?} detected as {}", analysis.ranks, detector.category());
            return rank;
        }
    }

    // the high card detector always matches
    detector::high_card(&analysis)
}

/// Compare two hands. `Greater` means `a` wins, `Equal` is a split pot.
///
/// ```
/// use poker_hands::evaluator::compare;
/// use poker_hands::hand::Hand;
/// use std::cmp::Ordering;
///
/// let quads: Hand = "5H 5D 5S 5C 8D".parse().unwrap();
/// let boat: Hand = "5H 5D 5S 6C 6H".parse().unwrap();
/// assert_eq!(compare(&quads, &boat), Ordering::Greater);
/// ```
pub fn compare(a: &Hand, b: &Hand) -> Ordering {
    a.rank().cmp(b.rank())
}
