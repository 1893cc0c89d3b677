use crate::cards::{Card, CardParseError};
use crate::evaluator::{evaluate_five, HandRank};
use log::debug;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Number of cards in a hand.
pub const HAND_SIZE: usize = 5;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("there must be 5 cards, got {0}")]
    CardCount(usize),
    #[error("invalid card: {0}")]
    Card(#[from] CardParseError),
}

/// Five cards and their rank descriptor.
///
/// The descriptor is computed once at construction; a `Hand` never changes
/// afterwards. Hands order by strength, and two hands of identical strength
/// compare equal even when their cards differ (a split pot).
///
/// ```
/// use poker_hands::evaluator::Category;
/// use poker_hands::hand::Hand;
///
/// let hand = Hand::new(&["5H", "5D", "6D", "7D", "8D"]).unwrap();
/// assert_eq!(hand.rank().category(), Category::Pair);
///
/// let two_pair: Hand = "5C 5S 7D 7H 9S".parse().unwrap();
/// let same: Hand = "5H 5D 7D 7S 9D".parse().unwrap();
/// assert_eq!(two_pair, same);
/// assert!(two_pair > hand);
/// ```
#[derive(Debug, Clone)]
pub struct Hand {
    cards: [Card; HAND_SIZE],
    rank: HandRank,
}

impl Hand {
    /// Decode exactly five card tokens into a hand.
    pub fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self, HandError> {
        if tokens.len() != HAND_SIZE {
            debug!("rejecting hand with {} cards", tokens.len());
            return Err(HandError::CardCount(tokens.len()));
        }

        let cards = tokens
            .iter()
            .map(|token| Card::from_str(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| {
                debug!("rejecting hand: {e}");
                e
            })?;
        Self::from_slice(&cards)
    }

    /// Build a hand from already decoded cards.
    pub fn from_cards(cards: [Card; HAND_SIZE]) -> Self {
        let rank = evaluate_five(&cards);
        Self { cards, rank }
    }

    /// Build a hand from a slice, which must hold exactly five cards.
    pub fn from_slice(cards: &[Card]) -> Result<Self, HandError> {
        let cards: [Card; HAND_SIZE] =
            cards.try_into().map_err(|_| HandError::CardCount(cards.len()))?;
        Ok(Self::from_cards(cards))
    }

    /// The cards in input order.
    pub fn cards(&self) -> &[Card; HAND_SIZE] {
        &self.cards
    }

    pub fn rank(&self) -> &HandRank {
        &self.rank
    }
}

impl FromStr for Hand {
    type Err = HandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        Self::new(&tokens)
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}

impl Ord for Hand {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank.cmp(&other.rank)
    }
}

impl PartialOrd for Hand {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Hand {
    fn eq(&self, other: &Self) -> bool {
        self.rank == other.rank
    }
}

impl Eq for Hand {}
