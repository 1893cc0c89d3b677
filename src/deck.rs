use crate::cards::{Card, Rank, Suit};
use crate::hand::{Hand, HAND_SIZE};
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// A single 52-card deck, used to deal realistic hands with no repeated
/// cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let deck = Deck::standard();
    /// assert_eq!(deck.len(), 52);
    /// ```
    pub fn standard() -> Self {
        let cards = Suit::ALL
            .iter()
            .flat_map(|&s| Rank::ALL.iter().map(move |&r| Card::new(r, s)))
            .collect();
        Self { cards }
    }

    /// A standard deck shuffled with a seeded RNG, for reproducible deals.
    pub fn shuffled(seed: u64) -> Self {
        let mut deck = Self::standard();
        deck.shuffle_seeded(seed);
        deck
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Shuffle using a seeded RNG for reproducibility.
    pub fn shuffle_seeded(&mut self, seed: u64) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.cards.shuffle(&mut rng);
    }

    /// Draw one card from the top of the deck.
    pub fn draw(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Deal a five-card hand, or `None` once fewer than five cards remain.
    ///
    /// ```
    /// use poker_hands::deck::Deck;
    ///
    /// let mut deck = Deck::shuffled(7);
    /// let hands: Vec<_> = std::iter::from_fn(|| deck.deal_hand()).collect();
    /// assert_eq!(hands.len(), 10);
    /// assert_eq!(deck.len(), 2);
    /// ```
    pub fn deal_hand(&mut self) -> Option<Hand> {
        if self.cards.len() < HAND_SIZE {
            return None;
        }
        let at = self.cards.len() - HAND_SIZE;
        let cards: Vec<Card> = self.cards.drain(at..).collect();
        Hand::from_slice(&cards).ok()
    }
}
