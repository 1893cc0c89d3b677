use crate::cards::{Card, Suit};

/// Suit occurrence counts for a hand, used for flush detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SuitInfo {
    pub flush_suit: Option<Suit>,
}

impl SuitInfo {
    /// Detect if all 5 cards have the same suit.
    pub fn detect(cards: &[Card; 5]) -> Self {
        let mut counts = [0u8; 4];
        for card in cards {
            counts[card.suit() as usize] += 1;
        }

        let flush_suit = Suit::ALL.iter().copied().find(|s| counts[*s as usize] == 5);
        SuitInfo { flush_suit }
    }

    pub fn is_flush(&self) -> bool {
        self.flush_suit.is_some()
    }
}
