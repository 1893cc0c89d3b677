//! poker-hands: five-card poker hand evaluation
//!
//! Goals:
//! - Parse card tokens such as `5H`, `TD` or `1S` into typed cards
//! - Classify a five-card hand into one of nine categories with its tie-breakers
//! - Order hands totally, so two hands can be compared for the winner
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start: compare two hands
//! ```
//! use poker_hands::cards::Rank;
//! use poker_hands::evaluator::{compare, HandRank};
//! use poker_hands::hand::Hand;
//! use std::cmp::Ordering;
//!
//! let pair = Hand::new(&["5H", "5D", "6D", "7D", "8D"]).unwrap();
//! assert_eq!(
//!     pair.rank(),
//!     &HandRank::Pair { value: Rank::Five, kickers: vec![Rank::Eight, Rank::Seven, Rank::Six] }
//! );
//!
//! let flush: Hand = "5H 6H 7H 8H TH".parse().unwrap();
//! assert_eq!(compare(&flush, &pair), Ordering::Greater);
//! ```
//!
//! ## Showdown files
//! Count wins over a file of showdowns, ten cards per line:
//! ```sh
//! cargo run --bin winning-hand -- hands.txt
//! ```

pub mod cards;
pub mod deck;
pub mod evaluator;
pub mod hand;
pub mod tally;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
