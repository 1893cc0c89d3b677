//! Head-to-head showdowns read from text, one per line.
//!
//! Each line holds ten card tokens: the first five are player one's hand,
//! the next five player two's. This module sits on top of the core API and
//! only uses [`Hand::new`] and [`compare`].

use crate::evaluator::compare;
use crate::hand::{Hand, HandError, HAND_SIZE};
use log::{debug, warn};
use std::cmp::Ordering;
use std::fmt;
use std::io::{self, BufRead};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Player {
    First,
    Second,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::First => f.write_str("player 1"),
            Player::Second => f.write_str("player 2"),
        }
    }
}

/// Result of a single showdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Winner(Player),
    Tie,
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ShowdownError {
    #[error("expected 10 cards, got {0}")]
    TokenCount(usize),
    #[error("bad hand for {player}: {source}")]
    Hand {
        player: Player,
        #[source]
        source: HandError,
    },
}

/// Two hands facing each other.
///
/// ```
/// use poker_hands::tally::{Outcome, Player, Showdown};
///
/// let showdown: Showdown = "5H 5C 6S 7S KD 2C 3S 8S 8D TD".parse().unwrap();
/// assert_eq!(showdown.outcome(), Outcome::Winner(Player::Second));
/// ```
#[derive(Debug, Clone)]
pub struct Showdown {
    pub first: Hand,
    pub second: Hand,
}

impl Showdown {
    pub fn outcome(&self) -> Outcome {
        match compare(&self.first, &self.second) {
            Ordering::Greater => Outcome::Winner(Player::First),
            Ordering::Less => Outcome::Winner(Player::Second),
            Ordering::Equal => Outcome::Tie,
        }
    }
}

impl FromStr for Showdown {
    type Err = ShowdownError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s.split_whitespace().collect();
        if tokens.len() != 2 * HAND_SIZE {
            return Err(ShowdownError::TokenCount(tokens.len()));
        }
        let (first, second) = tokens.split_at(HAND_SIZE);
        let first = Hand::new(first)
            .map_err(|source| ShowdownError::Hand { player: Player::First, source })?;
        let second = Hand::new(second)
            .map_err(|source| ShowdownError::Hand { player: Player::Second, source })?;
        Ok(Self { first, second })
    }
}

/// How [`Tally::from_reader`] treats lines it cannot parse.
#[derive(Debug, Clone, Copy, Default)]
pub struct TallyOptions {
    /// Log and count malformed lines instead of failing on the first one.
    pub skip_invalid: bool,
}

#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum TallyError {
    #[error("read error: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: {source}")]
    Line {
        line: usize,
        #[source]
        source: ShowdownError,
    },
}

/// Win counts over many showdowns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub first_wins: usize,
    pub second_wins: usize,
    pub ties: usize,
    /// Malformed lines skipped under [`TallyOptions::skip_invalid`].
    pub skipped: usize,
}

impl Tally {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Player::First) => self.first_wins += 1,
            Outcome::Winner(Player::Second) => self.second_wins += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::First => self.first_wins,
            Player::Second => self.second_wins,
        }
    }

    /// Number of showdowns decided or tied, excluding skipped lines.
    pub fn played(&self) -> usize {
        self.first_wins + self.second_wins + self.ties
    }

    /// Play every showdown in `reader`. Blank lines are ignored.
    ///
    /// ```
    /// use poker_hands::tally::{Tally, TallyOptions};
    ///
    /// let input = "5H 5C 6S 7S KD 2C 3S 8S 8D TD\n\n5D 8C 9S JS AC 2C 5C 7D 8S QH\n";
    /// let tally = Tally::from_reader(input.as_bytes(), TallyOptions::default()).unwrap();
    /// assert_eq!((tally.first_wins, tally.second_wins), (1, 1));
    /// ```
    pub fn from_reader<R: BufRead>(reader: R, options: TallyOptions) -> Result<Self, TallyError> {
        let mut tally = Tally::default();
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            if line.trim().is_empty() {
                continue;
            }

            match line.parse::<Showdown>() {
                Ok(showdown) => {
                    let outcome = showdown.outcome();
                    debug!(
                        "line {line_no}: {} vs {} -> {outcome:?}",
                        showdown.first.rank(),
                        showdown.second.rank()
                    );
                    tally.record(outcome);
                }
                Err(source) if options.skip_invalid => {
                    warn!("skipping line {line_no}: {source}");
                    tally.skipped += 1;
                }
                Err(source) => return Err(TallyError::Line { line: line_no, source }),
            }
        }
        Ok(tally)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_line_into_two_hands() {
        let s: Showdown = "5H 5D 5S 5C 8D 5H 5D 5S 6C 6H".parse().unwrap();
        assert_eq!(s.first.to_string(), "5H 5D 5S 5C 8D");
        assert_eq!(s.second.to_string(), "5H 5D 5S 6C 6H");
        assert_eq!(s.outcome(), Outcome::Winner(Player::First));
    }

    #[test]
    fn equal_hands_tie() {
        let s: Showdown = "5C 5S 7D 7H 9S 5H 5D 7D 7S 9D".parse().unwrap();
        assert_eq!(s.outcome(), Outcome::Tie);
    }

    #[test]
    fn wrong_token_count() {
        let err = "5C 5S 7D 7H 9S 5H".parse::<Showdown>().unwrap_err();
        assert_eq!(err, ShowdownError::TokenCount(6));
        assert_eq!(err.to_string(), "expected 10 cards, got 6");
    }

    #[test]
    fn names_the_player_with_the_bad_hand() {
        let err = "5C 5S 7D 7H 9S 5H 5D 7D 7S 9x".parse::<Showdown>().unwrap_err();
        assert!(matches!(err, ShowdownError::Hand { player: Player::Second, .. }));
    }

    #[test]
    fn record_counts_each_outcome() {
        let mut t = Tally::default();
        t.record(Outcome::Winner(Player::First));
        t.record(Outcome::Winner(Player::First));
        t.record(Outcome::Winner(Player::Second));
        t.record(Outcome::Tie);
        assert_eq!(t.wins(Player::First), 2);
        assert_eq!(t.wins(Player::Second), 1);
        assert_eq!(t.ties, 1);
        assert_eq!(t.played(), 4);
    }
}
