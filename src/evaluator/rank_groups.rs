use crate::cards::Rank;

/// Ranks of a hand grouped by how often they occur.
///
/// Built in one pass: rank → occurrence count, then count → ranks. Each
/// bucket is sorted descending, so `with_count(1)` yields the kickers in
/// tie-break order.
///
/// Example: 5 5 5 K Q groups as {3: [5], 1: [K, Q]}
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankGroups {
    // index = occurrence count (1..=4; 5 only with duplicate cards)
    by_count: [Vec<Rank>; 6],
}

impl RankGroups {
    pub fn from_ranks(ranks: &[Rank]) -> Self {
        let mut counts = [0usize; 15];
        for rank in ranks {
            counts[rank.value() as usize] += 1;
        }

        let mut by_count: [Vec<Rank>; 6] = Default::default();
        // Walk high to low so every bucket comes out descending.
        for rank in Rank::ALL.iter().rev().copied() {
            let count = counts[rank.value() as usize];
            if count > 0 {
                by_count[count.min(5)].push(rank);
            }
        }

        Self { by_count }
    }

    /// Ranks that occur exactly `count` times, highest first.
    pub fn with_count(&self, count: usize) -> &[Rank] {
        self.by_count.get(count).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Returns the rank of a four-of-a-kind, if present.
    pub fn quad(&self) -> Option<Rank> {
        self.with_count(4).first().copied()
    }

    /// Returns the rank of a three-of-a-kind, if present.
    pub fn trips(&self) -> Option<Rank> {
        self.with_count(3).first().copied()
    }

    /// Returns all pair ranks, in descending order.
    pub fn pairs(&self) -> &[Rank] {
        self.with_count(2)
    }

    /// Returns all singleton (kicker) ranks, in descending order.
    pub fn kickers(&self) -> &[Rank] {
        self.with_count(1)
    }

    /// Returns true if the hand has both trips and a pair (full house).
    pub fn has_full_house(&self) -> bool {
        self.trips().is_some() && !self.pairs().is_empty()
    }
}
