use crate::cards::Rank;

/// Information about whether a hand contains a straight and its top rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StraightInfo {
    pub top_rank: Option<Rank>,
}

fn consecutive(values: &mut [u8; 5]) -> bool {
    values.sort_unstable();
    values.windows(2).all(|w| w[1] == w[0] + 1)
}

impl StraightInfo {
    /// Detect a straight from an array of 5 ranks, in any order.
    ///
    /// The ace-low case is checked explicitly: every Ace is rewritten as 1,
    /// and if that changed anything and the result is consecutive the
    /// straight tops out at Five.
    pub fn detect(ranks: &[Rank; 5]) -> Self {
        let values = ranks.map(Rank::value);

        let mut aces_as_ones = values.map(|v| if v == Rank::Ace.value() { 1 } else { v });
        if aces_as_ones != values && consecutive(&mut aces_as_ones) {
            return StraightInfo { top_rank: Some(Rank::Five) };
        }

        let mut sorted = values;
        if consecutive(&mut sorted) {
            return StraightInfo { top_rank: Rank::from_value(sorted[4]) };
        }

        StraightInfo { top_rank: None }
    }

    pub fn is_straight(&self) -> bool {
        self.top_rank.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regular_straight() {
        let ranks = [Rank::King, Rank::Queen, Rank::Jack, Rank::Ten, Rank::Nine];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::King));
    }

    #[test]
    fn test_ace_high_straight() {
        let ranks = [Rank::Ten, Rank::Jack, Rank::Queen, Rank::King, Rank::Ace];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::Ace));
    }

    #[test]
    fn test_ace_low() {
        let ranks = [Rank::Two, Rank::Three, Rank::Four, Rank::Five, Rank::Ace];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::Five));
    }

    #[test]
    fn test_low_straight() {
        let ranks = [Rank::Six, Rank::Five, Rank::Four, Rank::Three, Rank::Two];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::Six));
    }

    #[test]
    fn test_ace_does_not_wrap_around() {
        let ranks = [Rank::Queen, Rank::King, Rank::Ace, Rank::Two, Rank::Three];
        let info = StraightInfo::detect(&ranks);
        assert!(!info.is_straight());
    }

    #[test]
    fn test_not_straight() {
        let ranks = [Rank::Ace, Rank::King, Rank::Queen, Rank::Jack, Rank::Nine];
        let info = StraightInfo::detect(&ranks);
        assert!(!info.is_straight());
        assert_eq!(info.top_rank, None);
    }

    #[test]
    fn test_not_straight_pair() {
        let ranks = [Rank::Five, Rank::Five, Rank::Six, Rank::Seven, Rank::Eight];
        let info = StraightInfo::detect(&ranks);
        assert!(!info.is_straight());
        assert_eq!(info.top_rank, None);
    }

    #[test]
    fn test_unsorted_input() {
        let ranks = [Rank::Nine, Rank::King, Rank::Ten, Rank::Jack, Rank::Queen];
        let info = StraightInfo::detect(&ranks);
        assert!(info.is_straight());
        assert_eq!(info.top_rank, Some(Rank::King));
    }
}
