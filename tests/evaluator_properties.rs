use poker_hands::cards::{Card, Rank, Suit};
use poker_hands::deck::Deck;
use poker_hands::evaluator::{compare, compare_highest_unshared, Category};
use poker_hands::hand::Hand;
use proptest::prelude::*;
use std::cmp::Ordering;

prop_compose! {
    fn any_rank()(v in 2u8..=14u8) -> Rank {
        Rank::from_value(v).unwrap()
    }
}

fn any_suit() -> impl Strategy<Value = Suit> {
    prop::sample::select(Suit::ALL.to_vec())
}

fn any_card() -> impl Strategy<Value = Card> {
    (any_rank(), any_suit()).prop_map(|(r, s)| Card::new(r, s))
}

fn any_hand() -> impl Strategy<Value = Hand> {
    prop::array::uniform5(any_card()).prop_map(Hand::from_cards)
}

/// Five distinct cards, as dealt from a single deck.
fn dealt_hands() -> impl Strategy<Value = (Hand, Hand)> {
    any::<u64>().prop_map(|seed| {
        let mut deck = Deck::shuffled(seed);
        (deck.deal_hand().unwrap(), deck.deal_hand().unwrap())
    })
}

fn ranks_desc(ranks: &[Rank]) -> Vec<Rank> {
    let mut out = ranks.to_vec();
    out.sort_by(|a, b| b.cmp(a));
    out
}

fn compare_rank_lists(a: &[Rank], b: &[Rank]) -> Ordering {
    for i in 0..a.len().min(b.len()) {
        let ord = a[i].cmp(&b[i]);
        if ord != Ordering::Equal {
            return ord;
        }
    }
    Ordering::Equal
}

/// Straightforward classifier: category plus the card values ordered by
/// (group size desc, value desc). Comparing these keys lexicographically is
/// the textbook poker ordering.
fn reference_key(cards: &[Card; 5]) -> (Category, Vec<u8>) {
    let mut counts = [0u8; 15];
    for c in cards {
        counts[c.value() as usize] += 1;
    }
    let mut groups: Vec<(u8, u8)> =
        (2u8..=14).filter(|&v| counts[v as usize] > 0).map(|v| (counts[v as usize], v)).collect();
    groups.sort_by(|a, b| b.cmp(a));
    let shape: Vec<u8> = groups.iter().map(|g| g.0).collect();
    let values: Vec<u8> = groups.iter().map(|g| g.1).collect();

    let flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let straight_high = if values == [14, 5, 4, 3, 2] {
        Some(5)
    } else if values.len() == 5 && values[0] - values[4] == 4 {
        Some(values[0])
    } else {
        None
    };

    match (straight_high, flush, shape.as_slice()) {
        (Some(high), true, _) => (Category::StraightFlush, vec![high]),
        (_, _, [4, ..]) => (Category::FourOfAKind, values),
        (_, _, [3, 2]) => (Category::FullHouse, values),
        (_, true, _) => (Category::Flush, ranks_of(cards)),
        (Some(high), _, _) => (Category::Straight, vec![high]),
        (_, _, [3, ..]) => (Category::ThreeOfAKind, values),
        (_, _, [2, 2, ..]) => (Category::TwoPair, values),
        (_, _, [2, ..]) => (Category::Pair, values),
        _ => (Category::HighCard, values),
    }
}

fn ranks_of(cards: &[Card; 5]) -> Vec<u8> {
    let mut vs: Vec<u8> = cards.iter().map(|c| c.value()).collect();
    vs.sort_by(|a, b| b.cmp(a));
    vs
}

proptest! {
    #[test]
    fn exactly_one_category_matches(hand in any_hand()) {
        let (category, _) = reference_key(hand.cards());
        prop_assert_eq!(hand.rank().category(), category);
    }

    #[test]
    fn ordering_matches_reference_for_dealt_hands((a, b) in dealt_hands()) {
        let expected = reference_key(a.cards()).cmp(&reference_key(b.cards()));
        prop_assert_eq!(compare(&a, &b), expected);
    }

    #[test]
    fn ordering_is_a_total_order(a in any_hand(), b in any_hand(), c in any_hand()) {
        // reflexive
        prop_assert_eq!(compare(&a, &a), Ordering::Equal);

        // antisymmetric
        prop_assert_eq!(compare(&a, &b), compare(&b, &a).reverse());

        // transitive
        if a >= b && b >= c { prop_assert!(a >= c); }
        if a <= b && b <= c { prop_assert!(a <= c); }
    }

    #[test]
    fn input_order_is_irrelevant(cards in prop::array::uniform5(any_card()), shift in 0usize..5) {
        let mut rotated = cards;
        rotated.rotate_left(shift);
        rotated.swap(0, 4);
        let a = Hand::from_cards(cards);
        let b = Hand::from_cards(rotated);
        prop_assert_eq!(a.rank(), b.rank());
    }

    #[test]
    fn highest_unshared_matches_lexicographic(
        (a, b) in (1usize..=5).prop_flat_map(|n| (
            prop::collection::vec(any_rank(), n),
            prop::collection::vec(any_rank(), n),
        ))
    ) {
        let expected = compare_rank_lists(&ranks_desc(&a), &ranks_desc(&b));
        prop_assert_eq!(compare_highest_unshared(&a, &b), expected);
    }

    #[test]
    fn single_kicker_lists(a in any_rank(), b in any_rank()) {
        prop_assert_eq!(compare_highest_unshared(&[a], &[b]), a.cmp(&b));
    }

    #[test]
    fn wheel_is_lowest_straight(top in 6u8..=14u8) {
        let suits = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades, Suit::Clubs];
        let wheel: Hand = "AC 2D 3H 4S 5C".parse().unwrap();
        let higher = Hand::from_cards(std::array::from_fn(|i| {
            Card::new(Rank::from_value(top - 4 + i as u8).unwrap(), suits[i])
        }));
        prop_assert_eq!(higher.rank().category(), Category::Straight);
        prop_assert!(higher > wheel);
    }
}
