use std::sync::LazyLock;

use crate::card::{Card, Suit, Value};
use crate::combination::IndexCombinations;
use crate::rank::{Rank, rank_five};

/// Number of distinct 5-card hand equivalence classes.
pub const NUM_HAND_CLASSES: usize = 7462;

/// The strongest possible score (a royal flush).
pub const BEST_SCORE: i32 = 1;

/// The weakest possible score (7-5-4-3-2 offsuit).
pub const WORST_SCORE: i32 = NUM_HAND_CLASSES as i32;

/// Every 5-card equivalence class, sorted weakest first.
///
/// Built once per process and never mutated afterwards. A hand's score
/// is its distance from the top of this table, which lands every class
/// on the classic 7462 point scale: 1 is a royal flush, 10 the last
/// straight flush, 166 the last four of a kind, and so on down to 7462.
static CLASSES: LazyLock<Vec<Rank>> = LazyLock::new(build_classes);

/// Enumerate one concrete representative of each equivalence class and
/// rank them all. Representatives are grouped by value shape: five
/// distinct values (suited and offsuit), one pair, two pair, trips,
/// full house, quads.
fn build_classes() -> Vec<Rank> {
    let values = Value::values();
    let mut ranks: Vec<Rank> = Vec::with_capacity(NUM_HAND_CLASSES);

    // Five distinct values. The suited representative covers flushes
    // and straight flushes, the offsuit one high cards and straights.
    let offsuit = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade, Suit::Club];
    for combo in IndexCombinations::new(13, 5) {
        let suited: [Card; 5] =
            std::array::from_fn(|i| Card::new(values[combo[i]], Suit::Club));
        let mixed: [Card; 5] =
            std::array::from_fn(|i| Card::new(values[combo[i]], offsuit[i]));
        ranks.push(rank_five(&suited));
        ranks.push(rank_five(&mixed));
    }

    // One pair: 13 * C(12,3) = 2860.
    for pair in 0..13 {
        let others: Vec<usize> = (0..13).filter(|&v| v != pair).collect();
        for combo in IndexCombinations::new(12, 3) {
            let hand = [
                Card::new(values[pair], Suit::Club),
                Card::new(values[pair], Suit::Diamond),
                Card::new(values[others[combo[0]]], Suit::Heart),
                Card::new(values[others[combo[1]]], Suit::Heart),
                Card::new(values[others[combo[2]]], Suit::Heart),
            ];
            ranks.push(rank_five(&hand));
        }
    }

    // Two pair: C(13,2) * 11 = 858.
    for combo in IndexCombinations::new(13, 2) {
        let (low, high) = (combo[0], combo[1]);
        for kicker in (0..13).filter(|&v| v != low && v != high) {
            let hand = [
                Card::new(values[low], Suit::Club),
                Card::new(values[low], Suit::Diamond),
                Card::new(values[high], Suit::Club),
                Card::new(values[high], Suit::Diamond),
                Card::new(values[kicker], Suit::Heart),
            ];
            ranks.push(rank_five(&hand));
        }
    }

    // Three of a kind: 13 * C(12,2) = 858.
    for trips in 0..13 {
        let others: Vec<usize> = (0..13).filter(|&v| v != trips).collect();
        for combo in IndexCombinations::new(12, 2) {
            let hand = [
                Card::new(values[trips], Suit::Club),
                Card::new(values[trips], Suit::Diamond),
                Card::new(values[trips], Suit::Heart),
                Card::new(values[others[combo[0]]], Suit::Spade),
                Card::new(values[others[combo[1]]], Suit::Spade),
            ];
            ranks.push(rank_five(&hand));
        }
    }

    // Full house: 13 * 12 = 156.
    for trips in 0..13 {
        for pair in (0..13).filter(|&v| v != trips) {
            let hand = [
                Card::new(values[trips], Suit::Club),
                Card::new(values[trips], Suit::Diamond),
                Card::new(values[trips], Suit::Heart),
                Card::new(values[pair], Suit::Club),
                Card::new(values[pair], Suit::Diamond),
            ];
            ranks.push(rank_five(&hand));
        }
    }

    // Four of a kind: 13 * 12 = 156.
    for quads in 0..13 {
        for kicker in (0..13).filter(|&v| v != quads) {
            let hand = [
                Card::new(values[quads], Suit::Club),
                Card::new(values[quads], Suit::Diamond),
                Card::new(values[quads], Suit::Heart),
                Card::new(values[quads], Suit::Spade),
                Card::new(values[kicker], Suit::Club),
            ];
            ranks.push(rank_five(&hand));
        }
    }

    ranks.sort_unstable();
    debug_assert_eq!(NUM_HAND_CLASSES, ranks.len());
    ranks
}

/// Score a 5-card hand on the 7462 point scale. Lower is stronger,
/// equal scores are exactly equal-strength hands.
pub fn score5(cards: &[Card; 5]) -> i32 {
    let rank = rank_five(cards);
    let classes = &*CLASSES;
    // Duplicate cards produce a rank outside the table; the insertion
    // point still gives a usable ordering without panicking.
    let idx = classes.binary_search(&rank).unwrap_or_else(|i| i);
    (classes.len() - idx) as i32
}

/// Score a 6-card hand: the score of its best 5-card subset.
pub fn score6(cards: &[Card; 6]) -> i32 {
    best_five_of(cards)
}

/// Score a 7-card hand: the score of its best 5-card subset.
pub fn score7(cards: &[Card; 7]) -> i32 {
    best_five_of(cards)
}

fn best_five_of(cards: &[Card]) -> i32 {
    let mut best = WORST_SCORE + 1;
    for combo in IndexCombinations::new(cards.len(), 5) {
        let hand: [Card; 5] = std::array::from_fn(|i| cards[combo[i]]);
        best = best.min(score5(&hand));
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hand5(cards: [&str; 5]) -> [Card; 5] {
        cards.map(|s| s.parse().unwrap())
    }

    #[test]
    fn test_class_count() {
        assert_eq!(NUM_HAND_CLASSES, CLASSES.len());
        // Distinct classes only.
        for pair in CLASSES.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn test_royal_flush_is_one() {
        assert_eq!(1, score5(&hand5(["Ah", "Kh", "Qh", "Jh", "Th"])));
    }

    #[test]
    fn test_steel_wheel_is_ten() {
        assert_eq!(10, score5(&hand5(["Ah", "2h", "3h", "4h", "5h"])));
    }

    #[test]
    fn test_quads_boundaries() {
        assert_eq!(11, score5(&hand5(["Ah", "Ac", "Ad", "As", "Kc"])));
        assert_eq!(166, score5(&hand5(["2c", "2d", "2h", "2s", "3c"])));
    }

    #[test]
    fn test_full_house_boundaries() {
        assert_eq!(167, score5(&hand5(["Ah", "Ac", "Ad", "Kc", "Kd"])));
        assert_eq!(322, score5(&hand5(["2c", "2d", "2h", "3c", "3d"])));
    }

    #[test]
    fn test_flush_boundaries() {
        assert_eq!(323, score5(&hand5(["Ah", "Kh", "Qh", "Jh", "9h"])));
        assert_eq!(1599, score5(&hand5(["7s", "5s", "4s", "3s", "2s"])));
    }

    #[test]
    fn test_straight_boundaries() {
        assert_eq!(1600, score5(&hand5(["Ah", "Kc", "Qd", "Js", "Tc"])));
        assert_eq!(1609, score5(&hand5(["Ah", "2c", "3d", "4s", "5c"])));
    }

    #[test]
    fn test_trips_boundaries() {
        assert_eq!(1610, score5(&hand5(["Ah", "Ac", "Ad", "Ks", "Qc"])));
        assert_eq!(2467, score5(&hand5(["2c", "2d", "2h", "4s", "3c"])));
    }

    #[test]
    fn test_two_pair_boundaries() {
        assert_eq!(2468, score5(&hand5(["Ah", "Ac", "Kd", "Ks", "Qc"])));
        assert_eq!(3325, score5(&hand5(["3c", "3d", "2h", "2s", "4c"])));
    }

    #[test]
    fn test_one_pair_boundaries() {
        assert_eq!(3326, score5(&hand5(["Ah", "Ac", "Kd", "Qs", "Jc"])));
        assert_eq!(6185, score5(&hand5(["2c", "2d", "5h", "4s", "3c"])));
    }

    #[test]
    fn test_high_card_boundaries() {
        assert_eq!(6186, score5(&hand5(["Ah", "Kc", "Qd", "Js", "9c"])));
        assert_eq!(WORST_SCORE, score5(&hand5(["7h", "5c", "4d", "3s", "2c"])));
    }

    #[test]
    fn test_order_of_cards_is_irrelevant() {
        let a = score5(&hand5(["Ah", "Kh", "Qh", "Jh", "Th"]));
        let b = score5(&hand5(["Th", "Qh", "Ah", "Kh", "Jh"]));
        assert_eq!(a, b);
    }

    #[test]
    fn test_score6_takes_best_subset() {
        let cards: [Card; 6] = ["Ah", "Kh", "Qh", "Jh", "Th", "2c"].map(|s| s.parse().unwrap());
        assert_eq!(1, score6(&cards));
    }

    #[test]
    fn test_score7_takes_best_subset() {
        let cards: [Card; 7] =
            ["2c", "Ah", "Kh", "Qh", "3d", "Jh", "Th"].map(|s| s.parse().unwrap());
        assert_eq!(1, score7(&cards));
    }

    #[test]
    fn test_score7_pair_board() {
        // Best five of 7: aces up with a king kicker.
        let cards: [Card; 7] =
            ["Ah", "Ac", "7d", "7s", "Kc", "2h", "3d"].map(|s| s.parse().unwrap());
        let best5 = score5(&hand5(["Ah", "Ac", "7d", "7s", "Kc"]));
        assert_eq!(best5, score7(&cards));
    }
}
