use crate::card::{Card, Value};

/// All the different possible hand ranks.
/// For each hand rank the u32 corresponds to
/// the strength of the hand in comparison to others
/// of the same rank.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
pub(crate) enum Rank {
    /// The lowest rank.
    /// No matches
    HighCard(u32),
    /// One Card matches another.
    OnePair(u32),
    /// Two different pair of matching cards.
    TwoPair(u32),
    /// Three of the same value.
    ThreeOfAKind(u32),
    /// Five cards in a sequence
    Straight(u32),
    /// Five cards of the same suit
    Flush(u32),
    /// Three of one value and two of another value
    FullHouse(u32),
    /// Four of the same value.
    FourOfAKind(u32),
    /// Five cards in a sequence all of the same suit.
    StraightFlush(u32),
}

/// Big ugly constant for all the straights, wheel first.
pub(crate) const STRAIGHTS: [u32; 10] = [
    // Wheel.
    1 << (Value::Ace as u32)
        | 1 << (Value::Two as u32)
        | 1 << (Value::Three as u32)
        | 1 << (Value::Four as u32)
        | 1 << (Value::Five as u32),
    // "Normal" straights starting at two to six.
    0b11111 << (Value::Two as u32),
    0b11111 << (Value::Three as u32),
    0b11111 << (Value::Four as u32),
    0b11111 << (Value::Five as u32),
    0b11111 << (Value::Six as u32),
    0b11111 << (Value::Seven as u32),
    0b11111 << (Value::Eight as u32),
    0b11111 << (Value::Nine as u32),
    // Royal straight.
    0b11111 << (Value::Ten as u32),
];

/// If the value bitset is one of the ten straights, give back its
/// index. Higher index is a stronger straight.
fn straight_index(value_set: u32) -> Option<u32> {
    STRAIGHTS
        .iter()
        .position(|&s| s == value_set)
        .map(|i| i as u32)
}

/// Rank five cards.
///
/// The payload of each variant packs the deciding value bits ahead of
/// the kicker bits (`major << 13 | minor`), so the derived `Ord` on
/// `Rank` orders hands exactly by poker strength.
pub(crate) fn rank_five(cards: &[Card; 5]) -> Rank {
    let mut suit_set: u32 = 0;
    let mut value_set: u32 = 0;
    let mut counts = [0u8; 13];
    for c in cards {
        suit_set |= 1 << (c.suit as u32);
        value_set |= 1 << (c.value as u32);
        counts[c.value as usize] += 1;
    }

    // count_masks[m] is the bitset of values appearing exactly m times.
    let mut count_masks = [0u32; 6];
    for (value, &count) in counts.iter().enumerate() {
        count_masks[count as usize] |= 1 << value;
    }

    // The major deciding factor for hand rank
    // is the number of unique card values.
    let unique_card_count = value_set.count_ones();

    if unique_card_count == 5 {
        // Five different cards can be a straight flush, a straight,
        // a flush, or just a high card.
        let is_flush = suit_set.count_ones() == 1;
        match (straight_index(value_set), is_flush) {
            (Some(idx), true) => Rank::StraightFlush(idx),
            (Some(idx), false) => Rank::Straight(idx),
            (None, true) => Rank::Flush(value_set),
            (None, false) => Rank::HighCard(value_set),
        }
    } else if count_masks[4] != 0 {
        Rank::FourOfAKind(count_masks[4] << 13 | count_masks[1])
    } else if count_masks[3] != 0 && count_masks[2] != 0 {
        Rank::FullHouse(count_masks[3] << 13 | count_masks[2])
    } else if count_masks[3] != 0 {
        Rank::ThreeOfAKind(count_masks[3] << 13 | count_masks[1])
    } else if count_masks[2].count_ones() == 2 {
        Rank::TwoPair(count_masks[2] << 13 | count_masks[1])
    } else {
        Rank::OnePair(count_masks[2] << 13 | count_masks[1])
    }
}
