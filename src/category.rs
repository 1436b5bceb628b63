use std::fmt;

/// The nine poker hand categories, weakest first.
///
/// The discriminants are part of the public contract: 1 is a high card
/// and 9 is a straight flush.
#[derive(Debug, PartialEq, PartialOrd, Eq, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandCategory {
    HighCard = 1,
    OnePair = 2,
    TwoPair = 3,
    ThreeOfAKind = 4,
    Straight = 5,
    Flush = 6,
    FullHouse = 7,
    FourOfAKind = 8,
    StraightFlush = 9,
}

/// Upper score bound of each category on the 7462 point scale,
/// strongest first. Anything past the last bound is a high card.
const BREAKPOINTS: [(i32, HandCategory); 8] = [
    (10, HandCategory::StraightFlush),
    (166, HandCategory::FourOfAKind),
    (322, HandCategory::FullHouse),
    (1599, HandCategory::Flush),
    (1609, HandCategory::Straight),
    (2467, HandCategory::ThreeOfAKind),
    (3325, HandCategory::TwoPair),
    (6185, HandCategory::OnePair),
];

impl HandCategory {
    /// Classify a score. First matching ascending boundary wins.
    ///
    /// This is total over all integers and does no validation; whether
    /// a score is meaningful is the scorer's and the caller's business.
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_rank::HandCategory;
    ///
    /// assert_eq!(HandCategory::StraightFlush, HandCategory::from_score(1));
    /// assert_eq!(HandCategory::Flush, HandCategory::from_score(350));
    /// assert_eq!(HandCategory::HighCard, HandCategory::from_score(7462));
    /// ```
    pub fn from_score(score: i32) -> HandCategory {
        for (bound, category) in BREAKPOINTS {
            if score <= bound {
                return category;
            }
        }
        HandCategory::HighCard
    }

    /// The display name of this category, e.g. "Four of a Kind".
    pub fn name(self) -> &'static str {
        match self {
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::FullHouse => "Full House",
            HandCategory::Flush => "Flush",
            HandCategory::Straight => "Straight",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::OnePair => "One Pair",
            HandCategory::HighCard => "High Card",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
