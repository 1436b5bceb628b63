use std::fmt;
use std::mem;
use std::str::FromStr;

use crate::error::HandRankError;

/// Card rank or value.
/// This is basically the face value - 2
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// 2
    Two = 0,
    /// 3
    Three = 1,
    /// 4
    Four = 2,
    /// 5
    Five = 3,
    /// 6
    Six = 4,
    /// 7
    Seven = 5,
    /// 8
    Eight = 6,
    /// 9
    Nine = 7,
    /// T
    Ten = 8,
    /// J
    Jack = 9,
    /// Q
    Queen = 10,
    /// K
    King = 11,
    /// A
    Ace = 12,
}

/// Constant of all the values, in ascending strength order.
/// This is what `Value::values()` returns.
const VALUES: [Value; 13] = [
    Value::Two,
    Value::Three,
    Value::Four,
    Value::Five,
    Value::Six,
    Value::Seven,
    Value::Eight,
    Value::Nine,
    Value::Ten,
    Value::Jack,
    Value::Queen,
    Value::King,
    Value::Ace,
];

impl Value {
    /// Take a u8 and convert it to a value.
    ///
    /// The input must already be in 0..=12.
    pub fn from_u8(v: u8) -> Value {
        unsafe { mem::transmute(v) }
    }

    /// Get all of the `Value`'s that are possible.
    /// Useful for iterating all ranks when enumerating hands.
    pub fn values() -> [Value; 13] {
        VALUES
    }

    /// Parse a rank character. Only the canonical upper case
    /// face characters are accepted.
    pub fn from_char(c: char) -> Option<Value> {
        match c {
            'A' => Some(Value::Ace),
            'K' => Some(Value::King),
            'Q' => Some(Value::Queen),
            'J' => Some(Value::Jack),
            'T' => Some(Value::Ten),
            '9' => Some(Value::Nine),
            '8' => Some(Value::Eight),
            '7' => Some(Value::Seven),
            '6' => Some(Value::Six),
            '5' => Some(Value::Five),
            '4' => Some(Value::Four),
            '3' => Some(Value::Three),
            '2' => Some(Value::Two),
            _ => None,
        }
    }

    /// The single character used in two character card notation.
    pub fn to_char(self) -> char {
        match self {
            Value::Ace => 'A',
            Value::King => 'K',
            Value::Queen => 'Q',
            Value::Jack => 'J',
            Value::Ten => 'T',
            Value::Nine => '9',
            Value::Eight => '8',
            Value::Seven => '7',
            Value::Six => '6',
            Value::Five => '5',
            Value::Four => '4',
            Value::Three => '3',
            Value::Two => '2',
        }
    }

    /// Human readable rank name, e.g. "Queen".
    pub fn name(self) -> &'static str {
        match self {
            Value::Two => "Two",
            Value::Three => "Three",
            Value::Four => "Four",
            Value::Five => "Five",
            Value::Six => "Six",
            Value::Seven => "Seven",
            Value::Eight => "Eight",
            Value::Nine => "Nine",
            Value::Ten => "Ten",
            Value::Jack => "Jack",
            Value::Queen => "Queen",
            Value::King => "King",
            Value::Ace => "Ace",
        }
    }
}

/// Enum for the four different suits.
///
/// The discriminants are fixed by the card id encoding
/// (`id = value * 4 + suit`) and must not be reordered.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Suit {
    /// Clubs
    Club = 0,
    /// Diamonds
    Diamond = 1,
    /// Hearts
    Heart = 2,
    /// Spades
    Spade = 3,
}

/// All of the `Suit`'s. This is what `Suit::suits()` returns.
const SUITS: [Suit; 4] = [Suit::Club, Suit::Diamond, Suit::Heart, Suit::Spade];

impl Suit {
    /// Provide all the Suit's that there are.
    pub fn suits() -> [Suit; 4] {
        SUITS
    }

    /// Take a u8 and convert it to a suit.
    ///
    /// The input must already be in 0..=3.
    pub fn from_u8(s: u8) -> Suit {
        unsafe { mem::transmute(s) }
    }

    /// Parse a suit character. Suit letters are accepted in either case.
    pub fn from_char(s: char) -> Option<Suit> {
        match s {
            'c' | 'C' => Some(Suit::Club),
            'd' | 'D' => Some(Suit::Diamond),
            'h' | 'H' => Some(Suit::Heart),
            's' | 'S' => Some(Suit::Spade),
            _ => None,
        }
    }

    /// The single character used in two character card notation.
    pub fn to_char(self) -> char {
        match self {
            Suit::Club => 'c',
            Suit::Diamond => 'd',
            Suit::Heart => 'h',
            Suit::Spade => 's',
        }
    }

    /// Human readable suit name, e.g. "Hearts".
    pub fn name(self) -> &'static str {
        match self {
            Suit::Club => "Clubs",
            Suit::Diamond => "Diamonds",
            Suit::Heart => "Hearts",
            Suit::Spade => "Spades",
        }
    }
}

/// A playing card: a value and a suit.
///
/// Every card maps to a compact id in 0..=51
/// (`value * 4 + suit`), the same numbering the classic
/// lookup table evaluators use.
#[derive(PartialEq, PartialOrd, Eq, Ord, Debug, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    /// The face value of this card.
    pub value: Value,
    /// The suit of this card.
    pub suit: Suit,
}

impl Card {
    /// Create a new card from a value and a suit.
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_rank::{Card, Suit, Value};
    ///
    /// let card = Card::new(Value::Ace, Suit::Heart);
    /// assert_eq!(50, card.id());
    /// ```
    pub fn new(value: Value, suit: Suit) -> Self {
        Self { value, suit }
    }

    /// The compact id of this card, 0 (`2c`) through 51 (`As`).
    pub fn id(self) -> u8 {
        (self.value as u8) * 4 + (self.suit as u8)
    }

    /// Decode a card id, returning `None` for anything outside 0..=51.
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_rank::{Card, Suit, Value};
    ///
    /// assert_eq!(Some(Card::new(Value::Two, Suit::Club)), Card::from_id(0));
    /// assert_eq!(None, Card::from_id(52));
    /// assert_eq!(None, Card::from_id(-1));
    /// ```
    pub fn from_id(id: i32) -> Option<Card> {
        if !(0..=51).contains(&id) {
            return None;
        }
        Some(Card {
            value: Value::from_u8((id / 4) as u8),
            suit: Suit::from_u8((id % 4) as u8),
        })
    }

    /// Human readable rank name, e.g. "Ace".
    pub fn describe_rank(self) -> &'static str {
        self.value.name()
    }

    /// Human readable suit name, e.g. "Hearts".
    pub fn describe_suit(self) -> &'static str {
        self.suit.name()
    }

    /// Human readable card description, e.g. "Ace of Hearts".
    pub fn describe(self) -> String {
        format!("{} of {}", self.value.name(), self.suit.name())
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value.to_char(), self.suit.to_char())
    }
}

impl FromStr for Card {
    type Err = HandRankError;

    /// Parse two character card notation like "Ah" or "9c".
    ///
    /// # Examples
    ///
    /// ```
    /// use hand_rank::{Card, Suit, Value};
    ///
    /// let card: Card = "Kd".parse().unwrap();
    /// assert_eq!(Card::new(Value::King, Suit::Diamond), card);
    /// assert!("K".parse::<Card>().is_err());
    /// assert!("Kdd".parse::<Card>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(vc), Some(sc), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(HandRankError::InvalidCardLength);
        };
        let value = Value::from_char(vc).ok_or(HandRankError::UnexpectedRankChar)?;
        let suit = Suit::from_char(sc).ok_or(HandRankError::UnexpectedSuitChar)?;
        Ok(Card { value, suit })
    }
}

impl TryFrom<&str> for Card {
    type Error = HandRankError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.parse()
    }
}
