//! The evaluation boundary.
//!
//! Everything here is sentinel based rather than `Result` based: a bad
//! card anywhere in the input produces [`HandResult::INVALID`] (or `-1`
//! for card ids) and nothing ever panics or returns a partial answer.
//! That keeps the surface safe to wrap for hosts where unwinding is
//! not an option.

use std::fmt;

use crate::card::{Card, Suit, Value};
use crate::category::HandCategory;
use crate::omaha::best_omaha_score;
use crate::score::{score5, score6, score7};

/// The id sentinel for a card that failed to parse or decode.
pub const INVALID_CARD_ID: i32 = -1;

/// The outcome of evaluating a hand: a lower-is-better score on the
/// 7462 point scale together with its category discriminant.
///
/// Results are plain immutable values created fresh per call. The
/// invalid result carries `-1` in both fields.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Clone, Copy, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandResult {
    /// Hand strength, 1 (royal flush) through 7462, or -1.
    pub score: i32,
    /// Category discriminant, 1 (high card) through 9, or -1.
    pub category: i32,
}

impl HandResult {
    /// The result returned for any invalid input.
    pub const INVALID: HandResult = HandResult {
        score: -1,
        category: -1,
    };

    fn from_score(score: i32) -> HandResult {
        HandResult {
            score,
            category: HandCategory::from_score(score) as i32,
        }
    }

    /// Whether this result came from a successful evaluation.
    pub fn is_valid(&self) -> bool {
        self.score >= 0
    }

    /// The typed category, if the result is valid.
    pub fn hand_category(&self) -> Option<HandCategory> {
        if self.is_valid() {
            Some(HandCategory::from_score(self.score))
        } else {
            None
        }
    }

    /// The category label, or "Invalid Hand".
    pub fn category_name(&self) -> &'static str {
        match self.hand_category() {
            Some(category) => category.name(),
            None => "Invalid Hand",
        }
    }

    /// A presentational one-liner, e.g. `"Flush (Score: 350)"`.
    pub fn description(&self) -> String {
        if self.is_valid() {
            format!("{} (Score: {})", self.category_name(), self.score)
        } else {
            "Invalid Hand".to_string()
        }
    }
}

impl fmt::Display for HandResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.description())
    }
}

/// Decode a whole id array, failing fast on the first bad id.
fn cards_from_ids<const N: usize>(ids: &[i32; N]) -> Option<[Card; N]> {
    let mut cards = [Card::new(Value::Two, Suit::Club); N];
    for (slot, &id) in cards.iter_mut().zip(ids) {
        *slot = Card::from_id(id)?;
    }
    Some(cards)
}

/// Parse a whole notation array, failing fast on the first bad card.
fn cards_from_strings<const N: usize>(cards: &[&str; N]) -> Option<[Card; N]> {
    let mut out = [Card::new(Value::Two, Suit::Club); N];
    for (slot, s) in out.iter_mut().zip(cards) {
        *slot = s.parse().ok()?;
    }
    Some(out)
}

/// Evaluate a 5-card hand given card ids.
///
/// # Examples
///
/// ```
/// use hand_rank::{HandResult, evaluate5};
///
/// // 2c 2d 2h 2s 3c
/// let result = evaluate5([0, 1, 2, 3, 4]);
/// assert_eq!(8, result.category);
/// assert_eq!(HandResult::INVALID, evaluate5([0, 1, 2, 3, 52]));
/// ```
pub fn evaluate5(ids: [i32; 5]) -> HandResult {
    match cards_from_ids(&ids) {
        Some(cards) => HandResult::from_score(score5(&cards)),
        None => HandResult::INVALID,
    }
}

/// Evaluate a 6-card hand given card ids, taking the best 5-card subset.
pub fn evaluate6(ids: [i32; 6]) -> HandResult {
    match cards_from_ids(&ids) {
        Some(cards) => HandResult::from_score(score6(&cards)),
        None => HandResult::INVALID,
    }
}

/// Evaluate a 7-card hand given card ids, taking the best 5-card subset.
pub fn evaluate7(ids: [i32; 7]) -> HandResult {
    match cards_from_ids(&ids) {
        Some(cards) => HandResult::from_score(score7(&cards)),
        None => HandResult::INVALID,
    }
}

/// Evaluate an Omaha hand given card ids: five board cards and four
/// hole cards, scored with exactly two hole plus three board cards.
pub fn evaluate_omaha(board: [i32; 5], hole: [i32; 4]) -> HandResult {
    match (cards_from_ids(&board), cards_from_ids(&hole)) {
        (Some(board), Some(hole)) => HandResult::from_score(best_omaha_score(&board, &hole)),
        _ => HandResult::INVALID,
    }
}

/// Evaluate a 5-card hand given two character card notation.
///
/// # Examples
///
/// ```
/// use hand_rank::evaluate5_strings;
///
/// let result = evaluate5_strings(["2c", "2d", "2h", "2s", "3c"]);
/// assert_eq!(8, result.category);
/// assert_eq!("Four of a Kind (Score: 166)", result.description());
/// ```
pub fn evaluate5_strings(cards: [&str; 5]) -> HandResult {
    match cards_from_strings(&cards) {
        Some(cards) => HandResult::from_score(score5(&cards)),
        None => HandResult::INVALID,
    }
}

/// Evaluate a 6-card hand given two character card notation.
pub fn evaluate6_strings(cards: [&str; 6]) -> HandResult {
    match cards_from_strings(&cards) {
        Some(cards) => HandResult::from_score(score6(&cards)),
        None => HandResult::INVALID,
    }
}

/// Evaluate a 7-card hand given two character card notation.
pub fn evaluate7_strings(cards: [&str; 7]) -> HandResult {
    match cards_from_strings(&cards) {
        Some(cards) => HandResult::from_score(score7(&cards)),
        None => HandResult::INVALID,
    }
}

/// Evaluate an Omaha hand given two character card notation.
pub fn evaluate_omaha_strings(board: [&str; 5], hole: [&str; 4]) -> HandResult {
    match (cards_from_strings(&board), cards_from_strings(&hole)) {
        (Some(board), Some(hole)) => HandResult::from_score(best_omaha_score(&board, &hole)),
        _ => HandResult::INVALID,
    }
}

/// Translate two character card notation to a card id, `-1` on any
/// malformed input.
///
/// # Examples
///
/// ```
/// use hand_rank::card_string_to_id;
///
/// assert_eq!(50, card_string_to_id("Ah"));
/// assert_eq!(-1, card_string_to_id("Zz"));
/// assert_eq!(-1, card_string_to_id("A"));
/// ```
pub fn card_string_to_id(card: &str) -> i32 {
    card.parse::<Card>()
        .map(|c| c.id() as i32)
        .unwrap_or(INVALID_CARD_ID)
}

/// Whether a string is well formed two character card notation.
pub fn is_valid_card(card: &str) -> bool {
    card.parse::<Card>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_result_shape() {
        let invalid = HandResult::INVALID;
        assert_eq!(-1, invalid.score);
        assert_eq!(-1, invalid.category);
        assert!(!invalid.is_valid());
        assert_eq!(None, invalid.hand_category());
        assert_eq!("Invalid Hand", invalid.category_name());
        assert_eq!("Invalid Hand", invalid.description());
    }

    #[test]
    fn test_evaluate5_royal() {
        let result = evaluate5_strings(["Ah", "Kh", "Qh", "Jh", "Th"]);
        assert_eq!(1, result.score);
        assert_eq!(9, result.category);
        assert_eq!(Some(HandCategory::StraightFlush), result.hand_category());
        assert_eq!("Straight Flush (Score: 1)", result.description());
    }

    #[test]
    fn test_ids_and_strings_agree() {
        let by_string = evaluate5_strings(["Ah", "Kh", "Qh", "Jh", "Th"]);
        let by_id = evaluate5([50, 46, 42, 38, 34]);
        assert_eq!(by_string, by_id);
    }

    #[test]
    fn test_one_bad_card_poisons_the_hand() {
        // Fail fast: four perfectly good cards do not help.
        assert_eq!(
            HandResult::INVALID,
            evaluate5_strings(["Ah", "Kh", "Qh", "Jh", "T"])
        );
        assert_eq!(
            HandResult::INVALID,
            evaluate5_strings(["Xx", "Kh", "Qh", "Jh", "Th"])
        );
        assert_eq!(HandResult::INVALID, evaluate5([50, 46, 42, 38, -1]));
        assert_eq!(HandResult::INVALID, evaluate5([52, 46, 42, 38, 34]));
    }

    #[test]
    fn test_evaluate6_and_7() {
        let six = evaluate6_strings(["Ah", "Kh", "Qh", "Jh", "Th", "2c"]);
        assert_eq!(1, six.score);
        let seven = evaluate7_strings(["2c", "Ah", "Kh", "Qh", "3d", "Jh", "Th"]);
        assert_eq!(1, seven.score);
        assert_eq!(
            HandResult::INVALID,
            evaluate7_strings(["2c", "Ah", "Kh", "Qh", "3d", "Jh", "oops"])
        );
        assert_eq!(HandResult::INVALID, evaluate6([0, 1, 2, 3, 4, 99]));
    }

    #[test]
    fn test_omaha_facade() {
        let result = evaluate_omaha_strings(
            ["Ah", "Kh", "Qh", "2d", "3s"],
            ["Jh", "Th", "4c", "5c"],
        );
        assert_eq!(1, result.score);
        assert_eq!(9, result.category);

        assert_eq!(
            HandResult::INVALID,
            evaluate_omaha_strings(["Ah", "Kh", "Qh", "2d", "3s"], ["Jh", "Th", "4c", "5x"])
        );
        assert_eq!(
            HandResult::INVALID,
            evaluate_omaha([50, 46, 42, 1, 7], [38, 34, -1, 13])
        );
    }

    #[test]
    fn test_card_string_to_id() {
        assert_eq!(0, card_string_to_id("2c"));
        assert_eq!(50, card_string_to_id("Ah"));
        assert_eq!(51, card_string_to_id("As"));
        assert_eq!(-1, card_string_to_id("Zz"));
        assert_eq!(-1, card_string_to_id("A"));
        assert_eq!(-1, card_string_to_id(""));
        assert_eq!(-1, card_string_to_id("Ahh"));
    }

    #[test]
    fn test_is_valid_card() {
        assert!(is_valid_card("Ah"));
        assert!(is_valid_card("AH"));
        assert!(!is_valid_card("ah"));
        assert!(!is_valid_card("Zz"));
        assert!(!is_valid_card("A"));
    }

    #[test]
    fn test_display_matches_description() {
        let result = evaluate5_strings(["2c", "2d", "2h", "2s", "3c"]);
        assert_eq!(result.description(), format!("{result}"));
    }
}
