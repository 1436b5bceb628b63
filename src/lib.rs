//! hand-rank is a small poker hand evaluation library.
//!
//! It parses two character card notation ("Ah", "9c"), scores 5, 6 and
//! 7 card hands on the classic 7462 point scale where lower is always
//! stronger, classifies scores into the nine hand categories, and
//! finds the best Omaha hand from four hole and five board cards.
//!
//! The typed API (`Card`, `HandCategory`, `score5` and friends) speaks
//! `Result` and `Option`; the evaluation boundary in [`eval`] speaks
//! sentinels (`-1`, [`HandResult::INVALID`]) and never panics, so it
//! can be re-exported safely across an FFI or host runtime boundary.
//!
//! ```
//! use hand_rank::{evaluate5_strings, evaluate_omaha_strings};
//!
//! let quads = evaluate5_strings(["2c", "2d", "2h", "2s", "3c"]);
//! assert_eq!(8, quads.category);
//!
//! let omaha = evaluate_omaha_strings(
//!     ["Ah", "Kh", "Qh", "2d", "3s"],
//!     ["Jh", "Th", "4c", "5c"],
//! );
//! assert_eq!("Straight Flush (Score: 1)", omaha.description());
//! ```

/// Card values, suits, ids and two character notation.
mod card;
/// Score to category breakpoints.
mod category;
/// Choose-k-of-n index combinations.
mod combination;
/// Parse and decode errors.
mod error;
/// The sentinel based evaluation boundary.
pub mod eval;
/// Omaha best hand search.
mod omaha;
/// Internal 5-card hand comparator.
mod rank;
/// 5/6/7 card scoring on the 7462 point scale.
mod score;

pub use card::{Card, Suit, Value};
pub use category::HandCategory;
pub use combination::IndexCombinations;
pub use error::HandRankError;
pub use eval::{
    HandResult, INVALID_CARD_ID, card_string_to_id, evaluate5, evaluate5_strings, evaluate6,
    evaluate6_strings, evaluate7, evaluate7_strings, evaluate_omaha, evaluate_omaha_strings,
    is_valid_card,
};
pub use omaha::best_omaha_score;
pub use score::{BEST_SCORE, NUM_HAND_CLASSES, WORST_SCORE, score5, score6, score7};
