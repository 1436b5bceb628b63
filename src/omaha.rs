use crate::card::Card;
use crate::combination::IndexCombinations;
use crate::score::score5;

/// Score of the best Omaha hand: exactly two of the four hole cards
/// plus exactly three of the five board cards.
///
/// All C(4,2) * C(5,3) = 60 five-card hands are scored and the minimum
/// (strongest) score wins, so enumeration order never matters.
///
/// # Examples
///
/// ```
/// use hand_rank::{Card, best_omaha_score};
///
/// let board: [Card; 5] = ["Ah", "Kh", "Qh", "2d", "3s"].map(|s| s.parse().unwrap());
/// let hole: [Card; 4] = ["Jh", "Th", "4c", "5c"].map(|s| s.parse().unwrap());
/// // Jh Th with Ah Kh Qh is a royal flush.
/// assert_eq!(1, best_omaha_score(&board, &hole));
/// ```
pub fn best_omaha_score(board: &[Card; 5], hole: &[Card; 4]) -> i32 {
    let board_trios: Vec<Vec<usize>> = IndexCombinations::new(5, 3).collect();
    let mut best = i32::MAX;
    for hole_pair in IndexCombinations::new(4, 2) {
        for trio in &board_trios {
            let hand = [
                hole[hole_pair[0]],
                hole[hole_pair[1]],
                board[trio[0]],
                board[trio[1]],
                board[trio[2]],
            ];
            best = best.min(score5(&hand));
        }
    }
    best
}
