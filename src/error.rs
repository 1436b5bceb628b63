use thiserror::Error;

/// Errors produced while parsing card notation or decoding card ids.
///
/// The evaluation entry points in [`crate::eval`] never surface these;
/// they flatten every failure into the invalid sentinel so the boundary
/// stays panic and exception free.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum HandRankError {
    #[error("Card notation must be exactly two characters")]
    InvalidCardLength,
    #[error("Unable to parse rank character")]
    UnexpectedRankChar,
    #[error("Unable to parse suit character")]
    UnexpectedSuitChar,
    #[error("Card id {0} is outside 0..=51")]
    InvalidCardId(i32),
}
