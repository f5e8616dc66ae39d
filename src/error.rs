//! Error types for card conversions and parsing.

use thiserror::Error;

/// Errors that can occur when converting or parsing card values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardError {
    /// Suit ordinal is outside `0..=4`.
    #[error("invalid suit ordinal {0}")]
    InvalidSuit(u8),
    /// Suit name is not recognised.
    #[error("unknown suit name")]
    UnknownSuit,
    /// Rank name is not recognised.
    #[error("unknown rank name")]
    UnknownRank,
    /// Text is not of the form `<Rank> of <Suit>s` or `Joker`.
    #[error("malformed card text")]
    MalformedCard,
}
