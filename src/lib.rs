//! Playing card decks built through composable transformation options, with
//! optional `no_std` support.
//!
//! A deck starts as the standard 52 cards in suit-major order and is passed
//! through transforms such as sorting, shuffling, adding jokers, filtering,
//! and replicating into multiple decks.
//!
//! # Example
//!
//! ```
//! use deckrs::deck::{default_sort, jokers, shuffle};
//! use deckrs::{Card, Rank, ShuffleSource, Suit, new_deck};
//!
//! let source = ShuffleSource::new(42);
//! let cards = new_deck![shuffle(&source), jokers(2), default_sort];
//!
//! assert_eq!(cards.len(), 54);
//! assert_eq!(cards[0], Card::new(Suit::Spade, Rank::ACE));
//! assert_eq!(cards[0].to_string(), "Ace of Spades");
//! assert_eq!(cards[53].to_string(), "Joker");
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod deck;
pub mod error;
pub mod options;
pub mod shuffle;
mod sync;

// Re-export main types
pub use card::{Card, DECK_SIZE, Rank, Suit, abs_rank};
pub use deck::{Transform, new};
pub use error::CardError;
pub use options::DeckOptions;
pub use shuffle::ShuffleSource;
