//! Deck configuration options.

use alloc::vec::Vec;
use core::fmt;

use crate::card::Card;
use crate::deck::{self, Transform, boxed};
use crate::shuffle::ShuffleSource;

/// An ordered list of transforms for building a deck.
///
/// Use the builder pattern to queue transforms; they run in the order they
/// were added when [`build`](Self::build) is called:
///
/// ```
/// use deckrs::{Card, DeckOptions, Rank, ShuffleSource, Suit};
///
/// let source = ShuffleSource::new(42);
/// let cards = DeckOptions::default()
///     .with_decks(2)
///     .with_jokers(2)
///     .with_filter(|card: &Card| card.rank == Rank::TWO)
///     .with_shuffle(&source)
///     .with_default_sort()
///     .build();
///
/// assert_eq!(cards.len(), 2 * 48 + 2);
/// assert_eq!(cards[0], Card::new(Suit::Spade, Rank::ACE));
/// assert_eq!(cards[1], Card::new(Suit::Spade, Rank::ACE));
/// ```
#[derive(Default)]
pub struct DeckOptions<'a> {
    transforms: Vec<Transform<'a>>,
}

impl fmt::Debug for DeckOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DeckOptions")
            .field("transforms", &self.transforms.len())
            .finish()
    }
}

impl<'a> DeckOptions<'a> {
    /// Creates an empty option list.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Queues an arbitrary transform.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::{Card, DeckOptions};
    ///
    /// let cards = DeckOptions::new()
    ///     .with(|mut cards: Vec<Card>| {
    ///         cards.reverse();
    ///         cards
    ///     })
    ///     .build();
    /// assert_eq!(cards[0].to_string(), "King of Hearts");
    /// ```
    #[must_use]
    pub fn with(mut self, transform: impl FnMut(Vec<Card>) -> Vec<Card> + 'a) -> Self {
        self.transforms.push(boxed(transform));
        self
    }

    /// Queues [`deck::default_sort`].
    #[must_use]
    pub fn with_default_sort(self) -> Self {
        self.with(deck::default_sort)
    }

    /// Queues a stable sort using `less`. See [`deck::sort`].
    #[must_use]
    pub fn with_sort<F>(self, less: F) -> Self
    where
        F: Fn(&[Card], usize, usize) -> bool + 'a,
    {
        self.with(deck::sort(less))
    }

    /// Queues a shuffle drawing from `source`.
    #[must_use]
    pub fn with_shuffle(self, source: &'a ShuffleSource) -> Self {
        self.with(deck::shuffle(source))
    }

    /// Queues `n` jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// let cards = DeckOptions::new().with_jokers(3).build();
    /// assert_eq!(cards.iter().filter(|card| card.is_joker()).count(), 3);
    /// ```
    #[must_use]
    pub fn with_jokers(self, n: u8) -> Self {
        self.with(deck::jokers(n))
    }

    /// Queues removal of every card matching `predicate`.
    #[must_use]
    pub fn with_filter<P>(self, predicate: P) -> Self
    where
        P: FnMut(&Card) -> bool + 'a,
    {
        self.with(deck::filter(predicate))
    }

    /// Queues replication into `n` decks.
    ///
    /// # Example
    ///
    /// ```
    /// use deckrs::DeckOptions;
    ///
    /// assert_eq!(DeckOptions::new().with_decks(3).build().len(), 156);
    /// assert!(DeckOptions::new().with_decks(0).build().is_empty());
    /// ```
    #[must_use]
    pub fn with_decks(self, n: usize) -> Self {
        self.with(deck::deck(n))
    }

    /// Returns the number of queued transforms.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    /// Returns whether no transforms are queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Builds the deck, consuming the options.
    #[must_use]
    pub fn build(self) -> Vec<Card> {
        deck::new(self.transforms)
    }
}
