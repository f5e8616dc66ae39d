//! Card, suit, and rank types.

use core::fmt;
use core::str::FromStr;

use crate::error::CardError;

/// Card suit.
///
/// The ordinals are stable: `Spade = 0` through `Heart = 3`, then the
/// `Joker` sentinel at `4`. Jokers never appear in the standard deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Suit {
    /// Spades.
    Spade = 0,
    /// Diamonds.
    Diamond = 1,
    /// Clubs.
    Club = 2,
    /// Hearts.
    Heart = 3,
    /// Joker pseudo-suit.
    Joker = 4,
}

const SUIT_NAMES: [&str; 5] = ["Spade", "Diamond", "Club", "Heart", "Joker"];

impl Suit {
    /// The four playable suits in deck generation order.
    pub const STANDARD: [Self; 4] = [Self::Spade, Self::Diamond, Self::Club, Self::Heart];

    /// Returns the stable ordinal of the suit.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the singular name of the suit.
    #[must_use]
    pub const fn name(self) -> &'static str {
        SUIT_NAMES[self as usize]
    }

    fn from_singular(name: &str) -> Option<Self> {
        SUIT_NAMES
            .iter()
            .position(|candidate| *candidate == name)
            .and_then(|index| Self::try_from(index as u8).ok())
    }
}

impl TryFrom<u8> for Suit {
    type Error = CardError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Spade),
            1 => Ok(Self::Diamond),
            2 => Ok(Self::Club),
            3 => Ok(Self::Heart),
            4 => Ok(Self::Joker),
            _ => Err(CardError::InvalidSuit(value)),
        }
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Suit {
    type Err = CardError;

    /// Accepts the singular or plural name, e.g. `"Heart"` or `"Hearts"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_singular(s)
            .or_else(|| s.strip_suffix('s').and_then(Self::from_singular))
            .ok_or(CardError::UnknownSuit)
    }
}

/// Card rank.
///
/// Standard ranks run from [`Rank::ACE`] (1) to [`Rank::KING`] (13); zero is
/// reserved. For jokers the rank holds the joker's index instead, so any
/// `u8` value is representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rank(pub u8);

const RANK_NAMES: [&str; 13] = [
    "Ace", "Two", "Three", "Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten", "Jack", "Queen",
    "King",
];

impl Rank {
    /// Ace.
    pub const ACE: Self = Self(1);
    /// Two.
    pub const TWO: Self = Self(2);
    /// Three.
    pub const THREE: Self = Self(3);
    /// Four.
    pub const FOUR: Self = Self(4);
    /// Five.
    pub const FIVE: Self = Self(5);
    /// Six.
    pub const SIX: Self = Self(6);
    /// Seven.
    pub const SEVEN: Self = Self(7);
    /// Eight.
    pub const EIGHT: Self = Self(8);
    /// Nine.
    pub const NINE: Self = Self(9);
    /// Ten.
    pub const TEN: Self = Self(10);
    /// Jack.
    pub const JACK: Self = Self(11);
    /// Queen.
    pub const QUEEN: Self = Self(12);
    /// King.
    pub const KING: Self = Self(13);

    /// Lowest standard rank.
    pub const MIN: Self = Self::ACE;
    /// Highest standard rank, also the number of ranks per suit.
    pub const MAX: Self = Self::KING;

    /// All standard ranks in ascending order.
    pub const ALL: [Self; 13] = [
        Self::ACE,
        Self::TWO,
        Self::THREE,
        Self::FOUR,
        Self::FIVE,
        Self::SIX,
        Self::SEVEN,
        Self::EIGHT,
        Self::NINE,
        Self::TEN,
        Self::JACK,
        Self::QUEEN,
        Self::KING,
    ];

    /// Returns the raw rank value.
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Returns whether this is one of Ace through King.
    #[must_use]
    pub const fn is_standard(self) -> bool {
        self.0 >= Self::MIN.0 && self.0 <= Self::MAX.0
    }

    /// Returns the rank name, or `None` for non-standard values.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        if self.is_standard() {
            Some(RANK_NAMES[self.0 as usize - 1])
        } else {
            None
        }
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "{}", self.0),
        }
    }
}

impl FromStr for Rank {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RANK_NAMES
            .iter()
            .position(|name| *name == s)
            .map(|index| Self(index as u8 + 1))
            .ok_or(CardError::UnknownRank)
    }
}

/// A playing card.
///
/// Cards are plain values: two cards are equal exactly when both suit and
/// rank match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card, or the joker index when `suit` is [`Suit::Joker`].
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    ///
    /// Note: This function does not validate the rank against the suit.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Creates the joker with the given index.
    #[must_use]
    pub const fn joker(index: u8) -> Self {
        Self::new(Suit::Joker, Rank(index))
    }

    /// Returns whether this card is a joker.
    #[must_use]
    pub const fn is_joker(self) -> bool {
        matches!(self.suit, Suit::Joker)
    }

    /// Returns the absolute ordering key, `suit * 13 + rank`.
    ///
    /// ```
    /// use deckrs::{Card, Rank, Suit};
    ///
    /// assert_eq!(Card::new(Suit::Spade, Rank::ACE).abs_rank(), 1);
    /// assert_eq!(Card::new(Suit::Heart, Rank::KING).abs_rank(), 52);
    /// ```
    #[must_use]
    pub const fn abs_rank(self) -> u32 {
        self.suit as u32 * Rank::MAX.0 as u32 + self.rank.0 as u32
    }
}

/// Free-function form of [`Card::abs_rank`], handy as a sort key.
#[must_use]
pub const fn abs_rank(card: &Card) -> u32 {
    card.abs_rank()
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_joker() {
            return f.write_str(self.suit.name());
        }
        write!(f, "{} of {}s", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = CardError;

    /// Parses the [`Display`](fmt::Display) form. `"Joker"` yields joker 0.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Suit::Joker.name() {
            return Ok(Self::joker(0));
        }
        let (rank, suit) = s.split_once(" of ").ok_or(CardError::MalformedCard)?;
        let suit = suit
            .strip_suffix('s')
            .and_then(Suit::from_singular)
            .ok_or(CardError::UnknownSuit)?;
        if suit == Suit::Joker {
            return Err(CardError::MalformedCard);
        }
        Ok(Self::new(suit, rank.parse()?))
    }
}

/// Number of cards per deck.
pub const DECK_SIZE: usize = 52;
