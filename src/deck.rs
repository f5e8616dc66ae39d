//! Deck construction and the standard transforms.
//!
//! A deck is built by generating the 52-card baseline and threading it
//! through a list of transforms, left to right. Each transform takes the
//! current cards by value and returns the next sequence, which may be
//! longer, shorter, or reordered.
//!
//! ```
//! use deckrs::deck::{self, boxed};
//! use deckrs::{Card, Rank};
//!
//! let cards = deck::new([
//!     boxed(deck::deck(2)),
//!     boxed(deck::jokers(2)),
//!     boxed(deck::filter(|card: &Card| card.rank == Rank::TWO)),
//! ]);
//! assert_eq!(cards.len(), 2 * 48 + 2);
//! assert!(cards.contains(&Card::joker(1)));
//! ```

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Rank, Suit, abs_rank};
use crate::shuffle::ShuffleSource;

/// A boxed transform, as accepted by [`new`].
pub type Transform<'a> = Box<dyn FnMut(Vec<Card>) -> Vec<Card> + 'a>;

/// Boxes a transform so transforms of different types fit in one list.
#[must_use]
pub fn boxed<'a>(transform: impl FnMut(Vec<Card>) -> Vec<Card> + 'a) -> Transform<'a> {
    Box::new(transform)
}

/// Returns the 52-card baseline, suit-major and rank-minor.
#[must_use]
pub fn standard() -> Vec<Card> {
    let mut cards = Vec::with_capacity(DECK_SIZE);
    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            cards.push(Card::new(suit, rank));
        }
    }
    cards
}

/// Builds the baseline and applies each transform in order.
///
/// With no transforms this is exactly [`standard`].
pub fn new<'a, I>(transforms: I) -> Vec<Card>
where
    I: IntoIterator<Item = Transform<'a>>,
{
    let mut cards = standard();
    log::debug!("building deck from {} baseline cards", cards.len());
    for (step, mut transform) in transforms.into_iter().enumerate() {
        let before = cards.len();
        cards = transform(cards);
        log::trace!("transform {step}: {before} -> {} cards", cards.len());
    }
    cards
}

/// Builds a deck from a variadic list of transforms.
///
/// Each argument is passed through [`boxed`] and the list handed to [`new`].
///
/// ```
/// use deckrs::deck::{default_sort, jokers};
/// use deckrs::{Card, Rank, Suit, new_deck};
///
/// let cards = new_deck![jokers(1), default_sort];
/// assert_eq!(cards[0], Card::new(Suit::Spade, Rank::ACE));
/// assert_eq!(cards.len(), 53);
/// assert_eq!(new_deck![].len(), 52);
/// ```
#[macro_export]
macro_rules! new_deck {
    () => {
        $crate::deck::standard()
    };
    ($($transform:expr),+ $(,)?) => {
        $crate::deck::new([
            $($crate::deck::boxed($transform)),+
        ])
    };
}

/// Canonical less-than over two indices of `cards`, by [`abs_rank`].
#[must_use]
pub fn less(cards: &[Card], i: usize, j: usize) -> bool {
    abs_rank(&cards[i]) < abs_rank(&cards[j])
}

/// Sorts ascending by [`abs_rank`], keeping ties in input order.
#[must_use]
pub fn default_sort(mut cards: Vec<Card>) -> Vec<Card> {
    cards.sort_by_key(abs_rank);
    cards
}

/// Returns a transform that stable-sorts with a custom less-than.
///
/// `less` receives the input sequence and two indices into it, so it is
/// re-evaluated from scratch on every comparison. Use [`sort_with`] when the
/// ordering needs per-sequence setup. The input is
/// not reordered while sorting, so indices always refer to the original
/// positions. Cards that compare equal keep their relative order.
///
/// `less` must be a strict weak ordering. Otherwise the resulting order is
/// unspecified and the underlying sort may panic.
///
/// ```
/// use deckrs::deck::{self, boxed};
/// use deckrs::{Card, Rank, Suit};
///
/// // Rank-major instead of suit-major.
/// let by_rank = |cards: &[Card], i: usize, j: usize| cards[i].rank < cards[j].rank;
/// let cards = deck::new([boxed(deck::sort(by_rank))]);
/// assert_eq!(cards[1], Card::new(Suit::Diamond, Rank::ACE));
/// ```
#[must_use]
pub fn sort<F>(less: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    F: Fn(&[Card], usize, usize) -> bool,
{
    move |cards: Vec<Card>| stable_sort(&cards, |i, j| less(&cards, i, j))
}

/// Returns a transform that asks `factory` for a less-than once per input.
///
/// `factory` sees the whole sequence before sorting and returns a predicate
/// over index pairs. The predicate cannot borrow the sequence, so anything
/// it needs (sort keys, counts) is computed by the factory and moved into
/// it. Ordering rules are the same as for [`sort`].
///
/// ```
/// use deckrs::deck::{self, boxed};
/// use deckrs::{Card, Rank, Suit};
///
/// let by_rank = |cards: &[Card]| {
///     let ranks: Vec<Rank> = cards.iter().map(|card| card.rank).collect();
///     move |i: usize, j: usize| ranks[i] < ranks[j]
/// };
/// let cards = deck::new([boxed(deck::sort_with(by_rank))]);
/// assert_eq!(cards[3], Card::new(Suit::Heart, Rank::ACE));
/// ```
#[must_use]
pub fn sort_with<F, L>(mut factory: F) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    F: FnMut(&[Card]) -> L,
    L: Fn(usize, usize) -> bool,
{
    move |cards: Vec<Card>| {
        let less = factory(&cards);
        stable_sort(&cards, less)
    }
}

fn stable_sort(cards: &[Card], less: impl Fn(usize, usize) -> bool) -> Vec<Card> {
    let mut order: Vec<usize> = (0..cards.len()).collect();
    order.sort_by(|&i, &j| {
        if less(i, j) {
            Ordering::Less
        } else if less(j, i) {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    permute(cards, &order)
}

/// Returns a transform that shuffles with permutations drawn from `source`.
#[must_use]
pub fn shuffle(source: &ShuffleSource) -> impl FnMut(Vec<Card>) -> Vec<Card> + '_ {
    move |cards: Vec<Card>| permute(&cards, &source.permutation(cards.len()))
}

/// Returns a transform that shuffles with the caller's generator.
#[must_use]
pub fn shuffle_with<R>(rng: &mut R) -> impl FnMut(Vec<Card>) -> Vec<Card> + '_
where
    R: Rng + ?Sized,
{
    move |cards: Vec<Card>| {
        let mut order: Vec<usize> = (0..cards.len()).collect();
        order.shuffle(&mut *rng);
        permute(&cards, &order)
    }
}

/// Shuffles with the process-wide [`shared`](crate::shuffle::shared) source.
#[cfg(feature = "std")]
#[must_use]
#[expect(
    clippy::needless_pass_by_value,
    reason = "transforms take their input by value"
)]
pub fn shuffle_shared(cards: Vec<Card>) -> Vec<Card> {
    permute(&cards, &crate::shuffle::shared().permutation(cards.len()))
}

/// Returns a transform that appends `n` jokers with indices `0..n`.
#[must_use]
pub fn jokers(n: u8) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |mut cards: Vec<Card>| {
        cards.extend((0..n).map(Card::joker));
        cards
    }
}

/// Returns a transform that removes every card matching `predicate`.
///
/// The remaining cards keep their relative order.
#[must_use]
pub fn filter<P>(mut predicate: P) -> impl FnMut(Vec<Card>) -> Vec<Card>
where
    P: FnMut(&Card) -> bool,
{
    move |mut cards: Vec<Card>| {
        cards.retain(|card| !predicate(card));
        cards
    }
}

/// Returns a transform that concatenates `n` copies of its input.
///
/// `deck(1)` is the identity and `deck(0)` yields no cards.
#[must_use]
pub fn deck(n: usize) -> impl FnMut(Vec<Card>) -> Vec<Card> {
    move |cards: Vec<Card>| cards.repeat(n)
}

fn permute(cards: &[Card], order: &[usize]) -> Vec<Card> {
    order.iter().map(|&index| cards[index]).collect()
}
