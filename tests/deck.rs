//! Deck pipeline integration tests.

use std::collections::HashSet;

use deckrs::deck::{self, boxed, default_sort, jokers, less, shuffle, sort};
use deckrs::shuffle::shared;
use deckrs::{
    Card, DECK_SIZE, DeckOptions, Rank, ShuffleSource, Suit, Transform, abs_rank, new_deck,
};
use proptest::prelude::*;

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

#[test]
fn card_rendering() {
    assert_eq!(card(Suit::Heart, Rank::ACE).to_string(), "Ace of Hearts");
    assert_eq!(card(Suit::Heart, Rank::TWO).to_string(), "Two of Hearts");
    assert_eq!(card(Suit::Heart, Rank::SEVEN).to_string(), "Seven of Hearts");
    assert_eq!(card(Suit::Heart, Rank::JACK).to_string(), "Jack of Hearts");
    assert_eq!(card(Suit::Joker, Rank(0)).to_string(), "Joker");

    for suit in Suit::STANDARD {
        for rank in Rank::ALL {
            let text = card(suit, rank).to_string();
            assert_eq!(text, format!("{rank} of {suit}s"));
            assert_eq!(text.parse::<Card>(), Ok(card(suit, rank)));
        }
    }
}

#[test]
fn new_yields_every_card_once() {
    let cards = deckrs::new(Vec::<Transform>::new());
    assert_eq!(cards.len(), DECK_SIZE);

    let unique: HashSet<Card> = cards.iter().copied().collect();
    assert_eq!(unique.len(), DECK_SIZE);
    assert!(cards.iter().all(|card| !card.is_joker() && card.rank.is_standard()));
}

#[test]
fn default_sort_starts_with_ace_of_spades() {
    let cards = new_deck![default_sort];
    assert_eq!(cards[0], card(Suit::Spade, Rank::ACE));
    assert!(cards.windows(2).all(|pair| pair[0].abs_rank() <= pair[1].abs_rank()));
}

#[test]
fn sort_with_canonical_less_matches_default_sort() {
    let source = ShuffleSource::new(9);
    let custom = new_deck![shuffle(&source), sort(less)];
    assert_eq!(custom[0], card(Suit::Spade, Rank::ACE));
    assert_eq!(custom, new_deck![default_sort]);
}

#[test]
fn jokers_are_distinct() {
    let cards = new_deck![jokers(3)];
    let found: Vec<Card> = cards
        .iter()
        .copied()
        .filter(|card| card.suit == Suit::Joker)
        .collect();
    assert_eq!(found, [Card::joker(0), Card::joker(1), Card::joker(2)]);
    assert_eq!(&cards[DECK_SIZE..], found.as_slice());
}

#[test]
fn filter_removes_matching_cards() {
    let is_low = |card: &Card| card.rank == Rank::TWO || card.rank == Rank::THREE;
    let cards = new_deck![deck::filter(is_low)];

    assert_eq!(cards.len(), DECK_SIZE - 8);
    assert!(!cards.iter().any(is_low));
    for kept in deck::standard().iter().filter(|&card| !is_low(card)) {
        assert!(cards.contains(kept));
    }
}

#[test]
fn deck_replicates_input() {
    assert_eq!(new_deck![deck::deck(3)].len(), 3 * DECK_SIZE);
    assert!(new_deck![deck::deck(0)].is_empty());
    assert_eq!(new_deck![deck::deck(1)], deck::standard());

    let cards = new_deck![deck::deck(2)];
    assert_eq!(cards[..DECK_SIZE], cards[DECK_SIZE..]);
}

#[test]
fn seeded_shuffle_is_reproducible() {
    let first = new_deck![shuffle(&ShuffleSource::new(0))];
    let second = new_deck![shuffle(&ShuffleSource::new(0))];
    assert_eq!(first, second);
    assert_ne!(first, deck::standard());

    let mut sorted = first;
    sorted.sort_by_key(abs_rank);
    assert_eq!(sorted, deck::standard());
}

#[test]
fn shuffle_positions_are_uniform() {
    const TRIALS: usize = 52_000;
    const EXPECTED: usize = TRIALS / DECK_SIZE;
    const TOLERANCE: usize = 150;

    let ace = card(Suit::Spade, Rank::ACE);
    let two = card(Suit::Spade, Rank::TWO);
    let source = ShuffleSource::new(1);
    let mut shuffler = shuffle(&source);

    let mut positions = [0usize; DECK_SIZE];
    let mut adjacent: usize = 0;
    for _ in 0..TRIALS {
        let cards = shuffler(deck::standard());
        let at = cards.iter().position(|&c| c == ace).expect("ace present");
        positions[at] += 1;
        if cards.get(at + 1) == Some(&two) {
            adjacent += 1;
        }
    }

    for (position, &count) in positions.iter().enumerate() {
        assert!(
            count.abs_diff(EXPECTED) <= TOLERANCE,
            "ace landed at {position} {count} times, expected about {EXPECTED}"
        );
    }
    // A two following the ace happens with probability 1/52.
    assert!(
        adjacent.abs_diff(EXPECTED) <= TOLERANCE,
        "two followed ace {adjacent} times, expected about {EXPECTED}"
    );
}

#[test]
fn shared_source_can_be_reseeded() {
    shared().reseed(0);
    let first = new_deck![deck::shuffle_shared];
    shared().reseed(0);
    let second = new_deck![deck::shuffle_shared];
    assert_eq!(first, second);
}

#[test]
fn options_builder_matches_macro() {
    let source_a = ShuffleSource::new(21);
    let source_b = ShuffleSource::new(21);

    let options = DeckOptions::new()
        .with_decks(2)
        .with_jokers(1)
        .with_shuffle(&source_a);
    assert_eq!(options.len(), 3);
    assert!(!options.is_empty());

    let built = options.build();
    let direct = deck::new([
        boxed(deck::deck(2)),
        boxed(jokers(1)),
        boxed(shuffle(&source_b)),
    ]);
    assert_eq!(built, direct);
    assert_eq!(built.len(), 2 * DECK_SIZE + 1);
}

#[test]
fn rank_major_sort() {
    let by_rank = |cards: &[Card], i: usize, j: usize| cards[i].rank < cards[j].rank;
    let cards = DeckOptions::new().with_sort(by_rank).build();
    let expected: Vec<Card> = Rank::ALL
        .into_iter()
        .flat_map(|rank| Suit::STANDARD.into_iter().map(move |suit| card(suit, rank)))
        .collect();
    assert_eq!(cards, expected);
}

proptest! {
    #[test]
    fn filter_by_rank_keeps_the_rest(excluded in 1u8..=13) {
        let cards = new_deck![deck::filter(move |card: &Card| card.rank == Rank(excluded))];
        prop_assert_eq!(cards.len(), DECK_SIZE - 4);
        prop_assert!(cards.iter().all(|card| card.rank != Rank(excluded)));
    }

    #[test]
    fn deck_length_scales(copies in 0usize..8, extra in 0u8..6) {
        let cards = DeckOptions::new().with_jokers(extra).with_decks(copies).build();
        prop_assert_eq!(cards.len(), copies * (DECK_SIZE + usize::from(extra)));
    }

    #[test]
    fn shuffle_is_a_permutation(seed in any::<u64>(), copies in 1usize..4) {
        let source = ShuffleSource::new(seed);
        let mut cards = DeckOptions::new().with_decks(copies).with_shuffle(&source).build();
        cards.sort_by_key(abs_rank);
        prop_assert_eq!(cards, new_deck![deck::deck(copies), default_sort]);
    }
}
