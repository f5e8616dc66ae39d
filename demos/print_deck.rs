//! Prints a shuffled two-deck shoe with jokers.
//!
//! Pass a seed as the first argument for a reproducible order:
//!
//! ```text
//! RUST_LOG=trace cargo run --example print_deck -- 42
//! ```

use std::env;

use deckrs::{Card, DeckOptions, Rank, ShuffleSource};

fn main() {
    env_logger::init();

    let source = match env::args().nth(1).map(|arg| arg.parse::<u64>()) {
        Some(Ok(seed)) => ShuffleSource::new(seed),
        Some(Err(err)) => {
            eprintln!("Invalid seed: {err}");
            return;
        }
        None => ShuffleSource::from_time(),
    };

    let cards = DeckOptions::new()
        .with_filter(|card: &Card| card.rank == Rank::TWO)
        .with_decks(2)
        .with_jokers(2)
        .with_shuffle(&source)
        .build();

    println!("Shoe of {} cards:", cards.len());
    for (position, card) in cards.iter().enumerate() {
        println!("{:>3}. {card}", position + 1);
    }
}
