//! Core card and deck types that every other part of the crate builds on.

mod card;
mod deck;

pub use card::{ACE_RANK, Card, KING_RANK, Suit};
pub use deck::{DECK_SIZE, Deck, EmptyDeckError};
