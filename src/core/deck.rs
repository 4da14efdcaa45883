use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use super::card::{ACE_RANK, Card, KING_RANK, Suit};

/// Number of cards in a full deck.
pub const DECK_SIZE: usize = 52;

/// Error returned when drawing from a deck with no cards left.
///
/// Game play reshuffles before every draw that could hit an empty deck, so
/// seeing this out of [`Game::play`](crate::game::Game::play) means an
/// internal invariant broke.
#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[error("Cannot draw from an empty deck")]
pub struct EmptyDeckError;

/// A deck of cards treated as a stack: [`Deck::draw`] removes and returns
/// the last card.
///
/// A deck holds each (rank, suit) combination at most once. It starts full
/// in canonical order (suit-major, ranks Ace through King within each suit)
/// and is randomized explicitly with [`Deck::shuffle`]; nothing here pulls
/// randomness on its own.
///
/// # Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use ride_the_bus::core::Deck;
///
/// let mut rng = StdRng::seed_from_u64(420);
/// let mut deck = Deck::shuffled(&mut rng);
/// assert_eq!(52, deck.len());
///
/// let card = deck.draw().unwrap();
/// assert_eq!(51, deck.len());
/// assert!(!deck.contains(card));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// A full deck already permuted with the given rng.
    pub fn shuffled<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut deck = Deck::default();
        deck.shuffle(rng);
        deck
    }

    /// A deck that will yield `cards` in exactly the given order from
    /// [`Deck::draw`]. Useful for scripted games.
    pub fn from_draw_order(mut cards: Vec<Card>) -> Self {
        cards.reverse();
        Deck { cards }
    }

    /// Rebuild the full 52 card set minus `exclude`, in canonical order.
    /// The caller shuffles afterwards if random order is wanted.
    pub fn reset(&mut self, exclude: &[Card]) {
        self.cards.clear();
        for suit in Suit::ALL {
            for rank in ACE_RANK..=KING_RANK {
                let card = Card::new(rank, suit);
                if !exclude.contains(&card) {
                    self.cards.push(card);
                }
            }
        }
    }

    /// Uniformly permute the remaining cards.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Remove and return the top card.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        self.cards.pop().ok_or(EmptyDeckError)
    }

    /// How many cards are left.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when every card has been drawn.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The remaining cards, bottom first. The counting strategy reads this
    /// to weigh its guesses.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Whether the card is still in the deck.
    pub fn contains(&self, card: Card) -> bool {
        self.cards.contains(&card)
    }
}

impl Default for Deck {
    /// The full deck in canonical order, unshuffled.
    fn default() -> Self {
        let mut deck = Deck {
            cards: Vec::with_capacity(DECK_SIZE),
        };
        deck.reset(&[]);
        deck
    }
}

impl From<Vec<Card>> for Deck {
    /// Use `cards` as the deck's stack: the last element is drawn first.
    /// See [`Deck::from_draw_order`] for the draw-order variant.
    fn from(cards: Vec<Card>) -> Self {
        Deck { cards }
    }
}
