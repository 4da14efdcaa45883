use thiserror::Error;

use crate::core::EmptyDeckError;

use super::MAX_SLOTS;

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum GameBuilderError {
    #[error("Builder needs a slot count")]
    NeedNumSlots,

    #[error("Builder needs a strategy")]
    NeedStrategy,

    #[error("Slot count {actual} is outside the supported range 1..={}", MAX_SLOTS)]
    InvalidSlotCount { actual: usize },

    #[error("Preset deck has {available} cards, too few to deal {num_slots} home stacks")]
    DeckTooSmall { num_slots: usize, available: usize },
}

#[derive(Error, Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum GameError {
    /// Play reshuffles before any draw that could come up empty, so this
    /// error marks a broken internal invariant rather than a game outcome.
    #[error("Deck was empty at draw time: {0}")]
    EmptyDeck(#[from] EmptyDeckError),
}
