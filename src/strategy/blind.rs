use rand::{Rng, RngCore};
use tracing::{instrument, trace};

use crate::core::{Card, Deck};

use super::{Guess, Strategy};

/// Plays the common-sense table heuristic using only the card to beat:
/// call lower on eight and up, higher on six and below, and flip a coin on
/// a seven. Never calls same.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlindStrategy;

impl Strategy for BlindStrategy {
    #[instrument(level = "trace", skip_all, fields(card_to_beat = %card_to_beat))]
    fn decide(&mut self, card_to_beat: Card, _deck: &Deck, rng: &mut dyn RngCore) -> Guess {
        let guess = if card_to_beat.rank >= 8 {
            Guess::Lower
        } else if card_to_beat.rank <= 6 {
            Guess::Higher
        } else if rng.random_bool(0.5) {
            Guess::Higher
        } else {
            Guess::Lower
        };
        trace!(%guess, "BlindStrategy decision");
        guess
    }

    fn name(&self) -> &str {
        "blind"
    }
}
