use rand::{Rng, RngCore};
use tracing::{instrument, trace};

use crate::core::{Card, Deck};

use super::{Guess, Strategy};

/// Guesses higher or lower with equal probability, ignoring everything it
/// is shown. The baseline every other strategy should beat.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    #[instrument(level = "trace", skip_all)]
    fn decide(&mut self, _card_to_beat: Card, _deck: &Deck, rng: &mut dyn RngCore) -> Guess {
        let guess = if rng.random_bool(0.5) {
            Guess::Higher
        } else {
            Guess::Lower
        };
        trace!(%guess, "RandomStrategy decision");
        guess
    }

    fn name(&self) -> &str {
        "random"
    }
}
