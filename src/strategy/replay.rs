use rand::RngCore;
use tracing::{debug, instrument, trace};

use crate::core::{Card, Deck};

use super::{Guess, Strategy};

/// A strategy that replays a fixed sequence of guesses from a vector,
/// falling back to a default once the script runs out. Useful for scripted
/// games and deterministic tests.
#[derive(Debug, Clone)]
pub struct VecReplayStrategy {
    guesses: Vec<Guess>,
    idx: usize,
    default: Guess,
}

impl VecReplayStrategy {
    pub fn new(guesses: Vec<Guess>) -> Self {
        Self::new_with_default(guesses, Guess::Higher)
    }

    pub fn new_with_default(guesses: Vec<Guess>, default: Guess) -> Self {
        Self {
            guesses,
            idx: 0,
            default,
        }
    }
}

impl Strategy for VecReplayStrategy {
    #[instrument(level = "trace", skip_all)]
    fn decide(&mut self, _card_to_beat: Card, _deck: &Deck, _rng: &mut dyn RngCore) -> Guess {
        let idx = self.idx;
        self.idx += 1;
        let guess = self.guesses.get(idx).copied().unwrap_or_else(|| {
            debug!(
                idx,
                guesses_len = self.guesses.len(),
                %self.default,
                "VecReplayStrategy exhausted its script, using default"
            );
            self.default
        });
        trace!(%guess, "VecReplayStrategy decision");
        guess
    }

    fn name(&self) -> &str {
        "replay"
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use crate::core::Suit;

    use super::*;

    #[test]
    fn test_replays_in_order_then_defaults() {
        let mut rng = StdRng::seed_from_u64(420);
        let deck = Deck::default();
        let card = Card::new(4, Suit::Clubs);
        let mut strategy =
            VecReplayStrategy::new_with_default(vec![Guess::Same, Guess::Lower], Guess::Higher);

        assert_eq!(Guess::Same, strategy.decide(card, &deck, &mut rng));
        assert_eq!(Guess::Lower, strategy.decide(card, &deck, &mut rng));
        assert_eq!(Guess::Higher, strategy.decide(card, &deck, &mut rng));
        assert_eq!(Guess::Higher, strategy.decide(card, &deck, &mut rng));
    }

    #[test]
    fn test_name() {
        assert_eq!("replay", VecReplayStrategy::new(vec![]).name());
    }
}
