use rand::{Rng, RngCore};
use tracing::{instrument, trace};

use crate::core::{Card, Deck};

use super::{Guess, Strategy};

/// Counts the cards left in the deck that rank above, below, and equal to
/// the card to beat, then calls whichever bucket is largest. Ties at the
/// top are broken uniformly at random.
///
/// When `ace_rule` is on, Aces are an automatic loss for higher/lower
/// calls, so they back neither bucket; they still count toward `same`
/// (calling same on an Ace is the one way to survive one).
#[derive(Debug, Clone, Copy)]
pub struct CounterStrategy {
    ace_rule: bool,
}

impl CounterStrategy {
    pub fn new(ace_rule: bool) -> Self {
        Self { ace_rule }
    }
}

impl Default for CounterStrategy {
    fn default() -> Self {
        Self::new(true)
    }
}

impl Strategy for CounterStrategy {
    #[instrument(level = "trace", skip_all, fields(card_to_beat = %card_to_beat))]
    fn decide(&mut self, card_to_beat: Card, deck: &Deck, rng: &mut dyn RngCore) -> Guess {
        let mut higher = 0_usize;
        let mut lower = 0_usize;
        let mut same = 0_usize;

        for card in deck.cards() {
            if card.rank == card_to_beat.rank {
                same += 1;
            } else if self.ace_rule && card.is_ace() {
                // Worthless for an ordered call; counts toward nothing.
            } else if card.rank > card_to_beat.rank {
                higher += 1;
            } else {
                lower += 1;
            }
        }

        let best = higher.max(lower).max(same);
        let candidates: Vec<Guess> = [
            (Guess::Higher, higher),
            (Guess::Lower, lower),
            (Guess::Same, same),
        ]
        .iter()
        .filter(|(_, count)| *count == best)
        .map(|(guess, _)| *guess)
        .collect();

        let guess = candidates[rng.random_range(0..candidates.len())];
        trace!(higher, lower, same, %guess, "CounterStrategy decision");
        guess
    }

    fn name(&self) -> &str {
        "counter"
    }
}
