//! Strategies are the automatic players in the bus simulations. They are
//! the logic that turns the visible state into a guess each turn.
//!
//! The strategy set is closed: [`RandomStrategy`] flips a coin,
//! [`BlindStrategy`] plays a threshold heuristic on the card to beat, and
//! [`CounterStrategy`] counts the remaining deck for the exact odds.
//! [`VecReplayStrategy`] replays a fixed script and exists for scripted
//! games and tests.

mod blind;
mod counter;
mod random;
mod replay;

use core::fmt;

use rand::RngCore;

use crate::core::{Card, Deck};

/// The three calls a player can make about the next card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Guess {
    /// The next card will rank above the card to beat
    Higher,
    /// The next card will rank below the card to beat
    Lower,
    /// The next card will rank equal to the card to beat
    Same,
}

impl fmt::Display for Guess {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Guess::Higher => "higher",
            Guess::Lower => "lower",
            Guess::Same => "same",
        };
        write!(f, "{s}")
    }
}

/// This is the trait to implement for a guessing policy. The game calls
/// `decide` once per turn and compares the drawn card against the returned
/// guess.
pub trait Strategy {
    /// Produce a guess for the next draw. `deck` holds the cards the draw
    /// will come from (the counting strategy reads it, the others ignore
    /// it). All randomness must come from `rng` so that a seeded trial
    /// replays exactly.
    fn decide(&mut self, card_to_beat: Card, deck: &Deck, rng: &mut dyn RngCore) -> Guess;

    /// Short name used in logs and reports.
    fn name(&self) -> &str;
}

/// Selects one of the built-in strategies, e.g. from a CLI flag or a config
/// file. [`StrategyKind::to_strategy`] mints a fresh boxed strategy, so a
/// trial runner can hand every game its own instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum StrategyKind {
    /// Coin-flip between higher and lower
    Random,
    /// Threshold heuristic on the card to beat alone
    #[default]
    Blind,
    /// Exact odds from the remaining deck composition
    Counter,
}

impl StrategyKind {
    /// Build a new strategy of this kind. `ace_rule` only matters to the
    /// counting strategy, which must know whether Aces can win ordinary
    /// comparisons.
    pub fn to_strategy(self, ace_rule: bool) -> Box<dyn Strategy> {
        match self {
            StrategyKind::Random => Box::new(RandomStrategy),
            StrategyKind::Blind => Box::new(BlindStrategy),
            StrategyKind::Counter => Box::new(CounterStrategy::new(ace_rule)),
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            StrategyKind::Random => "random",
            StrategyKind::Blind => "blind",
            StrategyKind::Counter => "counter",
        };
        write!(f, "{s}")
    }
}

pub use blind::BlindStrategy;
pub use counter::CounterStrategy;
pub use random::RandomStrategy;
pub use replay::VecReplayStrategy;
