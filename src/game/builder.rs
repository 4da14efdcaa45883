use rand::Rng;

use crate::core::Deck;
use crate::strategy::Strategy;

use super::errors::GameBuilderError;
use super::{Game, HomeStack, MAX_SLOTS};

/// # GameBuilder
///
/// Builder for a single game of ride the bus. A slot count and a strategy
/// are required; the ace rule and the deck have sensible defaults.
///
/// ## Examples
///
/// ```
/// use rand::{SeedableRng, rngs::StdRng};
/// use ride_the_bus::game::GameBuilder;
/// use ride_the_bus::strategy::StrategyKind;
///
/// let mut rng = StdRng::seed_from_u64(420);
/// let game = GameBuilder::new()
///     .num_slots(4)
///     .strategy(StrategyKind::Counter.to_strategy(true))
///     .build_with_rng(&mut rng)
///     .unwrap();
///
/// let result = game.play(&mut rng).unwrap();
/// assert!(result.rounds >= 1);
/// ```
pub struct GameBuilder {
    num_slots: Option<usize>,
    strategy: Option<Box<dyn Strategy>>,
    ace_rule: bool,
    deck: Option<Deck>,
}

impl GameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how many home stacks must all be cleared in one round to win.
    /// Must be in `1..=MAX_SLOTS`.
    pub fn num_slots(mut self, num_slots: usize) -> Self {
        self.num_slots = Some(num_slots);
        self
    }

    /// Set the strategy that makes the calls.
    pub fn strategy(mut self, strategy: Box<dyn Strategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    /// Turn the ace rule off, or back on. Defaults to on.
    pub fn ace_rule(mut self, ace_rule: bool) -> Self {
        self.ace_rule = ace_rule;
        self
    }

    /// Use a preset deck instead of a freshly shuffled one. Mostly useful
    /// for scripting exact games; see [`Deck::from_draw_order`].
    pub fn deck(mut self, deck: Deck) -> Self {
        self.deck = Some(deck);
        self
    }

    /// Validate the configuration and deal the opening home cards using
    /// the thread rng.
    pub fn build(self) -> Result<Game, GameBuilderError> {
        let mut rng = rand::rng();
        self.build_with_rng(&mut rng)
    }

    /// Validate the configuration and deal the opening home cards with the
    /// given rng. Pass the same rng to [`Game::play`] for a reproducible
    /// game.
    pub fn build_with_rng<R: Rng>(self, rng: &mut R) -> Result<Game, GameBuilderError> {
        let num_slots = self.num_slots.ok_or(GameBuilderError::NeedNumSlots)?;
        if num_slots == 0 || num_slots > MAX_SLOTS {
            return Err(GameBuilderError::InvalidSlotCount { actual: num_slots });
        }
        let strategy = self.strategy.ok_or(GameBuilderError::NeedStrategy)?;

        let mut deck = match self.deck {
            Some(deck) => deck,
            None => Deck::shuffled(rng),
        };
        let available = deck.len();
        if available < num_slots {
            return Err(GameBuilderError::DeckTooSmall {
                num_slots,
                available,
            });
        }

        let home_stacks = (0..num_slots)
            .map(|_| deck.draw().map(HomeStack::new))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|_| GameBuilderError::DeckTooSmall {
                num_slots,
                available,
            })?;

        Ok(Game {
            deck,
            home_stacks,
            strategy,
            ace_rule: self.ace_rule,
            rounds: 0,
            shuffles: 1,
        })
    }
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self {
            num_slots: None,
            strategy: None,
            ace_rule: true,
            deck: None,
        }
    }
}
