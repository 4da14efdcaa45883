//! The game engine for ride the bus.
//!
//! A [`Game`] owns a deck, one home stack per slot, and the strategy that
//! makes the calls. Build one with [`GameBuilder`], then drive it to
//! completion with [`Game::play`]; playing consumes the game and returns
//! the terminal [`TrialResult`].

mod builder;
mod errors;

use rand::Rng;
use tracing::{debug, instrument, trace};

use crate::core::{Card, Deck};
use crate::strategy::{Guess, Strategy};

pub use builder::GameBuilder;
pub use errors::{GameBuilderError, GameError};

/// Most home stacks a single game can have. A reshuffle keeps every
/// stack's top card out of the deck, so the 52 card deck needs at least
/// one card left over to draw from.
pub const MAX_SLOTS: usize = 51;

/// Terminal counters of one completed game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialResult {
    /// Full passes over the home stacks, the winning pass included.
    pub rounds: u32,
    /// Times the deck was filled, the opening shuffle included.
    pub shuffles: u32,
}

/// One slot's pile of played cards. Only the top card is live; everything
/// under it is history until a reshuffle collapses the pile to its top.
#[derive(Debug, Clone)]
struct HomeStack {
    cards: Vec<Card>,
}

impl HomeStack {
    fn new(first: Card) -> Self {
        Self { cards: vec![first] }
    }

    /// The card to beat. Stacks are created with a card and only ever grow
    /// or collapse to their top, so this always exists.
    fn top(&self) -> Card {
        self.cards[self.cards.len() - 1]
    }

    fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Drop everything under the top card.
    fn keep_top(&mut self) {
        let top = self.top();
        self.cards.clear();
        self.cards.push(top);
    }
}

/// Whether a guess survives the drawn card. With the ace rule on, a drawn
/// Ace loses every call except same against another Ace.
fn guess_wins(guess: Guess, card_to_beat: Card, drawn: Card, ace_rule: bool) -> bool {
    if ace_rule && drawn.is_ace() {
        return guess == Guess::Same && card_to_beat.is_ace();
    }
    match guess {
        Guess::Higher => drawn.rank > card_to_beat.rank,
        Guess::Lower => drawn.rank < card_to_beat.rank,
        Guess::Same => drawn.rank == card_to_beat.rank,
    }
}

/// One ride of the bus: a deck, `num_slots` home stacks, and a strategy
/// making the calls until a full round passes every stack.
pub struct Game {
    deck: Deck,
    home_stacks: Vec<HomeStack>,
    strategy: Box<dyn Strategy>,
    ace_rule: bool,
    rounds: u32,
    shuffles: u32,
}

impl Game {
    /// Number of home stacks that must all be cleared in one round.
    pub fn num_slots(&self) -> usize {
        self.home_stacks.len()
    }

    /// Whether drawn Aces are automatic losses for ordered calls.
    pub fn ace_rule(&self) -> bool {
        self.ace_rule
    }

    /// Play rounds until one passes every home stack, then report how many
    /// rounds and shuffles it took.
    #[instrument(
        level = "debug",
        skip_all,
        fields(strategy = %self.strategy.name(), num_slots = self.home_stacks.len())
    )]
    pub fn play<R: Rng>(mut self, rng: &mut R) -> Result<TrialResult, GameError> {
        loop {
            self.rounds += 1;
            if self.play_round(rng)? {
                debug!(
                    rounds = self.rounds,
                    shuffles = self.shuffles,
                    "rode the bus"
                );
                return Ok(TrialResult {
                    rounds: self.rounds,
                    shuffles: self.shuffles,
                });
            }
        }
    }

    /// One pass over the home stacks, left to right. True means every slot
    /// survived; a single miss ends the pass early.
    fn play_round<R: Rng>(&mut self, rng: &mut R) -> Result<bool, GameError> {
        for slot in 0..self.home_stacks.len() {
            if self.deck.is_empty() {
                self.reshuffle(rng);
            }

            let card_to_beat = self.home_stacks[slot].top();
            let guess = self.strategy.decide(card_to_beat, &self.deck, rng);
            let drawn = self.deck.draw()?;
            let won = guess_wins(guess, card_to_beat, drawn, self.ace_rule);

            // Win or lose, the drawn card becomes the new top.
            self.home_stacks[slot].push(drawn);
            trace!(
                round = self.rounds,
                slot,
                %card_to_beat,
                %guess,
                %drawn,
                won,
                "turn resolved"
            );

            if !won {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Collapse every stack to its top card, refill the deck with all the
    /// other cards, and shuffle.
    fn reshuffle<R: Rng>(&mut self, rng: &mut R) {
        for stack in &mut self.home_stacks {
            stack.keep_top();
        }
        let tops: Vec<Card> = self.home_stacks.iter().map(HomeStack::top).collect();
        self.deck.reset(&tops);
        self.deck.shuffle(rng);
        self.shuffles += 1;
        debug!(
            shuffles = self.shuffles,
            cards = self.deck.len(),
            "deck exhausted, reshuffled"
        );
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::core::Suit;
    use crate::strategy::{BlindStrategy, StrategyKind, VecReplayStrategy};

    fn scripted_game(
        num_slots: usize,
        strategy: Box<dyn Strategy>,
        ace_rule: bool,
        draw_order: Vec<Card>,
    ) -> Game {
        GameBuilder::new()
            .num_slots(num_slots)
            .strategy(strategy)
            .ace_rule(ace_rule)
            .deck(Deck::from_draw_order(draw_order))
            .build()
            .unwrap()
    }

    #[test]
    fn test_guess_wins_ordered_calls() {
        let five = Card::new(5, Suit::Diamonds);
        let nine = Card::new(9, Suit::Hearts);
        let other_five = Card::new(5, Suit::Spades);

        assert!(guess_wins(Guess::Higher, five, nine, true));
        assert!(!guess_wins(Guess::Higher, nine, five, true));
        assert!(!guess_wins(Guess::Higher, five, other_five, true));

        assert!(guess_wins(Guess::Lower, nine, five, true));
        assert!(!guess_wins(Guess::Lower, five, nine, true));
        assert!(!guess_wins(Guess::Lower, five, other_five, true));

        assert!(guess_wins(Guess::Same, five, other_five, true));
        assert!(!guess_wins(Guess::Same, five, nine, true));
    }

    #[test]
    fn test_guess_wins_drawn_ace() {
        let ace = Card::new(1, Suit::Hearts);
        let other_ace = Card::new(1, Suit::Spades);
        let nine = Card::new(9, Suit::Clubs);

        // With the rule on an Ace sinks even a numerically correct call.
        assert!(!guess_wins(Guess::Lower, nine, ace, true));
        assert!(!guess_wins(Guess::Higher, nine, ace, true));
        assert!(!guess_wins(Guess::Same, nine, ace, true));
        assert!(guess_wins(Guess::Same, other_ace, ace, true));

        // With the rule off an Ace is just rank one.
        assert!(guess_wins(Guess::Lower, nine, ace, false));
        assert!(!guess_wins(Guess::Higher, nine, ace, false));
        assert!(guess_wins(Guess::Same, other_ace, ace, false));

        // A non-ace drawn against an Ace resolves by plain rank.
        assert!(guess_wins(Guess::Higher, other_ace, nine, true));
    }

    #[test]
    fn test_blind_wins_first_round() {
        let mut rng = StdRng::seed_from_u64(420);
        let game = scripted_game(
            1,
            Box::new(BlindStrategy),
            true,
            vec![
                Card::new(5, Suit::Diamonds),
                Card::new(9, Suit::Hearts),
                Card::new(3, Suit::Clubs),
                Card::new(5, Suit::Spades),
            ],
        );

        // Home card is the 5d, blind calls higher, the 9h lands it.
        let result = game.play(&mut rng).unwrap();
        assert_eq!(
            TrialResult {
                rounds: 1,
                shuffles: 1
            },
            result
        );
    }

    #[test]
    fn test_failed_round_restarts_from_new_top() {
        let mut rng = StdRng::seed_from_u64(420);
        let game = scripted_game(
            1,
            Box::new(BlindStrategy),
            true,
            vec![
                Card::new(5, Suit::Diamonds),
                Card::new(3, Suit::Clubs),
                Card::new(9, Suit::Hearts),
            ],
        );

        // Round one: higher against the 5d, the 3c misses and becomes the
        // new top. Round two: higher against the 3c, the 9h wins.
        let result = game.play(&mut rng).unwrap();
        assert_eq!(
            TrialResult {
                rounds: 2,
                shuffles: 1
            },
            result
        );
    }

    #[test]
    fn test_drawn_ace_sinks_a_winning_call() {
        // Blind calls lower against the 9s; the ace of hearts would win on
        // rank but the ace rule makes it a loss.
        let mut rng = StdRng::seed_from_u64(420);
        let game = scripted_game(
            1,
            Box::new(BlindStrategy),
            true,
            vec![
                Card::new(9, Suit::Spades),
                Card::new(1, Suit::Hearts),
                Card::new(7, Suit::Clubs),
            ],
        );
        let result = game.play(&mut rng).unwrap();
        assert_eq!(
            TrialResult {
                rounds: 2,
                shuffles: 1
            },
            result
        );
    }

    #[test]
    fn test_ace_rule_off_scores_the_ace_by_rank() {
        // Same script as above with the rule off: the ace is rank one,
        // lower than nine, and the game ends a round earlier.
        let mut rng = StdRng::seed_from_u64(420);
        let game = scripted_game(
            1,
            Box::new(BlindStrategy),
            false,
            vec![Card::new(9, Suit::Spades), Card::new(1, Suit::Hearts)],
        );
        let result = game.play(&mut rng).unwrap();
        assert_eq!(
            TrialResult {
                rounds: 1,
                shuffles: 1
            },
            result
        );
    }

    #[test]
    fn test_same_against_an_ace_dodges_the_rule() {
        let mut rng = StdRng::seed_from_u64(420);
        let game = scripted_game(
            1,
            Box::new(VecReplayStrategy::new(vec![Guess::Same])),
            true,
            vec![Card::new(1, Suit::Diamonds), Card::new(1, Suit::Hearts)],
        );
        let result = game.play(&mut rng).unwrap();
        assert_eq!(
            TrialResult {
                rounds: 1,
                shuffles: 1
            },
            result
        );
    }

    #[test]
    fn test_same_against_a_non_ace_still_loses_to_an_ace() {
        let mut rng = StdRng::seed_from_u64(420);
        let game = scripted_game(
            1,
            Box::new(VecReplayStrategy::new(vec![Guess::Same, Guess::Higher])),
            true,
            vec![
                Card::new(5, Suit::Diamonds),
                Card::new(1, Suit::Hearts),
                Card::new(9, Suit::Clubs),
            ],
        );
        let result = game.play(&mut rng).unwrap();
        assert_eq!(
            TrialResult {
                rounds: 2,
                shuffles: 1
            },
            result
        );
    }

    #[test]
    fn test_same_wins_on_matching_rank() {
        let mut rng = StdRng::seed_from_u64(420);
        let game = scripted_game(
            1,
            Box::new(VecReplayStrategy::new(vec![Guess::Same])),
            true,
            vec![Card::new(5, Suit::Diamonds), Card::new(5, Suit::Spades)],
        );
        let result = game.play(&mut rng).unwrap();
        assert_eq!(
            TrialResult {
                rounds: 1,
                shuffles: 1
            },
            result
        );
    }

    #[test_log::test]
    fn test_miss_abandons_the_rest_of_the_round() {
        let mut rng = StdRng::seed_from_u64(420);
        let game = scripted_game(
            2,
            Box::new(VecReplayStrategy::new(vec![Guess::Higher; 3])),
            true,
            vec![
                Card::new(3, Suit::Diamonds),
                Card::new(5, Suit::Hearts),
                Card::new(9, Suit::Clubs),
                Card::new(2, Suit::Spades),
                Card::new(13, Suit::Diamonds),
                Card::new(8, Suit::Hearts),
            ],
        );

        // Round one clears slot zero with the 9c but the 2s misses slot
        // one, so round two starts over at slot zero with the new tops (9c
        // and 2s). The script runs dry on the last turn and the replay
        // default of higher wins it.
        let result = game.play(&mut rng).unwrap();
        assert_eq!(
            TrialResult {
                rounds: 2,
                shuffles: 1
            },
            result
        );
    }

    #[test]
    fn test_exhausted_deck_reshuffles() {
        let mut rng = StdRng::seed_from_u64(420);
        let game = scripted_game(
            1,
            Box::new(BlindStrategy),
            true,
            vec![Card::new(13, Suit::Spades)],
        );

        // The one-card preset is spent on the home stack, so the very
        // first turn refills the deck from the other 51 cards.
        let result = game.play(&mut rng).unwrap();
        assert!(result.shuffles >= 2);
        assert!(result.rounds >= 1);
    }

    #[test]
    fn test_every_strategy_rides_to_the_end() {
        for kind in [
            StrategyKind::Random,
            StrategyKind::Blind,
            StrategyKind::Counter,
        ] {
            for seed in 0..10 {
                let mut rng = StdRng::seed_from_u64(seed);
                let game = GameBuilder::new()
                    .num_slots(3)
                    .strategy(kind.to_strategy(true))
                    .build_with_rng(&mut rng)
                    .unwrap();
                let result = game.play(&mut rng).unwrap();
                assert!(result.rounds >= 1, "{kind} seed {seed}");
                assert!(result.shuffles >= 1, "{kind} seed {seed}");
            }
        }
    }
}
