//! A Monte Carlo simulator for ride the bus, the card guessing game.
//!
//! A game deals one home card per slot, and the player calls each draw
//! higher, lower, or same than the card on top of the current stack.
//! Clearing every slot in a single round wins; any miss ends the round
//! and the next one starts over on the new stack tops. The crate plays
//! whole batches of games with pluggable guessing strategies and reports
//! how long the ride took.
//!
//! ## Examples
//!
//! ```
//! use rand::{SeedableRng, rngs::StdRng};
//! use ride_the_bus::game::GameBuilder;
//! use ride_the_bus::strategy::StrategyKind;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let game = GameBuilder::new()
//!     .num_slots(3)
//!     .strategy(StrategyKind::Blind.to_strategy(true))
//!     .build_with_rng(&mut rng)
//!     .unwrap();
//!
//! let result = game.play(&mut rng).unwrap();
//! assert!(result.rounds >= 1);
//! assert!(result.shuffles >= 1);
//! ```

pub mod core;
pub mod game;
pub mod strategy;
pub mod trials;
