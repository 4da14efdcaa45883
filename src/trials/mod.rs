//! Batches of independent games: the trial configuration, the runner that
//! plays them, and the statistics reported over the collected results.
//!
//! Trial `i` plays with its own rng seeded from `seed + i`, so batches are
//! reproducible and, with the `parallel` feature, safe to spread across a
//! thread pool without changing the results.
//!
//! ## Examples
//!
//! ```
//! use ride_the_bus::strategy::StrategyKind;
//! use ride_the_bus::trials::{TrialConfig, TrialRunner, summarize};
//!
//! let config = TrialConfig {
//!     num_slots: 2,
//!     iterations: 200,
//!     strategy: StrategyKind::Counter,
//!     seed: Some(42),
//!     ..TrialConfig::default()
//! };
//! let results = TrialRunner::new(config).run().unwrap();
//! let stats = summarize(&config, &results, 10);
//!
//! assert_eq!(200, stats.iterations);
//! assert!(stats.mean_rounds >= 1.0);
//! ```

mod config;
mod error;
mod report;
mod runner;
mod stats;

pub use config::TrialConfig;
pub use error::{Result, TrialError};
pub use runner::TrialRunner;
pub use stats::{SummaryStats, summarize};
