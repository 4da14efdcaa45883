use rand::SeedableRng;
use rand::rngs::SmallRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info, instrument};

use crate::game::{GameBuilder, TrialResult};

use super::config::TrialConfig;
use super::error::Result;

/// Plays a batch of independently seeded games and collects their terminal
/// counters, in trial order.
#[derive(Debug, Clone, Copy)]
pub struct TrialRunner {
    config: TrialConfig,
}

impl TrialRunner {
    pub fn new(config: TrialConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &TrialConfig {
        &self.config
    }

    /// Play every trial on the current thread.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            strategy = %self.config.strategy,
            num_slots = self.config.num_slots,
            iterations = self.config.iterations
        )
    )]
    pub fn run(&self) -> Result<Vec<TrialResult>> {
        self.config.validate()?;
        let master_seed = self.master_seed();
        let results = (0..self.config.iterations)
            .map(|trial| self.play_one(master_seed, trial))
            .collect::<Result<Vec<_>>>()?;
        debug!(trials = results.len(), "batch finished");
        Ok(results)
    }

    /// Play the trials across the rayon thread pool. Each trial is seeded
    /// on its own, so for a configured seed the results match
    /// [`TrialRunner::run`] in both content and order.
    #[cfg(feature = "parallel")]
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            strategy = %self.config.strategy,
            num_slots = self.config.num_slots,
            iterations = self.config.iterations
        )
    )]
    pub fn run_parallel(&self) -> Result<Vec<TrialResult>> {
        self.config.validate()?;
        let master_seed = self.master_seed();
        let results = (0..self.config.iterations)
            .into_par_iter()
            .map(|trial| self.play_one(master_seed, trial))
            .collect::<Result<Vec<_>>>()?;
        debug!(trials = results.len(), "batch finished");
        Ok(results)
    }

    /// The configured seed, or a fresh one. The generated seed is logged
    /// so an interesting unseeded run can still be replayed.
    fn master_seed(&self) -> u64 {
        match self.config.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                info!(seed, "no seed configured, generated one");
                seed
            }
        }
    }

    fn play_one(&self, master_seed: u64, trial: usize) -> Result<TrialResult> {
        let mut rng = SmallRng::seed_from_u64(master_seed.wrapping_add(trial as u64));
        let game = GameBuilder::new()
            .num_slots(self.config.num_slots)
            .strategy(self.config.strategy.to_strategy(self.config.ace_rule))
            .ace_rule(self.config.ace_rule)
            .build_with_rng(&mut rng)?;
        Ok(game.play(&mut rng)?)
    }
}
