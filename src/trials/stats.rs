use crate::game::TrialResult;
use crate::strategy::StrategyKind;

use super::config::TrialConfig;

/// Mean, spread, and win odds over one batch of trials.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SummaryStats {
    /// Home stacks per game in this batch.
    pub num_slots: usize,
    /// Games actually played.
    pub iterations: usize,
    /// The strategy the batch played with.
    pub strategy: StrategyKind,
    /// Whether the ace rule was on.
    pub ace_rule: bool,
    /// Mean rounds to win.
    pub mean_rounds: f64,
    /// Sample standard deviation of rounds, zero below two samples.
    pub stddev_rounds: f64,
    pub min_rounds: u32,
    pub max_rounds: u32,
    /// Mean deck fills per game, the opening shuffle included.
    pub mean_shuffles: f64,
    /// `win_odds[k]` is the fraction of games won within `k + 1` rounds.
    pub win_odds: Vec<f64>,
}

/// Reduce a batch of results to its summary. `odds_limit` sets how many
/// round thresholds the win odds cover, from one round up.
pub fn summarize(config: &TrialConfig, results: &[TrialResult], odds_limit: u32) -> SummaryStats {
    let n = results.len();
    let mut stats = SummaryStats {
        num_slots: config.num_slots,
        iterations: n,
        strategy: config.strategy,
        ace_rule: config.ace_rule,
        mean_rounds: 0.0,
        stddev_rounds: 0.0,
        min_rounds: 0,
        max_rounds: 0,
        mean_shuffles: 0.0,
        win_odds: vec![0.0; odds_limit as usize],
    };
    if n == 0 {
        return stats;
    }

    let mut min_rounds = u32::MAX;
    let mut max_rounds = 0;
    let mut round_sum = 0.0;
    let mut shuffle_sum = 0.0;
    let mut won_by = vec![0usize; odds_limit as usize];
    for result in results {
        min_rounds = min_rounds.min(result.rounds);
        max_rounds = max_rounds.max(result.rounds);
        round_sum += f64::from(result.rounds);
        shuffle_sum += f64::from(result.shuffles);
        if result.rounds <= odds_limit {
            won_by[(result.rounds - 1) as usize] += 1;
        }
    }

    stats.min_rounds = min_rounds;
    stats.max_rounds = max_rounds;
    stats.mean_rounds = round_sum / n as f64;
    stats.mean_shuffles = shuffle_sum / n as f64;
    if n > 1 {
        let squared_error = results
            .iter()
            .map(|r| {
                let delta = f64::from(r.rounds) - stats.mean_rounds;
                delta * delta
            })
            .sum::<f64>();
        stats.stddev_rounds = (squared_error / (n - 1) as f64).sqrt();
    }

    let mut won = 0;
    for (threshold, count) in won_by.into_iter().enumerate() {
        won += count;
        stats.win_odds[threshold] = won as f64 / n as f64;
    }

    stats
}
