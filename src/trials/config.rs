use crate::game::MAX_SLOTS;
use crate::strategy::StrategyKind;

use super::error::{Result, TrialError};

/// Configuration for one batch of trials. Every field has a default, so a
/// config is usually written with struct update syntax:
///
/// ```
/// use ride_the_bus::trials::TrialConfig;
///
/// let config = TrialConfig {
///     num_slots: 4,
///     iterations: 500,
///     ..TrialConfig::default()
/// };
/// assert!(config.validate().is_ok());
/// assert!(config.ace_rule);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrialConfig {
    /// Home stacks each game must clear in a single round.
    pub num_slots: usize,
    /// Independent games to play.
    pub iterations: usize,
    /// The strategy every game plays with.
    pub strategy: StrategyKind,
    /// Whether drawn Aces are automatic losses for ordered calls.
    pub ace_rule: bool,
    /// Optional base seed for reproducibility. Trial `i` plays with
    /// `seed.wrapping_add(i)`; a random base is generated when unset.
    pub seed: Option<u64>,
}

impl TrialConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the batch configuration
    pub fn validate(&self) -> Result<()> {
        if self.num_slots == 0 || self.num_slots > MAX_SLOTS {
            return Err(TrialError::ValidationError(format!(
                "num_slots ({}) must be within 1..={}",
                self.num_slots, MAX_SLOTS
            )));
        }

        if self.iterations == 0 {
            return Err(TrialError::ValidationError(
                "iterations must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self {
            num_slots: 1,
            iterations: 10_000,
            strategy: StrategyKind::default(),
            ace_rule: true,
            seed: None,
        }
    }
}
