//! Simulation configuration parameters.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Invalid simulation configuration.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum ConfigError {
    #[display("win probability {probability} is outside [0, 1]")]
    InvalidProbability { probability: f64 },
    #[display("point limit must be at least 1")]
    ZeroPointLimit,
}

/// Simulation configuration parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Probability that player one wins any given point.
    pub player_one_win_probability: f64,

    /// Maximum points to play before giving up.
    /// Long deuce battles can otherwise run arbitrarily long.
    pub max_points: u32,

    /// Random seed for point winners.
    /// Same seed produces the same game.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            player_one_win_probability: 0.5,
            max_points: 64,
            seed: 42,
        }
    }
}

impl SimulationConfig {
    pub fn with_probability(mut self, p: f64) -> Self {
        self.player_one_win_probability = p;
        self
    }

    pub fn with_max_points(mut self, max_points: u32) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the parameters are usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let probability = self.player_one_win_probability;
        if !(0.0..=1.0).contains(&probability) {
            return Err(ConfigError::InvalidProbability { probability });
        }
        if self.max_points == 0 {
            return Err(ConfigError::ZeroPointLimit);
        }
        Ok(())
    }
}
