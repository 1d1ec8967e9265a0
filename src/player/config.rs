//! Player configuration parameters.

use serde::{Deserialize, Serialize};

use crate::knowledge::MineRule;

/// Player configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    /// Random seed for choosing among safe moves and for guesses.
    /// Same seed on the same board produces the same game.
    pub seed: u64,

    /// Rule used to read mines off sentences.
    pub mine_rule: MineRule,
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            mine_rule: MineRule::Exact,
        }
    }
}

impl PlayerConfig {
    /// Create a new config with custom seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom mine rule.
    pub fn with_mine_rule(mut self, rule: MineRule) -> Self {
        self.mine_rule = rule;
        self
    }
}
