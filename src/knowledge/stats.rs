//! Inference statistics for diagnostics and tuning.

use serde::{Deserialize, Serialize};

/// Statistics collected while the knowledge base runs inference.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InferenceStats {
    /// Revealed cells fed into the knowledge base.
    pub observations: u32,

    /// Fixed-point passes run, including the final pass that changed nothing.
    pub passes: u32,

    /// Sentences added by subset inference.
    pub sentences_derived: u32,

    /// Cells proven safe by inference (revealed cells excluded).
    pub safes_inferred: u32,

    /// Cells proven to be mines.
    pub mines_inferred: u32,
}

impl InferenceStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all statistics to zero.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Average passes needed per observation.
    #[must_use]
    pub fn passes_per_observation(&self) -> f64 {
        if self.observations == 0 {
            0.0
        } else {
            self.passes as f64 / self.observations as f64
        }
    }
}
