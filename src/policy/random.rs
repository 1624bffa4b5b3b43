//! Random policy for testing and baselines.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::trait_::Policy;
use crate::observation::Observation;
use crate::spaces::ActionSpace;
use crate::types::Direction;

/// Uniformly random direction selection.
///
/// Seeded so that evaluation runs are reproducible.
#[derive(Debug)]
pub struct RandomPolicy {
    rng: StdRng,
}

impl RandomPolicy {
    /// Creates a new random policy seeded with `seed`.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Policy for RandomPolicy {
    fn select_action(&mut self, _observation: &Observation) -> Direction {
        ActionSpace.sample(&mut self.rng)
    }

    fn name(&self) -> &str {
        "random"
    }
}
