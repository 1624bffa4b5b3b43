//! Policy trait for the Deep Sea Treasure environment.

use crate::observation::Observation;
use crate::types::Direction;

/// A policy that selects a direction from the current observation.
pub trait Policy: Send {
    /// Selects the next action.
    ///
    /// # Arguments
    ///
    /// * `observation` - Observation returned by the last `reset` or `step`
    fn select_action(&mut self, observation: &Observation) -> Direction;

    /// Called at the start of each episode. Stateless policies ignore it.
    fn begin_episode(&mut self) {}

    /// Returns a human-readable name for this policy.
    fn name(&self) -> &str;
}
