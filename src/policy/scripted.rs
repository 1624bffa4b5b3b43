//! Fixed action sequences.

use super::trait_::Policy;
use crate::observation::Observation;
use crate::types::Direction;

/// Replays a fixed list of directions, restarting at every episode.
///
/// Once the script runs out, the last direction repeats. An empty script
/// always moves down.
#[derive(Debug, Clone)]
pub struct ScriptedPolicy {
    script: Vec<Direction>,
    cursor: usize,
}

impl ScriptedPolicy {
    /// Creates a policy replaying `script`.
    pub fn new(script: Vec<Direction>) -> Self {
        Self { script, cursor: 0 }
    }
}

impl Policy for ScriptedPolicy {
    fn select_action(&mut self, _observation: &Observation) -> Direction {
        let action = match self.script.get(self.cursor) {
            Some(d) => *d,
            None => self.script.last().copied().unwrap_or(Direction::Down),
        };
        self.cursor += 1;
        action
    }

    fn begin_episode(&mut self) {
        self.cursor = 0;
    }

    fn name(&self) -> &str {
        "scripted"
    }
}
