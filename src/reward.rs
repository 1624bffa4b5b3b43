//! Vector reward and termination for the Deep Sea Treasure environment.
//!
//! The reward has two independent objectives: the treasure collected and a
//! constant time penalty. The environment never scalarises them.

use std::fmt;
use std::ops::{Add, AddAssign};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::map::{Cell, SeaMap};
use crate::types::Position;

/// Time objective paid on every step.
pub const TIME_PENALTY: f64 = -1.0;

/// Two-objective reward `(treasure, time)`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RewardVector {
    pub treasure: f64,
    pub time: f64,
}

impl RewardVector {
    /// Number of reward objectives.
    pub const DIM: usize = 2;

    /// Creates a new reward vector.
    pub fn new(treasure: f64, time: f64) -> Self {
        Self { treasure, time }
    }

    /// Returns the reward as `[treasure, time]`.
    pub fn as_array(&self) -> [f64; 2] {
        [self.treasure, self.time]
    }

    /// Linear scalarisation `w · r`, for weight-based consumers.
    pub fn dot(&self, weights: [f64; 2]) -> f64 {
        weights[0] * self.treasure + weights[1] * self.time
    }
}

impl Add for RewardVector {
    type Output = RewardVector;

    fn add(self, rhs: RewardVector) -> RewardVector {
        RewardVector::new(self.treasure + rhs.treasure, self.time + rhs.time)
    }
}

impl AddAssign for RewardVector {
    fn add_assign(&mut self, rhs: RewardVector) {
        self.treasure += rhs.treasure;
        self.time += rhs.time;
    }
}

impl fmt::Display for RewardVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.treasure, self.time)
    }
}

/// Reward and terminal flag for the cell the submarine landed on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Outcome {
    pub reward: RewardVector,
    pub terminal: bool,
}

/// Derives rewards from the sea map.
pub struct RewardEvaluator;

impl RewardEvaluator {
    /// Evaluates the cell at `position`.
    ///
    /// # Components
    ///
    /// 1. **Treasure**: the cell value when it is a treasure, otherwise `0`.
    ///    The blocked sentinel is never reported as a reward.
    /// 2. **Time**: always [`TIME_PENALTY`].
    ///
    /// Landing on a treasure ends the episode. Positions outside the grid are
    /// treated like open water; the transition engine never produces them.
    pub fn evaluate(map: &SeaMap, position: Position) -> Outcome {
        match map.cell(position) {
            Some(Cell::Treasure(value)) => Outcome {
                reward: RewardVector::new(value, TIME_PENALTY),
                terminal: true,
            },
            Some(Cell::Water) | Some(Cell::Blocked) | None => Outcome {
                reward: RewardVector::new(0.0, TIME_PENALTY),
                terminal: false,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn treasure_is_terminal_with_its_value() {
        let map = SeaMap::default_map();
        let out = RewardEvaluator::evaluate(&map, Position::new(2, 1));
        assert_eq!(out.reward, RewardVector::new(8.2, -1.0));
        assert!(out.terminal);
    }

    #[test]
    fn open_water_pays_only_time() {
        let map = SeaMap::default_map();
        let out = RewardEvaluator::evaluate(&map, Position::new(0, 5));
        assert_eq!(out.reward, RewardVector::new(0.0, -1.0));
        assert!(!out.terminal);
    }

    #[test]
    fn blocked_sentinel_is_never_a_reward() {
        let map = SeaMap::default_map();
        let out = RewardEvaluator::evaluate(&map, Position::new(2, 0));
        assert_eq!(out.reward.treasure, 0.0);
        assert!(!out.terminal);
    }

    #[test]
    fn every_treasure_pays_exactly_its_value() {
        for map in [SeaMap::default_map(), SeaMap::concave_map()] {
            for (p, v) in map.treasures() {
                let out = RewardEvaluator::evaluate(&map, p);
                assert_eq!(out.reward.treasure, v);
                assert_eq!(out.reward.time, TIME_PENALTY);
                assert!(out.terminal);
            }
        }
    }

    #[test]
    fn reward_vector_arithmetic() {
        let mut total = RewardVector::default();
        total += RewardVector::new(0.0, -1.0);
        total += RewardVector::new(8.2, -1.0);
        assert_eq!(total, RewardVector::new(8.2, -2.0));
        assert_eq!(total.as_array(), [8.2, -2.0]);
        assert!((total.dot([0.5, 0.5]) - 3.1).abs() < 1e-12);
    }
}
