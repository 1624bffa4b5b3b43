//! Space descriptors for actions, observations and rewards.
//!
//! These let a consumer size its networks or tables without poking at the
//! environment internals.

use rand::Rng;

use crate::map::{SeaMap, MAP_SIZE};
use crate::observation::{ObservationFormat, FLOAT_SCALE};
use crate::reward::TIME_PENALTY;
use crate::types::Direction;

/// The discrete action space: four directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionSpace;

impl ActionSpace {
    /// Number of actions.
    pub fn n(&self) -> usize {
        Direction::COUNT
    }

    /// Returns true if `index` names a legal action.
    pub fn contains(&self, index: usize) -> bool {
        index < Direction::COUNT
    }

    /// Samples a direction uniformly.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Direction {
        Direction::all()[rng.gen_range(0..Direction::COUNT)]
    }
}

/// A two-dimensional box `[low, high]` per component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxSpace {
    pub low: [f64; 2],
    pub high: [f64; 2],
}

impl BoxSpace {
    /// Creates a new box.
    pub fn new(low: [f64; 2], high: [f64; 2]) -> Self {
        Self { low, high }
    }

    /// Observation bounds for `format`.
    pub fn observation(format: ObservationFormat) -> Self {
        let max = (MAP_SIZE - 1) as f64;
        match format {
            ObservationFormat::Grid => Self::new([0.0, 0.0], [max, max]),
            ObservationFormat::Float => {
                Self::new([0.0, 0.0], [max * FLOAT_SCALE, max * FLOAT_SCALE])
            }
        }
    }

    /// Per-step reward bounds on `map`: `[0, -1]` to `[max_treasure, -1]`.
    pub fn reward(map: &SeaMap) -> Self {
        Self::new([0.0, TIME_PENALTY], [map.max_treasure(), TIME_PENALTY])
    }

    /// Returns true if `value` lies inside the box (bounds inclusive).
    pub fn contains(&self, value: [f64; 2]) -> bool {
        (0..2).all(|i| value[i] >= self.low[i] && value[i] <= self.high[i])
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn action_space_has_four_actions() {
        let space = ActionSpace;
        assert_eq!(space.n(), 4);
        assert!(space.contains(3));
        assert!(!space.contains(4));
    }

    #[test]
    fn sampling_covers_all_directions() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [false; 4];
        for _ in 0..200 {
            seen[ActionSpace.sample(&mut rng).index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn observation_bounds_per_format() {
        let grid = BoxSpace::observation(ObservationFormat::Grid);
        assert!(grid.contains([10.0, 10.0]));
        assert!(!grid.contains([11.0, 0.0]));

        let float = BoxSpace::observation(ObservationFormat::Float);
        assert!(float.contains([1.0, 0.0]));
        assert!(!float.contains([1.1, 0.0]));
    }

    #[test]
    fn reward_bounds_follow_the_map() {
        let convex = BoxSpace::reward(&SeaMap::default_map());
        assert_eq!(convex.high, [23.7, -1.0]);
        assert!(convex.contains([8.2, -1.0]));

        let concave = BoxSpace::reward(&SeaMap::concave_map());
        assert_eq!(concave.high, [124.0, -1.0]);
    }
}
