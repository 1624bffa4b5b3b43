//! The Deep Sea Treasure episode controller.
//!
//! Each step runs: act → move (validity-gated) → evaluate cell → transition phase.

use std::collections::BTreeMap;

use tracing::{debug, trace, warn};

use crate::config::EnvConfig;
use crate::error::EnvError;
use crate::map::SeaMap;
use crate::observation::{Observation, ObservationFormat};
use crate::render::Snapshot;
use crate::reward::{RewardEvaluator, RewardVector};
use crate::spaces::{ActionSpace, BoxSpace};
use crate::transition::Transition;
use crate::types::{Direction, Position};

/// Auxiliary step information. Empty by default.
pub type Info = BTreeMap<String, f64>;

/// Lifecycle phase of the current episode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EpisodePhase {
    /// Steps are accepted.
    Active,
    /// A treasure was reached; [`DeepSeaTreasure::reset`] is required.
    Terminal,
}

/// Result of a single environment step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Observation after the step.
    pub observation: Observation,
    /// Vector reward `(treasure, time)`.
    pub reward: RewardVector,
    /// Whether a treasure was reached.
    pub terminal: bool,
    /// Auxiliary information.
    pub info: Info,
}

/// The Deep Sea Treasure environment.
///
/// A submarine starts at the surface in the top-left corner and moves through
/// an 11×11 sea. Each step costs one unit of time; reaching a treasure ends
/// the episode and pays its value. Deeper treasures are worth more but take
/// longer to reach, which is the trade-off multi-objective agents must learn.
///
/// # Lifecycle
///
/// 1. Call [`DeepSeaTreasure::new`] with a configuration.
/// 2. Call [`DeepSeaTreasure::reset`] to start an episode.
/// 3. Repeatedly call [`DeepSeaTreasure::step`] until `terminal`.
/// 4. Reset again; stepping a terminated episode fails with
///    [`EnvError::EpisodeTerminated`].
///
/// The environment enforces no step limit. Truncation belongs to the caller.
#[derive(Debug, Clone)]
pub struct DeepSeaTreasure {
    map: SeaMap,
    format: ObservationFormat,
    position: Position,
    phase: EpisodePhase,
    steps: u64,
    episodes: u64,
    seed: Option<u64>,
}

impl DeepSeaTreasure {
    /// Creates a new environment, positioned at the origin and ready to step.
    ///
    /// # Errors
    ///
    /// Returns the configuration error of a custom map that is not a valid 11×11 sea map.
    pub fn new(config: EnvConfig) -> Result<Self, EnvError> {
        let map = config.map.build()?;
        debug!(
            observation = ?config.observation,
            max_treasure = map.max_treasure(),
            "deep sea treasure environment created"
        );
        Ok(Self {
            map,
            format: config.observation,
            position: Position::origin(),
            phase: EpisodePhase::Active,
            steps: 0,
            episodes: 0,
            seed: None,
        })
    }

    /// Creates an environment directly from a sea map.
    pub fn from_map(map: SeaMap, format: ObservationFormat) -> Self {
        Self {
            map,
            format,
            position: Position::origin(),
            phase: EpisodePhase::Active,
            steps: 0,
            episodes: 0,
            seed: None,
        }
    }

    /// Resets the environment for a new episode.
    ///
    /// Moves the submarine back to the origin, clears the step counter and
    /// returns the initial observation. The dynamics are deterministic; `seed`
    /// is only recorded for the caller's bookkeeping.
    pub fn reset(&mut self, seed: Option<u64>) -> Observation {
        self.seed = seed;
        self.position = Position::origin();
        self.phase = EpisodePhase::Active;
        self.steps = 0;
        self.episodes += 1;
        debug!(episode = self.episodes, seed = ?self.seed, "episode reset");
        self.observation()
    }

    /// Executes one environment step.
    ///
    /// # Errors
    ///
    /// [`EnvError::EpisodeTerminated`] if the episode already reached a treasure.
    pub fn step(&mut self, direction: Direction) -> Result<StepResult, EnvError> {
        if self.phase == EpisodePhase::Terminal {
            warn!(steps = self.steps, "step called on terminated episode");
            return Err(EnvError::EpisodeTerminated { steps: self.steps });
        }

        let moved = Transition::apply(&self.map, self.position, direction);
        self.position = moved.position;

        let outcome = RewardEvaluator::evaluate(&self.map, self.position);
        self.steps = self.steps.saturating_add(1);
        trace!(
            step = self.steps,
            %direction,
            row = self.position.row,
            col = self.position.col,
            blocked = moved.blocked,
            "step"
        );

        if outcome.terminal {
            self.phase = EpisodePhase::Terminal;
            debug!(
                episode = self.episodes,
                steps = self.steps,
                row = self.position.row,
                col = self.position.col,
                treasure = outcome.reward.treasure,
                "treasure reached"
            );
        }

        Ok(StepResult {
            observation: self.observation(),
            reward: outcome.reward,
            terminal: outcome.terminal,
            info: Info::new(),
        })
    }

    /// Executes one step from a discrete action index (`0..4`).
    ///
    /// # Errors
    ///
    /// [`EnvError::InvalidAction`] for an index outside `0..4`, otherwise as [`Self::step`].
    pub fn step_index(&mut self, action: usize) -> Result<StepResult, EnvError> {
        let direction = Direction::from_index(action)?;
        self.step(direction)
    }

    /// Releases external resources. The core holds none, so this only logs.
    pub fn close(&mut self) {
        debug!(episodes = self.episodes, "environment closed");
    }

    /// Current observation.
    pub fn observation(&self) -> Observation {
        Observation::encode(self.position, self.format)
    }

    /// Current submarine position.
    pub fn position(&self) -> Position {
        self.position
    }

    /// The active sea map.
    pub fn map(&self) -> &SeaMap {
        &self.map
    }

    /// Observation format in use.
    pub fn observation_format(&self) -> ObservationFormat {
        self.format
    }

    /// Current episode phase.
    pub fn phase(&self) -> EpisodePhase {
        self.phase
    }

    /// Steps taken in the current episode.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of resets performed.
    pub fn episodes(&self) -> u64 {
        self.episodes
    }

    /// Seed passed to the most recent [`Self::reset`], `None` if it had none.
    pub fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Read-only view for renderers.
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            map: &self.map,
            position: self.position,
        }
    }

    /// The four-direction action space.
    pub fn action_space(&self) -> ActionSpace {
        ActionSpace
    }

    /// Observation bounds for the configured format.
    pub fn observation_space(&self) -> BoxSpace {
        BoxSpace::observation(self.format)
    }

    /// Per-step reward bounds on the active map.
    pub fn reward_space(&self) -> BoxSpace {
        BoxSpace::reward(&self.map)
    }
}

impl Default for DeepSeaTreasure {
    fn default() -> Self {
        Self::from_map(SeaMap::default_map(), ObservationFormat::Grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MapChoice;
    use crate::types::Direction::*;

    fn make_env() -> DeepSeaTreasure {
        DeepSeaTreasure::new(EnvConfig::default()).expect("default config is valid")
    }

    #[test]
    fn reset_returns_origin() {
        let mut env = make_env();
        assert_eq!(env.reset(None), Observation::Grid([0, 0]));
        assert_eq!(env.steps(), 0);
        assert_eq!(env.phase(), EpisodePhase::Active);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut env = make_env();
        let a = env.reset(Some(3));
        let b = env.reset(Some(3));
        assert_eq!(a, b);
        assert_eq!(env.episodes(), 2);
        assert_eq!(env.seed(), Some(3));
    }

    #[test]
    fn reset_without_seed_clears_recorded_seed() {
        let mut env = make_env();
        env.reset(Some(3));
        env.reset(None);
        assert_eq!(env.seed(), None);
    }

    #[test]
    fn step_counter_does_not_overflow() {
        let mut env = make_env();
        env.reset(None);
        env.steps = u64::from(u32::MAX);
        let result = env.step(Up).expect("active episode");
        assert_eq!(result.reward.time, -1.0);
        assert_eq!(env.steps(), u64::from(u32::MAX) + 1);

        env.steps = u64::MAX;
        env.step(Up).expect("active episode");
        assert_eq!(env.steps(), u64::MAX);
    }

    #[test]
    fn from_map_starts_active_at_origin() {
        let env = DeepSeaTreasure::from_map(SeaMap::concave_map(), ObservationFormat::Float);
        assert_eq!(env.observation(), Observation::Float([0.0, 0.0]));
        assert_eq!(env.phase(), EpisodePhase::Active);
        assert_eq!(env.reward_space().high, [124.0, -1.0]);
    }

    #[test]
    fn step_returns_valid_result() {
        let mut env = make_env();
        env.reset(None);
        let result = env.step(Right).expect("active episode");
        assert_eq!(result.observation, Observation::Grid([0, 1]));
        assert_eq!(result.reward, RewardVector::new(0.0, -1.0));
        assert!(!result.terminal);
        assert!(result.info.is_empty());
        assert_eq!(env.steps(), 1);
    }

    #[test]
    fn blocked_move_still_costs_time() {
        let mut env = make_env();
        env.reset(None);
        let result = env.step(Up).expect("active episode");
        assert_eq!(result.observation, Observation::Grid([0, 0]));
        assert_eq!(result.reward.time, -1.0);
        assert_eq!(env.steps(), 1);
    }

    #[test]
    fn reaching_nearest_treasure_terminates() {
        let mut env = make_env();
        env.reset(None);
        let result = env.step(Down).expect("active episode");
        assert_eq!(result.reward, RewardVector::new(0.7, -1.0));
        assert!(result.terminal);
        assert_eq!(env.phase(), EpisodePhase::Terminal);
    }

    #[test]
    fn stepping_after_terminal_fails() {
        let mut env = make_env();
        env.reset(None);
        env.step(Down).expect("active episode");
        assert_eq!(
            env.step(Right),
            Err(EnvError::EpisodeTerminated { steps: 1 })
        );
        env.reset(None);
        assert!(env.step(Right).is_ok());
    }

    #[test]
    fn invalid_action_index_fails_fast() {
        let mut env = make_env();
        env.reset(None);
        assert_eq!(env.step_index(4), Err(EnvError::InvalidAction(4)));
        assert_eq!(env.steps(), 0);
        assert!(env.step_index(3).is_ok());
    }

    #[test]
    fn float_state_observations() {
        let mut env = DeepSeaTreasure::new(EnvConfig::default().with_float_state(true))
            .expect("valid config");
        assert_eq!(env.reset(None), Observation::Float([0.0, 0.0]));
        let result = env.step(Right).expect("active episode");
        match result.observation {
            Observation::Float([r, c]) => {
                assert_eq!(r, 0.0);
                assert!((c - 0.1).abs() < 1e-12);
            }
            other => panic!("expected float observation, got {other:?}"),
        }
    }

    #[test]
    fn bad_custom_map_is_rejected() {
        let cfg = EnvConfig::default().with_map(MapChoice::Custom(vec![vec![0.0; 11]; 3]));
        assert_eq!(
            DeepSeaTreasure::new(cfg).err(),
            Some(EnvError::MapShape { rows: 3, cols: 11 })
        );
    }

    #[test]
    fn new_environment_can_step_without_reset() {
        let mut env = make_env();
        assert!(env.step(Right).is_ok());
        assert_eq!(env.episodes(), 0);
    }

    #[test]
    fn snapshot_tracks_position() {
        let mut env = make_env();
        env.reset(None);
        env.step(Right).expect("active episode");
        let snap = env.snapshot();
        assert_eq!(snap.position, Position::new(0, 1));
        assert_eq!(snap.map, env.map());
    }
}
