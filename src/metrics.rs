//! Policy evaluation over repeated episodes.
//!
//! The environment never truncates episodes, so the evaluation loop applies
//! its own step cap, as a training loop would.

use std::fmt;

use tracing::debug;

use crate::environment::DeepSeaTreasure;
use crate::error::EnvError;
use crate::policy::Policy;
use crate::reward::RewardVector;
use crate::types::Position;

/// Step cap used by [`EvaluationMetrics::evaluate_default`].
pub const DEFAULT_MAX_STEPS: u64 = 500;

/// Outcome of one episode.
#[derive(Debug, Clone, PartialEq)]
pub struct EpisodeSummary {
    /// Undiscounted sum of vector rewards.
    pub total_reward: RewardVector,
    /// Steps taken.
    pub steps: u64,
    /// Treasure cell reached, or `None` if the episode was truncated.
    pub treasure: Option<Position>,
}

impl EpisodeSummary {
    /// Whether the episode was cut off by the step cap.
    pub fn truncated(&self) -> bool {
        self.treasure.is_none()
    }
}

/// Runs a single episode of `policy` on `env`, truncated after `max_steps`.
///
/// # Errors
///
/// Propagates environment errors; with a fresh reset none are expected.
pub fn run_episode(
    env: &mut DeepSeaTreasure,
    policy: &mut dyn Policy,
    max_steps: u64,
) -> Result<EpisodeSummary, EnvError> {
    let mut obs = env.reset(None);
    policy.begin_episode();
    let mut total_reward = RewardVector::default();

    for _ in 0..max_steps {
        let action = policy.select_action(&obs);
        let result = env.step(action)?;
        total_reward += result.reward;
        obs = result.observation;

        if result.terminal {
            return Ok(EpisodeSummary {
                total_reward,
                steps: env.steps(),
                treasure: Some(env.position()),
            });
        }
    }

    Ok(EpisodeSummary {
        total_reward,
        steps: env.steps(),
        treasure: None,
    })
}

/// Aggregated evaluation metrics over multiple episodes.
#[derive(Debug, Clone)]
pub struct EvaluationMetrics {
    /// Mean treasure collected per episode.
    pub mean_treasure: f64,
    /// Mean time objective per episode.
    pub mean_time: f64,
    /// Mean episode length.
    pub mean_steps: f64,
    /// Percentage of episodes that reached a treasure.
    pub pct_terminated: f64,
    /// Per-episode summaries, in order.
    pub episodes: Vec<EpisodeSummary>,
}

impl EvaluationMetrics {
    /// Evaluates a policy over `n_episodes` episodes of at most `max_steps` steps.
    ///
    /// # Arguments
    ///
    /// * `env` - The environment to evaluate in
    /// * `policy` - The policy to evaluate
    /// * `n_episodes` - Number of episodes to run
    /// * `max_steps` - Truncation limit per episode
    pub fn evaluate(
        env: &mut DeepSeaTreasure,
        policy: &mut dyn Policy,
        n_episodes: usize,
        max_steps: u64,
    ) -> Result<Self, EnvError> {
        let mut episodes = Vec::with_capacity(n_episodes);
        for _ in 0..n_episodes {
            episodes.push(run_episode(env, policy, max_steps)?);
        }

        let n = episodes.len().max(1) as f64;
        let mean_treasure = episodes.iter().map(|e| e.total_reward.treasure).sum::<f64>() / n;
        let mean_time = episodes.iter().map(|e| e.total_reward.time).sum::<f64>() / n;
        let mean_steps = episodes.iter().map(|e| e.steps as f64).sum::<f64>() / n;
        let pct_terminated =
            episodes.iter().filter(|e| !e.truncated()).count() as f64 / n * 100.0;

        debug!(
            policy = policy.name(),
            n_episodes,
            mean_treasure,
            mean_time,
            "evaluation finished"
        );

        Ok(Self {
            mean_treasure,
            mean_time,
            mean_steps,
            pct_terminated,
            episodes,
        })
    }

    /// Evaluates with the conventional 500-step cap.
    pub fn evaluate_default(
        env: &mut DeepSeaTreasure,
        policy: &mut dyn Policy,
        n_episodes: usize,
    ) -> Result<Self, EnvError> {
        Self::evaluate(env, policy, n_episodes, DEFAULT_MAX_STEPS)
    }

    /// Number of episodes evaluated.
    pub fn n_episodes(&self) -> usize {
        self.episodes.len()
    }
}

impl fmt::Display for EvaluationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "=== Evaluation Metrics ({} episodes) ===",
            self.n_episodes()
        )?;
        writeln!(f, "  Mean treasure:     {:.2}", self.mean_treasure)?;
        writeln!(f, "  Mean time:         {:.2}", self.mean_time)?;
        writeln!(f, "  Mean steps:        {:.1}", self.mean_steps)?;
        writeln!(f, "  % reached treasure: {:.1}%", self.pct_terminated)
    }
}
