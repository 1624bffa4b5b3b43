//! deep_sea_treasure - a multi-objective grid-world benchmark
//!
//! A submarine explores an 11×11 sea, paying one unit of time per step and
//! collecting the first treasure it reaches. Rewards are two-dimensional
//! `(treasure, time)` vectors, so agents face a trade-off between reaching
//! deep, valuable treasures and finishing quickly.

pub mod config;
pub mod environment;
pub mod error;
pub mod map;
pub mod metrics;
pub mod observation;
pub mod policy;
pub mod render;
pub mod reward;
pub mod spaces;
pub mod transition;
pub mod types;

pub use config::{EnvConfig, MapChoice};
pub use environment::{DeepSeaTreasure, EpisodePhase, Info, StepResult};
pub use error::EnvError;
pub use map::{Cell, SeaMap, BLOCKED, MAP_SIZE};
pub use metrics::{run_episode, EpisodeSummary, EvaluationMetrics};
pub use observation::{Observation, ObservationFormat};
pub use policy::{Policy, RandomPolicy, ScriptedPolicy};
pub use render::{Snapshot, TextRenderer};
pub use reward::{RewardEvaluator, RewardVector, TIME_PENALTY};
pub use spaces::{ActionSpace, BoxSpace};
pub use transition::{Moved, Transition};
pub use types::{Direction, Position};
