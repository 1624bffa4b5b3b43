//! Configuration for the Deep Sea Treasure environment.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EnvError;
use crate::map::SeaMap;
use crate::observation::ObservationFormat;

/// Which sea map the environment runs on.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum MapChoice {
    /// Convex treasure values (Yang et al. 2019).
    #[default]
    Default,
    /// Concave treasure values (Vamplew et al. 2018).
    Concave,
    /// A caller-supplied 11×11 matrix, validated at construction.
    Custom(Vec<Vec<f64>>),
}

impl MapChoice {
    /// Builds the sea map for this choice.
    ///
    /// # Errors
    ///
    /// Fails for a [`MapChoice::Custom`] matrix that [`SeaMap::from_rows`] rejects.
    pub fn build(&self) -> Result<SeaMap, EnvError> {
        match self {
            MapChoice::Default => Ok(SeaMap::default_map()),
            MapChoice::Concave => Ok(SeaMap::concave_map()),
            MapChoice::Custom(rows) => SeaMap::from_rows(rows.clone()),
        }
    }
}

/// Configuration for the Deep Sea Treasure environment.
///
/// The map and the observation format are the only tunables of the core.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EnvConfig {
    /// Sea map to run on.
    pub map: MapChoice,
    /// Observation encoding.
    pub observation: ObservationFormat,
}

impl EnvConfig {
    /// Returns this configuration with a different map.
    pub fn with_map(mut self, map: MapChoice) -> Self {
        self.map = map;
        self
    }

    /// Returns this configuration with float (`true`) or grid (`false`) observations.
    pub fn with_float_state(mut self, float_state: bool) -> Self {
        self.observation = if float_state {
            ObservationFormat::Float
        } else {
            ObservationFormat::Grid
        };
        self
    }

    /// Default map with grid observations.
    pub fn convex() -> Self {
        Self::default()
    }

    /// Concave map with grid observations.
    pub fn concave() -> Self {
        Self::default().with_map(MapChoice::Concave)
    }
}
