//! Observation encoding for the environment.
//!
//! An observation is a pure projection of the submarine's position, either as
//! raw grid coordinates or scaled into `[0, 1]`.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::types::Position;

/// Scale applied to grid coordinates in float observations.
pub const FLOAT_SCALE: f64 = 0.1;

/// Which form observations take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ObservationFormat {
    /// Integer `[row, col]`.
    #[default]
    Grid,
    /// `[row, col] × 0.1`.
    Float,
}

/// Observation of the current position.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Observation {
    Grid([i32; 2]),
    Float([f64; 2]),
}

impl Observation {
    /// Projects `position` into the requested format.
    pub fn encode(position: Position, format: ObservationFormat) -> Self {
        match format {
            ObservationFormat::Grid => Observation::Grid([position.row, position.col]),
            ObservationFormat::Float => Observation::Float([
                position.row as f64 * FLOAT_SCALE,
                position.col as f64 * FLOAT_SCALE,
            ]),
        }
    }

    /// The observation as a flat `f64` feature vector.
    pub fn to_vec(&self) -> Vec<f64> {
        match self {
            Observation::Grid([r, c]) => vec![*r as f64, *c as f64],
            Observation::Float(v) => v.to_vec(),
        }
    }

    /// Recovers the grid position this observation was encoded from.
    pub fn position(&self) -> Position {
        match self {
            Observation::Grid([r, c]) => Position::new(*r, *c),
            Observation::Float([r, c]) => Position::new(
                (r / FLOAT_SCALE).round() as i32,
                (c / FLOAT_SCALE).round() as i32,
            ),
        }
    }

    /// The format of this observation.
    pub fn format(&self) -> ObservationFormat {
        match self {
            Observation::Grid(_) => ObservationFormat::Grid,
            Observation::Float(_) => ObservationFormat::Float,
        }
    }
}
