use thiserror::Error;

use crate::types::Position;

/// Errors raised by the Deep Sea Treasure environment.
///
/// Moving into a blocked cell or off the grid is not an error: the submarine
/// simply stays where it is.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("Sea map must be 11x11, got {rows}x{cols}")]
    MapShape { rows: usize, cols: usize },

    #[error("Invalid sea map value {value} at ({row}, {col}): expected 0, -10 or a positive treasure")]
    InvalidCell { row: usize, col: usize, value: f64 },

    #[error("Invalid action index {0}: expected 0 (up), 1 (down), 2 (left) or 3 (right)")]
    InvalidAction(usize),

    #[error("Episode already terminated after {steps} steps; call reset() before stepping")]
    EpisodeTerminated { steps: u64 },

    #[error("Position {0} is outside the sea map")]
    OutOfBounds(Position),
}
