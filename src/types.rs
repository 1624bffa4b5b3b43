//! Core grid types for the Deep Sea Treasure environment.
//!
//! Defines grid positions and the four cardinal movement directions
//! used by the transition engine.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::EnvError;

/// A cell coordinate `(row, col)` on the sea map.
///
/// Row 0 is the surface and rows grow downward. Coordinates are signed so that
/// a candidate move off the top or left edge can be represented and rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    /// Creates a new position.
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The fixed start cell `(0, 0)`.
    pub fn origin() -> Self {
        Self { row: 0, col: 0 }
    }

    /// Returns the neighbouring position in `direction`, without any bounds check.
    pub fn offset(&self, direction: Direction) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// Returns true if both coordinates lie in `[0, size)`.
    pub fn in_bounds(&self, size: usize) -> bool {
        let size = size as i32;
        (0..size).contains(&self.row) && (0..size).contains(&self.col)
    }

    /// Manhattan distance to another position.
    pub fn manhattan_to(&self, other: &Position) -> u32 {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// One of the four movement actions.
///
/// Discrete indices follow the classic encoding: `0 = up`, `1 = down`,
/// `2 = left`, `3 = right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Number of legal actions.
    pub const COUNT: usize = 4;

    /// Returns all directions in index order.
    pub fn all() -> [Direction; 4] {
        [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ]
    }

    /// Returns the `(row, col)` delta applied by this direction.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Returns the discrete action index of this direction.
    pub fn index(&self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }

    /// Parses a discrete action index.
    ///
    /// Anything outside `0..4` is caller misuse and fails with
    /// [`EnvError::InvalidAction`] instead of defaulting to a move.
    pub fn from_index(index: usize) -> Result<Self, EnvError> {
        match index {
            0 => Ok(Direction::Up),
            1 => Ok(Direction::Down),
            2 => Ok(Direction::Left),
            3 => Ok(Direction::Right),
            other => Err(EnvError::InvalidAction(other)),
        }
    }

    /// The direction that undoes this one.
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl TryFrom<usize> for Direction {
    type Error = EnvError;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Direction::from_index(index)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "up"),
            Direction::Down => write!(f, "down"),
            Direction::Left => write!(f, "left"),
            Direction::Right => write!(f, "right"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_deltas() {
        assert_eq!(Direction::Up.delta(), (-1, 0));
        assert_eq!(Direction::Down.delta(), (1, 0));
        assert_eq!(Direction::Left.delta(), (0, -1));
        assert_eq!(Direction::Right.delta(), (0, 1));
    }

    #[test]
    fn direction_index_roundtrip() {
        for d in Direction::all() {
            assert_eq!(Direction::from_index(d.index()), Ok(d));
        }
    }

    #[test]
    fn direction_rejects_out_of_range_index() {
        assert_eq!(Direction::from_index(4), Err(EnvError::InvalidAction(4)));
        assert!(Direction::try_from(usize::MAX).is_err());
    }

    #[test]
    fn opposite_cancels_delta() {
        for d in Direction::all() {
            let p = Position::new(5, 5).offset(d).offset(d.opposite());
            assert_eq!(p, Position::new(5, 5));
        }
    }

    #[test]
    fn position_offset_can_leave_grid() {
        let p = Position::origin().offset(Direction::Up);
        assert_eq!(p, Position::new(-1, 0));
        assert!(!p.in_bounds(11));
    }

    #[test]
    fn position_in_bounds_edges() {
        assert!(Position::new(0, 0).in_bounds(11));
        assert!(Position::new(10, 10).in_bounds(11));
        assert!(!Position::new(11, 0).in_bounds(11));
        assert!(!Position::new(0, -1).in_bounds(11));
    }

    #[test]
    fn position_manhattan() {
        assert_eq!(Position::origin().manhattan_to(&Position::new(9, 8)), 17);
    }

    #[test]
    fn display_formats() {
        assert_eq!(Position::new(2, 1).to_string(), "(2, 1)");
        assert_eq!(Direction::Left.to_string(), "left");
    }
}
