//! The sea map: an immutable 11×11 grid of cell values.
//!
//! Cell values follow a fixed convention:
//!
//! - `0.0` is open water,
//! - [`BLOCKED`] (`-10.0`) is impassable sea floor,
//! - any positive value is a treasure worth that much.
//!
//! Two canonical maps are provided. Both share the same sea-floor topology so a
//! policy that is valid on one is valid on the other.

use crate::error::EnvError;
use crate::types::Position;

/// Side length of the square sea map.
pub const MAP_SIZE: usize = 11;

/// Sentinel value marking an impassable cell.
pub const BLOCKED: f64 = -10.0;

const X: f64 = BLOCKED;

/// Convex treasure values from Yang et al. (2019).
pub const DEFAULT_MAP: [[f64; MAP_SIZE]; MAP_SIZE] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [0.7, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, 8.2, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, X, 11.5, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, X, X, 14.0, 15.1, 16.1, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, X, X, X, X, X, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, X, X, X, X, X, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, X, X, X, X, X, 19.6, 20.3, 0.0, 0.0, 0.0],
    [X, X, X, X, X, X, X, X, 0.0, 0.0, 0.0],
    [X, X, X, X, X, X, X, X, 22.4, 0.0, 0.0],
    [X, X, X, X, X, X, X, X, X, 23.7, 0.0],
];

/// Concave treasure values from Vamplew et al. (2018).
pub const CONCAVE_MAP: [[f64; MAP_SIZE]; MAP_SIZE] = [
    [0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, X, 3.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, X, X, 5.0, 8.0, 16.0, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, X, X, X, X, X, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, X, X, X, X, X, 0.0, 0.0, 0.0, 0.0, 0.0],
    [X, X, X, X, X, X, 24.0, 50.0, 0.0, 0.0, 0.0],
    [X, X, X, X, X, X, X, X, 0.0, 0.0, 0.0],
    [X, X, X, X, X, X, X, X, 74.0, 0.0, 0.0],
    [X, X, X, X, X, X, X, X, X, 124.0, 0.0],
];

/// Classification of a single map cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Cell {
    Water,
    Blocked,
    Treasure(f64),
}

impl Cell {
    /// Classifies a raw cell value.
    pub fn classify(value: f64) -> Self {
        if value == BLOCKED {
            Cell::Blocked
        } else if value > 0.0 {
            Cell::Treasure(value)
        } else {
            Cell::Water
        }
    }

    /// Returns true unless the cell is blocked.
    pub fn is_traversable(&self) -> bool {
        !matches!(self, Cell::Blocked)
    }
}

/// An immutable 11×11 sea map.
#[derive(Debug, Clone, PartialEq)]
pub struct SeaMap {
    cells: [[f64; MAP_SIZE]; MAP_SIZE],
}

impl SeaMap {
    /// The convex map from Yang et al. (2019).
    pub fn default_map() -> Self {
        Self { cells: DEFAULT_MAP }
    }

    /// The concave map from Vamplew et al. (2018), whose Pareto front is non-convex.
    pub fn concave_map() -> Self {
        Self { cells: CONCAVE_MAP }
    }

    /// Builds a custom map from row vectors.
    ///
    /// # Errors
    ///
    /// * [`EnvError::MapShape`] if the rows do not form an 11×11 matrix.
    /// * [`EnvError::InvalidCell`] if a value is not finite, or is negative
    ///   without being the [`BLOCKED`] sentinel.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, EnvError> {
        if rows.len() != MAP_SIZE {
            let cols = rows.first().map_or(0, Vec::len);
            return Err(EnvError::MapShape {
                rows: rows.len(),
                cols,
            });
        }
        if let Some(bad) = rows.iter().find(|r| r.len() != MAP_SIZE) {
            return Err(EnvError::MapShape {
                rows: rows.len(),
                cols: bad.len(),
            });
        }

        let mut cells = [[0.0; MAP_SIZE]; MAP_SIZE];
        for (r, row) in rows.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if !value.is_finite() || (value < 0.0 && value != BLOCKED) {
                    return Err(EnvError::InvalidCell {
                        row: r,
                        col: c,
                        value,
                    });
                }
                cells[r][c] = value;
            }
        }
        Ok(Self { cells })
    }

    /// Returns the raw value at `position`.
    ///
    /// # Errors
    ///
    /// [`EnvError::OutOfBounds`] if `position` lies outside the grid.
    pub fn value_at(&self, position: Position) -> Result<f64, EnvError> {
        self.get(position).ok_or(EnvError::OutOfBounds(position))
    }

    /// Returns the raw value at `position`, or `None` outside the grid.
    pub fn get(&self, position: Position) -> Option<f64> {
        if !position.in_bounds(MAP_SIZE) {
            return None;
        }
        Some(self.cells[position.row as usize][position.col as usize])
    }

    /// Returns the classified cell at `position`, or `None` outside the grid.
    pub fn cell(&self, position: Position) -> Option<Cell> {
        self.get(position).map(Cell::classify)
    }

    /// Returns true iff `position` is inside the grid and not blocked.
    ///
    /// Bounds are checked before the map is indexed.
    pub fn is_valid(&self, position: Position) -> bool {
        match self.get(position) {
            Some(value) => value != BLOCKED,
            None => false,
        }
    }

    /// All treasure cells with their values, in row-major order.
    pub fn treasures(&self) -> Vec<(Position, f64)> {
        self.positions()
            .filter_map(|p| match self.cell(p) {
                Some(Cell::Treasure(v)) => Some((p, v)),
                _ => None,
            })
            .collect()
    }

    /// The largest treasure value on the map, or `0.0` if there is none.
    pub fn max_treasure(&self) -> f64 {
        self.treasures()
            .iter()
            .map(|(_, v)| *v)
            .fold(0.0_f64, f64::max)
    }

    /// Returns true if both maps block exactly the same cells.
    pub fn same_topology(&self, other: &SeaMap) -> bool {
        self.positions()
            .all(|p| self.is_valid(p) == other.is_valid(p))
    }

    /// Raw rows of the map, for renderers.
    pub fn rows(&self) -> &[[f64; MAP_SIZE]; MAP_SIZE] {
        &self.cells
    }

    fn positions(&self) -> impl Iterator<Item = Position> {
        (0..MAP_SIZE as i32).flat_map(|r| (0..MAP_SIZE as i32).map(move |c| Position::new(r, c)))
    }
}

impl Default for SeaMap {
    fn default() -> Self {
        Self::default_map()
    }
}
