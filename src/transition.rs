//! Movement rules for the submarine.
//!
//! A move that would leave the grid or enter the sea floor is a no-op: the
//! submarine stays where it is. This is steering policy, not a failure.

use tracing::trace;

use crate::map::SeaMap;
use crate::types::{Direction, Position};

/// Result of applying one action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Moved {
    /// Position after the move.
    pub position: Position,
    /// Whether the candidate cell was invalid and the move was dropped.
    pub blocked: bool,
}

/// Computes next positions on a sea map.
pub struct Transition;

impl Transition {
    /// Applies `direction` to `position`.
    ///
    /// Returns the candidate cell when [`SeaMap::is_valid`] accepts it, otherwise
    /// the original position with `blocked` set.
    pub fn apply(map: &SeaMap, position: Position, direction: Direction) -> Moved {
        let candidate = position.offset(direction);
        if map.is_valid(candidate) {
            Moved {
                position: candidate,
                blocked: false,
            }
        } else {
            trace!(%position, %candidate, %direction, "move rejected");
            Moved {
                position,
                blocked: true,
            }
        }
    }

    /// Valid neighbours of `position`, paired with the direction reaching them.
    pub fn neighbours(map: &SeaMap, position: Position) -> Vec<(Direction, Position)> {
        Direction::all()
            .into_iter()
            .filter_map(|d| {
                let moved = Self::apply(map, position, d);
                (!moved.blocked).then_some((d, moved.position))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::map::MAP_SIZE;

    #[test]
    fn open_water_move_succeeds() {
        let map = SeaMap::default_map();
        let moved = Transition::apply(&map, Position::origin(), Direction::Right);
        assert_eq!(moved.position, Position::new(0, 1));
        assert!(!moved.blocked);
    }

    #[test]
    fn leaving_the_surface_is_a_noop() {
        let map = SeaMap::default_map();
        let moved = Transition::apply(&map, Position::origin(), Direction::Up);
        assert_eq!(moved.position, Position::origin());
        assert!(moved.blocked);
        let moved = Transition::apply(&map, Position::origin(), Direction::Left);
        assert_eq!(moved.position, Position::origin());
    }

    #[test]
    fn sea_floor_is_a_noop() {
        let map = SeaMap::default_map();
        // (2,0), left of the 8.2 treasure, is sea floor.
        let moved = Transition::apply(&map, Position::new(2, 1), Direction::Left);
        assert_eq!(moved.position, Position::new(2, 1));
        assert!(moved.blocked);
    }

    #[test]
    fn right_and_bottom_edges_are_noops() {
        let map = SeaMap::default_map();
        let corner = Position::new(10, 10);
        assert_eq!(
            Transition::apply(&map, corner, Direction::Right).position,
            corner
        );
        assert_eq!(
            Transition::apply(&map, corner, Direction::Down).position,
            corner
        );
    }

    #[test]
    fn every_invalid_cell_rejects_entry_from_valid_neighbours() {
        let map = SeaMap::default_map();
        let n = MAP_SIZE as i32;
        for r in -1..=n {
            for c in -1..=n {
                let target = Position::new(r, c);
                if map.is_valid(target) {
                    continue;
                }
                for d in Direction::all() {
                    let from = target.offset(d.opposite());
                    if !map.is_valid(from) {
                        continue;
                    }
                    let moved = Transition::apply(&map, from, d);
                    assert_eq!(moved.position, from, "entered {target} from {from}");
                    assert!(moved.blocked);
                }
            }
        }
    }

    #[test]
    fn neighbours_of_origin() {
        let map = SeaMap::default_map();
        let n = Transition::neighbours(&map, Position::origin());
        assert_eq!(
            n,
            vec![
                (Direction::Down, Position::new(1, 0)),
                (Direction::Right, Position::new(0, 1)),
            ]
        );
    }
}
