//! Read-only rendering boundary.
//!
//! Renderers receive a [`Snapshot`] borrowed from the environment and never
//! hold simulation state of their own. [`TextRenderer`] draws the snapshot as a
//! character grid, which is enough for logs and terminal demos.

use std::fmt;

use crate::map::{Cell, SeaMap, MAP_SIZE};
use crate::types::Position;

/// Borrowed view of the map and the submarine's position.
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub map: &'a SeaMap,
    pub position: Position,
}

/// Character-grid renderer.
///
/// `S` marks the submarine, `#` the sea floor, `.` open water and `T` a
/// treasure. With `show_values`, treasures are followed by a legend.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer {
    pub show_values: bool,
}

impl TextRenderer {
    /// Creates a renderer; `show_values` appends a treasure legend.
    pub fn new(show_values: bool) -> Self {
        Self { show_values }
    }

    /// Renders `snapshot` into a string.
    pub fn render(&self, snapshot: &Snapshot<'_>) -> String {
        Rendered {
            renderer: self,
            snapshot,
        }
        .to_string()
    }
}

struct Rendered<'r, 's, 'a> {
    renderer: &'r TextRenderer,
    snapshot: &'s Snapshot<'a>,
}

impl fmt::Display for Rendered<'_, '_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let map = self.snapshot.map;
        for r in 0..MAP_SIZE as i32 {
            for c in 0..MAP_SIZE as i32 {
                let p = Position::new(r, c);
                let glyph = if p == self.snapshot.position {
                    'S'
                } else {
                    match map.cell(p) {
                        Some(Cell::Blocked) => '#',
                        Some(Cell::Treasure(_)) => 'T',
                        Some(Cell::Water) | None => '.',
                    }
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        if self.renderer.show_values {
            for (p, v) in map.treasures() {
                writeln!(f, "T {p} = {v}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", TextRenderer::default().render(self))
    }
}
