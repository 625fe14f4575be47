use serde::{Deserialize, Serialize};
use std::fmt;

use crate::cell::{Bounds, Cell, Coord, write_grid};

/// A group of cells that moves as one piece.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brick {
    pub cells: Vec<Cell>,
}

impl Brick {
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Minimum corner of the bounding box.
    pub fn min_corner(&self) -> Option<Coord> {
        Bounds::of(&self.cells).map(|b| b.min)
    }

    pub fn touches(&self, at: Coord) -> bool {
        self.cells.iter().any(|c| c.coord().is_adjacent(at))
    }

    pub fn translate(&mut self, dx: i32, dy: i32) {
        for c in &mut self.cells {
            c.x += dx;
            c.y += dy;
        }
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        let mut moved = self.clone();
        moved.translate(dx, dy);
        moved
    }
}

impl fmt::Display for Brick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, &self.cells)
    }
}

/// What the game layer receives: the packed bricks plus an opaque hint.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    pub bricks: Vec<Brick>,
    pub hint: String,
}

impl PuzzleState {
    pub fn cell_count(&self) -> usize {
        self.bricks.iter().map(Brick::len).sum()
    }
}
