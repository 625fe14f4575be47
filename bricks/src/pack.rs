use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use std::{collections::HashSet, f64::consts::TAU};
use tracing::warn;

use crate::{
    brick::Brick,
    cell::{Cell, Coord},
    engine::PuzzleError,
};

pub const DEFAULT_PLACEMENT_ATTEMPTS: u32 = 1000;
const RING_SLOTS: u32 = 8;

/// Target corner for the given placement attempt: the origin first, then
/// eight evenly spaced points on rings of growing radius.
pub fn ring_target(attempt: u32) -> Coord {
    if attempt == 0 {
        return Coord::ORIGIN;
    }
    let ring = (attempt / RING_SLOTS) as f64;
    let angle = (attempt % RING_SLOTS) as f64 / RING_SLOTS as f64 * TAU;
    Coord::new(
        (angle.cos() * ring).round() as i32,
        (angle.sin() * ring).round() as i32,
    )
}

/// What to do with a brick that found no free slot.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FallbackPolicy {
    /// Keep the brick where it was. It may overlap or touch other bricks.
    #[default]
    Original,
    /// Abort packing with [`PuzzleError::PlacementExhausted`].
    Fail,
}

/// Coordinates already claimed by placed bricks and their one-cell margin.
#[derive(Clone, Debug, Default)]
pub struct Occupancy {
    taken: HashSet<Coord>,
}

impl Occupancy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_taken(&self, at: Coord) -> bool {
        self.taken.contains(&at)
    }

    pub fn collides(&self, cells: &[Cell]) -> bool {
        cells.iter().any(|c| self.is_taken(c.coord()))
    }

    pub fn mark_with_buffer(&mut self, cells: &[Cell]) {
        for c in cells {
            let at = c.coord();
            self.taken.insert(at);
            self.taken.extend(at.neighbors());
        }
    }

    pub fn len(&self) -> usize {
        self.taken.len()
    }

    pub fn is_empty(&self) -> bool {
        self.taken.is_empty()
    }
}

#[derive(Clone, Debug, Default)]
pub struct Packing {
    pub bricks: Vec<Brick>,
    /// Indices into `bricks` of pieces left at their original position.
    pub fallbacks: Vec<usize>,
}

#[derive(Clone, Copy, Debug)]
pub struct Packer {
    pub attempts: u32,
    pub fallback: FallbackPolicy,
}

impl Default for Packer {
    fn default() -> Self {
        Self {
            attempts: DEFAULT_PLACEMENT_ATTEMPTS,
            fallback: FallbackPolicy::default(),
        }
    }
}

impl Packer {
    /// Moves the bricks, in random order, to the first free spot of the ring
    /// scan around the origin.
    pub fn pack<R: Rng + ?Sized>(
        &self,
        mut bricks: Vec<Brick>,
        rng: &mut R,
    ) -> Result<Packing, PuzzleError> {
        bricks.shuffle(rng);
        let mut occupied = Occupancy::new();
        let mut out = Packing {
            bricks: Vec::with_capacity(bricks.len()),
            fallbacks: Vec::new(),
        };

        for brick in bricks {
            let idx = out.bricks.len();
            let placed = match self.place(&brick, &occupied) {
                Some(moved) => moved,
                None => match self.fallback {
                    FallbackPolicy::Fail => {
                        return Err(PuzzleError::PlacementExhausted {
                            brick: idx,
                            attempts: self.attempts,
                        });
                    }
                    FallbackPolicy::Original => {
                        warn!(
                            brick = idx,
                            cells = brick.len(),
                            attempts = self.attempts,
                            "no free slot, keeping original position"
                        );
                        out.fallbacks.push(idx);
                        brick
                    }
                },
            };
            occupied.mark_with_buffer(&placed.cells);
            out.bricks.push(placed);
        }

        Ok(out)
    }

    /// Returns the brick moved onto the first collision-free ring target.
    pub fn place(&self, brick: &Brick, occupied: &Occupancy) -> Option<Brick> {
        let Some(corner) = brick.min_corner() else {
            return Some(brick.clone());
        };
        (0..self.attempts)
            .map(|attempt| {
                let target = ring_target(attempt);
                brick.translated(target.x - corner.x, target.y - corner.y)
            })
            .find(|trial| !occupied.collides(&trial.cells))
    }
}
