use rand::{Rng, seq::SliceRandom};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    brick::Brick,
    cell::{Cell, CellSet},
    engine::PuzzleError,
};

pub const DEFAULT_PARTITION_RETRIES: u32 = 100;

/// Chance of admitting one more neighbour into a brick that already holds
/// `size` cells. A fresh brick always takes its first neighbour.
pub fn growth_probability(size: usize) -> f64 {
    match size {
        0 | 1 => 1.0,
        2 => 0.4,
        3 => 0.2,
        4 => 0.1,
        5 => 0.05,
        _ => 0.01,
    }
}

/// Order in which cells are tried as seeds of new bricks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SeedOrder {
    /// Uniform random permutation.
    #[default]
    Shuffled,
    /// Furthest from the centre of the bounding box first.
    EdgeFirst,
}

impl SeedOrder {
    fn order<R: Rng + ?Sized>(self, cells: &CellSet, rng: &mut R) -> Vec<usize> {
        let mut idx: Vec<usize> = (0..cells.len()).collect();
        match self {
            SeedOrder::Shuffled => idx.shuffle(rng),
            SeedOrder::EdgeFirst => {
                let Some(b) = cells.bounds() else {
                    return idx;
                };
                let cx = (b.min.x + b.max.x) as f64 / 2.0;
                let cy = (b.min.y + b.max.y) as f64 / 2.0;
                let s = cells.as_slice();
                let dist = |i: usize| (s[i].x as f64 - cx).hypot(s[i].y as f64 - cy);
                idx.sort_by(|&a, &b| dist(b).total_cmp(&dist(a)));
            }
        }
        idx
    }
}

#[derive(Clone, Copy, Debug)]
pub struct Partitioner {
    pub retries: u32,
    pub seed_order: SeedOrder,
}

impl Default for Partitioner {
    fn default() -> Self {
        Self {
            retries: DEFAULT_PARTITION_RETRIES,
            seed_order: SeedOrder::default(),
        }
    }
}

impl Partitioner {
    /// Splits a connected cell set into bricks, retrying with fresh
    /// randomness while the whole set collapses into a single brick.
    pub fn partition<R: Rng + ?Sized>(
        &self,
        cells: &CellSet,
        rng: &mut R,
    ) -> Result<Vec<Brick>, PuzzleError> {
        for attempt in 0..=self.retries {
            let bricks = self.partition_once(cells, rng);
            if bricks.len() != 1 {
                return Ok(bricks);
            }
            debug!(attempt, cells = cells.len(), "partition collapsed into one brick");
        }

        Err(PuzzleError::DegeneratePartition {
            attempts: self.retries + 1,
        })
    }

    /// One randomized partitioning pass, without the degeneracy retry.
    pub fn partition_once<R: Rng + ?Sized>(&self, cells: &CellSet, rng: &mut R) -> Vec<Brick> {
        let s = cells.as_slice();
        let mut assigned = vec![false; s.len()];
        let mut groups: Vec<Vec<usize>> = Vec::new();

        for seed in self.seed_order.order(cells, rng) {
            if assigned[seed] {
                continue;
            }
            assigned[seed] = true;
            groups.push(grow(cells, seed, &mut assigned, rng));
        }

        // Only reachable with a seed order that skips cells.
        for (i, taken) in assigned.iter_mut().enumerate() {
            if !*taken {
                *taken = true;
                groups.push(vec![i]);
            }
        }

        let mut bricks: Vec<Brick> = groups
            .into_iter()
            .map(|g| Brick::new(g.into_iter().map(|i| s[i]).collect()))
            .collect();
        merge_singletons(&mut bricks);
        bricks
    }
}

/// Depth-first growth from `seed`. Each frame holds a cell and the next
/// neighbour direction to look at, so admission order matches a recursive
/// walk while the call stack stays flat.
fn grow<R: Rng + ?Sized>(
    cells: &CellSet,
    seed: usize,
    assigned: &mut [bool],
    rng: &mut R,
) -> Vec<usize> {
    let s = cells.as_slice();
    let mut group = vec![seed];
    let mut stack: Vec<(usize, usize)> = vec![(seed, 0)];

    while let Some(top) = stack.last_mut() {
        let (cur, dir) = *top;
        if dir == 4 {
            stack.pop();
            continue;
        }
        top.1 += 1;

        let at = s[cur].coord().neighbors()[dir];
        let Some(next) = cells.index_of(at) else {
            continue;
        };
        if assigned[next] {
            continue;
        }
        if rng.random::<f64>() < growth_probability(group.len()) {
            assigned[next] = true;
            group.push(next);
            stack.push((next, 0));
        }
    }

    group
}

/// Folds every one-cell brick into the first other brick touching it,
/// scanning from the most recently created brick backwards.
fn merge_singletons(bricks: &mut Vec<Brick>) {
    for i in (0..bricks.len()).rev() {
        if bricks[i].len() != 1 {
            continue;
        }
        let lone: Cell = bricks[i].cells[0];
        let host = (0..bricks.len()).find(|&j| j != i && bricks[j].touches(lone.coord()));
        match host {
            Some(j) => {
                debug!(letter = %lone.letter, x = lone.x, y = lone.y, "merging single-cell brick");
                bricks[j].cells.push(lone);
                bricks.remove(i);
            }
            None => debug!(x = lone.x, y = lone.y, "single-cell brick has no neighbour"),
        }
    }
}
