use std::collections::{HashSet, VecDeque};

use crate::cell::{Cell, CellSet, Coord};

/// Breadth-first walk over 4-neighbour adjacency starting at `start`.
/// Every reached coordinate lands in `visited`; `sink`, when given, also
/// collects them in BFS order.
fn reach(
    start: Coord,
    contains: impl Fn(Coord) -> bool,
    visited: &mut HashSet<Coord>,
    mut sink: Option<&mut Vec<Coord>>,
) {
    if !visited.insert(start) {
        return;
    }
    let mut queue: VecDeque<Coord> = VecDeque::new();
    queue.push_back(start);

    while let Some(at) = queue.pop_front() {
        if let Some(found) = sink.as_deref_mut() {
            found.push(at);
        }
        for n in at.neighbors() {
            if contains(n) && visited.insert(n) {
                queue.push_back(n);
            }
        }
    }
}

/// True when every cell is reachable from every other one. The empty set
/// counts as connected.
pub fn is_connected(cells: &CellSet) -> bool {
    let Some(first) = cells.iter().next() else {
        return true;
    };
    let mut visited = HashSet::with_capacity(cells.len());
    reach(first.coord(), |c| cells.contains(c), &mut visited, None);
    visited.len() == cells.len()
}

/// Same check for a loose slice of cells, e.g. the contents of one brick.
pub fn is_connected_cells(cells: &[Cell]) -> bool {
    let set: CellSet = cells.iter().copied().collect();
    set.len() == cells.len() && is_connected(&set)
}

/// Connected components in discovery order, each in BFS order.
pub fn components(cells: &CellSet) -> Vec<Vec<Coord>> {
    let mut visited = HashSet::with_capacity(cells.len());
    let mut out = Vec::new();
    for cell in cells {
        if visited.contains(&cell.coord()) {
            continue;
        }
        let mut found = Vec::new();
        reach(cell.coord(), |c| cells.contains(c), &mut visited, Some(&mut found));
        out.push(found);
    }
    out
}
