use serde::{Deserialize, Serialize};
use std::{collections::HashMap, fmt};

/// Orthogonal neighbour offsets, in the order neighbours are visited.
pub const DIRECTIONS: [(i32, i32); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const ORIGIN: Coord = Coord { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    pub fn neighbors(self) -> [Coord; 4] {
        DIRECTIONS.map(|(dx, dy)| self.offset(dx, dy))
    }

    #[inline]
    pub fn is_adjacent(self, other: Coord) -> bool {
        (self.x - other.x).abs() + (self.y - other.y).abs() == 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
    pub letter: char,
}

impl Cell {
    pub fn new(x: i32, y: i32, letter: char) -> Self {
        Self { x, y, letter }
    }

    #[inline]
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// Axis-aligned bounds of a group of cells, both corners inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min: Coord,
    pub max: Coord,
}

impl Bounds {
    pub fn of<'a>(cells: impl IntoIterator<Item = &'a Cell>) -> Option<Self> {
        let mut iter = cells.into_iter();
        let first = iter.next()?.coord();
        let mut b = Bounds {
            min: first,
            max: first,
        };
        for c in iter {
            b.min.x = b.min.x.min(c.x);
            b.min.y = b.min.y.min(c.y);
            b.max.x = b.max.x.max(c.x);
            b.max.y = b.max.y.max(c.y);
        }
        Some(b)
    }

    pub fn width(&self) -> usize {
        (self.max.x - self.min.x + 1) as usize
    }

    pub fn height(&self) -> usize {
        (self.max.y - self.min.y + 1) as usize
    }
}

/// Letter cells in insertion order, unique per coordinate.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CellSet {
    cells: Vec<Cell>,
    index: HashMap<Coord, usize>,
}

impl CellSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `cell` unless its coordinate is already taken. Returns whether
    /// the cell was added; an existing letter is never overwritten.
    pub fn insert(&mut self, cell: Cell) -> bool {
        if self.index.contains_key(&cell.coord()) {
            return false;
        }
        self.index.insert(cell.coord(), self.cells.len());
        self.cells.push(cell);
        true
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn get(&self, at: Coord) -> Option<&Cell> {
        self.index.get(&at).map(|&i| &self.cells[i])
    }

    pub fn index_of(&self, at: Coord) -> Option<usize> {
        self.index.get(&at).copied()
    }

    pub fn contains(&self, at: Coord) -> bool {
        self.index.contains_key(&at)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Cell> {
        self.cells.iter()
    }

    pub fn as_slice(&self) -> &[Cell] {
        &self.cells
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.cells)
    }
}

impl FromIterator<Cell> for CellSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = CellSet::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl<'a> IntoIterator for &'a CellSet {
    type Item = &'a Cell;
    type IntoIter = std::slice::Iter<'a, Cell>;

    fn into_iter(self) -> Self::IntoIter {
        self.cells.iter()
    }
}

/// Writes `cells` as a letter grid, `.` marking empty positions.
pub(crate) fn write_grid<'a>(
    f: &mut fmt::Formatter<'_>,
    cells: impl IntoIterator<Item = &'a Cell> + Clone,
) -> fmt::Result {
    let Some(b) = Bounds::of(cells.clone()) else {
        return Ok(());
    };
    let mut rows = vec![vec!['.'; b.width()]; b.height()];
    for c in cells {
        rows[(c.y - b.min.y) as usize][(c.x - b.min.x) as usize] = c.letter;
    }
    for row in rows {
        for ch in row {
            write!(f, "{}", ch)?;
        }
        writeln!(f)?;
    }
    Ok(())
}

impl fmt::Display for CellSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_grid(f, &self.cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_keeps_first_letter() {
        let mut set = CellSet::new();
        assert!(set.insert(Cell::new(0, 0, 'a')));
        assert!(!set.insert(Cell::new(0, 0, 'b')));
        assert_eq!(set.len(), 1);
        assert_eq!(set.get(Coord::ORIGIN).map(|c| c.letter), Some('a'));
    }

    #[test]
    fn adjacency_is_manhattan_one() {
        let c = Coord::new(2, -1);
        for n in c.neighbors() {
            assert!(c.is_adjacent(n));
        }
        assert!(!c.is_adjacent(c));
        assert!(!c.is_adjacent(Coord::new(3, 0)));
    }

    #[test]
    fn bounds_cover_negative_coords() {
        let set: CellSet = [Cell::new(-2, 1, 'a'), Cell::new(3, -4, 'b')]
            .into_iter()
            .collect();
        let b = set.bounds().unwrap();
        assert_eq!(b.min, Coord::new(-2, -4));
        assert_eq!(b.max, Coord::new(3, 1));
        assert_eq!((b.width(), b.height()), (6, 6));
        assert!(CellSet::new().bounds().is_none());
    }

    #[test]
    fn display_draws_grid() {
        let set: CellSet = [
            Cell::new(0, 0, 'a'),
            Cell::new(1, 0, 'b'),
            Cell::new(1, 1, 'c'),
        ]
        .into_iter()
        .collect();
        assert_eq!(set.to_string(), "ab\n.c\n");
    }
}
